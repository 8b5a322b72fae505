use std::collections::HashSet;

use super::contact::ContactRecord;
use super::ids::Id;

/// The user-chosen subset of loaded contacts.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: HashSet<Id<ContactRecord>>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &Id<ContactRecord>) -> bool {
        self.ids.contains(id)
    }

    /// Flips membership. Returns true if the id is now selected.
    pub fn toggle(&mut self, id: &Id<ContactRecord>) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn replace_with<'a>(&mut self, ids: impl IntoIterator<Item = &'a Id<ContactRecord>>) {
        self.ids = ids.into_iter().cloned().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Contacts in `loaded` that are selected, in `loaded` order.
    pub fn pick<'a>(&self, loaded: &'a [ContactRecord]) -> Vec<&'a ContactRecord> {
        loaded.iter().filter(|c| self.contains(&c.id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut selection = SelectionSet::new();
        let id: Id<ContactRecord> = "1".into();
        assert!(selection.toggle(&id));
        assert!(selection.contains(&id));
        assert!(!selection.toggle(&id));
        assert!(selection.is_empty());
    }

    #[test]
    fn pick_follows_load_order_not_selection_order() {
        let loaded = vec![
            ContactRecord::create("a", "Ana"),
            ContactRecord::create("b", "Bruno"),
            ContactRecord::create("c", "Carla"),
        ];
        let mut selection = SelectionSet::new();
        selection.toggle(&"c".into());
        selection.toggle(&"a".into());

        let names: Vec<&str> = selection.pick(&loaded).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Carla"]);
    }
}
