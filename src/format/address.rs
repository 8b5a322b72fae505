use crate::model::PostalAddress;

const SEPARATOR: &str = ", ";

/// Joins the non-empty address components in street, city, region,
/// postal code, country order.
pub fn format_address(address: Option<&PostalAddress>) -> String {
    let Some(address) = address else {
        return String::new();
    };
    address
        .components()
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
