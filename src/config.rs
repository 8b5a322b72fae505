use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ExportResult;
use crate::sheet::{check_sheet_name, SheetSchema};

/// Config file read when no `--config` is given. Optional.
pub const DEFAULT_CONFIG_PATH: &str = ".data/config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// SQLite contact store, or a `.json` contact dump.
    pub store_path: PathBuf,
    pub export_dir: PathBuf,
    pub schema: SheetSchema,
    pub sheet_name: String,
    /// Program and arguments used to share an exported file. Empty means
    /// sharing is unavailable.
    pub share_command: Vec<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(".data/contacts.db"),
            export_dir: PathBuf::from(".data/exports"),
            schema: SheetSchema::Rich,
            sheet_name: "Contacts".into(),
            share_command: Vec::new(),
            log_level: "info".into(),
        }
    }
}

impl AppConfig {
    /// Loads `path`, which must exist, or the default config file if present.
    /// Falls back to defaults when neither applies.
    pub fn load(path: Option<&Path>) -> ExportResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> ExportResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> ExportResult<Self> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()
    }

    fn validate(mut self) -> ExportResult<Self> {
        self.sheet_name = check_sheet_name(&self.sheet_name)?.to_string();
        Ok(self)
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        store_path: Option<PathBuf>,
        export_dir: Option<PathBuf>,
        schema: Option<SheetSchema>,
    ) -> Self {
        if let Some(p) = store_path {
            self.store_path = p;
        }
        if let Some(d) = export_dir {
            self.export_dir = d;
        }
        if let Some(s) = schema {
            self.schema = s;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(AppConfig::parse("").unwrap(), AppConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let config = AppConfig::parse(
            r#"
            store_path = "/srv/contacts.json"
            export_dir = "/tmp/out"
            schema = "compact"
            sheet_name = "Contatos"
            share_command = ["xdg-open", "{path}"]
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.store_path, PathBuf::from("/srv/contacts.json"));
        assert_eq!(config.schema, SheetSchema::Compact);
        assert_eq!(config.sheet_name, "Contatos");
        assert_eq!(config.share_command, vec!["xdg-open", "{path}"]);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            AppConfig::parse("colour = \"blue\""),
            Err(ExportError::Config(_))
        ));
    }

    #[test]
    fn rejects_blank_sheet_name() {
        assert!(matches!(
            AppConfig::parse("sheet_name = \"  \""),
            Err(ExportError::BlankField { .. })
        ));
    }

    #[test]
    fn rejects_sheet_name_with_illegal_characters() {
        assert!(matches!(
            AppConfig::parse("sheet_name = \"Contacts: 2026\""),
            Err(ExportError::InvalidField { .. })
        ));
    }

    #[test]
    fn rejects_sheet_name_over_excel_limit() {
        let text = format!("sheet_name = \"{}\"", "C".repeat(32));
        assert!(matches!(
            AppConfig::parse(&text),
            Err(ExportError::InvalidField { .. })
        ));
    }

    #[test]
    fn sheet_name_is_trimmed() {
        let config = AppConfig::parse("sheet_name = \" Contatos \"").unwrap();
        assert_eq!(config.sheet_name, "Contatos");
    }

    #[test]
    fn overrides_replace_file_values() {
        let config = AppConfig::default().with_overrides(
            Some(PathBuf::from("a.db")),
            None,
            Some(SheetSchema::Compact),
        );
        assert_eq!(config.store_path, PathBuf::from("a.db"));
        assert_eq!(config.export_dir, PathBuf::from(".data/exports"));
        assert_eq!(config.schema, SheetSchema::Compact);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("/nonexistent/config.toml"))).is_err());
    }
}
