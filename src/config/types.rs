use serde::Serialize;
use std::path::{Path, PathBuf};

/// Per-user texdirmaker settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Author name written into the template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// File copied next to every generated template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preamble: Option<PathBuf>,
}

impl Config {
    /// Build a config from an arbitrary TOML table.
    ///
    /// No schema is enforced: unknown keys are ignored, a non-string
    /// `author` is kept in its TOML text form and a non-string `preamble`
    /// counts as unset.
    pub fn from_table(table: &toml::Table) -> Self {
        let author = table.get("author").map(|value| match value {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        });

        let preamble = table
            .get("preamble")
            .and_then(|value| value.as_str())
            .map(PathBuf::from);

        Self { author, preamble }
    }

    /// Author as written into the template; `None` when the key is missing
    pub fn author_name(&self) -> String {
        self.author.clone().unwrap_or_else(|| "None".to_string())
    }

    pub fn preamble_path(&self) -> Option<&Path> {
        self.preamble.as_deref()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: Some("author".to_string()),
            preamble: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(src: &str) -> toml::Table {
        toml::from_str(src).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.author.as_deref(), Some("author"));
        assert_eq!(config.preamble, None);
    }

    #[test]
    fn test_default_serialization_omits_preamble() {
        let toml = toml::to_string(&Config::default()).unwrap();
        assert!(toml.contains("author = \"author\""));
        assert!(!toml.contains("preamble"));
    }

    #[test]
    fn test_from_table_full() {
        let config = Config::from_table(&table(
            "author = \"Alice\"\npreamble = \"/tmp/preamble.sty\"\n",
        ));
        assert_eq!(config.author_name(), "Alice");
        assert_eq!(config.preamble_path(), Some(Path::new("/tmp/preamble.sty")));
    }

    #[test]
    fn test_missing_author_is_none_text() {
        let config = Config::from_table(&table("preamble = \"p.sty\"\n"));
        assert_eq!(config.author, None);
        assert_eq!(config.author_name(), "None");
    }

    #[test]
    fn test_non_string_values() {
        let config = Config::from_table(&table("author = 42\npreamble = false\n"));
        assert_eq!(config.author_name(), "42");
        assert_eq!(config.preamble, None);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = Config::from_table(&table(
            "author = \"Bob\"\ntheme = \"dark\"\n[extra]\nkey = 1\n",
        ));
        assert_eq!(config.author_name(), "Bob");
        assert_eq!(config.preamble, None);
    }

    #[test]
    fn test_empty_table() {
        let config = Config::from_table(&toml::Table::new());
        assert_eq!(config.author_name(), "None");
        assert_eq!(config.preamble_path(), None);
    }
}
