//! Configuration module
//!
//! Reads the per-user `~/.texdirmakerrc` settings file and bootstraps it
//! on first run after asking the user.

mod types;

pub use types::Config;

use crate::error::{ScaffoldError, Result};
use crate::prompt::Confirm;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the settings file inside the home directory
pub const CONFIG_FILE_NAME: &str = ".texdirmakerrc";

/// Default settings path: `<home>/.texdirmakerrc`
pub fn default_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE_NAME))
        .ok_or_else(|| ScaffoldError::Config("Cannot determine home directory".to_string()))
}

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        ScaffoldError::Config(format!(
            "Cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let table: toml::Table = toml::from_str(&content)?;
    Ok(Config::from_table(&table))
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)?;
    fs::write(path, toml)?;
    Ok(())
}

/// Load the settings at `path`, creating the default file first if the
/// user agrees.
///
/// Declining yields `ScaffoldError::Cancelled` and leaves the filesystem
/// untouched.
pub fn get_config(path: &Path, confirm: &mut dyn Confirm) -> Result<Config> {
    if path.is_file() {
        tracing::debug!(path = %path.display(), "loading config");
        return load(path);
    }

    if !confirm.confirm("config file not found. create it?")? {
        println!("canceled");
        return Err(ScaffoldError::Cancelled);
    }

    let config = Config::default();
    save(&config, path)?;
    println!("File '{}' created. Edit it later", path.display());

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Answer;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "author = \"Alice\"\npreamble = \"/x/pre.sty\"\n").unwrap();

        let loaded = load(&config_path).unwrap();
        assert_eq!(loaded.author_name(), "Alice");
        assert_eq!(loaded.preamble_path(), Some(Path::new("/x/pre.sty")));
    }

    #[test]
    fn test_load_missing_config() {
        let result = load(Path::new("/nonexistent/.texdirmakerrc"));
        assert!(matches!(result, Err(ScaffoldError::Config(_))));
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "author = \n").unwrap();

        let result = load(&config_path);
        assert!(matches!(result, Err(ScaffoldError::TomlParse(_))));
    }

    #[test]
    fn test_roundtrip() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);

        let config = Config {
            author: Some("Carol".to_string()),
            preamble: Some(PathBuf::from("/tex/preamble.sty")),
        };
        save(&config, &config_path).unwrap();

        assert_eq!(load(&config_path).unwrap(), config);
    }

    #[test]
    fn test_get_config_bootstraps_on_yes() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);

        let config = get_config(&config_path, &mut Answer(true)).unwrap();

        assert_eq!(config, Config::default());
        assert!(config_path.is_file());
        assert_eq!(load(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_get_config_cancelled_on_no() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);

        let result = get_config(&config_path, &mut Answer(false));

        assert!(matches!(result, Err(ScaffoldError::Cancelled)));
        assert!(!config_path.exists());
    }

    #[test]
    fn test_get_config_existing_file_does_not_prompt() {
        struct Panicking;
        impl Confirm for Panicking {
            fn confirm(&mut self, _question: &str) -> std::io::Result<bool> {
                panic!("should not prompt when the config exists");
            }
        }

        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "author = \"Dave\"\n").unwrap();

        let config = get_config(&config_path, &mut Panicking).unwrap();
        assert_eq!(config.author_name(), "Dave");
    }
}
