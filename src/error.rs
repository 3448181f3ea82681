use std::path::PathBuf;
use thiserror::Error;

/// texdirmaker error types
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("The {kind} name '{name}' is not available.")]
    InvalidName { kind: NameKind, name: String },

    #[error("Directory already exists: '{}'", .0.display())]
    AlreadyExists(PathBuf),

    #[error("canceled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Which user-supplied name failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Directory,
    File,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Directory => f.write_str("directory"),
            NameKind::File => f.write_str("file"),
        }
    }
}

impl ScaffoldError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::Cancelled => 0,
            ScaffoldError::AlreadyExists(_) => 2,
            _ => 1,
        }
    }
}

/// Result type for texdirmaker operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;
