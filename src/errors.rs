use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("malformed hierarchy at line {line}: {reason}")]
    MalformedHierarchy { line: usize, reason: String },

    #[error("invalid node name '{name}': {reason}")]
    InvalidNodeName { name: String, reason: String },

    #[error("path already exists: {0}")]
    PathExists(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding failed: {0}")]
    JsonEncoding(#[from] serde_json::Error),

    #[error("YAML encoding failed: {0}")]
    YamlEncoding(#[from] serde_yaml::Error),

    #[error("TOML encoding failed: {0}")]
    TomlEncoding(#[from] toml::ser::Error),

    #[error("pipeline stage failed: {0}")]
    Pipeline(String),
}

pub type TreeResult<T> = Result<T, TreeError>;
