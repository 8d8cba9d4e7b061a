//! CLI-level errors (wraps library errors)

use thiserror::Error;

use crate::errors::TreeError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("cannot open input: {0}")]
    Input(std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Input(_) => exitcode::NOINPUT,
            CliError::Tree(e) => match e {
                TreeError::MalformedHierarchy { .. } | TreeError::InvalidNodeName { .. } => {
                    exitcode::DATAERR
                }
                TreeError::PathExists(_) => exitcode::CANTCREAT,
                TreeError::Io(_) => exitcode::IOERR,
                TreeError::JsonEncoding(_)
                | TreeError::YamlEncoding(_)
                | TreeError::TomlEncoding(_)
                | TreeError::Pipeline(_) => exitcode::SOFTWARE,
            },
        }
    }
}
