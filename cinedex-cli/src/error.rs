use cinedex_catalog::SeedError;
use cinedex_lib::{CatalogError, ErrorKind};
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A catalog operation was refused or failed
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Seed file could not be read
    #[error("{0}")]
    Seed(#[from] SeedError),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Process exit code: 2 invalid argument, 3 not found, 4 conflict, 1 otherwise.
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            Self::Catalog(e) => match e.kind() {
                ErrorKind::InvalidArgument => 2,
                ErrorKind::NotFound => 3,
                ErrorKind::Conflict => 4,
                ErrorKind::Internal => 1,
            },
            Self::Io(_) | Self::Seed(_) | Self::Json(_) | Self::Config(_) => 1,
        }
    }
}
