use cinedex_catalog::{EntityKind, PageError};
use cinedex_db::{OperationError, SchemaError};
use rusqlite::ErrorCode;
use thiserror::Error;

/// Coarse outcome category, used by frontends to pick a status or exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    InvalidArgument,
    Internal,
}

/// Errors returned by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No entity of this kind has the given id
    #[error("{} not found with id {id}", .kind.label())]
    NotFound { kind: EntityKind, id: i64 },

    /// Duplicate genre name, or a delete blocked by existing links
    #[error("{0}")]
    Conflict(String),

    /// Blank or out-of-range input, bad pagination, or conflicting filters
    #[error("{0}")]
    InvalidArgument(String),

    /// Store failure not covered by the variants above
    #[error("Database error: {0}")]
    Database(OperationError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl CatalogError {
    pub fn not_found(kind: EntityKind, id: i64) -> Self {
        Self::NotFound { kind, id }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Database(_) | Self::Schema(_) => ErrorKind::Internal,
        }
    }
}

impl From<OperationError> for CatalogError {
    fn from(err: OperationError) -> Self {
        match err {
            OperationError::NotFound { kind, id } => Self::NotFound { kind, id },
            OperationError::Sqlite(e) => e.into(),
        }
    }
}

impl From<rusqlite::Error> for CatalogError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(e, msg) if e.code == ErrorCode::ConstraintViolation => {
                Self::Conflict(msg.unwrap_or_else(|| e.to_string()))
            }
            other => Self::Database(OperationError::Sqlite(other)),
        }
    }
}

impl From<PageError> for CatalogError {
    fn from(err: PageError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}
