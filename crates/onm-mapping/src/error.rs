use std::path::PathBuf;

use onm_types::ObjectKey;

/// Errors from object/node mapping operations.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// An object was rejected by the strategy's validation hook.
    #[error("invalid object: {0}")]
    Validation(String),

    /// No registered object matches the node's content.
    #[error("no object registered for key {key}")]
    NotFound { key: ObjectKey },

    /// The table could not be encoded for persistence.
    #[error("cannot encode mapping table to {}: {reason}", .path.display())]
    Encode { path: PathBuf, reason: String },

    /// A persisted table could not be read or decoded.
    #[error("cannot load mapping table from {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    /// The strategy does not implement the requested operation.
    #[error("this object node mapping does not support {0}")]
    Unsupported(&'static str),

    /// The persisted configuration could not be parsed.
    #[error("invalid mapping config: {0}")]
    Config(String),

    /// I/O error while writing a persisted table.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;
