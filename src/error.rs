use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LagError {
    /// A jittered lag needs `maximum > minimum`.
    #[error("Invalid argument: maximum {maximum:?} must exceed minimum {minimum:?}")]
    InvalidArgument { minimum: Duration, maximum: Duration },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config: {0}")]
    Config(#[from] serde_json::Error),
}
