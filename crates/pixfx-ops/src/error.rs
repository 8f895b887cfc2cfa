//! Error types for image operations.

use pixfx_io::IoError;
use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Operation name is not one of the known operations.
    #[error("invalid operation '{0}'; expected one of: {list}", list = crate::Operation::code_list())]
    InvalidOperation(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Buffer addressing failed.
    #[error(transparent)]
    Buffer(#[from] pixfx_core::Error),

    /// Decoding or encoding failed.
    #[error(transparent)]
    Io(#[from] IoError),
}

impl OpsError {
    /// Returns `true` if the input image could not be opened.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.is_not_found())
    }
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
