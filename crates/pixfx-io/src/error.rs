//! Error types for I/O operations.
//!
//! Codec failures are carried verbatim in [`IoError::DecodeError`] and
//! [`IoError::EncodeError`]; an input that cannot be opened at all is
//! reported as [`IoError::FileNotFound`].

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// Input path does not resolve to a readable file.
    #[error("cannot open '{}': {source}; check the input path", path.display())]
    FileNotFound {
        /// Path that was requested
        path: PathBuf,
        /// Underlying open/metadata error
        #[source]
        source: io::Error,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Unsupported bit depth or color layout.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Decoded data does not form a valid buffer.
    #[error(transparent)]
    Buffer(#[from] pixfx_core::Error),
}

impl IoError {
    /// Creates an [`IoError::FileNotFound`] error.
    pub fn file_not_found(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::FileNotFound {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns `true` if this is a missing/unreadable input error.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
