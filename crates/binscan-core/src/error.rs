//! Error types for archive inspection.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `InspectionError`.
pub type Result<T> = std::result::Result<T, InspectionError>;

/// Errors that can occur while inspecting an archive.
#[derive(Error, Debug)]
pub enum InspectionError {
    /// I/O operation failed (open, seek, or read of the archive file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File name ends in neither `.zip` nor `.tar.gz`.
    #[error("unsupported archive format: {}", path.display())]
    UnsupportedFormat {
        /// The offending file name.
        path: PathBuf,
    },

    /// Archive is corrupted or invalid.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// A forward-only reader was asked to enumerate its members twice.
    #[error("archive members already consumed; reopen the archive to list again")]
    MembersConsumed,
}

impl InspectionError {
    /// Returns `true` if the error came from the zip, gzip, or tar decode
    /// layer rather than from the filesystem.
    ///
    /// # Examples
    ///
    /// ```
    /// use binscan_core::InspectionError;
    ///
    /// let err = InspectionError::InvalidArchive("truncated gzip stream".to_string());
    /// assert!(err.is_decode_error());
    ///
    /// let err = InspectionError::MembersConsumed;
    /// assert!(!err.is_decode_error());
    /// ```
    #[must_use]
    pub const fn is_decode_error(&self) -> bool {
        matches!(self, Self::InvalidArchive(_))
    }
}
