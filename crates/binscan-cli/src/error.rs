//! Error conversion utilities for CLI.
//!
//! Converts binscan-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use binscan_core::InspectionError;
use std::path::Path;

/// Converts `InspectionError` to user-friendly anyhow error with context
pub fn convert_inspection_error(err: InspectionError, archive: &Path) -> anyhow::Error {
    match err {
        InspectionError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {}",
                archive.display(),
                io_err
            )
        }
        InspectionError::UnsupportedFormat { path } => {
            anyhow!(
                "Archive format not supported: {}\n\
                 HINT: Supported formats: .zip, .tar.gz",
                path.display()
            )
        }
        InspectionError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The archive may be corrupted or truncated.",
                archive.display(),
                reason
            )
        }
        InspectionError::MembersConsumed => anyhow::Error::from(err)
            .context(format!("Error processing archive '{}'", archive.display())),
    }
}

/// Adds context to an inspection result
pub fn add_archive_context<T>(
    result: Result<T, InspectionError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_inspection_error(e, archive))
}
