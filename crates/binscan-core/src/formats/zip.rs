//! ZIP archive reader.

use std::fs::File;
use std::path::Path;

use crate::InspectionError;
use crate::Result;

use super::detect::ArchiveKind;
use super::detect::bare_name;

/// Random-access view over a ZIP archive.
///
/// Opens its own file handle so that the caller's handle stays untouched
/// for hashing. The handle is released when the source is dropped.
pub struct ZipSource {
    archive: zip::ZipArchive<File>,
    bare_name: String,
}

impl ZipSource {
    /// Opens the archive and parses its central directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened and
    /// [`InspectionError::InvalidArchive`] if the central directory is
    /// malformed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let archive = zip::ZipArchive::new(file).map_err(|e| {
            InspectionError::InvalidArchive(format!("failed to open ZIP archive: {e}"))
        })?;

        Ok(Self {
            archive,
            bare_name: bare_name(path, ArchiveKind::Zip),
        })
    }

    /// Archive file name without `.zip`.
    #[must_use]
    pub fn bare_name(&self) -> &str {
        &self.bare_name
    }

    /// Lists non-directory entry paths in central-directory order.
    ///
    /// Entry data is never decompressed. Safe to call repeatedly.
    pub fn members(&mut self) -> Result<Vec<String>> {
        let mut members = Vec::with_capacity(self.archive.len());

        for i in 0..self.archive.len() {
            let entry = self.archive.by_index_raw(i).map_err(|e| {
                InspectionError::InvalidArchive(format!("failed to read ZIP entry: {e}"))
            })?;

            if !entry.is_dir() {
                members.push(entry.name().to_string());
            }
        }

        Ok(members)
    }
}
