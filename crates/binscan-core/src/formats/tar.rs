//! Gzip-compressed tar archive reader.

use std::io;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::InspectionError;
use crate::Result;

use super::detect::ArchiveKind;
use super::detect::bare_name;

/// Forward-only view over a `.tar.gz` stream.
///
/// The gzip decoder and tar iterator are built over the caller's reader but
/// nothing is read until [`members`](Self::members) runs. Enumeration is
/// single-pass: the decoder is consumed by the first call.
///
/// Concatenated gzip members are decoded as one stream.
pub struct TarGzSource<R: Read> {
    archive: Option<tar::Archive<MultiGzDecoder<BufReader<R>>>>,
    bare_name: String,
}

impl<R: Read> TarGzSource<R> {
    /// Wraps `reader` in a gzip decoder and a tar iterator.
    ///
    /// `path` only supplies the bare name; the data comes from `reader`.
    pub fn new(reader: R, path: &Path) -> Self {
        let decoder = MultiGzDecoder::new(BufReader::new(reader));
        Self {
            archive: Some(tar::Archive::new(decoder)),
            bare_name: bare_name(path, ArchiveKind::TarGz),
        }
    }

    /// Archive file name without `.tar.gz`.
    #[must_use]
    pub fn bare_name(&self) -> &str {
        &self.bare_name
    }

    /// Lists non-directory entry paths in stream order.
    ///
    /// The gzip stream is read to its end after the tar end-of-archive marker,
    /// so a truncated stream or a bad CRC/size trailer is reported.
    ///
    /// # Errors
    ///
    /// Returns [`InspectionError::MembersConsumed`] on a second call and
    /// [`InspectionError::InvalidArchive`] if the gzip or tar data is corrupt.
    pub fn members(&mut self) -> Result<Vec<String>> {
        let mut archive = self.archive.take().ok_or(InspectionError::MembersConsumed)?;
        let mut members = Vec::new();

        let entries = archive
            .entries()
            .map_err(|e| InspectionError::InvalidArchive(format!("failed to read TAR entries: {e}")))?;

        for entry_result in entries {
            let entry = entry_result.map_err(|e| {
                InspectionError::InvalidArchive(format!("failed to read TAR entry: {e}"))
            })?;

            if entry.header().entry_type().is_dir() {
                continue;
            }

            members.push(String::from_utf8_lossy(&entry.path_bytes()).into_owned());
        }

        io::copy(&mut archive.into_inner(), &mut io::sink()).map_err(|e| {
            InspectionError::InvalidArchive(format!("failed to read gzip stream: {e}"))
        })?;

        Ok(members)
    }
}
