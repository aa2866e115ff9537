//! Archive reader implementations.
//!
//! [`ArchiveReader`] is a tagged variant over the two supported containers.
//! It is chosen by file name suffix in [`open_archive`] and exposes a uniform
//! contract: kind, bare name, and the list of non-directory member paths.

pub mod detect;
pub mod tar;
pub mod zip;

use std::io::Read;
use std::path::Path;

use crate::Result;

pub use self::detect::ArchiveKind;
pub use self::tar::TarGzSource;
pub use self::zip::ZipSource;

/// An open archive, owning its decode handles exclusively.
pub enum ArchiveReader<R: Read> {
    /// Random-access ZIP archive.
    Zip(ZipSource),
    /// Sequential gzip-compressed tar stream.
    TarGz(TarGzSource<R>),
}

/// Opens an archive, dispatching on the file name suffix.
///
/// ZIP archives are opened by path with their own handle; `stream` is only
/// consumed for `.tar.gz`.
///
/// # Errors
///
/// Returns [`InspectionError::UnsupportedFormat`](crate::InspectionError::UnsupportedFormat)
/// for unknown suffixes, and the zip layer's error for a malformed ZIP
/// central directory.
///
/// # Examples
///
/// ```no_run
/// use binscan_core::formats::open_archive;
/// use std::fs::File;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let path = Path::new("geth-1.9-linux-amd64.tar.gz");
/// let file = File::open(path)?;
/// let mut reader = open_archive(path, &file)?;
/// for member in reader.list_members()? {
///     println!("{member}");
/// }
/// reader.close();
/// # Ok(())
/// # }
/// ```
pub fn open_archive<R: Read>(path: &Path, stream: R) -> Result<ArchiveReader<R>> {
    match detect::detect_kind(path)? {
        ArchiveKind::Zip => Ok(ArchiveReader::Zip(ZipSource::open(path)?)),
        ArchiveKind::TarGz => Ok(ArchiveReader::TarGz(TarGzSource::new(stream, path))),
    }
}

impl<R: Read> ArchiveReader<R> {
    /// Archive kind of this reader.
    #[must_use]
    pub const fn kind(&self) -> ArchiveKind {
        match self {
            Self::Zip(_) => ArchiveKind::Zip,
            Self::TarGz(_) => ArchiveKind::TarGz,
        }
    }

    /// Archive file name without its format suffix.
    #[must_use]
    pub fn bare_name(&self) -> &str {
        match self {
            Self::Zip(source) => source.bare_name(),
            Self::TarGz(source) => source.bare_name(),
        }
    }

    /// Lists non-directory member paths.
    ///
    /// For `.tar.gz` this is single-pass; a second call returns
    /// [`InspectionError::MembersConsumed`](crate::InspectionError::MembersConsumed).
    pub fn list_members(&mut self) -> Result<Vec<String>> {
        match self {
            Self::Zip(source) => source.members(),
            Self::TarGz(source) => source.members(),
        }
    }

    /// Releases the decode handles.
    ///
    /// Consumes the reader, so no read can follow. Dropping the reader has
    /// the same effect.
    pub fn close(self) {
        drop(self);
    }
}
