//! Archive kind detection from the file name.

use std::fmt;
use std::path::Path;

use crate::InspectionError;
use crate::Result;

/// Supported archive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveKind {
    /// ZIP archive (random access through the central directory).
    Zip,
    /// Gzip-compressed tar archive (sequential).
    TarGz,
}

impl ArchiveKind {
    /// Manifest tag for this kind: `"zip"` or `"tar"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::TarGz => "tar",
        }
    }

    /// File name suffix that selects this kind.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Zip => ".zip",
            Self::TarGz => ".tar.gz",
        }
    }
}

impl fmt::Display for ArchiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detection order; first suffix match wins.
const KINDS: [ArchiveKind; 2] = [ArchiveKind::Zip, ArchiveKind::TarGz];

fn file_name(path: &Path) -> std::borrow::Cow<'_, str> {
    path.file_name()
        .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy())
}

/// Detects the archive kind from the file name suffix.
///
/// The check is case-sensitive and never looks at file contents.
///
/// # Errors
///
/// Returns [`InspectionError::UnsupportedFormat`] if the name ends in neither
/// `.zip` nor `.tar.gz`.
///
/// # Examples
///
/// ```
/// use binscan_core::formats::detect::{ArchiveKind, detect_kind};
/// use std::path::Path;
///
/// let kind = detect_kind(Path::new("geth-1.9-linux-amd64.tar.gz")).unwrap();
/// assert_eq!(kind, ArchiveKind::TarGz);
/// assert_eq!(kind.as_str(), "tar");
/// ```
pub fn detect_kind(path: &Path) -> Result<ArchiveKind> {
    let name = file_name(path);
    KINDS
        .into_iter()
        .find(|kind| name.ends_with(kind.suffix()))
        .ok_or_else(|| InspectionError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
}

/// Returns `true` if [`detect_kind`] would accept this path.
#[must_use]
pub fn is_supported(path: &Path) -> bool {
    detect_kind(path).is_ok()
}

/// Returns the file name with the kind's suffix stripped.
///
/// ```
/// use binscan_core::formats::detect::{ArchiveKind, bare_name};
/// use std::path::Path;
///
/// assert_eq!(bare_name(Path::new("dist/foo-1.2.3.zip"), ArchiveKind::Zip), "foo-1.2.3");
/// ```
#[must_use]
pub fn bare_name(path: &Path, kind: ArchiveKind) -> String {
    let name = file_name(path);
    name.strip_suffix(kind.suffix())
        .unwrap_or(name.as_ref())
        .to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_zip() {
        let path = PathBuf::from("geth-1.9-windows-amd64.zip");
        assert_eq!(detect_kind(&path).unwrap(), ArchiveKind::Zip);
    }

    #[test]
    fn test_detect_tar_gz() {
        let path = PathBuf::from("geth-1.9-linux-386.tar.gz");
        assert_eq!(detect_kind(&path).unwrap(), ArchiveKind::TarGz);
    }

    #[test]
    fn test_detect_ignores_directory_component() {
        let path = PathBuf::from("releases.zip/geth.tar.gz");
        assert_eq!(detect_kind(&path).unwrap(), ArchiveKind::TarGz);
    }

    #[test]
    fn test_detect_unsupported() {
        for name in ["archive.tgz", "archive.tar", "archive.gz", "archive.7z", "archive"] {
            let err = detect_kind(Path::new(name)).unwrap_err();
            assert!(
                matches!(err, InspectionError::UnsupportedFormat { ref path } if path == Path::new(name))
            );
        }
    }

    #[test]
    fn test_detect_is_case_sensitive() {
        assert!(detect_kind(Path::new("GETH.ZIP")).is_err());
        assert!(detect_kind(Path::new("geth.TAR.GZ")).is_err());
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported(Path::new("a.zip")));
        assert!(is_supported(Path::new("a.tar.gz")));
        assert!(!is_supported(Path::new("a.txt")));
    }

    #[test]
    fn test_bare_name() {
        assert_eq!(
            bare_name(Path::new("foo-1.2.3.zip"), ArchiveKind::Zip),
            "foo-1.2.3"
        );
        assert_eq!(
            bare_name(Path::new("foo-1.2.3.tar.gz"), ArchiveKind::TarGz),
            "foo-1.2.3"
        );
        assert_eq!(
            bare_name(Path::new("/srv/dist/foo-1.2.3.tar.gz"), ArchiveKind::TarGz),
            "foo-1.2.3"
        );
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(ArchiveKind::Zip.to_string(), "zip");
        assert_eq!(ArchiveKind::TarGz.to_string(), "tar");
    }
}
