//! Inspection result type.

use crate::formats::ArchiveKind;

use super::BinaryMatch;

/// Result of inspecting one archive.
///
/// `binary` is `None` when no member matched; that is a valid outcome and
/// callers decide whether to skip the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionReport {
    /// Container format.
    pub kind: ArchiveKind,
    /// Archive file name without its format suffix.
    pub bare_name: String,
    /// The target binary, if found.
    pub binary: Option<BinaryMatch>,
    /// Lowercase hex MD5 of the whole archive file.
    pub md5: String,
}

impl InspectionReport {
    /// Returns `true` if the target binary was found.
    #[must_use]
    pub const fn has_binary(&self) -> bool {
        self.binary.is_some()
    }

    /// Short binary name, or `""` if none was found.
    #[must_use]
    pub fn binary_name(&self) -> &str {
        self.binary.as_ref().map_or("", |b| b.name.as_str())
    }

    /// Full in-archive binary path, or `""` if none was found.
    #[must_use]
    pub fn binary_path(&self) -> &str {
        self.binary.as_ref().map_or("", |b| b.path.as_str())
    }

    /// Manifest tag for the archive kind.
    #[must_use]
    pub const fn kind_tag(&self) -> &'static str {
        self.kind.as_str()
    }
}
