//! Platform and architecture classification from archive file names.

use std::fmt;

/// Operating system an archive targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Linux,
    Windows,
    Mac,
}

/// CPU architecture an archive targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X64,
    Ia32,
}

/// A manifest slot: operating system plus architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    /// Classifies an archive by substrings of its file name.
    ///
    /// Only the combinations the manifest has slots for are recognised;
    /// anything else (e.g. `linux-arm`, `darwin-386`) returns `None`.
    pub fn classify(file_name: &str) -> Option<Self> {
        let arch = if file_name.contains("amd64") {
            Arch::X64
        } else if file_name.contains("386") {
            Arch::Ia32
        } else {
            return None;
        };

        let os = if file_name.contains("linux") {
            Os::Linux
        } else if file_name.contains("windows") {
            Os::Windows
        } else if file_name.contains("darwin") && arch == Arch::X64 {
            Os::Mac
        } else {
            return None;
        };

        Some(Self { os, arch })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let os = match self.os {
            Os::Linux => "linux",
            Os::Windows => "win",
            Os::Mac => "mac",
        };
        let arch = match self.arch {
            Arch::X64 => "x64",
            Arch::Ia32 => "ia32",
        };
        write!(f, "{os}/{arch}")
    }
}
