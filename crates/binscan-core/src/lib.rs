//! Client binary archive inspection.
//!
//! `binscan-core` opens `.zip` and `.tar.gz` distribution archives, lists
//! their members without extracting them, locates the client binary by
//! name, and computes an MD5 digest of the whole archive file for download
//! verification.
//!
//! # Examples
//!
//! ```no_run
//! use binscan_core::InspectionConfig;
//! use binscan_core::inspect_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = InspectionConfig::default();
//! let report = inspect_archive("geth-1.9-linux-amd64.tar.gz", "geth", &config)?;
//! println!("{} ({}) md5={}", report.binary_path(), report.kind, report.md5);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod formats;
pub mod hash;
pub mod inspection;

#[doc(hidden)]
pub mod test_utils;

pub use config::InspectionConfig;
pub use config::MatchMode;
pub use error::InspectionError;
pub use error::Result;
pub use formats::ArchiveKind;
pub use formats::ArchiveReader;
pub use formats::open_archive;
pub use inspection::BinaryMatch;
pub use inspection::InspectionReport;
pub use inspection::inspect_archive;
