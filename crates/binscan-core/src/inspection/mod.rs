//! Archive inspection: locate the client binary and hash the archive.
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
//!
//! if report.has_binary() {
//!     println!("{} at {}", report.binary_name(), report.binary_path());
//! }
//! println!("{} {}", report.kind, report.md5);
//! # Ok(())
//! # }
//! ```

pub mod inspect;
pub mod matcher;
pub mod report;

pub use inspect::inspect_archive;
pub use matcher::BinaryMatch;
pub use matcher::find_binary;
pub use report::InspectionReport;
