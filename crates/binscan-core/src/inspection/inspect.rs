//! Single-archive inspection.

use std::fs::File;
use std::io::Seek;
use std::io::SeekFrom;
use std::path::Path;

use crate::InspectionConfig;
use crate::Result;
use crate::formats::open_archive;
use crate::hash::md5_hex;

use super::InspectionReport;
use super::find_binary;

/// Inspects one archive: finds the target binary and hashes the file.
///
/// Members are listed through the format reader, which is then closed. The
/// original file handle is rewound and its raw bytes are hashed, so the
/// digest covers the downloaded artifact rather than decompressed content.
///
/// # Arguments
///
/// * `archive_path` - Path to a `.zip` or `.tar.gz` file
/// * `binary_name` - Name of the binary to look for
/// * `config` - Inspection configuration (match rule)
///
/// # Errors
///
/// Returns error if:
/// - The file cannot be opened, rewound, or read
/// - The file name has an unsupported suffix
/// - The archive is corrupt
///
/// Finding no matching member is not an error; see
/// [`InspectionReport::has_binary`].
///
/// # Examples
///
/// ```no_run
/// use binscan_core::InspectionConfig;
/// use binscan_core::inspect_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = inspect_archive("geth-1.9-linux-amd64.zip", "geth", &InspectionConfig::default())?;
/// assert_eq!(report.kind_tag(), "zip");
/// # Ok(())
/// # }
/// ```
pub fn inspect_archive<P: AsRef<Path>>(
    archive_path: P,
    binary_name: &str,
    config: &InspectionConfig,
) -> Result<InspectionReport> {
    let archive_path = archive_path.as_ref();
    log::info!("Investigating archive {}", archive_path.display());

    let mut file = File::open(archive_path)?;

    let mut reader = open_archive(archive_path, &file)?;
    let kind = reader.kind();
    let bare_name = reader.bare_name().to_string();
    let members = reader.list_members()?;
    let binary = find_binary(&members, binary_name, config.match_mode);
    reader.close();

    match &binary {
        Some(found) => log::debug!(
            "{}: found {binary_name} at {}",
            archive_path.display(),
            found.path
        ),
        None => log::debug!(
            "{}: no member matches {binary_name} among {} entries",
            archive_path.display(),
            members.len()
        ),
    }

    file.seek(SeekFrom::Start(0))?;
    let md5 = md5_hex(&mut file)?;

    Ok(InspectionReport {
        kind,
        bare_name,
        binary,
        md5,
    })
}
