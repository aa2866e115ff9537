//! Inspect command implementation

use crate::cli::InspectArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use binscan_core::InspectionConfig;
use binscan_core::inspect_archive;

pub fn execute(args: &InspectArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = InspectionConfig {
        match_mode: args.match_mode.into(),
    };

    let report = add_archive_context(
        inspect_archive(&args.archive, &args.binary, &config),
        &args.archive,
    )?;

    if !report.has_binary() {
        log::warn!(
            "no member of {} matches binary name '{}'",
            args.archive.display(),
            args.binary
        );
    }

    formatter.format_inspection(&args.archive, &report)
}
