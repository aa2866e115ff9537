//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use crate::commands::manifest::ScanSummary;
use crate::manifest::Manifest;
use anyhow::Result;
use binscan_core::InspectionReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct InspectionOutput<'a> {
    archive: String,
    #[serde(rename = "type")]
    kind: &'a str,
    bare_name: &'a str,
    bin: &'a str,
    bin_path: &'a str,
    found: bool,
    md5: &'a str,
}

impl<'a> InspectionOutput<'a> {
    fn new(archive: &Path, report: &'a InspectionReport) -> Self {
        Self {
            archive: archive.display().to_string(),
            kind: report.kind_tag(),
            bare_name: &report.bare_name,
            bin: report.binary_name(),
            bin_path: report.binary_path(),
            found: report.has_binary(),
            md5: &report.md5,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_inspection(&self, archive: &Path, report: &InspectionReport) -> Result<()> {
        let output = JsonOutput::success("inspect", InspectionOutput::new(archive, report));
        Self::output(&output)
    }

    fn format_manifest_result(
        &self,
        output_path: &Path,
        manifest: &Manifest,
        summary: &ScanSummary,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct ManifestOutput<'a> {
            output_path: String,
            archives_found: usize,
            archives_recorded: usize,
            skipped: &'a [crate::commands::manifest::SkippedArchive],
            manifest: &'a Manifest,
        }

        let data = ManifestOutput {
            output_path: output_path.display().to_string(),
            archives_found: summary.archives_found,
            archives_recorded: manifest.archive_count(),
            skipped: &summary.skipped,
            manifest,
        };

        let output = JsonOutput::success("manifest", data);
        Self::output(&output)
    }
}
