//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use crate::commands::manifest::ScanSummary;
use crate::manifest::Manifest;
use anyhow::Result;
use binscan_core::InspectionReport;
use console::Term;
use console::style;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn write_header(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }

    fn binary_line(report: &InspectionReport) -> String {
        if report.has_binary() {
            format!("{} ({})", report.binary_name(), report.binary_path())
        } else {
            "not found".to_string()
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_inspection(&self, archive: &Path, report: &InspectionReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.write_header(&archive.display().to_string());

        let _ = self
            .term
            .write_line(&format!("  Type:   {}", report.kind_tag()));
        let _ = self
            .term
            .write_line(&format!("  Binary: {}", Self::binary_line(report)));
        let _ = self.term.write_line(&format!("  MD5:    {}", report.md5));

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Name:   {}", report.bare_name));
        }

        Ok(())
    }

    fn format_manifest_result(
        &self,
        output_path: &Path,
        manifest: &Manifest,
        summary: &ScanSummary,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.write_header(&format!("Manifest written: {}", output_path.display()));

        let _ = self.term.write_line(&format!(
            "  Archives recorded: {} of {}",
            manifest.archive_count(),
            summary.archives_found
        ));

        if !summary.skipped.is_empty() {
            let _ = self
                .term
                .write_line(&format!("  Skipped: {}", summary.skipped.len()));
            if self.verbose {
                for skipped in &summary.skipped {
                    let _ = self
                        .term
                        .write_line(&format!("    {}: {}", skipped.file_name, skipped.reason));
                }
            }
        }

        Ok(())
    }
}
