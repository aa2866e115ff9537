//! Output formatter trait for CLI results.

use anyhow::Result;
use binscan_core::InspectionReport;
use serde::Serialize;
use std::path::Path;

use crate::commands::manifest::ScanSummary;
use crate::manifest::Manifest;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the result of inspecting a single archive
    fn format_inspection(&self, archive: &Path, report: &InspectionReport) -> Result<()>;

    /// Format the result of building and writing a manifest
    fn format_manifest_result(
        &self,
        output_path: &Path,
        manifest: &Manifest,
        summary: &ScanSummary,
    ) -> Result<()>;
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
        }
    }
}
