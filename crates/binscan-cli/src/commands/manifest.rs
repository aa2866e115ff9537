//! Manifest command implementation.
//!
//! Scans a directory of release archives, inspects each one, and writes the
//! client binaries manifest. A failure on one archive is logged and the
//! archive skipped; the rest of the scan carries on.

use crate::cli::ManifestArgs;
use crate::error::convert_inspection_error;
use crate::manifest::Manifest;
use crate::manifest::ManifestBuilder;
use crate::output::OutputFormatter;
use crate::platform::Platform;
use crate::progress::ScanProgress;
use anyhow::Context;
use anyhow::Result;
use binscan_core::InspectionConfig;
use binscan_core::formats::detect::is_supported;
use binscan_core::inspect_archive;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// An archive left out of the manifest, and why.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedArchive {
    pub file_name: String,
    pub reason: String,
}

/// Outcome of a directory scan.
#[derive(Debug, Default)]
pub struct ScanSummary {
    pub archives_found: usize,
    pub skipped: Vec<SkippedArchive>,
}

pub fn execute(
    args: &ManifestArgs,
    formatter: &dyn OutputFormatter,
    hide_progress: bool,
) -> Result<()> {
    let config = InspectionConfig {
        match_mode: args.match_mode.into(),
    };

    let archives = find_archives(&args.path)?;
    let builder = ManifestBuilder::new(
        args.client.as_str(),
        args.binary_version.as_str(),
        args.binary.as_str(),
        args.url.as_str(),
    );

    let progress = ScanProgress::new(archives.len(), hide_progress);
    let (manifest, summary) = build_manifest(builder, &archives, &args.binary, &config, &progress);
    drop(progress);

    write_manifest(&args.output, &manifest)?;

    formatter.format_manifest_result(&args.output, &manifest, &summary)
}

/// Lists supported archives directly inside `dir`, sorted by file name.
fn find_archives(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut archives = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("failed to read directory '{}'", dir.display()))?;
        if entry.file_type().is_file() && is_supported(entry.path()) {
            archives.push(entry.into_path());
        }
    }

    Ok(archives)
}

fn build_manifest(
    mut builder: ManifestBuilder,
    archives: &[PathBuf],
    binary: &str,
    config: &InspectionConfig,
    progress: &ScanProgress,
) -> (Manifest, ScanSummary) {
    let mut summary = ScanSummary {
        archives_found: archives.len(),
        skipped: Vec::new(),
    };

    for path in archives {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        progress.start(&file_name);

        match add_archive(&mut builder, path, &file_name, binary, config) {
            Ok(Some(replaced)) => progress.suspend(|| {
                log::warn!("{file_name} replaces {replaced} in its platform slot");
            }),
            Ok(None) => {}
            Err(reason) => {
                progress.suspend(|| log::warn!("Skipping file {file_name}, reason: {reason}"));
                summary.skipped.push(SkippedArchive { file_name, reason });
            }
        }

        progress.finish_one();
    }

    (builder.build(), summary)
}

/// Inspects one archive and records it. Returns the download URL of the
/// entry it displaced, if any, or the reason it was skipped.
fn add_archive(
    builder: &mut ManifestBuilder,
    path: &Path,
    file_name: &str,
    binary: &str,
    config: &InspectionConfig,
) -> std::result::Result<Option<String>, String> {
    let platform = Platform::classify(file_name)
        .ok_or_else(|| "platform or architecture not recognised".to_string())?;

    let report = inspect_archive(path, binary, config)
        .map_err(|e| format!("{:#}", convert_inspection_error(e, path)))?;

    if !report.has_binary() {
        return Err(format!("no member matches binary name '{binary}'"));
    }

    log::debug!("{file_name} -> {platform}");

    Ok(builder
        .insert(platform, file_name, &report)
        .map(|previous| previous.download.url))
}

fn write_manifest(output: &Path, manifest: &Manifest) -> Result<()> {
    let encoded = serde_json::to_vec_pretty(manifest)?;
    fs::write(output, encoded)
        .with_context(|| format!("failed to write manifest '{}'", output.display()))
}
