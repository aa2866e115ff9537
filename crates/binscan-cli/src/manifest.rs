//! Client binaries manifest schema and builder.
//!
//! Serialized shape:
//!
//! ```json
//! {"clients":{"Geth":{"version":"1.9","platforms":{"linux":{"x64":{...}}}}}}
//! ```

use std::collections::BTreeMap;

use binscan_core::InspectionReport;
use serde::Serialize;

use crate::platform::Arch;
use crate::platform::Os;
use crate::platform::Platform;

/// Top-level manifest document.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub clients: BTreeMap<String, ClientEntry>,
}

impl Manifest {
    /// Number of archives recorded across all clients and platforms.
    pub fn archive_count(&self) -> usize {
        self.clients
            .values()
            .map(|client| client.platforms.slots().count())
            .sum()
    }
}

#[derive(Debug, Serialize)]
pub struct ClientEntry {
    pub version: String,
    pub platforms: Platforms,
}

#[derive(Debug, Default, Serialize)]
pub struct Platforms {
    #[serde(skip_serializing_if = "ArchSlots::is_empty")]
    pub linux: ArchSlots,
    #[serde(skip_serializing_if = "ArchSlots::is_empty")]
    pub mac: ArchSlots,
    #[serde(skip_serializing_if = "ArchSlots::is_empty")]
    pub win: ArchSlots,
}

impl Platforms {
    fn slot_mut(&mut self, platform: Platform) -> &mut Option<ArchiveMeta> {
        let os = match platform.os {
            Os::Linux => &mut self.linux,
            Os::Mac => &mut self.mac,
            Os::Windows => &mut self.win,
        };
        match platform.arch {
            Arch::X64 => &mut os.x64,
            Arch::Ia32 => &mut os.ia32,
        }
    }

    fn slots(&self) -> impl Iterator<Item = &ArchiveMeta> {
        [&self.linux, &self.mac, &self.win]
            .into_iter()
            .flat_map(|os| [os.x64.as_ref(), os.ia32.as_ref()])
            .flatten()
    }
}

#[derive(Debug, Default, Serialize)]
pub struct ArchSlots {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x64: Option<ArchiveMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ia32: Option<ArchiveMeta>,
}

impl ArchSlots {
    fn is_empty(&self) -> bool {
        self.x64.is_none() && self.ia32.is_none()
    }
}

/// Download and sanity-check metadata for one archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveMeta {
    pub download: Download,
    pub bin: String,
    pub commands: Commands,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Download {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub md5: String,
    pub bin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commands {
    pub sanity: Sanity,
}

/// Command run after download to check the binary, and the strings its
/// output must contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sanity {
    pub args: Vec<String>,
    pub output: Vec<String>,
}

/// Accumulates inspected archives into a [`Manifest`].
pub struct ManifestBuilder {
    client: String,
    version: String,
    binary: String,
    base_url: String,
    platforms: Platforms,
}

impl ManifestBuilder {
    pub fn new(
        client: impl Into<String>,
        version: impl Into<String>,
        binary: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: client.into(),
            version: version.into(),
            binary: binary.into(),
            base_url: base_url.into(),
            platforms: Platforms::default(),
        }
    }

    /// Builds the metadata entry for one inspected archive.
    pub fn archive_meta(&self, file_name: &str, report: &InspectionReport) -> ArchiveMeta {
        ArchiveMeta {
            download: Download {
                url: format!("{}/{file_name}", self.base_url.trim_end_matches('/')),
                kind: report.kind_tag().to_string(),
                md5: report.md5.clone(),
                bin: report.binary_path().to_string(),
            },
            bin: report.binary_name().to_string(),
            commands: Commands {
                sanity: Sanity {
                    args: vec!["version".to_string()],
                    output: vec![self.binary.clone(), self.version.clone()],
                },
            },
        }
    }

    /// Records an archive in its platform slot, returning the entry it
    /// replaced, if any.
    pub fn insert(
        &mut self,
        platform: Platform,
        file_name: &str,
        report: &InspectionReport,
    ) -> Option<ArchiveMeta> {
        let meta = self.archive_meta(file_name, report);
        self.platforms.slot_mut(platform).replace(meta)
    }

    pub fn build(self) -> Manifest {
        let mut clients = BTreeMap::new();
        clients.insert(
            self.client,
            ClientEntry {
                version: self.version,
                platforms: self.platforms,
            },
        );
        Manifest { clients }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use binscan_core::ArchiveKind;
    use binscan_core::BinaryMatch;

    fn report(kind: ArchiveKind, path: &str) -> InspectionReport {
        InspectionReport {
            kind,
            bare_name: "geth-1.9-linux-amd64".to_string(),
            binary: Some(BinaryMatch {
                name: path.rsplit('/').next().unwrap().to_string(),
                path: path.to_string(),
            }),
            md5: "0123456789abcdef0123456789abcdef".to_string(),
        }
    }

    fn linux_x64() -> Platform {
        Platform::classify("linux-amd64").unwrap()
    }

    #[test]
    fn test_archive_meta_fields() {
        let builder = ManifestBuilder::new("Geth", "1.9", "geth", "https://dl.example/builds/");
        let meta = builder.archive_meta(
            "geth-1.9-linux-amd64.tar.gz",
            &report(ArchiveKind::TarGz, "geth-1.9-linux-amd64/geth"),
        );

        assert_eq!(
            meta.download.url,
            "https://dl.example/builds/geth-1.9-linux-amd64.tar.gz"
        );
        assert_eq!(meta.download.kind, "tar");
        assert_eq!(meta.download.bin, "geth-1.9-linux-amd64/geth");
        assert_eq!(meta.bin, "geth");
        assert_eq!(meta.commands.sanity.args, vec!["version"]);
        assert_eq!(meta.commands.sanity.output, vec!["geth", "1.9"]);
    }

    #[test]
    fn test_json_shape() {
        let mut builder = ManifestBuilder::new("Geth", "1.9", "geth", "https://dl.example");
        builder.insert(
            linux_x64(),
            "geth-1.9-linux-amd64.tar.gz",
            &report(ArchiveKind::TarGz, "geth-1.9-linux-amd64/geth"),
        );
        let manifest = builder.build();
        assert_eq!(manifest.archive_count(), 1);

        let json = serde_json::to_value(&manifest).unwrap();
        let geth = &json["clients"]["Geth"];
        assert_eq!(geth["version"], "1.9");

        let x64 = &geth["platforms"]["linux"]["x64"];
        assert_eq!(x64["download"]["type"], "tar");
        assert_eq!(x64["download"]["md5"], "0123456789abcdef0123456789abcdef");
        assert_eq!(x64["bin"], "geth");
        assert_eq!(x64["commands"]["sanity"]["args"][0], "version");

        assert!(geth["platforms"]["linux"].get("ia32").is_none());
        assert!(geth["platforms"].get("mac").is_none());
        assert!(geth["platforms"].get("win").is_none());
    }

    #[test]
    fn test_insert_replaces_existing_slot() {
        let mut builder = ManifestBuilder::new("Geth", "1.9", "geth", "https://dl.example");
        assert!(
            builder
                .insert(linux_x64(), "a.zip", &report(ArchiveKind::Zip, "a/geth"))
                .is_none()
        );
        let replaced = builder
            .insert(linux_x64(), "b.zip", &report(ArchiveKind::Zip, "b/geth"))
            .unwrap();
        assert_eq!(replaced.download.bin, "a/geth");
        assert_eq!(builder.build().archive_count(), 1);
    }
}
