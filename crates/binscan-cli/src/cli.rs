//! CLI argument parsing using clap.

use binscan_core::MatchMode;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "binscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a client binaries manifest from a directory of archives
    Manifest(ManifestArgs),
    /// Inspect a single archive
    Inspect(InspectArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

/// How archive members are matched against the binary name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MatchModeArg {
    /// Last path segment starts with the binary name
    #[default]
    Prefix,
    /// First four bytes of the last path segment equal the binary name
    FixedWidth,
}

impl From<MatchModeArg> for MatchMode {
    fn from(arg: MatchModeArg) -> Self {
        match arg {
            MatchModeArg::Prefix => Self::Prefix,
            MatchModeArg::FixedWidth => Self::FixedWidth,
        }
    }
}

#[derive(clap::Args)]
pub struct ManifestArgs {
    /// Base URL the archives will be downloaded from
    #[arg(long, value_name = "URL")]
    pub url: String,

    /// Directory containing the archives
    #[arg(long, value_name = "DIR", default_value = "./")]
    pub path: PathBuf,

    /// Version of the binaries
    #[arg(long = "binary-version", value_name = "VERSION", default_value = "1.0")]
    pub binary_version: String,

    /// Base name of the binary, e.g. geth
    #[arg(long, value_name = "NAME", default_value = "geth")]
    pub binary: String,

    /// Client key in the manifest
    #[arg(long, value_name = "NAME", default_value = "Geth")]
    pub client: String,

    /// Manifest output file
    #[arg(short, long, value_name = "FILE", default_value = "clientBinaries.json")]
    pub output: PathBuf,

    /// Rule used to recognise the binary inside an archive
    #[arg(long, value_enum, default_value_t = MatchModeArg::Prefix)]
    pub match_mode: MatchModeArg,
}

#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Base name of the binary, e.g. geth
    #[arg(long, value_name = "NAME", default_value = "geth")]
    pub binary: String,

    /// Rule used to recognise the binary inside the archive
    #[arg(long, value_enum, default_value_t = MatchModeArg::Prefix)]
    pub match_mode: MatchModeArg,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
