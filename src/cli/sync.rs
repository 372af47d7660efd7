use clap::Parser;
use std::path::PathBuf;

use crate::config::manifest::ManifestFormat;
use crate::strategy::SyncStrategy;

/// Arguments for the sync command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the packages that may be promoted:\n    promoter sync --source dev.yaml --destination prod.yaml\n\n\
                  Refuse any downgrade (CI/CD):\n    promoter sync -s dev.yaml -d prod.yaml --strategy force-latest-versions\n\n\
                  Write the cleared packages to a file:\n    promoter sync -s dev.json -d prod.json --output cleared.json")]
pub struct SyncArgs {
    /// Manifest of the packages in the source environment
    #[arg(long, short = 's', value_name = "FILE")]
    pub source: PathBuf,

    /// Manifest of the packages in the destination environment
    #[arg(long, short = 'd', value_name = "FILE")]
    pub destination: PathBuf,

    /// What to do with packages that are not newer than the destination
    /// (defaults to the workspace configuration, then skip-old-versions)
    #[arg(long, value_enum)]
    pub strategy: Option<SyncStrategy>,

    /// Write the cleared packages to a manifest file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Format used when printing to stdout
    #[arg(long, value_enum, default_value_t = ManifestFormat::Yaml)]
    pub format: ManifestFormat,
}
