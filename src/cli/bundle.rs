use clap::Parser;
use std::path::PathBuf;

/// Arguments for the bundle command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build the bundles of the current project:\n    promoter bundle --name my-actions\n\n\
                  Build from another directory into ./packages:\n    promoter bundle --root ../actions --name my-actions --output packages\n\n\
                  List the bundles that would be built:\n    promoter bundle --name my-actions --dry-run\n\n\
                  Use a different archive extension:\n    promoter bundle --name my-actions --extension abx")]
pub struct BundleArgs {
    /// Base artifact name; nested bundles are named <NAME>_<folder>
    #[arg(long, short = 'n')]
    pub name: String,

    /// Project root (defaults to the workspace directory)
    #[arg(long, short = 'r', value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Directory the archives are written to (defaults to <workspace>/target)
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Metadata descriptor file name (default: package.json)
    #[arg(long, value_name = "FILE")]
    pub descriptor: Option<String>,

    /// Payload directory name (default: dist)
    #[arg(long, value_name = "DIR")]
    pub payload: Option<String>,

    /// Archive file extension (default: tgz)
    #[arg(long)]
    pub extension: Option<String>,

    /// Look for bundles directly under the root instead of under <root>/<payload>
    #[arg(long)]
    pub direct: bool,

    /// Only list the discovered bundles
    #[arg(long)]
    pub dry_run: bool,
}
