use clap::Parser;

/// Arguments for the compare command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Compare two versions:\n    promoter compare 1.10.0 1.9.2\n\n\
                  Snapshots compare equal to their release:\n    promoter compare 1.2.0-SNAPSHOT 1.2.0")]
pub struct CompareArgs {
    /// Left-hand version
    pub left: String,

    /// Right-hand version
    pub right: String,
}
