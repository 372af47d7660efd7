//! Migration audit trail
//!
//! One line per evaluated package, emitted on the `promoter::audit` target.

use std::fmt;

use tracing::info;

use crate::domain::Package;

/// Tracing target for audit lines
pub const AUDIT_TARGET: &str = "promoter::audit";

/// Outcome recorded for one source package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Skip,
    Fail,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Skip => "SKIP",
            Verdict::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format the audit line for a source package and its destination latest
pub fn audit_line(verdict: Verdict, source: &Package, destination: Option<&Package>) -> String {
    let destination_version = destination.map_or_else(
        || "missing".to_string(),
        |package| package.version().to_string(),
    );
    format!(
        "PACKAGE | {} | {} ({}) > ({})",
        verdict,
        source.name(),
        source.version(),
        destination_version
    )
}

/// Emit the header that precedes a batch of audit lines
pub fn record_header() {
    info!(target: AUDIT_TARGET, "STRATEGY | PASS | Source.Version > Destination.Version");
}

/// Emit one audit line
pub fn record(verdict: Verdict, source: &Package, destination: Option<&Package>) {
    info!(target: AUDIT_TARGET, "{}", audit_line(verdict, source, destination));
}
