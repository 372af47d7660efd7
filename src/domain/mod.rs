//! Domain models for promoter
//!
//! Plain value types for packages, versions and bundles. These carry the
//! ordering and layout rules and never touch the file system.

pub mod bundle;
pub mod package;
pub mod version;

pub use bundle::{Bundle, BundleLayout};
pub use package::Package;
pub use version::{Version, VersionError};
