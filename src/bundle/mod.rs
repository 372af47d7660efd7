//! Bundle discovery and archive assembly
//!
//! Turns a build output tree into one archive per bundle:
//! - [`discovery`] finds bundle roots in a project
//! - [`assembler`] writes one archive per bundle
//! - [`build`] runs a whole batch and picks the primary artifact

pub mod assembler;
pub mod build;
pub mod discovery;
pub mod listing;

pub use assembler::{Artifact, DEFAULT_EXTENSION};
pub use build::build;
pub use discovery::{discover, discover_project};
pub use listing::LocalFs;
