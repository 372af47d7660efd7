//! Command implementations for the promoter CLI

pub mod bundle;
pub mod compare;
pub mod completions;
pub mod helpers;
pub mod sync;
pub mod version;
