//! Command implementations for biluo CLI
//!
//! Each command has its own module/file.

pub mod convert;
pub mod merge;

// Re-export argument types for parser
pub use convert::ConvertArgs;
pub use merge::MergeArgs;
