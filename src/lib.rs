/// Book Analyzer - regex-driven analysis of a single plain-text book
///
/// This library counts words with the root `Robot`, extracts quoted dialogue,
/// collects four-digit years and infers a cast of characters from
/// script-style cue lines.

pub mod config;
pub mod core;
pub mod utils;

// Re-export main analyzer types for convenience
pub use crate::core::analyzer::{analyze, AnalysisReport};
pub use crate::utils::file_utils::{read_document, Document, LoadError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load a file and run every analysis pass over it
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `file_path` - Path to the book
///
/// # Returns
///
/// The combined results, or the load error
pub fn analyze_file<P: AsRef<std::path::Path>>(file_path: P) -> Result<AnalysisReport, LoadError> {
    let document = read_document(file_path.as_ref())?;
    Ok(analyze(&document.content))
}
