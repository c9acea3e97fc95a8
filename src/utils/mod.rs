/// Utility modules for the book analyzer
///
/// This module contains document loading and console output formatting.

pub mod file_utils;
pub mod output_formatter;
