/// Core module for text analysis
///
/// This module contains the compiled patterns and the four analysis passes
/// built on them.

pub mod analyzer;
pub mod patterns;
