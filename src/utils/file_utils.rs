/// File handling utilities
///
/// Loading the book text from disk.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

/// Error raised when the document cannot be loaded
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("Nelze otevrit soubor '{}'", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Path of the file that failed to load
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Open { path, .. } => path,
        }
    }
}

/// A loaded document
#[derive(Debug, Clone)]
pub struct Document {
    /// Where the text was read from
    pub path: PathBuf,
    /// The whole file as text
    pub content: String,
}

impl Document {
    /// Length of the text in characters
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Length of the text in bytes
    pub fn byte_len(&self) -> usize {
        self.content.len()
    }
}

/// Read an entire file as text.
///
/// The raw bytes are decoded as UTF-8; invalid sequences are replaced rather
/// than rejected.
///
/// # Arguments
///
/// * `file_path` - Path to the file
///
/// # Returns
///
/// The loaded document, or [`LoadError::Open`] if the file cannot be read
pub fn read_document(file_path: &Path) -> Result<Document, LoadError> {
    let bytes = fs::read(file_path).map_err(|source| LoadError::Open {
        path: file_path.to_path_buf(),
        source,
    })?;

    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            warn!(
                "{} is not valid UTF-8, replacing invalid bytes",
                file_path.display()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    let document = Document {
        path: file_path.to_path_buf(),
        content,
    };

    info!(
        "Loaded {} ({} bytes, {} characters)",
        file_path.display(),
        document.byte_len(),
        document.char_len()
    );

    Ok(document)
}
