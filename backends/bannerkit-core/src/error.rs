// this_file: backends/bannerkit-core/src/error.rs

//! Error types for bannerkit.
//!
//! Unmappable characters and truncated fonts are deliberately absent here:
//! the renderer resolves both by skipping, so they never surface as errors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bannerkit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Font file could not be opened or read
    #[error("Font file not found: {path}: {source}")]
    FontNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Glyph height / stride combination cannot describe a font file
    #[error("Invalid font layout: {reason}")]
    InvalidLayout { reason: String },

    /// Hand-built glyph does not match the font it is inserted into
    #[error("Invalid glyph for {ch:?}: expected {expected} rows, got {actual}")]
    InvalidGlyph {
        ch: char,
        expected: usize,
        actual: usize,
    },

    /// Input text rejected before rendering
    #[error("Invalid input text: {reason}")]
    InvalidText { reason: String },

    /// Banner identifier is not on the allow-list
    #[error("Unknown banner '{name}'. Available banners: {available:?}")]
    UnknownBanner {
        name: String,
        available: Vec<String>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn font_not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FontNotFound {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_text(reason: impl Into<String>) -> Self {
        Self::InvalidText {
            reason: reason.into(),
        }
    }
}

/// Specialized Result type for bannerkit operations.
pub type Result<T> = std::result::Result<T, Error>;
