// this_file: backends/bannerkit-core/src/loader.rs

//! Banner font loading.
//!
//! A banner file is plain text: one leading blank line, then one block per
//! character from space (0x20) to tilde (0x7E). Each block is
//! `layout.height()` glyph rows followed by `layout.separator_lines()`
//! separator lines. Parsing stops at the first character whose rows run past
//! the end of the file, so short files produce partial fonts. A final
//! newline ends the last line; it does not start an empty one.

use crate::error::{Error, Result};
use crate::types::{Font, FontLayout, Glyph, FIRST_CHAR, GLYPH_COUNT};
use crate::utils::normalize_newlines;
use std::path::Path;

impl Font {
    /// Parse banner font source text. Never fails; see the module docs.
    pub fn parse(source: &str, layout: FontLayout) -> Font {
        let normalized = normalize_newlines(source);
        let body = normalized.strip_suffix('\n').unwrap_or(&normalized);
        let mut lines = body.split('\n');

        match lines.next() {
            Some(first) if !first.trim().is_empty() => {
                log::warn!("Banner font does not start with a blank line; discarding {first:?}");
            }
            _ => {}
        }

        let lines: Vec<&str> = lines.collect();
        let height = layout.height();
        let stride = layout.stride();
        let mut font = Font::empty(layout);

        for index in 0..GLYPH_COUNT {
            let start = index * stride;
            let Some(rows) = lines.get(start..start + height) else {
                log::debug!(
                    "Banner font ends after {index} glyphs ({} lines, {layout})",
                    lines.len()
                );
                break;
            };
            let ch = char::from(FIRST_CHAR as u8 + index as u8);
            // Rows always match the layout height and `ch` is in range.
            if let Err(err) = font.insert(ch, Glyph::new(rows.iter().copied())) {
                log::error!("Dropping glyph {ch:?}: {err}");
            }
        }

        font
    }
}

/// Read and parse a banner font file.
///
/// The file is read in full and closed before parsing starts.
pub fn load_font(path: impl AsRef<Path>, layout: FontLayout) -> Result<Font> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| Error::font_not_found(path, e))?;
    let source = String::from_utf8_lossy(&bytes);
    let font = Font::parse(&source, layout);
    log::debug!(
        "Loaded banner font {} ({} glyphs, {layout})",
        path.display(),
        font.len()
    );
    Ok(font)
}
