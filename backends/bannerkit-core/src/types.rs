// this_file: backends/bannerkit-core/src/types.rs

//! Core types used throughout bannerkit.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// First character a banner font defines (space).
pub const FIRST_CHAR: char = ' ';
/// Last character a banner font defines (tilde).
pub const LAST_CHAR: char = '~';
/// Number of characters in a complete banner font.
pub const GLYPH_COUNT: usize = (LAST_CHAR as usize) - (FIRST_CHAR as usize) + 1;

/// Whether `ch` lies in the printable ASCII range a banner font can cover.
pub fn is_supported(ch: char) -> bool {
    (FIRST_CHAR..=LAST_CHAR).contains(&ch)
}

/// Geometry of a banner font file.
///
/// `height` rows of glyph content per character, `stride` lines consumed per
/// character block. Any lines between `height` and `stride` are separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LayoutSpec", into = "LayoutSpec")]
pub struct FontLayout {
    height: usize,
    stride: usize,
}

impl FontLayout {
    /// 8 content rows followed by one blank separator line.
    pub const SEPARATED: FontLayout = FontLayout {
        height: 8,
        stride: 9,
    };

    /// 8 content rows back to back.
    pub const PACKED: FontLayout = FontLayout {
        height: 8,
        stride: 8,
    };

    pub fn new(height: usize, stride: usize) -> Result<Self> {
        if height == 0 {
            return Err(Error::InvalidLayout {
                reason: "glyph height must be at least 1".to_string(),
            });
        }
        if stride < height {
            return Err(Error::InvalidLayout {
                reason: format!("stride {stride} is smaller than glyph height {height}"),
            });
        }
        Ok(Self { height, stride })
    }

    /// Number of content rows per glyph.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of file lines per character block.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of separator lines trailing each block.
    pub fn separator_lines(&self) -> usize {
        self.stride - self.height
    }
}

impl Default for FontLayout {
    fn default() -> Self {
        Self::SEPARATED
    }
}

impl fmt::Display for FontLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "height={} stride={}", self.height, self.stride)
    }
}

/// Unvalidated serialized form of [`FontLayout`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub height: usize,
    pub stride: usize,
}

impl TryFrom<LayoutSpec> for FontLayout {
    type Error = Error;

    fn try_from(spec: LayoutSpec) -> Result<Self> {
        FontLayout::new(spec.height, spec.stride)
    }
}

impl From<FontLayout> for LayoutSpec {
    fn from(layout: FontLayout) -> Self {
        Self {
            height: layout.height,
            stride: layout.stride,
        }
    }
}

/// One character's block of text rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    rows: Vec<String>,
}

impl Glyph {
    pub fn new<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row, in characters.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Mapping from printable ASCII characters to their glyphs.
///
/// Every stored glyph has exactly `layout.height()` rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    layout: FontLayout,
    glyphs: HashMap<char, Glyph>,
}

impl Font {
    /// Create a font with no glyphs.
    pub fn empty(layout: FontLayout) -> Self {
        Self {
            layout,
            glyphs: HashMap::with_capacity(GLYPH_COUNT),
        }
    }

    /// Add or replace the glyph for `ch`.
    pub fn insert(&mut self, ch: char, glyph: Glyph) -> Result<()> {
        if !is_supported(ch) || glyph.height() != self.layout.height {
            return Err(Error::InvalidGlyph {
                ch,
                expected: self.layout.height,
                actual: glyph.height(),
            });
        }
        self.glyphs.insert(ch, glyph);
        Ok(())
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn layout(&self) -> FontLayout {
        self.layout
    }

    /// Rows per glyph.
    pub fn height(&self) -> usize {
        self.layout.height
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Covered characters in ascending order.
    pub fn chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.glyphs.keys().copied().collect();
        chars.sort_unstable();
        chars
    }
}

/// Output of one render call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedBlock {
    lines: Vec<String>,
}

impl RenderedBlock {
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// True when the block renders to the empty string.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(String::is_empty) && self.lines.len() <= 1
    }

    pub fn into_string(self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for RenderedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

impl From<RenderedBlock> for String {
    fn from(block: RenderedBlock) -> Self {
        block.into_string()
    }
}
