// this_file: src/lib.rs

//! bannerkit: render text as block-letter ASCII art with banner fonts.
//!
//! ## Architecture
//!
//! - **bannerkit-core**: banner font parsing, rendering, input helpers
//! - **bannerkit-fontdb**: banner allow-list and font cache
//! - **bannerkit-render**: parallel batch rendering
//!
//! ## Example
//!
//! ```rust,no_run
//! use bannerkit::{BannerCache, BannerRegistry, FontLayout};
//!
//! // One-shot: parse the font and render, empty string if it cannot be read.
//! let art = bannerkit::render("Hello", "banners/standard.txt");
//!
//! // Reusing parsed fonts across renders.
//! let cache = BannerCache::new(BannerRegistry::new("banners"), FontLayout::default());
//! let art = cache.render("Hello\nWorld", "shadow");
//! ```

pub use bannerkit_core::{
    input, load_font, Error, Font, FontLayout, Glyph, RenderedBlock, Renderer, Result,
    GLYPH_COUNT,
};
pub use bannerkit_fontdb::{BannerCache, BannerRegistry, CacheStats, DEFAULT_BANNER};
pub use bannerkit_render::{BatchItem, BatchRenderer, BatchResult};

use std::path::Path;

/// Render `text` with the banner font at `font_path` using the default layout.
///
/// Returns an empty string when the font cannot be loaded.
pub fn render(text: &str, font_path: impl AsRef<Path>) -> String {
    render_with_layout(text, font_path, FontLayout::default())
}

/// Render `text` with the banner font at `font_path` parsed with `layout`.
///
/// Returns an empty string when the font cannot be loaded.
pub fn render_with_layout(text: &str, font_path: impl AsRef<Path>, layout: FontLayout) -> String {
    match load_font(font_path.as_ref(), layout) {
        Ok(font) => Renderer::new(&font).render(text).into_string(),
        Err(err) => {
            log::warn!("{err}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Layout 2/3 font where every printable character is "#" over ".".
    fn fixture_font() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut source = String::from("\n");
        for _ in ' '..='~' {
            source.push_str("#\n.\n\n");
        }
        file.write_all(source.as_bytes()).unwrap();
        file
    }

    fn layout() -> FontLayout {
        FontLayout::new(2, 3).unwrap()
    }

    #[test]
    fn test_render_missing_font_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        for text in ["", "Hello", "A\nB", "\n\n"] {
            assert_eq!(render(text, &missing), "");
        }
    }

    #[test]
    fn test_render_with_layout() {
        let font = fixture_font();
        assert_eq!(render_with_layout("AB", font.path(), layout()), "##\n..");
        assert_eq!(render_with_layout("A\nB", font.path(), layout()), "#\n.\n\n#\n.");
        assert_eq!(render_with_layout("", font.path(), layout()), "");
    }

    #[test]
    fn test_render_is_deterministic() {
        let font = fixture_font();
        let text = "Hello\r\n\nWorld!";
        assert_eq!(
            render_with_layout(text, font.path(), layout()),
            render_with_layout(text, font.path(), layout())
        );
    }

    #[test]
    fn test_group_count_matches_input_lines() {
        let font = fixture_font();
        let text = "A\n\nBC\n\n\nD";
        let out = render_with_layout(text, font.path(), layout());
        // Each glyph group is "#"-rows over "."-rows; blank inputs are empty lines.
        let glyph_groups = out.lines().filter(|line| line.starts_with('#')).count();
        let input_lines = text.split('\n').count();
        let blank_inputs = text.split('\n').filter(|l| l.is_empty()).count();
        assert_eq!(glyph_groups + blank_inputs, input_lines);
    }

    #[test]
    fn test_non_ascii_text_is_skipped() {
        let font = fixture_font();
        assert_eq!(render_with_layout("é", font.path(), layout()), "\n");
        assert_eq!(render_with_layout("éA", font.path(), layout()), "#\n.");
    }
}
