// this_file: backends/bannerkit-core/src/render.rs

//! Text to banner art rendering.
//!
//! Every non-blank input line becomes `height` rows built by concatenating
//! glyph rows left to right. Characters the font does not cover are skipped
//! without leaving a gap. A blank input line becomes one empty line.
//!
//! A glyph group that is followed by another group gets one empty separator
//! line after it. When the text ends with a blank line right after a glyph
//! group, that separator stands for the blank line, so the block never ends
//! with a separator of its own.
//!
//! Only one trailing blank line is absorbed this way. `"A\n"` renders to
//! `H + 1` lines but `"A\n\n"` to `H + 3`, while leading blank lines always
//! add one line each (`"\nA"` is `H + 1`, `"\n\nA"` is `H + 2`).

use crate::diagnostics::RenderDiagnostics;
use crate::types::{Font, Glyph, RenderedBlock};
use crate::utils::split_lines;

/// Renders text with a borrowed font.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'f> {
    font: &'f Font,
}

impl<'f> Renderer<'f> {
    pub fn new(font: &'f Font) -> Self {
        Self { font }
    }

    pub fn font(&self) -> &'f Font {
        self.font
    }

    pub fn render(&self, text: &str) -> RenderedBlock {
        let (block, diagnostics) = self.render_with_diagnostics(text);
        diagnostics.log(self.font.layout());
        block
    }

    /// Render and return the counters collected along the way.
    pub fn render_with_diagnostics(&self, text: &str) -> (RenderedBlock, RenderDiagnostics) {
        let input = split_lines(text);
        let mut diagnostics = RenderDiagnostics {
            input_lines: input.len(),
            ..RenderDiagnostics::default()
        };
        let mut lines = Vec::with_capacity(input.len() * (self.font.height() + 1));
        let mut after_glyphs = false;

        for (index, line) in input.iter().enumerate() {
            let is_last = index + 1 == input.len();

            if line.is_empty() {
                diagnostics.blank_lines += 1;
                if !(is_last && after_glyphs) {
                    lines.push(String::new());
                }
                after_glyphs = false;
                continue;
            }

            let glyphs = self.map_line(line, &mut diagnostics);
            lines.extend(self.compose_rows(&glyphs));
            if !is_last {
                lines.push(String::new());
            }
            after_glyphs = true;
        }

        diagnostics.output_lines = lines.len();
        (RenderedBlock::from_lines(lines), diagnostics)
    }

    fn map_line(&self, line: &str, diagnostics: &mut RenderDiagnostics) -> Vec<&'f Glyph> {
        let mut glyphs = Vec::with_capacity(line.len());
        for ch in line.chars() {
            match self.font.glyph(ch) {
                Some(glyph) => {
                    diagnostics.mapped_chars += 1;
                    glyphs.push(glyph);
                }
                None => diagnostics.skipped_chars += 1,
            }
        }
        glyphs
    }

    fn compose_rows(&self, glyphs: &[&Glyph]) -> Vec<String> {
        (0..self.font.height())
            .map(|row| {
                glyphs
                    .iter()
                    .filter_map(|glyph| glyph.row(row))
                    .collect::<String>()
            })
            .collect()
    }
}

/// Render `text` with `font`.
pub fn render(text: &str, font: &Font) -> RenderedBlock {
    Renderer::new(font).render(text)
}
