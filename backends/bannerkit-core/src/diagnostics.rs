// this_file: backends/bannerkit-core/src/diagnostics.rs

//! Rendering diagnostics used for structured debug logging.

use crate::types::FontLayout;
use log::{debug, log_enabled, Level};

/// Counters collected during a single render call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderDiagnostics {
    pub input_lines: usize,
    pub blank_lines: usize,
    pub mapped_chars: usize,
    pub skipped_chars: usize,
    pub output_lines: usize,
}

impl RenderDiagnostics {
    /// Emit the counters at debug level when logging is enabled.
    pub fn log(&self, layout: FontLayout) {
        if log_enabled!(Level::Debug) {
            debug!(
                target: "bannerkit::render",
                "lines={lines} blank={blank} mapped={mapped} skipped={skipped} output_lines={output} layout=({layout})",
                lines = self.input_lines,
                blank = self.blank_lines,
                mapped = self.mapped_chars,
                skipped = self.skipped_chars,
                output = self.output_lines,
            );
        }
    }
}
