// this_file: backends/bannerkit-core/src/lib.rs

//! Core types, banner font loading and rendering for bannerkit.

pub mod diagnostics;
pub mod error;
pub mod input;
pub mod loader;
pub mod render;
pub mod types;
pub mod utils;

pub use diagnostics::RenderDiagnostics;
pub use error::{Error, Result};
pub use loader::load_font;
pub use render::{render, Renderer};
pub use types::{
    is_supported, Font, FontLayout, Glyph, RenderedBlock, FIRST_CHAR, GLYPH_COUNT, LAST_CHAR,
};
