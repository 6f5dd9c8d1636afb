// this_file: crates/bannerkit-render/src/lib.rs

//! Parallel batch rendering for bannerkit.

pub mod batch;

pub use batch::{BatchItem, BatchRenderer, BatchResult, TimingInfo};
