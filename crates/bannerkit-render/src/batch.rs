// this_file: crates/bannerkit-render/src/batch.rs

//! Batch rendering of many texts in parallel.

use bannerkit_core::{input, Result};
use bannerkit_fontdb::BannerCache;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Item to be rendered in batch (one JSONL input line).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItem {
    /// Identifier echoed back in the result
    pub id: String,
    /// Text to render
    pub text: String,
    /// Banner identifier; empty selects the default banner
    #[serde(default)]
    pub banner: String,
}

/// Result from batch rendering (one JSONL output line).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    /// Item ID (matches input)
    pub id: String,
    /// Status: "success" or "error"
    pub status: String,
    /// Rendered art (only present on success)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub art: Option<String>,
    /// Error message (only present on error)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Timing information
    pub timing: TimingInfo,
}

/// Timing statistics for an item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimingInfo {
    /// Total time for the item (milliseconds)
    pub total_ms: f64,
}

impl BatchResult {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Batch renderer sharing one banner cache across worker threads.
pub struct BatchRenderer {
    cache: Arc<BannerCache>,
}

impl BatchRenderer {
    pub fn new(cache: Arc<BannerCache>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &BannerCache {
        &self.cache
    }

    /// Render a batch of items in parallel. Results keep the input order.
    pub fn render_batch(&self, items: Vec<BatchItem>) -> Vec<BatchResult> {
        items
            .into_par_iter()
            .map(|item| self.render_item(&item))
            .collect()
    }

    /// Render a batch with a specific number of threads.
    pub fn render_batch_with_threads(
        &self,
        items: Vec<BatchItem>,
        num_threads: usize,
    ) -> Result<Vec<BatchResult>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(std::io::Error::other)?;

        Ok(pool.install(|| self.render_batch(items)))
    }

    /// Render a single item, capturing failures in the result.
    pub fn render_item(&self, item: &BatchItem) -> BatchResult {
        let start = Instant::now();
        let result = input::validate_text(&item.text)
            .and_then(|()| self.cache.try_render(&item.text, &item.banner));
        let timing = TimingInfo {
            total_ms: start.elapsed().as_secs_f64() * 1000.0,
        };

        match result {
            Ok(block) => BatchResult {
                id: item.id.clone(),
                status: "success".to_string(),
                art: Some(block.into_string()),
                error: None,
                timing,
            },
            Err(e) => {
                log::debug!("Item {} failed: {}", item.id, e);
                BatchResult {
                    id: item.id.clone(),
                    status: "error".to_string(),
                    art: None,
                    error: Some(e.to_string()),
                    timing,
                }
            }
        }
    }
}
