// this_file: crates/bannerkit-fontdb/src/cache.rs

//! Caller-owned cache of parsed banner fonts.
//!
//! Banner files are static, so entries are loaded on first use and never
//! evicted. A cache belongs to whoever constructs it; nothing here is
//! process-global.
//!
//! Each banner gets its own load slot. Concurrent first uses of one banner
//! wait for a single parse; loads of different banners run side by side.
//! A failed load leaves the slot empty so a later call can retry.

use crate::registry::BannerRegistry;
use bannerkit_core::{load_font, Font, FontLayout, RenderedBlock, Renderer, Result};
use dashmap::DashMap;
use once_cell::sync::OnceCell;
use std::sync::Arc;

type FontSlot = Arc<OnceCell<Arc<Font>>>;

/// Parsed fonts keyed by banner identifier.
pub struct BannerCache {
    registry: BannerRegistry,
    layout: FontLayout,
    fonts: DashMap<String, FontSlot>,
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Fonts parsed so far.
    pub entries: usize,
    /// Banners the registry allows.
    pub capacity: usize,
}

impl BannerCache {
    pub fn new(registry: BannerRegistry, layout: FontLayout) -> Self {
        Self {
            registry,
            layout,
            fonts: DashMap::new(),
        }
    }

    pub fn registry(&self) -> &BannerRegistry {
        &self.registry
    }

    pub fn layout(&self) -> FontLayout {
        self.layout
    }

    /// Get the font for `name`, loading it on first use.
    pub fn get(&self, name: &str) -> Result<Arc<Font>> {
        let name = self.registry.canonical_name(name);
        if let Some(font) = self.fonts.get(name).and_then(|slot| slot.value().get().cloned()) {
            return Ok(font);
        }

        let path = self.registry.resolve(name)?;
        // Clone the slot out so the map shard is not locked during the load.
        let slot = Arc::clone(self.fonts.entry(name.to_string()).or_default().value());
        let font = slot.get_or_try_init(|| {
            let font = load_font(&path, self.layout)?;
            log::info!(
                "Cached banner '{}' from {} ({} glyphs)",
                name,
                path.display(),
                font.len()
            );
            Ok::<_, bannerkit_core::Error>(Arc::new(font))
        })?;
        Ok(Arc::clone(font))
    }

    /// Render with the named banner.
    pub fn try_render(&self, text: &str, name: &str) -> Result<RenderedBlock> {
        let font = self.get(name)?;
        Ok(Renderer::new(&font).render(text))
    }

    /// Render with the named banner, or return an empty string when the
    /// banner cannot be loaded.
    pub fn render(&self, text: &str, name: &str) -> String {
        match self.try_render(text, name) {
            Ok(block) => block.into_string(),
            Err(err) => {
                log::warn!("Cannot render with banner '{name}': {err}");
                String::new()
            }
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self
                .fonts
                .iter()
                .filter(|slot| slot.value().get().is_some())
                .count(),
            capacity: self.registry.names().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bannerkit_core::Error;
    use std::fs;

    /// Banner with height 1 / stride 2 covering ' ', '!' and '"'.
    const TINY_BANNER: &str = "\n_\n\n!\n\n\"\n";

    fn tiny_layout() -> FontLayout {
        FontLayout::new(1, 2).unwrap()
    }

    fn cache_with(files: &[(&str, &str)]) -> (tempfile::TempDir, BannerCache) {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = BannerRegistry::new(dir.path().to_str().unwrap());
        for (name, contents) in files {
            fs::write(dir.path().join(format!("{name}.txt")), contents).unwrap();
            registry = registry.with_banner(*name);
        }
        (dir, BannerCache::new(registry, tiny_layout()))
    }

    #[test]
    fn test_get_loads_once() {
        let (_dir, cache) = cache_with(&[("tiny", TINY_BANNER)]);
        assert_eq!(cache.stats().entries, 0);

        let first = cache.get("tiny").unwrap();
        let second = cache.get("tiny").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 3);
        assert_eq!(cache.stats().entries, 1);
    }

    #[test]
    fn test_render_with_banner() {
        let (_dir, cache) = cache_with(&[("tiny", TINY_BANNER)]);
        assert_eq!(cache.render("! !", "tiny"), "!_!");
        assert_eq!(cache.render("!\n\"", "tiny"), "!\n\n\"");
    }

    #[test]
    fn test_render_missing_file_is_empty() {
        // "standard" is allowed by default but no file exists.
        let (_dir, cache) = cache_with(&[]);
        assert_eq!(cache.render("Hello", "standard"), "");
        assert_eq!(cache.render("Hello", ""), "");
        assert!(matches!(
            cache.try_render("Hello", "standard"),
            Err(Error::FontNotFound { .. })
        ));
        assert_eq!(cache.stats().entries, 0);
    }

    #[test]
    fn test_render_unknown_banner() {
        let (_dir, cache) = cache_with(&[("tiny", TINY_BANNER)]);
        assert_eq!(cache.render("!", "gothic"), "");
        assert!(matches!(
            cache.try_render("!", "gothic"),
            Err(Error::UnknownBanner { .. })
        ));
    }

    #[test]
    fn test_failed_load_is_retried() {
        let (dir, cache) = cache_with(&[]);
        assert_eq!(cache.render("!", "standard"), "");
        assert_eq!(cache.stats().entries, 0);

        fs::write(dir.path().join("standard.txt"), TINY_BANNER).unwrap();
        assert_eq!(cache.render("!", "standard"), "!");
        assert_eq!(cache.stats().entries, 1);
    }

    #[test]
    fn test_concurrent_loads_of_different_banners() {
        let (_dir, cache) = cache_with(&[("tiny", TINY_BANNER), ("bangs", "\n.\n\n*\n")]);
        let cache = Arc::new(cache);
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                let name = if i % 2 == 0 { "tiny" } else { "bangs" };
                std::thread::spawn(move || (name, cache.get(name).unwrap()))
            })
            .collect();
        let fonts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        for (name, font) in &fonts {
            assert!(Arc::ptr_eq(font, &cache.get(name).unwrap()));
        }
        assert_eq!(cache.stats().entries, 2);
        assert_eq!(cache.render("! !", "bangs"), "*.*");
    }

    #[test]
    fn test_concurrent_access_shares_one_font() {
        let (_dir, cache) = cache_with(&[("tiny", TINY_BANNER)]);
        let cache = Arc::new(cache);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.render("!!", "tiny"))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "!!");
        }
        assert_eq!(cache.stats().entries, 1);
    }
}
