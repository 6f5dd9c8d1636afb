// this_file: crates/bannerkit-fontdb/src/lib.rs

//! Banner discovery, allow-listing and caching for bannerkit.

pub mod cache;
pub mod registry;

pub use cache::{BannerCache, CacheStats};
pub use registry::{BannerRegistry, BANNER_EXTENSION, DEFAULT_BANNER, DEFAULT_BANNERS};
