// this_file: crates/bannerkit-fontdb/src/registry.rs

//! Banner identifiers and their files.
//!
//! Front-ends never hand user-supplied paths to the loader. They pass an
//! identifier, which must be on the registry's allow-list and maps to
//! `<dir>/<identifier>.txt`.

use bannerkit_core::{Error, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Banners shipped with the classic deployment.
pub const DEFAULT_BANNERS: [&str; 3] = ["standard", "shadow", "thinkertoy"];
/// Banner used when the caller does not pick one.
pub const DEFAULT_BANNER: &str = "standard";
/// File extension of banner font files.
pub const BANNER_EXTENSION: &str = "txt";

/// Allow-list of banner identifiers rooted at one directory.
#[derive(Debug, Clone)]
pub struct BannerRegistry {
    dir: PathBuf,
    allowed: BTreeSet<String>,
}

impl BannerRegistry {
    /// Registry allowing [`DEFAULT_BANNERS`] under `dir` (`~` is expanded).
    pub fn new(dir: impl AsRef<str>) -> Self {
        Self {
            dir: expand_dir(dir.as_ref()),
            allowed: DEFAULT_BANNERS.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Registry allowing every `*.txt` file directly inside `dir`.
    pub fn discover(dir: impl AsRef<str>) -> Result<Self> {
        let dir = expand_dir(dir.as_ref());
        let mut allowed = BTreeSet::new();

        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(std::io::Error::from)?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(BANNER_EXTENSION)
            {
                continue;
            }
            match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(name) if is_valid_name(name) => {
                    allowed.insert(name.to_string());
                }
                _ => log::debug!("Skipping banner file with unusable name: {}", path.display()),
            }
        }

        log::debug!("Discovered {} banners in {}", allowed.len(), dir.display());
        Ok(Self { dir, allowed })
    }

    /// Add `name` to the allow-list. Names outside `[A-Za-z0-9_-]` are ignored.
    pub fn with_banner(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if is_valid_name(&name) {
            self.allowed.insert(name);
        } else {
            log::warn!("Ignoring invalid banner name {name:?}");
        }
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Allowed identifiers in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.allowed.iter().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.allowed.contains(name)
    }

    /// The identifier `name` refers to; empty means [`DEFAULT_BANNER`].
    pub fn canonical_name<'a>(&self, name: &'a str) -> &'a str {
        if name.is_empty() {
            DEFAULT_BANNER
        } else {
            name
        }
    }

    /// Map an identifier to its font file path.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let name = self.canonical_name(name);
        if !is_valid_name(name) || !self.allowed.contains(name) {
            return Err(Error::UnknownBanner {
                name: name.to_string(),
                available: self.allowed.iter().cloned().collect(),
            });
        }
        Ok(self.dir.join(format!("{name}.{BANNER_EXTENSION}")))
    }
}

fn expand_dir(dir: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(dir).into_owned())
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_allow_list() {
        let registry = BannerRegistry::new("banners");
        assert_eq!(registry.names(), vec!["shadow", "standard", "thinkertoy"]);
        assert_eq!(
            registry.resolve("shadow").unwrap(),
            PathBuf::from("banners/shadow.txt")
        );
    }

    #[test]
    fn test_empty_name_resolves_to_default() {
        let registry = BannerRegistry::new("banners");
        assert_eq!(
            registry.resolve("").unwrap(),
            PathBuf::from("banners/standard.txt")
        );
    }

    #[test]
    fn test_unknown_and_traversal_names_rejected() {
        let registry = BannerRegistry::new("banners");
        for name in ["invalid", "../standard", "standard.txt", "std/../x"] {
            let err = registry.resolve(name).unwrap_err();
            assert!(matches!(err, Error::UnknownBanner { .. }), "{name}");
        }
    }

    #[test]
    fn test_with_banner() {
        let registry = BannerRegistry::new("banners")
            .with_banner("block")
            .with_banner("../etc");
        assert!(registry.contains("block"));
        assert!(!registry.contains("../etc"));
        assert_eq!(registry.names().len(), 4);
    }

    #[test]
    fn test_tilde_is_expanded() {
        let registry = BannerRegistry::new("~/banners");
        assert!(!registry.dir().to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_discover() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("standard.txt"), "\n").unwrap();
        fs::write(dir.path().join("block_2.txt"), "\n").unwrap();
        fs::write(dir.path().join("notes.md"), "").unwrap();
        fs::write(dir.path().join("bad name.txt"), "\n").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.txt"), "\n").unwrap();

        let registry = BannerRegistry::discover(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(registry.names(), vec!["block_2", "standard"]);
        assert_eq!(
            registry.resolve("block_2").unwrap(),
            dir.path().join("block_2.txt")
        );
    }

    #[test]
    fn test_discover_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(BannerRegistry::discover(missing.to_str().unwrap()).is_err());
    }
}
