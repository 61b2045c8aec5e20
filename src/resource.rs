//! Resource store collaborators
//!
//! A [`ResourceStore`] is an opaque, read-only catalog of translation
//! bundles keyed by language tag. Load failures are reported as "no bundle
//! for tag", never as a fault visible to the manager.

use crate::bundle::{Bundle, InMemoryBundle, MessageBundle};
use crate::error::{I18nError, I18nResult};
use crate::locale::LanguageTag;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// A read-only catalog of resource bundles keyed by language tag.
pub trait ResourceStore: Send + Sync {
    /// Whether a bundle exists for exactly this tag.
    fn has_bundle_for(&self, tag: &LanguageTag) -> bool;

    /// Obtain the bundle for exactly this tag, or `None` if it does not
    /// exist or cannot be loaded.
    fn bundle_for(&self, tag: &LanguageTag) -> Option<Arc<dyn Bundle>>;
}

/// A store backed by a directory of per-language Fluent files.
///
/// Layout: `<base_dir>/<tag>/main.ftl`, with the tag lowercased for the
/// directory name. Only the exact tag's directory is consulted; partial-tag
/// negotiation (e.g. trying "fr" for "fr-CA") is deliberately absent, the
/// manager's base-language fallback is the only substitution.
#[derive(Debug)]
pub struct FluentDirStore {
    base_dir: PathBuf,
}

impl FluentDirStore {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the resource file for a tag.
    fn resource_path(&self, tag: &LanguageTag) -> PathBuf {
        self.base_dir.join(tag.normalized()).join("main.ftl")
    }

    /// Get the base directory for resources.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn load_bundle(&self, tag: &LanguageTag) -> I18nResult<MessageBundle> {
        let path = self.resource_path(tag);
        debug!(?path, %tag, "loading resource file");

        let source = fs::read_to_string(&path).map_err(|_| I18nError::ResourceLoad {
            path: path.to_string_lossy().to_string(),
        })?;

        MessageBundle::from_source(tag.clone(), source)
    }
}

impl ResourceStore for FluentDirStore {
    fn has_bundle_for(&self, tag: &LanguageTag) -> bool {
        self.resource_path(tag).exists()
    }

    fn bundle_for(&self, tag: &LanguageTag) -> Option<Arc<dyn Bundle>> {
        match self.load_bundle(tag) {
            Ok(bundle) => Some(Arc::new(bundle)),
            Err(e) => {
                warn!(%tag, error = %e, "no usable resource bundle for language");
                None
            }
        }
    }
}

/// A store over in-memory tables, the mock collaborator for tests and for
/// applications that embed their catalogs.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    bundles: HashMap<LanguageTag, Arc<InMemoryBundle>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a language's translation table, replacing any previous one.
    pub fn insert<K, V>(&mut self, tag: LanguageTag, pairs: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.bundles
            .insert(tag, Arc::new(InMemoryBundle::from_pairs(pairs)));
    }
}

impl ResourceStore for InMemoryStore {
    fn has_bundle_for(&self, tag: &LanguageTag) -> bool {
        self.bundles.contains_key(tag)
    }

    fn bundle_for(&self, tag: &LanguageTag) -> Option<Arc<dyn Bundle>> {
        self.bundles
            .get(tag)
            .map(|bundle| bundle.clone() as Arc<dyn Bundle>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fluent_dir_store_missing_language() {
        let temp_dir = TempDir::new().unwrap();
        let store = FluentDirStore::new(temp_dir.path());
        let tag = LanguageTag::new("zz");
        assert!(!store.has_bundle_for(&tag));
        assert!(store.bundle_for(&tag).is_none());
    }

    #[test]
    fn test_fluent_dir_store_loads_bundle() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("fr")).unwrap();
        fs::write(temp_dir.path().join("fr/main.ftl"), "hello = Bonjour\n").unwrap();

        let store = FluentDirStore::new(temp_dir.path());
        let tag = LanguageTag::new("fr");
        assert!(store.has_bundle_for(&tag));

        let bundle = store.bundle_for(&tag).unwrap();
        assert_eq!(bundle.translate("hello").as_deref(), Some("Bonjour"));
    }

    #[test]
    fn test_fluent_dir_store_normalizes_tag_case() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("fr-ca")).unwrap();
        fs::write(temp_dir.path().join("fr-ca/main.ftl"), "hello = Allo\n").unwrap();

        let store = FluentDirStore::new(temp_dir.path());
        assert!(store.has_bundle_for(&LanguageTag::new("fr-CA")));
    }

    #[test]
    fn test_fluent_dir_store_unparseable_file_is_no_bundle() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("en")).unwrap();
        fs::write(temp_dir.path().join("en/main.ftl"), "= not fluent").unwrap();

        let store = FluentDirStore::new(temp_dir.path());
        assert!(store.bundle_for(&LanguageTag::new("en")).is_none());
    }

    #[test]
    fn test_in_memory_store() {
        let mut store = InMemoryStore::new();
        store.insert(LanguageTag::new("en"), [("hello", "Hello")]);

        assert!(store.has_bundle_for(&LanguageTag::new("en")));
        assert!(!store.has_bundle_for(&LanguageTag::new("fr")));

        let bundle = store.bundle_for(&LanguageTag::new("en")).unwrap();
        assert_eq!(bundle.translate("hello").as_deref(), Some("Hello"));
    }
}
