//! The language manager: current-language state, bundle resolution, lookup

use crate::bundle::{Bundle, NullBundle};
use crate::locale::LanguageTag;
use crate::preferences::PreferenceStore;
use crate::resource::ResourceStore;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Resolves lookup keys to translated strings for the currently selected
/// language.
///
/// The manager owns the process-wide current language and a process-lifetime
/// cache of resolved bundles. It is an explicitly constructed service:
/// callers hold a reference (typically an `Arc`) instead of reaching for a
/// global singleton, so each test can build its own instance over an
/// [`InMemoryStore`](crate::InMemoryStore).
///
/// Lookup never fails. A language with no bundle falls back to the base
/// language's bundle, and a key with no translation anywhere is echoed back
/// unchanged, so missing translations stay visible in rendered output.
pub struct LanguageManager {
    /// Fallback language whose bundle serves tags the store has no bundle for
    base_tag: LanguageTag,
    /// The currently selected language
    current: RwLock<LanguageTag>,
    /// Resolved bundles by requested tag; never evicted
    cache: RwLock<HashMap<LanguageTag, Arc<dyn Bundle>>>,
    store: Arc<dyn ResourceStore>,
    preferences: Option<Box<dyn PreferenceStore>>,
    /// Shared empty bundle for languages that resolve to nothing
    null_bundle: Arc<NullBundle>,
}

impl LanguageManager {
    /// Create a manager seeded with the host system's preferred language.
    pub fn new(store: Arc<dyn ResourceStore>, base_tag: LanguageTag) -> Self {
        let initial = LanguageTag::system_default();
        Self::with_language(store, base_tag, initial)
    }

    /// Create a manager with an explicit initial language.
    pub fn with_language(
        store: Arc<dyn ResourceStore>,
        base_tag: LanguageTag,
        initial: LanguageTag,
    ) -> Self {
        info!(%initial, base = %base_tag, "language manager initialized");
        Self {
            base_tag,
            current: RwLock::new(initial),
            cache: RwLock::new(HashMap::new()),
            store,
            preferences: None,
            null_bundle: Arc::new(NullBundle),
        }
    }

    /// Create a manager that persists the chosen language.
    ///
    /// The initial language comes from the saved preference when one exists,
    /// otherwise from the host system default; every later switch is written
    /// back through the preference store.
    pub fn with_preferences(
        store: Arc<dyn ResourceStore>,
        base_tag: LanguageTag,
        preferences: Box<dyn PreferenceStore>,
    ) -> Self {
        let initial = preferences
            .load_saved_language()
            .unwrap_or_else(LanguageTag::system_default);

        let mut manager = Self::with_language(store, base_tag, initial);
        manager.preferences = Some(preferences);
        manager
    }

    /// The currently selected language.
    pub fn current_language(&self) -> LanguageTag {
        self.current.read().clone()
    }

    /// The configured base/default language.
    pub fn base_language(&self) -> &LanguageTag {
        &self.base_tag
    }

    /// Select a new current language.
    ///
    /// Any tag value is accepted; a tag with no bundle simply resolves
    /// through the base-language fallback on the next lookup. When a
    /// preference store is attached the choice is persisted, and a persist
    /// failure is logged without affecting the switch.
    pub fn set_current_language(&self, tag: LanguageTag) {
        info!(%tag, "switching current language");

        if let Some(preferences) = &self.preferences {
            if let Err(e) = preferences.save_language(&tag) {
                warn!(%tag, error = %e, "failed to persist language preference");
            }
        }

        *self.current.write() = tag;
    }

    /// Resolve the bundle for a language.
    ///
    /// Resolution order: cache, exact tag in the store, base tag in the
    /// store, empty bundle. Store-backed resolutions are memoized under the
    /// requested tag for the lifetime of the manager; the empty bundle is
    /// not cached. No other substitution (such as nearest-language guessing)
    /// is performed.
    pub fn resolve_bundle(&self, tag: &LanguageTag) -> Arc<dyn Bundle> {
        if let Some(bundle) = self.cache.read().get(tag) {
            return bundle.clone();
        }

        let resolved = self.store.bundle_for(tag).or_else(|| {
            if tag == &self.base_tag {
                return None;
            }
            warn!(%tag, base = %self.base_tag, "no bundle for language, falling back to base");
            self.store.bundle_for(&self.base_tag)
        });

        match resolved {
            Some(bundle) => {
                debug!(%tag, "caching resolved bundle");
                self.cache.write().insert(tag.clone(), bundle.clone());
                bundle
            }
            None => {
                warn!(%tag, "no bundle for language or base, using empty bundle");
                self.null_bundle.clone() as Arc<dyn Bundle>
            }
        }
    }

    /// Look up the translation for a key in the current language.
    ///
    /// Returns the key itself when no translation exists; never fails and
    /// never returns an empty stand-in for a present key.
    pub fn lookup(&self, key: &str) -> String {
        let tag = self.current_language();
        let bundle = self.resolve_bundle(&tag);

        match bundle.translate(key) {
            Some(translation) => translation,
            None => {
                debug!(key, %tag, "no translation for key, echoing key");
                key.to_string()
            }
        }
    }

    /// Languages with a memoized bundle resolution.
    pub fn cached_languages(&self) -> Vec<LanguageTag> {
        self.cache.read().keys().cloned().collect()
    }
}

impl std::fmt::Debug for LanguageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageManager")
            .field("base_tag", &self.base_tag)
            .field("current", &self.current_language())
            .field("cached", &self.cached_languages())
            .finish_non_exhaustive()
    }
}
