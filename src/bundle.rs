//! Resource bundle handles and their variant implementations

use crate::error::{I18nError, I18nResult};
use crate::locale::LanguageTag;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use std::collections::HashMap;
use tracing::warn;

/// A translation table for one language.
///
/// The single capability a bundle handle provides: look up a key and return
/// the translated string, or `None` when the key has no entry. Missing
/// translations are never an error at this layer.
pub trait Bundle: Send + Sync {
    fn translate(&self, key: &str) -> Option<String>;
}

/// A bundle backed by a parsed Fluent resource.
///
/// `translate` resolves a message id and formats its pattern with no
/// arguments; argument interpolation and pluralization are out of scope
/// for this resolver.
pub struct MessageBundle {
    tag: LanguageTag,
    bundle: FluentBundle<FluentResource>,
}

impl MessageBundle {
    /// Parse Fluent source text into a bundle for `tag`.
    pub fn from_source(tag: LanguageTag, source: String) -> I18nResult<Self> {
        let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
            let errors: Vec<String> = errors.into_iter().map(|e| format!("{:?}", e)).collect();
            I18nError::FluentParse { errors }
        })?;

        let mut bundle = FluentBundle::new_concurrent(vec![tag.to_language_identifier()]);
        // Disable Unicode isolation marks for plain string output
        bundle.set_use_isolating(false);

        bundle.add_resource(resource).map_err(|errors| {
            let errors: Vec<String> = errors.into_iter().map(|e| format!("{:?}", e)).collect();
            I18nError::FluentParse { errors }
        })?;

        Ok(Self { tag, bundle })
    }

    /// The language this bundle translates into.
    pub fn tag(&self) -> &LanguageTag {
        &self.tag
    }
}

impl Bundle for MessageBundle {
    fn translate(&self, key: &str) -> Option<String> {
        let message = self.bundle.get_message(key)?;
        let pattern = message.value()?;

        let mut errors = Vec::new();
        let formatted = self.bundle.format_pattern(pattern, None, &mut errors);

        if !errors.is_empty() {
            warn!(
                key,
                tag = %self.tag,
                ?errors,
                "formatting errors while translating message"
            );
            return None;
        }

        Some(formatted.into_owned())
    }
}

impl std::fmt::Debug for MessageBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageBundle")
            .field("tag", &self.tag)
            .field("bundle", &"FluentBundle<FluentResource>")
            .finish()
    }
}

/// A plain key→string table, for tests and embedded catalogs.
#[derive(Debug, Default)]
pub struct InMemoryBundle {
    entries: HashMap<String, String>,
}

impl InMemoryBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bundle from key/translation pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Bundle for InMemoryBundle {
    fn translate(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// The empty bundle returned when no resources exist for a language.
///
/// Every translation is absent, so lookups fall through to the key-echo
/// policy in the manager.
#[derive(Debug, Default)]
pub struct NullBundle;

impl Bundle for NullBundle {
    fn translate(&self, _key: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_bundle_is_always_absent() {
        assert_eq!(NullBundle.translate("hello"), None);
        assert_eq!(NullBundle.translate(""), None);
    }

    #[test]
    fn test_in_memory_bundle_lookup() {
        let bundle = InMemoryBundle::from_pairs([("hello", "Hello"), ("bye", "Goodbye")]);
        assert_eq!(bundle.translate("hello").as_deref(), Some("Hello"));
        assert_eq!(bundle.translate("missing"), None);
    }

    #[test]
    fn test_message_bundle_translates_fluent_source() {
        let source = "hello = Bonjour\nfarewell = Au revoir\n".to_string();
        let bundle = MessageBundle::from_source(LanguageTag::new("fr"), source).unwrap();
        assert_eq!(bundle.translate("hello").as_deref(), Some("Bonjour"));
        assert_eq!(bundle.translate("missing"), None);
    }

    #[test]
    fn test_message_bundle_rejects_invalid_source() {
        let source = "= broken".to_string();
        assert!(MessageBundle::from_source(LanguageTag::new("en"), source).is_err());
    }
}
