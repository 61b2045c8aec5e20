//! Language tag value type and system locale detection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Hard-coded fallback used when no language can be determined at all.
const FALLBACK_TAG: &str = "en";

/// An opaque identifier for a language/region variant (e.g. "en", "fr-CA").
///
/// Any non-empty value is accepted; tags are not validated against BCP-47.
/// Equality and hashing are ASCII case-insensitive, so `"en-US"` and
/// `"en-us"` name the same language, while `Display` preserves the spelling
/// the tag was created with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Create a tag from any string value.
    ///
    /// An empty input is replaced by the hard-coded `"en"` fallback so the
    /// current-language invariant (always non-empty) holds everywhere.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if tag.is_empty() {
            Self(FALLBACK_TAG.to_string())
        } else {
            Self(tag)
        }
    }

    /// The tag as originally spelled.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form, used for resource directory names and cache keys.
    pub fn normalized(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    /// The host environment's preferred language, or `"en"` if it cannot
    /// be determined. Read once at startup to seed the current language.
    pub fn system_default() -> Self {
        match sys_locale::get_locale() {
            Some(locale) => Self::new(locale),
            None => Self::new(FALLBACK_TAG),
        }
    }

    /// Convert to a Fluent [`LanguageIdentifier`].
    ///
    /// Tags are accepted unvalidated, so a tag that does not parse maps to
    /// the default (root) identifier rather than failing; the identifier
    /// only affects Fluent's internal formatting, not message lookup.
    pub fn to_language_identifier(&self) -> LanguageIdentifier {
        self.0.parse().unwrap_or_default()
    }
}

impl PartialEq for LanguageTag {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for LanguageTag {}

impl Hash for LanguageTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for LanguageTag {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LanguageTag {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_equality_is_case_insensitive() {
        assert_eq!(LanguageTag::new("en-US"), LanguageTag::new("en-us"));
        assert_eq!(LanguageTag::new("FR"), LanguageTag::new("fr"));
        assert_ne!(LanguageTag::new("en"), LanguageTag::new("de"));
    }

    #[test]
    fn test_display_preserves_spelling() {
        assert_eq!(LanguageTag::new("fr-CA").to_string(), "fr-CA");
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        let mut map = HashMap::new();
        map.insert(LanguageTag::new("en-US"), 1);
        assert_eq!(map.get(&LanguageTag::new("EN-us")), Some(&1));
    }

    #[test]
    fn test_empty_tag_falls_back() {
        assert_eq!(LanguageTag::new("").as_str(), "en");
    }

    #[test]
    fn test_deserialized_empty_tag_falls_back() {
        #[derive(serde::Deserialize)]
        struct Pref {
            language: LanguageTag,
        }

        let pref: Pref = toml::from_str(r#"language = """#).unwrap();
        assert_eq!(pref.language.as_str(), "en");
    }

    #[test]
    fn test_serialization_round_trip_preserves_spelling() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Pref {
            language: LanguageTag,
        }

        let pref = Pref {
            language: LanguageTag::new("fr-CA"),
        };
        let encoded = toml::to_string(&pref).unwrap();
        let decoded: Pref = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded.language.as_str(), "fr-CA");
    }

    #[test]
    fn test_system_default_is_non_empty() {
        assert!(!LanguageTag::system_default().as_str().is_empty());
    }

    #[test]
    fn test_unparseable_tag_maps_to_default_identifier() {
        let tag = LanguageTag::new("not a tag!!");
        assert_eq!(tag.to_language_identifier(), LanguageIdentifier::default());
    }
}
