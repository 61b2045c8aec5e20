//! Runtime localization resolver
//!
//! This crate resolves lookup keys to translated strings, extending plain
//! resource-bundle lookup with explicit runtime language switching and an
//! on-demand bundle cache. It includes:
//!
//! - Current-language state with runtime switching
//! - Language → bundle resolution with base-language fallback
//! - Key lookup that echoes the key when no translation exists
//! - Fluent-backed, in-memory, and empty bundle variants
//! - Optional persistence of the chosen language across restarts
//!
//! # Example
//!
//! ```rust
//! use sparkle_i18n::{FluentDirStore, LanguageManager, LanguageTag, Localized};
//! use std::sync::Arc;
//!
//! let store = Arc::new(FluentDirStore::new("locales"));
//! let manager = LanguageManager::new(store, LanguageTag::new("en"));
//!
//! manager.set_current_language(LanguageTag::new("fr"));
//! let greeting = "hello".localized(&manager);
//! ```

pub mod bundle;
pub mod error;
pub mod locale;
pub mod localize;
pub mod manager;
pub mod preferences;
pub mod resource;

pub use bundle::{Bundle, InMemoryBundle, MessageBundle, NullBundle};
pub use error::{I18nError, I18nResult};
pub use locale::LanguageTag;
pub use localize::{localize, Localized};
pub use manager::LanguageManager;
pub use preferences::{FilePreferenceStore, PreferenceStore};
pub use resource::{FluentDirStore, InMemoryStore, ResourceStore};
