//! Convenience facade: treat a string as its own lookup key

use crate::manager::LanguageManager;

/// Extension trait that localizes a string through an explicit manager.
///
/// The string value is the lookup key, so a missing translation returns the
/// string unchanged.
pub trait Localized {
    fn localized(&self, manager: &LanguageManager) -> String;
}

impl Localized for str {
    fn localized(&self, manager: &LanguageManager) -> String {
        manager.lookup(self)
    }
}

/// Free-function form of [`Localized::localized`].
pub fn localize(key: &str, manager: &LanguageManager) -> String {
    manager.lookup(key)
}
