//! Translation registry: single source of truth for every user-visible string.
//!
//! The registry holds one immutable dictionary per supported language plus the
//! language metadata. It uses a singleton pattern with `OnceLock` so it is
//! built once, on first access, and shared by every request thereafter.

use crate::i18n::strings::{ENGLISH_STRINGS, HEBREW_STRINGS};
use crate::i18n::{Direction, Language};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// The language this entry describes
    pub language: Language,

    /// ISO 639-1 language code ("en", "he")
    pub code: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Native name of the language
    pub native_name: &'static str,

    /// Text direction of the writing system
    pub direction: Direction,

    /// Short label shown on the language toggle while this language is active.
    /// It names the language the toggle switches *to*.
    pub toggle_label: &'static str,

    /// Whether this is the canonical/source language (only one should be true)
    pub is_canonical: bool,
}

/// An immutable `key -> text` table for one language.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<&'static str, &'static str>,
}

impl Dictionary {
    /// Build a dictionary from static `(key, text)` pairs.
    ///
    /// Later duplicates replace earlier ones.
    pub fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: pairs.iter().copied().collect(),
        }
    }

    /// Get the text for `key`, if this dictionary has it.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Iterate over `(key, text)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }
}

/// Resolve `key` against `dict`, falling back to the key itself.
///
/// This is total: a miss or an empty entry returns `key` verbatim so missing
/// translations show up in the rendered page instead of as blank text.
pub fn lookup<'a>(dict: &Dictionary, key: &'a str) -> &'a str {
    match dict.get(key) {
        Some(text) if !text.is_empty() => text,
        _ => key,
    }
}

/// Global translation registry singleton.
pub struct TranslationRegistry {
    languages: Vec<LanguageConfig>,
    english: Dictionary,
    hebrew: Dictionary,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<TranslationRegistry> = OnceLock::new();

impl TranslationRegistry {
    /// Get the global translation registry instance.
    pub fn get() -> &'static TranslationRegistry {
        REGISTRY.get_or_init(|| TranslationRegistry {
            languages: default_languages(),
            english: Dictionary::from_pairs(ENGLISH_STRINGS),
            hebrew: Dictionary::from_pairs(HEBREW_STRINGS),
        })
    }

    /// The dictionary for `language`.
    pub fn dictionary(&self, language: Language) -> &Dictionary {
        match language {
            Language::En => &self.english,
            Language::He => &self.hebrew,
        }
    }

    /// Resolve `key` for `language`, falling back to the key itself.
    pub fn lookup<'a>(&self, language: Language, key: &'a str) -> &'a str {
        lookup(self.dictionary(language), key)
    }

    /// Get the metadata for `language`.
    ///
    /// # Panics
    /// Panics if `default_languages()` has no entry for a `Language` variant,
    /// which is a programming error caught by the tests below.
    pub fn config(&self, language: Language) -> &LanguageConfig {
        self.languages
            .iter()
            .find(|config| config.language == language)
            .expect("every Language variant has a registry entry")
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|config| config.code == code)
    }

    /// All language configurations, canonical first.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical language configuration.
    pub fn canonical(&self) -> &LanguageConfig {
        self.config(Language::En)
    }
}

/// Default language configurations: English (canonical) and Hebrew.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: Language::En,
            code: "en",
            name: "English",
            native_name: "English",
            direction: Direction::Ltr,
            toggle_label: "עב",
            is_canonical: true,
        },
        LanguageConfig {
            language: Language::He,
            code: "he",
            name: "Hebrew",
            native_name: "עברית",
            direction: Direction::Rtl,
            toggle_label: "EN",
            is_canonical: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = TranslationRegistry::get();
        let registry2 = TranslationRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_every_language_has_config() {
        let registry = TranslationRegistry::get();
        for lang in Language::ALL {
            let config = registry.config(lang);
            assert_eq!(config.language, lang);
            assert_eq!(config.code, lang.code());
            assert_eq!(config.direction, lang.direction());
        }
    }

    #[test]
    fn test_get_by_code() {
        let registry = TranslationRegistry::get();
        assert_eq!(registry.get_by_code("he").unwrap().name, "Hebrew");
        assert!(registry.get_by_code("fr").is_none());
    }

    #[test]
    fn test_exactly_one_canonical_language() {
        let registry = TranslationRegistry::get();
        let canonical: Vec<_> = registry
            .list_all()
            .into_iter()
            .filter(|c| c.is_canonical)
            .collect();
        assert_eq!(canonical.len(), 1);
        assert_eq!(registry.canonical().code, "en");
    }

    #[test]
    fn test_lookup_hit() {
        let registry = TranslationRegistry::get();
        assert_eq!(registry.lookup(Language::En, "nav.home"), "Home");
        assert_eq!(registry.lookup(Language::He, "nav.home"), "בית");
    }

    #[test]
    fn test_lookup_miss_returns_key() {
        let registry = TranslationRegistry::get();
        assert_eq!(
            registry.lookup(Language::He, "does.not.exist"),
            "does.not.exist"
        );
        assert_eq!(registry.lookup(Language::En, ""), "");
    }

    #[test]
    fn test_free_lookup_over_custom_dictionary() {
        let dict = Dictionary::from_pairs(&[("a.b", "value")]);
        assert_eq!(lookup(&dict, "a.b"), "value");
        assert_eq!(lookup(&dict, "a.c"), "a.c");
        assert_eq!(lookup(&Dictionary::default(), "x"), "x");
    }

    #[test]
    fn test_lookup_empty_entry_falls_back_to_key() {
        let dict = Dictionary::from_pairs(&[("a.b", ""), ("a.c", "text")]);
        assert_eq!(lookup(&dict, "a.b"), "a.b");
        assert_eq!(lookup(&dict, "a.c"), "text");
    }

    #[test]
    fn test_dictionaries_are_populated() {
        let registry = TranslationRegistry::get();
        for lang in Language::ALL {
            let dict = registry.dictionary(lang);
            assert!(!dict.is_empty());
            assert!(dict.contains_key("site.title"));
        }
    }

    #[test]
    fn test_toggle_labels_name_the_other_language() {
        let registry = TranslationRegistry::get();
        assert_eq!(registry.config(Language::En).toggle_label, "עב");
        assert_eq!(registry.config(Language::He).toggle_label, "EN");
    }

    #[test]
    fn test_dictionary_keys_sorted() {
        let dict = Dictionary::from_pairs(&[("b", "2"), ("a", "1")]);
        assert_eq!(dict.keys(), vec!["a", "b"]);
        assert_eq!(dict.len(), 2);
    }
}
