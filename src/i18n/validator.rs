//! Dictionary quality validation.
//!
//! Checks that the English and Hebrew dictionaries stay in sync: same key set,
//! well-formed keys, and no blank entries. A drifted dictionary still works at
//! runtime (lookups fall back to the key), so this is a build-time/CI check run
//! by the `check-translations` binary and by the test suite.

use crate::i18n::{Dictionary, Language, TranslationRegistry};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the dictionaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that leave some language showing raw keys
    pub errors: Vec<String>,

    /// Suspicious entries that still render
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for dictionary consistency.
pub struct TranslationValidator;

static KEY_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate every dictionary in the global registry against the canonical one.
    pub fn check_registry() -> ValidationReport {
        let registry = TranslationRegistry::get();
        let canonical = registry.dictionary(Language::En);
        let mut report = Self::check_dictionary(Language::En, canonical);

        for lang in Language::ALL.into_iter().filter(|l| !l.is_canonical()) {
            let other = Self::check_parity(canonical, lang, registry.dictionary(lang));
            report.errors.extend(other.errors);
            report.warnings.extend(other.warnings);
        }

        report
    }

    /// Compare `translated` against the canonical dictionary.
    ///
    /// Keys on only one side are errors. The translated dictionary's own
    /// entries are also checked with [`Self::check_dictionary`].
    pub fn check_parity(
        canonical: &Dictionary,
        language: Language,
        translated: &Dictionary,
    ) -> ValidationReport {
        let mut report = Self::check_dictionary(language, translated);

        for key in canonical.keys() {
            if !translated.contains_key(key) {
                report
                    .errors
                    .push(format!("[{}] missing translation for '{}'", language, key));
            }
        }

        for key in translated.keys() {
            if !canonical.contains_key(key) {
                report.errors.push(format!(
                    "[{}] key '{}' has no canonical (en) entry",
                    language, key
                ));
            }
        }

        report
    }

    /// Check one dictionary on its own: key shape and blank values.
    pub fn check_dictionary(language: Language, dict: &Dictionary) -> ValidationReport {
        let mut report = ValidationReport::new();

        let mut entries: Vec<_> = dict.iter().collect();
        entries.sort_unstable();

        for (key, text) in entries {
            if !Self::is_valid_key(key) {
                report
                    .errors
                    .push(format!("[{}] malformed key '{}'", language, key));
            }

            if text.trim().is_empty() {
                report
                    .warnings
                    .push(format!("[{}] '{}' is blank", language, key));
            } else if text == key {
                report.warnings.push(format!(
                    "[{}] '{}' is translated to its own key",
                    language, key
                ));
            }
        }

        report
    }

    /// Whether `key` is a dot-delimited identifier such as `home.hero.headline`.
    pub fn is_valid_key(key: &str) -> bool {
        let regex = KEY_REGEX
            .get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+(\.[A-Za-z0-9_]+)*$").unwrap());
        regex.is_match(key)
    }
}
