//! Language type: the closed set of languages the site is published in.
//!
//! Only English and Hebrew exist. Parsing anything else is an error, so a
//! `Language` value is always one the registry has a dictionary for.

use crate::i18n::{I18nError, LanguageConfig, TranslationRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text flow of a language's writing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left-to-right (English)
    Ltr,
    /// Right-to-left (Hebrew)
    Rtl,
}

impl Direction {
    /// Value of the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// English (canonical)
    #[default]
    #[serde(rename = "en")]
    En,
    /// Hebrew
    #[serde(rename = "he")]
    He,
}

impl Language {
    /// Every supported language, canonical first.
    pub const ALL: [Language; 2] = [Language::En, Language::He];

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code ("en" or "he")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is one of the two supported codes
    /// * `Err(I18nError::UnknownLanguage)` otherwise
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        match code {
            "en" => Ok(Language::En),
            "he" => Ok(Language::He),
            other => Err(I18nError::UnknownLanguage(other.to_string())),
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::He => "he",
        }
    }

    /// Text direction used when this language is active.
    pub fn direction(&self) -> Direction {
        match self {
            Language::En => Direction::Ltr,
            Language::He => Direction::Rtl,
        }
    }

    /// The other language. Applying it twice yields the original.
    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::He,
            Language::He => Language::En,
        }
    }

    /// Get the full language configuration from the registry.
    pub fn config(&self) -> &'static LanguageConfig {
        TranslationRegistry::get().config(*self)
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language, Language::En);
        assert_eq!(language.name(), "English");
    }

    #[test]
    fn test_from_code_hebrew() {
        let language = Language::from_code("he").expect("Should succeed");
        assert_eq!(language, Language::He);
        assert_eq!(language.name(), "Hebrew");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(matches!(result, Err(I18nError::UnknownLanguage(ref c)) if c == "fr"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("EN").is_err());
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_parse_via_from_str() {
        let lang: Language = "he".parse().unwrap();
        assert_eq!(lang, Language::He);
    }

    // ==================== Direction Tests ====================

    #[test]
    fn test_direction() {
        assert_eq!(Language::En.direction(), Direction::Ltr);
        assert_eq!(Language::He.direction(), Direction::Rtl);
        assert_eq!(Direction::Rtl.to_string(), "rtl");
        assert_eq!(Direction::Ltr.as_str(), "ltr");
    }

    // ==================== Toggle Tests ====================

    #[test]
    fn test_toggled_is_involution() {
        for lang in Language::ALL {
            assert_ne!(lang.toggled(), lang);
            assert_eq!(lang.toggled().toggled(), lang);
        }
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
        assert!(Language::default().is_canonical());
        assert!(!Language::He.is_canonical());
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::He.to_string(), "he");
        assert_eq!(format!("{}", Language::En), "en");
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::He).unwrap(), "\"he\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
        assert!(serde_json::from_str::<Language>("\"de\"").is_err());
    }

    #[test]
    fn test_native_name() {
        assert_eq!(Language::En.native_name(), "English");
        assert_eq!(Language::He.native_name(), "עברית");
    }
}
