use thiserror::Error;

/// Errors raised by the i18n layer.
///
/// A missing translation key is deliberately not represented here: lookups
/// fall back to the key itself and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// Language code outside the supported set.
    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    /// `use_language` was called with no `LanguageProvider` mounted.
    #[error("use_language must be used within a LanguageProvider")]
    ContextUnmounted,
}
