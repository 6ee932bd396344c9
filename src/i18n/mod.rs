//! Internationalization (i18n) for the bilingual site.
//!
//! All language-related logic and localized strings live here.
//!
//! # Architecture
//!
//! - `registry`: process-wide dictionaries and language metadata
//! - `language`: the closed `Language` enum and its text `Direction`
//! - `strings`: the static English and Hebrew dictionaries
//! - `context`: active language, `t(key)`, direction propagation, provider scope
//! - `validator`: dictionary parity checks
//!
//! # Example
//!
//! ```rust
//! use volunteer_site::i18n::{Direction, Language, LanguageContext};
//!
//! let ctx = LanguageContext::new(Language::En);
//! assert_eq!(ctx.t("nav.home"), "Home");
//! assert_eq!(ctx.t("no.such.key"), "no.such.key");
//!
//! ctx.set_language(Language::He);
//! assert_eq!(ctx.document().dir, Direction::Rtl);
//! ```

mod context;
mod error;
mod language;
mod registry;
mod strings;
mod validator;

pub use context::{
    try_use_language, use_language, DocumentAttributes, LanguageContext, LanguageProvider,
    Subscription,
};
pub use error::I18nError;
pub use language::{Direction, Language};
pub use registry::{lookup, Dictionary, LanguageConfig, TranslationRegistry};
pub use validator::{TranslationValidator, ValidationReport};
