//! Check that the English and Hebrew dictionaries are in sync.
//!
//! Usage:
//!   cargo run --bin check-translations
//!
//! Prints every missing, extra, malformed or blank key and exits non-zero when
//! any errors are found, so it can gate CI.

use anyhow::Result;
use tracing::{error, info, warn};
use volunteer_site::i18n::{Language, TranslationRegistry, TranslationValidator};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("check_translations=info".parse()?),
        )
        .init();

    let registry = TranslationRegistry::get();
    for lang in Language::ALL {
        info!(
            "{} ({}): {} keys, dir={}",
            lang.name(),
            lang.code(),
            registry.dictionary(lang).len(),
            lang.direction()
        );
    }

    let report = TranslationValidator::check_registry();

    for warning in &report.warnings {
        warn!("{}", warning);
    }
    for err in &report.errors {
        error!("{}", err);
    }

    if report.has_errors() {
        anyhow::bail!("{} translation error(s) found", report.errors.len());
    }

    info!("✓ Dictionaries are in sync");
    Ok(())
}
