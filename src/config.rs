use crate::i18n::Language;
use anyhow::{Context, Result};

/// Credentials and target for the volunteer spreadsheet.
#[derive(Clone)]
pub struct SheetsConfig {
    pub client_email: String,
    pub private_key: String,
    pub spreadsheet_id: String,
    /// Base URL of the Sheets API (overridable for tests)
    pub api_url: String,
    /// OAuth token endpoint (overridable for tests)
    pub token_url: String,
}

// Keep key material out of logs
impl std::fmt::Debug for SheetsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsConfig")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("api_url", &self.api_url)
            .field("token_url", &self.token_url)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Site
    pub default_language: Language,
    pub timezone: chrono_tz::Tz,

    // Google Sheets; `None` when any credential is missing
    pub sheets: Option<SheetsConfig>,
}

pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language = match std::env::var("DEFAULT_LANGUAGE") {
            Ok(code) => Language::from_code(code.trim()).context("Invalid DEFAULT_LANGUAGE")?,
            Err(_) => Language::default(),
        };

        let timezone = match std::env::var("VOLUNTEER_TIMEZONE") {
            Ok(tz) => tz
                .parse::<chrono_tz::Tz>()
                .map_err(|e| anyhow::anyhow!("Invalid VOLUNTEER_TIMEZONE '{}': {}", tz, e))?,
            Err(_) => chrono_tz::Asia::Jerusalem,
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(port) => port.parse().context("PORT must be a valid port number")?,
                Err(_) => 3000,
            },
            default_language,
            timezone,
            sheets: SheetsConfig::from_env(),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SheetsConfig {
    /// Read the spreadsheet credentials.
    ///
    /// Missing credentials are not a startup error: the site still serves
    /// pages, and each submission answers with a configuration error instead.
    pub fn from_env() -> Option<Self> {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let private_key = non_empty("GOOGLE_PRIVATE_KEY")?;
        let client_email = non_empty("GOOGLE_CLIENT_EMAIL")?;
        let spreadsheet_id = non_empty("GOOGLE_SPREADSHEET_ID")?;

        Some(Self {
            client_email,
            // Keys pasted into env files usually carry literal "\n" sequences
            private_key: private_key.replace("\\n", "\n"),
            spreadsheet_id,
            api_url: std::env::var("SHEETS_API_URL")
                .unwrap_or_else(|_| DEFAULT_SHEETS_API_URL.to_string()),
            token_url: std::env::var("GOOGLE_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: &[&str] = &[
        "HOST",
        "PORT",
        "DEFAULT_LANGUAGE",
        "VOLUNTEER_TIMEZONE",
        "GOOGLE_PRIVATE_KEY",
        "GOOGLE_CLIENT_EMAIL",
        "GOOGLE_SPREADSHEET_ID",
        "SHEETS_API_URL",
        "GOOGLE_TOKEN_URL",
    ];

    fn clear_env() {
        for var in ALL_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults should load");
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.timezone, chrono_tz::Asia::Jerusalem);
        assert!(config.sheets.is_none());
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_error() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_default_language_is_error() {
        clear_env();
        std::env::set_var("DEFAULT_LANGUAGE", "fr");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("DEFAULT_LANGUAGE"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_hebrew_default_language() {
        clear_env();
        std::env::set_var("DEFAULT_LANGUAGE", "he");
        assert_eq!(Config::from_env().unwrap().default_language, Language::He);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_sheets_requires_all_three_credentials() {
        clear_env();
        std::env::set_var("GOOGLE_PRIVATE_KEY", "key");
        std::env::set_var("GOOGLE_CLIENT_EMAIL", "svc@example.iam.gserviceaccount.com");
        assert!(SheetsConfig::from_env().is_none());

        std::env::set_var("GOOGLE_SPREADSHEET_ID", "   ");
        assert!(SheetsConfig::from_env().is_none());

        std::env::set_var("GOOGLE_SPREADSHEET_ID", "sheet-123");
        let sheets = SheetsConfig::from_env().expect("all credentials set");
        assert_eq!(sheets.spreadsheet_id, "sheet-123");
        assert_eq!(sheets.api_url, DEFAULT_SHEETS_API_URL);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_private_key_newlines_unescaped() {
        clear_env();
        std::env::set_var("GOOGLE_PRIVATE_KEY", "-----BEGIN-----\\nabc\\n-----END-----");
        std::env::set_var("GOOGLE_CLIENT_EMAIL", "svc@example.com");
        std::env::set_var("GOOGLE_SPREADSHEET_ID", "sheet");
        let sheets = SheetsConfig::from_env().unwrap();
        assert_eq!(sheets.private_key, "-----BEGIN-----\nabc\n-----END-----");
        clear_env();
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let sheets = SheetsConfig {
            client_email: "svc@example.com".to_string(),
            private_key: "super-secret".to_string(),
            spreadsheet_id: "sheet".to_string(),
            api_url: DEFAULT_SHEETS_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        };
        let debug = format!("{:?}", sheets);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
