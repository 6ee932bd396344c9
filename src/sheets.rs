//! Google Sheets storage for volunteer records.
//!
//! Authenticates as a service account: a short-lived RS256 assertion is
//! exchanged for an OAuth access token, which is cached until shortly before
//! it expires. Each record is one `values:append` call.

use crate::config::SheetsConfig;
use crate::volunteer::{VolunteerRecord, SHEET_RANGE};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
/// Refresh this long before the token actually expires.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Destination for accepted volunteer records.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Append one record. A single attempt; errors are not retried.
    async fn append(&self, record: &VolunteerRecord) -> Result<()>;
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Serialize)]
struct AppendRequest<'a> {
    range: &'a str,
    #[serde(rename = "majorDimension")]
    major_dimension: &'a str,
    values: Vec<Vec<String>>,
}

struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Service-account client for the volunteer spreadsheet.
pub struct SheetsClient {
    client: reqwest::Client,
    config: SheetsConfig,
    key: EncodingKey,
    token: Mutex<Option<CachedToken>>,
}

impl SheetsClient {
    /// Build a client. Fails if the private key is not a valid RSA PEM key.
    pub fn new(config: SheetsConfig) -> Result<Self> {
        let key = EncodingKey::from_rsa_pem(config.private_key.as_bytes())
            .context("GOOGLE_PRIVATE_KEY is not a valid RSA private key")?;

        Ok(Self {
            client: reqwest::Client::new(),
            config,
            key,
            token: Mutex::new(None),
        })
    }

    fn cached_token(&self) -> Option<String> {
        let guard = self.token.lock().ok()?;
        guard
            .as_ref()
            .filter(|cached| cached.expires_at > Instant::now())
            .map(|cached| cached.token.clone())
    }

    /// Signed JWT assertion for the token endpoint.
    fn assertion(&self) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.config.client_email,
            scope: SHEETS_SCOPE,
            aud: &self.config.token_url,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.key)
            .context("Failed to sign service account assertion")
    }

    /// Get a valid access token, exchanging a fresh assertion if needed.
    async fn access_token(&self) -> Result<String> {
        if let Some(token) = self.cached_token() {
            return Ok(token);
        }

        debug!("Requesting Google OAuth access token");
        let assertion = self.assertion()?;
        let response = self
            .client
            .post(&self.config.token_url)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .context("Failed to send request to Google OAuth")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Google OAuth error ({}): {}", status, body);
        }

        let token: TokenResponse = response
            .json()
            .await
            .context("Failed to parse Google OAuth response")?;

        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(CachedToken {
                token: token.access_token.clone(),
                expires_at: Instant::now() + lifetime,
            });
        }

        Ok(token.access_token)
    }

    /// `{api}/v4/spreadsheets/{id}/values/{range}:append?valueInputOption=RAW`
    fn append_url(&self) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.config.api_url)
            .with_context(|| format!("Invalid Sheets API URL: {}", self.config.api_url))?;

        let range_segment = format!("{}:append", SHEET_RANGE);
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Sheets API URL cannot be a base"))?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                self.config.spreadsheet_id.as_str(),
                "values",
                range_segment.as_str(),
            ]);
        url.query_pairs_mut()
            .append_pair("valueInputOption", "RAW")
            .append_pair("insertDataOption", "INSERT_ROWS");

        Ok(url)
    }
}

#[async_trait]
impl RecordSink for SheetsClient {
    async fn append(&self, record: &VolunteerRecord) -> Result<()> {
        let token = self.access_token().await?;
        let url = self.append_url()?;

        let body = AppendRequest {
            range: SHEET_RANGE,
            major_dimension: "ROWS",
            values: vec![record.to_row()],
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .context("Failed to send request to Google Sheets API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Google Sheets API error ({}): {}", status, body);
        }

        info!("Appended volunteer row to spreadsheet");
        Ok(())
    }
}

/// In-memory sink, for tests and local runs without credentials.
#[derive(Default)]
pub struct MemorySink {
    rows: Mutex<Vec<Vec<String>>>,
    fail_with: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every append fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    /// Rows appended so far.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.rows.lock().map(|rows| rows.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn append(&self, record: &VolunteerRecord) -> Result<()> {
        if let Some(message) = &self.fail_with {
            anyhow::bail!("{}", message);
        }
        self.rows
            .lock()
            .map_err(|_| anyhow::anyhow!("row store poisoned"))?
            .push(record.to_row());
        Ok(())
    }
}
