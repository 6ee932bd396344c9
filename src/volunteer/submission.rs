//! Server-side handling of a volunteer signup.
//!
//! `process_submission` is the whole operation as an explicit result: either
//! the appended record or the reason it was refused. The HTTP layer only maps
//! that result onto a status code and JSON body.

use crate::sheets::RecordSink;
use crate::volunteer::record::{localize, VolunteerRecord};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Server configuration error. Please contact the administrator.";
pub const DOWNSTREAM_MESSAGE: &str = "Failed to submit registration. Please try again later.";
pub const SUCCESS_MESSAGE: &str = "Volunteer registration submitted successfully";

/// A field that accepts either a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Non-blank values, trimmed.
    pub fn into_values(self) -> Vec<String> {
        let values = match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        };
        values
            .into_iter()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }
}

/// JSON body of `POST /api/volunteer`.
///
/// Every field is optional at the parsing stage so an incomplete body is
/// reported as missing fields rather than as a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolunteerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub area: Option<OneOrMany>,
    #[serde(default)]
    pub availability: Option<OneOrMany>,
    #[serde(default)]
    pub consent: Option<bool>,
}

/// A request with every required field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolunteerSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub area: Vec<String>,
    pub availability: Vec<String>,
}

impl VolunteerRequest {
    /// Check presence of every required field. Consent must be explicitly true.
    pub fn into_submission(self) -> Result<VolunteerSubmission, SubmissionError> {
        let required = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let list = |value: Option<OneOrMany>| {
            value
                .map(OneOrMany::into_values)
                .filter(|v| !v.is_empty())
        };

        if self.consent != Some(true) {
            return Err(SubmissionError::MissingFields);
        }

        match (
            required(self.name),
            required(self.email),
            required(self.phone),
            list(self.area),
            list(self.availability),
        ) {
            (Some(name), Some(email), Some(phone), Some(area), Some(availability)) => {
                Ok(VolunteerSubmission {
                    name,
                    email,
                    phone,
                    area,
                    availability,
                })
            }
            _ => Err(SubmissionError::MissingFields),
        }
    }
}

impl VolunteerSubmission {
    pub fn into_record(self, at: DateTime<Utc>, tz: Tz) -> VolunteerRecord {
        VolunteerRecord {
            submitted_at: localize(at, tz),
            name: self.name,
            email: self.email,
            phone: self.phone,
            area: self.area,
            availability: self.availability,
            consent: true,
        }
    }
}

/// Why a submission was not stored.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// A required field is absent or blank, or consent was not given
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,

    /// Spreadsheet credentials are not configured on the server
    #[error("{}", NOT_CONFIGURED_MESSAGE)]
    NotConfigured,

    /// The spreadsheet append failed
    #[error("{}", DOWNSTREAM_MESSAGE)]
    Downstream(#[source] anyhow::Error),
}

/// Validate `request` and append it to `sink` as one row.
///
/// A single attempt: downstream failures are returned, never retried.
pub async fn process_submission(
    sink: Option<&dyn RecordSink>,
    request: VolunteerRequest,
    now: DateTime<Utc>,
    tz: Tz,
) -> Result<VolunteerRecord, SubmissionError> {
    let submission = request.into_submission()?;

    let Some(sink) = sink else {
        error!("Google Sheets API credentials not configured");
        return Err(SubmissionError::NotConfigured);
    };

    let record = submission.into_record(now, tz);

    if let Err(e) = sink.append(&record).await {
        error!("Error submitting volunteer form: {:#}", e);
        return Err(SubmissionError::Downstream(e));
    }

    info!(
        "Volunteer registration stored (areas: {}, availability: {})",
        record.area.join(","),
        record.availability.join(",")
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::MemorySink;
    use chrono::TimeZone;

    fn full_request() -> VolunteerRequest {
        serde_json::from_value(serde_json::json!({
            "name": "Avi Cohen",
            "email": "avi@example.org",
            "phone": "052-1234567",
            "area": ["elderly", "youth"],
            "availability": "weekends",
            "consent": true
        }))
        .expect("valid body")
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap()
    }

    // ==================== Request Parsing Tests ====================

    #[test]
    fn test_area_accepts_string_or_list() {
        let submission = full_request().into_submission().unwrap();
        assert_eq!(submission.area, vec!["elderly", "youth"]);
        assert_eq!(submission.availability, vec!["weekends"]);
    }

    #[test]
    fn test_empty_body_is_missing_fields() {
        let request: VolunteerRequest = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            request.into_submission(),
            Err(SubmissionError::MissingFields)
        ));
    }

    #[test]
    fn test_consent_false_is_missing_fields() {
        let request = VolunteerRequest {
            consent: Some(false),
            ..full_request()
        };
        assert!(matches!(
            request.into_submission(),
            Err(SubmissionError::MissingFields)
        ));
    }

    #[test]
    fn test_blank_values_are_missing() {
        let request = VolunteerRequest {
            name: Some("   ".to_string()),
            ..full_request()
        };
        assert!(request.into_submission().is_err());

        let request = VolunteerRequest {
            area: Some(OneOrMany::Many(vec![" ".to_string()])),
            ..full_request()
        };
        assert!(request.into_submission().is_err());
    }

    #[test]
    fn test_null_fields_are_missing() {
        let request: VolunteerRequest = serde_json::from_value(serde_json::json!({
            "name": null,
            "email": "a@b.c",
            "phone": "1",
            "area": "youth",
            "availability": "flexible",
            "consent": true
        }))
        .unwrap();
        assert!(request.into_submission().is_err());
    }

    // ==================== process_submission Tests ====================

    #[tokio::test]
    async fn test_success_appends_exactly_one_row() {
        let sink = MemorySink::new();
        let record = process_submission(
            Some(&sink),
            full_request(),
            now(),
            chrono_tz::Asia::Jerusalem,
        )
        .await
        .expect("should store");

        assert_eq!(record.name, "Avi Cohen");
        let rows = sink.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0],
            vec![
                "10.03.2025, 10:00:00",
                "Avi Cohen",
                "avi@example.org",
                "052-1234567",
                "elderly, youth",
                "weekends",
                "Yes"
            ]
        );
    }

    #[tokio::test]
    async fn test_not_configured() {
        let result =
            process_submission(None, full_request(), now(), chrono_tz::Asia::Jerusalem).await;
        assert!(matches!(result, Err(SubmissionError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_missing_fields_checked_before_configuration() {
        let result = process_submission(
            None,
            VolunteerRequest::default(),
            now(),
            chrono_tz::Asia::Jerusalem,
        )
        .await;
        assert!(matches!(result, Err(SubmissionError::MissingFields)));
    }

    #[tokio::test]
    async fn test_downstream_failure_appends_nothing() {
        let sink = MemorySink::failing("quota exceeded");
        let result = process_submission(
            Some(&sink),
            full_request(),
            now(),
            chrono_tz::Asia::Jerusalem,
        )
        .await;

        match result {
            Err(SubmissionError::Downstream(e)) => assert!(e.to_string().contains("quota")),
            other => panic!("expected downstream error, got {:?}", other),
        }
        assert!(sink.rows().is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SubmissionError::MissingFields.to_string(),
            "Missing required fields"
        );
        assert!(SubmissionError::NotConfigured
            .to_string()
            .contains("contact the administrator"));
    }
}
