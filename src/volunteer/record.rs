//! The stored form of a volunteer signup: one spreadsheet row per record.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Sheet range the rows are appended to (timestamp through consent).
pub const SHEET_RANGE: &str = "Sheet1!A:G";

/// One accepted signup, as stored in the spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolunteerRecord {
    pub submitted_at: DateTime<Tz>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub area: Vec<String>,
    pub availability: Vec<String>,
    pub consent: bool,
}

impl VolunteerRecord {
    /// Local timestamp in the short he-IL form, e.g. `16.10.2026, 14:03:22`.
    pub fn timestamp(&self) -> String {
        self.submitted_at.format("%d.%m.%Y, %H:%M:%S").to_string()
    }

    /// Spreadsheet columns, in order:
    /// timestamp, name, email, phone, areas, availability, consent.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.area.join(", "),
            self.availability.join(", "),
            if self.consent { "Yes" } else { "No" }.to_string(),
        ]
    }
}

/// Convert a UTC instant to the organization's local time zone.
pub fn localize(at: DateTime<Utc>, tz: Tz) -> DateTime<Tz> {
    at.with_timezone(&tz)
}
