//! Volunteer signup form state and client-side validation.
//!
//! Validation runs before anything touches the network. Each failing field
//! gets its own message, localized through the active `LanguageContext`.

use crate::i18n::LanguageContext;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Values offered by the "preferred volunteer area" multi-select.
pub const AREA_OPTIONS: &[&str] = &["elderly", "youth", "environment", "events", "admin"];

/// Values offered by the availability checkboxes.
pub const AVAILABILITY_OPTIONS: &[&str] = &["weekdays", "weekends", "evenings", "flexible"];

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Area,
    Availability,
    Consent,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Area,
        Field::Availability,
        Field::Consent,
    ];

    /// Form input name, also the JSON field name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Area => "area",
            Field::Availability => "availability",
            Field::Consent => "consent",
        }
    }

    /// Translation key of the label shown next to the input.
    pub fn label_key(&self) -> &'static str {
        match self {
            Field::Name => "home.getInvolved.form.name",
            Field::Email => "home.getInvolved.form.email",
            Field::Phone => "home.getInvolved.form.phone",
            Field::Area => "home.getInvolved.form.area",
            Field::Availability => "home.getInvolved.form.availability",
            Field::Consent => "home.getInvolved.form.consent",
        }
    }

    /// Translation key of the message shown when this field is invalid.
    pub fn error_key(&self) -> &'static str {
        match self {
            Field::Name => "home.getInvolved.form.error.name",
            Field::Email => "home.getInvolved.form.error.email",
            Field::Phone => "home.getInvolved.form.error.phone",
            Field::Area => "home.getInvolved.form.error.area",
            Field::Availability => "home.getInvolved.form.error.availability",
            Field::Consent => "home.getInvolved.form.error.consent",
        }
    }
}

/// Localized validation messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failing fields in form order.
    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field.name(), message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// The volunteer signup form as filled in by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub area: Vec<String>,
    pub availability: Vec<String>,
    pub consent: bool,
}

impl VolunteerForm {
    /// Check every field and collect a localized message for each failure.
    pub fn validate(&self, ctx: &LanguageContext) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut fail = |field: Field| errors.insert(field, ctx.t(field.error_key()));

        if self.name.trim().is_empty() {
            fail(Field::Name);
        }
        if !is_valid_email(&self.email) {
            fail(Field::Email);
        }
        if !is_valid_phone(&self.phone) {
            fail(Field::Phone);
        }
        if self.area.is_empty() {
            fail(Field::Area);
        }
        if self.availability.is_empty() {
            fail(Field::Availability);
        }
        if !self.consent {
            fail(Field::Consent);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Check or uncheck an area option, keeping selection order.
    pub fn set_area(&mut self, value: &str, checked: bool) {
        set_checked(&mut self.area, value, checked);
    }

    /// Check or uncheck an availability slot, keeping selection order.
    pub fn set_availability(&mut self, value: &str, checked: bool) {
        set_checked(&mut self.availability, value, checked);
    }
}

fn set_checked(values: &mut Vec<String>, value: &str, checked: bool) {
    if checked {
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    } else {
        values.retain(|v| v != value);
    }
}

/// Simplified address check: something@something.tld, no whitespace anywhere,
/// including leading or trailing.
pub fn is_valid_email(email: &str) -> bool {
    let regex = EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
    !email.is_empty() && regex.is_match(email)
}

/// Digits plus common separators: spaces, dashes, plus, parentheses.
pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    let regex = PHONE_REGEX.get_or_init(|| Regex::new(r"^[\d\s\-+()]+$").unwrap());
    !phone.is_empty() && regex.is_match(phone)
}
