//! Volunteer signup: form validation, submission, and the stored record.

mod client;
mod form;
mod record;
mod submission;

pub use client::{SubmitError, SubmitOutcome, VolunteerClient};
pub use form::{
    is_valid_email, is_valid_phone, Field, FieldErrors, VolunteerForm, AREA_OPTIONS,
    AVAILABILITY_OPTIONS,
};
pub use record::{localize, VolunteerRecord, SHEET_RANGE};
pub use submission::{
    process_submission, OneOrMany, SubmissionError, VolunteerRequest, VolunteerSubmission,
    DOWNSTREAM_MESSAGE, MISSING_FIELDS_MESSAGE, NOT_CONFIGURED_MESSAGE, SUCCESS_MESSAGE,
};
