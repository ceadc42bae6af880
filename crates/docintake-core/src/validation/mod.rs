//! Applicant field validation
//!
//! Validates the three text fields of an upload form. File validation lives in
//! `docintake-processing` because it depends on the supported document kinds.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::AppError;
use crate::models::Applicant;

/// Raw form fields as received, before any validation.
#[derive(Debug, Default, Clone)]
pub struct ApplicantFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Check all required fields are present. `has_file` reports whether the
/// upload carried a file part.
pub fn require_fields(fields: &ApplicantFields, has_file: bool) -> Result<(), AppError> {
    let mut missing = Vec::new();
    if !present(&fields.first_name) {
        missing.push("firstName");
    }
    if !present(&fields.last_name) {
        missing.push("lastName");
    }
    if !present(&fields.date_of_birth) {
        missing.push("dob");
    }
    if !has_file {
        missing.push("file");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingFields(missing))
    }
}

/// Parse a date of birth given as `YYYY-MM-DD`, an RFC 3339 timestamp, or a
/// timestamp without offset. Only the calendar date is kept.
pub fn parse_date_of_birth(raw: &str) -> Result<NaiveDate, AppError> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(timestamp.date());
    }

    Err(AppError::InvalidDateOfBirth(format!(
        "'{}' is not a valid date",
        raw
    )))
}

/// Validate the applicant fields against `today`. Runs `require_fields` first.
pub fn validate_applicant(
    fields: ApplicantFields,
    has_file: bool,
    today: NaiveDate,
) -> Result<Applicant, AppError> {
    require_fields(&fields, has_file)?;

    // require_fields guarantees all three are present
    let (Some(first_name), Some(last_name), Some(raw_dob)) =
        (fields.first_name, fields.last_name, fields.date_of_birth)
    else {
        return Err(AppError::Internal(
            "applicant fields vanished after presence check".to_string(),
        ));
    };

    let date_of_birth = parse_date_of_birth(&raw_dob)?;
    if date_of_birth > today {
        return Err(AppError::InvalidDateOfBirth(format!(
            "{} is in the future",
            date_of_birth
        )));
    }

    Ok(Applicant {
        first_name: first_name.trim().to_string(),
        last_name: last_name.trim().to_string(),
        date_of_birth,
    })
}
