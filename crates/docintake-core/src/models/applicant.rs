use chrono::NaiveDate;

use crate::age::Age;

/// Validated applicant metadata from an upload form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applicant {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

impl Applicant {
    /// First and last name joined by a single space, each side trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn age_on(&self, today: NaiveDate) -> Age {
        Age::between(self.date_of_birth, today)
    }
}
