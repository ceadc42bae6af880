//! Elapsed-age calculation
//!
//! Whole years and whole months between a birth date and a reference date.
//! A month only counts once its day-of-month has been reached; the resulting
//! negative month count, if any, borrows a year.

use chrono::{Datelike, NaiveDate};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    pub years: u32,
    pub months: u32,
}

impl Age {
    /// Age on `today` of someone born on `birth`. Saturates at zero when
    /// `birth` is after `today`.
    pub fn between(birth: NaiveDate, today: NaiveDate) -> Self {
        if birth > today {
            return Age {
                years: 0,
                months: 0,
            };
        }

        let mut years = today.year() - birth.year();
        let mut months = today.month() as i32 - birth.month() as i32;

        if today.day() < birth.day() {
            months -= 1;
        }

        if months < 0 {
            months += 12;
            years -= 1;
        }

        Age {
            years: years.max(0) as u32,
            months: months.max(0) as u32,
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years, {} months", self.years, self.months)
    }
}
