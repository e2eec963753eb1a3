// --- File: crates/linebook_booking/src/models.rs ---
use chrono::{Datelike, NaiveDate, NaiveTime};

/// An unconfirmed booking held for one sender.
///
/// Only [`crate::intent::parse_booking`] builds drafts, so `start < end` and
/// `date` is a real calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub label: String,
}

impl BookingDraft {
    /// `DD/MM/YYYY` with day and month zero padded; the year is shown as given.
    pub fn date_string(&self) -> String {
        format!(
            "{:02}/{:02}/{}",
            self.date.day(),
            self.date.month(),
            self.date.year()
        )
    }

    /// `HH:MM-HH:MM`, zero padded.
    pub fn time_range_string(&self) -> String {
        format!("{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}
