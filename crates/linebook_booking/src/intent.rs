// --- File: crates/linebook_booking/src/intent.rs ---
//! Parses `DD/MM[/YYYY] HH:MM-HH:MM label...` booking requests.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::models::BookingDraft;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected date, time range and label, got {0} token(s)")]
    TooFewTokens(usize),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("invalid time range: {0}")]
    InvalidTimeRange(String),
}

/// Parses one chat message into a [`BookingDraft`].
///
/// `default_year` is used when the date token has no year part. The caller
/// derives it from the current date in the booking time zone.
pub fn parse_booking(message: &str, default_year: i32) -> Result<BookingDraft, ParseError> {
    let tokens: Vec<&str> = message.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(ParseError::TooFewTokens(tokens.len()));
    }

    let date = parse_date(tokens[0], default_year)?;
    let (start, end) = parse_time_range(tokens[1])?;

    Ok(BookingDraft {
        date,
        start,
        end,
        label: tokens[2..].join(" "),
    })
}

fn parse_date(token: &str, default_year: i32) -> Result<NaiveDate, ParseError> {
    let invalid = || ParseError::InvalidDate(token.to_string());
    let parts: Vec<&str> = token.split('/').collect();

    let (day, month, year) = match parts.as_slice() {
        [day, month] => (number(day), number(month), Some(default_year)),
        [day, month, year] => (number(day), number(month), number(year).map(|y| y as i32)),
        _ => return Err(invalid()),
    };

    match (day, month, year) {
        (Some(day), Some(month), Some(year)) => {
            NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
        }
        _ => Err(invalid()),
    }
}

fn parse_time_range(token: &str) -> Result<(NaiveTime, NaiveTime), ParseError> {
    let invalid = || ParseError::InvalidTimeRange(token.to_string());

    let (start, end) = match token.split('-').collect::<Vec<_>>().as_slice() {
        [start, end] => (parse_time(start), parse_time(end)),
        _ => return Err(invalid()),
    };

    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok((start, end)),
        _ => Err(invalid()),
    }
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    let (hour, minute) = s.split_once(':')?;
    if hour.len() > 2 || minute.len() != 2 {
        return None;
    }
    NaiveTime::from_hms_opt(number(hour)?, number(minute)?, 0)
}

/// Unsigned decimal digits only, so `+5` or `-1` are rejected.
fn number(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
