// --- File: crates/linebook_gcal/src/service.rs ---
//! Google Calendar implementation of the `CalendarService` trait.

use chrono::{DateTime, Utc};
use google_calendar3::api::{Event, EventDateTime};
use linebook_common::services::{BoxFuture, CalendarEvent, CalendarEventResult, CalendarService};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::auth::HubType;

/// Errors that can occur when interacting with Google Calendar.
#[derive(Error, Debug)]
pub enum GcalServiceError {
    #[error("Google API Error: {0}")]
    ApiError(#[from] google_calendar3::Error),
    #[error("Failed to parse time: {0}")]
    TimeParseError(String),
    #[error("Authentication error: {0}")]
    AuthError(String),
}

pub struct GoogleCalendarService {
    calendar_hub: Arc<HubType>,
}

impl GoogleCalendarService {
    pub fn new(calendar_hub: Arc<HubType>) -> Self {
        Self { calendar_hub }
    }
}

fn parse_instant(value: &str, field: &str) -> Result<DateTime<Utc>, GcalServiceError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| GcalServiceError::TimeParseError(format!("Invalid {}: {}", field, e)))
}

/// Converts a booking event into the Calendar API `Event`.
///
/// The instants carry their own offset; `time_zone` only tells Calendar
/// which zone to display them in.
pub fn to_google_event(event: CalendarEvent) -> Result<Event, GcalServiceError> {
    let start = parse_instant(&event.start_time, "start_time")?;
    let end = parse_instant(&event.end_time, "end_time")?;

    Ok(Event {
        summary: Some(event.summary),
        description: event.description,
        start: Some(EventDateTime {
            date_time: Some(start),
            time_zone: event.time_zone.clone(),
            ..Default::default()
        }),
        end: Some(EventDateTime {
            date_time: Some(end),
            time_zone: event.time_zone,
            ..Default::default()
        }),
        ..Default::default()
    })
}

impl CalendarService for GoogleCalendarService {
    type Error = GcalServiceError;

    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();

        Box::pin(async move {
            let new_event = to_google_event(event)?;

            let (_response, created_event) = calendar_hub
                .events()
                .insert(new_event, &calendar_id)
                .doit()
                .await?;

            info!(event_id = ?created_event.id, "calendar event created");
            Ok(CalendarEventResult {
                event_id: created_event.id,
                status: created_event
                    .status
                    .unwrap_or_else(|| "confirmed".to_string()),
            })
        })
    }
}
