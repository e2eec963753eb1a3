// --- File: crates/linebook_booking/src/dispatch.rs ---
//! Persists a confirmed draft: one sheet row, then one calendar event.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use linebook_common::services::{BoxFuture, BoxedError, CalendarEvent, CalendarService, SheetService};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, info, instrument};

use crate::models::BookingDraft;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("sheet append failed: {0}")]
    Sheet(String),
    #[error("calendar insert failed: {0}")]
    Calendar(String),
    #[error("{step} timed out after {after:?}")]
    Timeout { step: &'static str, after: Duration },
    #[error("local time {local} does not exist in {time_zone}")]
    LocalTime { local: NaiveDateTime, time_zone: Tz },
}

/// Something that can commit a confirmed draft.
pub trait Dispatcher: Send + Sync {
    fn dispatch<'a>(
        &'a self,
        sender_id: &'a str,
        draft: &'a BookingDraft,
    ) -> BoxFuture<'a, (), DispatchError>;
}

pub struct SheetTarget {
    pub service: Arc<dyn SheetService<Error = BoxedError>>,
    pub spreadsheet_id: String,
    /// A1 range such as `Sheet1!A:E`.
    pub range: String,
}

pub struct CalendarTarget {
    pub service: Arc<dyn CalendarService<Error = BoxedError>>,
    pub calendar_id: String,
}

/// Dispatches to Google Sheets and Google Calendar, sequentially, with a
/// timeout on each call.
pub struct BookingDispatcher {
    sheet: Option<SheetTarget>,
    calendar: Option<CalendarTarget>,
    time_zone: Tz,
    call_timeout: Duration,
    event_description: String,
}

impl BookingDispatcher {
    pub fn new(time_zone: Tz, call_timeout: Duration, event_description: impl Into<String>) -> Self {
        Self {
            sheet: None,
            calendar: None,
            time_zone,
            call_timeout,
            event_description: event_description.into(),
        }
    }

    pub fn with_sheet(mut self, sheet: SheetTarget) -> Self {
        self.sheet = Some(sheet);
        self
    }

    pub fn with_calendar(mut self, calendar: CalendarTarget) -> Self {
        self.calendar = Some(calendar);
        self
    }

    #[instrument(skip(self, draft), fields(date = %draft.date_string(), time = %draft.time_range_string()))]
    async fn run(&self, sender_id: &str, draft: &BookingDraft) -> Result<(), DispatchError> {
        let sheet = self
            .sheet
            .as_ref()
            .ok_or_else(|| DispatchError::Sheet("sheet service is not configured".to_string()))?;
        let calendar = self.calendar.as_ref().ok_or_else(|| {
            DispatchError::Calendar("calendar service is not configured".to_string())
        })?;

        // Resolved up front so an impossible local time never leaves a sheet row behind.
        let event = build_event(draft, self.time_zone, &self.event_description)?;

        let row = vec![
            confirmation_timestamp(Utc::now(), self.time_zone),
            sender_id.to_string(),
            draft.date_string(),
            draft.time_range_string(),
            draft.label.clone(),
        ];

        info!(range = %sheet.range, "appending booking row");
        let appended = self
            .bounded(
                "sheet append",
                sheet.service.append_row(&sheet.spreadsheet_id, &sheet.range, row),
            )
            .await?
            .map_err(|e| DispatchError::Sheet(e.to_string()))?;
        debug!(updated_range = ?appended.updated_range, "booking row appended");

        info!(calendar_id = %calendar.calendar_id, "creating calendar event");
        let created = self
            .bounded(
                "calendar insert",
                calendar.service.create_event(&calendar.calendar_id, event),
            )
            .await?
            .map_err(|e| DispatchError::Calendar(e.to_string()))?;
        debug!(event_id = ?created.event_id, status = %created.status, "calendar event created");

        Ok(())
    }

    async fn bounded<F: Future>(&self, step: &'static str, call: F) -> Result<F::Output, DispatchError> {
        timeout(self.call_timeout, call)
            .await
            .map_err(|_| DispatchError::Timeout {
                step,
                after: self.call_timeout,
            })
    }
}

impl Dispatcher for BookingDispatcher {
    fn dispatch<'a>(
        &'a self,
        sender_id: &'a str,
        draft: &'a BookingDraft,
    ) -> BoxFuture<'a, (), DispatchError> {
        Box::pin(self.run(sender_id, draft))
    }
}

/// Builds the calendar event for `draft`, with start and end carrying the
/// UTC offset of `time_zone` on that date.
pub fn build_event(
    draft: &BookingDraft,
    time_zone: Tz,
    description: &str,
) -> Result<CalendarEvent, DispatchError> {
    let start = localize(draft.date.and_time(draft.start), time_zone)?;
    let end = localize(draft.date.and_time(draft.end), time_zone)?;

    Ok(CalendarEvent {
        start_time: start.to_rfc3339(),
        end_time: end.to_rfc3339(),
        summary: draft.label.clone(),
        description: Some(description.to_string()),
        time_zone: Some(time_zone.name().to_string()),
    })
}

// Ambiguous local times (DST fold) resolve to the earlier instant.
fn localize(local: NaiveDateTime, time_zone: Tz) -> Result<DateTime<Tz>, DispatchError> {
    time_zone
        .from_local_datetime(&local)
        .earliest()
        .ok_or(DispatchError::LocalTime { local, time_zone })
}

/// Timestamp written to the first sheet column, in the booking time zone.
pub fn confirmation_timestamp(now: DateTime<Utc>, time_zone: Tz) -> String {
    now.with_timezone(&time_zone)
        .format("%d/%m/%Y %H:%M:%S")
        .to_string()
}
