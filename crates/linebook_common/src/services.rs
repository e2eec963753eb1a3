// --- File: crates/linebook_common/src/services.rs ---
//! Service abstractions for the external collaborators of the booking bot.
//!
//! The booking flow only talks to these traits, so the LINE, Sheets and
//! Calendar adapters can be swapped for in-memory fakes in tests.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl BoxedError {
    pub fn new<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        BoxedError(Box::new(err))
    }

    /// Wraps a plain message, mostly useful for fakes.
    pub fn msg(message: impl Into<String>) -> Self {
        BoxedError(Box::<dyn StdError + Send + Sync>::from(message.into()))
    }
}

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// Sends a text reply through the chat platform.
pub trait ReplyService: Send + Sync {
    type Error: StdError + Send + Sync + 'static;

    /// Reply once to the event identified by `reply_token`.
    fn reply_text(&self, reply_token: &str, text: &str) -> BoxFuture<'_, (), Self::Error>;
}

/// Append-only row sink.
pub trait SheetService: Send + Sync {
    type Error: StdError + Send + Sync + 'static;

    /// Append one row at the end of `range` in `spreadsheet_id`.
    fn append_row(
        &self,
        spreadsheet_id: &str,
        range: &str,
        row: Vec<String>,
    ) -> BoxFuture<'_, AppendResult, Self::Error>;
}

/// Creates calendar events.
pub trait CalendarService: Send + Sync {
    type Error: StdError + Send + Sync + 'static;

    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error>;
}

/// A factory for the collaborator services.
///
/// `None` means the collaborator is disabled or could not be initialised.
pub trait ServiceFactory: Send + Sync {
    fn reply_service(&self) -> Option<Arc<dyn ReplyService<Error = BoxedError>>>;

    fn sheet_service(&self) -> Option<Arc<dyn SheetService<Error = BoxedError>>>;

    fn calendar_service(&self) -> Option<Arc<dyn CalendarService<Error = BoxedError>>>;
}

/// Adapter that erases a service's concrete error into [`BoxedError`].
pub struct Erased<S>(pub S);

impl<S: ReplyService> ReplyService for Erased<S> {
    type Error = BoxedError;

    fn reply_text(&self, reply_token: &str, text: &str) -> BoxFuture<'_, (), Self::Error> {
        let fut = self.0.reply_text(reply_token, text);
        Box::pin(async move { fut.await.map_err(BoxedError::new) })
    }
}

impl<S: SheetService> SheetService for Erased<S> {
    type Error = BoxedError;

    fn append_row(
        &self,
        spreadsheet_id: &str,
        range: &str,
        row: Vec<String>,
    ) -> BoxFuture<'_, AppendResult, Self::Error> {
        let fut = self.0.append_row(spreadsheet_id, range, row);
        Box::pin(async move { fut.await.map_err(BoxedError::new) })
    }
}

impl<S: CalendarService> CalendarService for Erased<S> {
    type Error = BoxedError;

    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
        let fut = self.0.create_event(calendar_id, event);
        Box::pin(async move { fut.await.map_err(BoxedError::new) })
    }
}

/// A calendar event to insert. Times are RFC 3339 with an explicit offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub start_time: String,
    pub end_time: String,
    pub summary: String,
    pub description: Option<String>,
    /// IANA zone name sent alongside the instants.
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEventResult {
    pub event_id: Option<String>,
    pub status: String,
}

/// Result of a Sheets `values.append` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppendResult {
    pub updated_range: Option<String>,
    pub updated_rows: u32,
}
