// --- File: crates/linebook_booking/src/controller.rs ---
use chrono::{Datelike, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::dispatch::Dispatcher;
use crate::intent::parse_booking;
use crate::messages;
use crate::models::BookingDraft;
use crate::store::PendingBookings;

/// What the controller decided for one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `CONFIRM` arrived with nothing pending.
    NoPending,
    /// A new draft was stored and awaits confirmation.
    Summary(BookingDraft),
    /// The pending draft was persisted and cleared.
    Confirmed,
    /// Dispatch failed; the draft is still pending.
    DispatchFailed,
    /// The message was neither `CONFIRM` nor a valid booking.
    UsageError,
}

impl Outcome {
    /// The reply text for the sender.
    pub fn text(&self) -> String {
        match self {
            Outcome::NoPending => messages::NO_PENDING.to_string(),
            Outcome::Summary(draft) => messages::summary(draft),
            Outcome::Confirmed => messages::CONFIRMED.to_string(),
            Outcome::DispatchFailed => messages::DISPATCH_FAILED.to_string(),
            Outcome::UsageError => messages::USAGE.to_string(),
        }
    }
}

/// Whole-message, case-insensitive match on `CONFIRM`.
pub fn is_confirm(message: &str) -> bool {
    message.trim().eq_ignore_ascii_case("CONFIRM")
}

/// Per-sender confirmation state machine over [`PendingBookings`].
pub struct BookingController {
    store: Arc<PendingBookings>,
    dispatcher: Arc<dyn Dispatcher>,
    time_zone: Tz,
}

impl BookingController {
    pub fn new(store: Arc<PendingBookings>, dispatcher: Arc<dyn Dispatcher>, time_zone: Tz) -> Self {
        Self {
            store,
            dispatcher,
            time_zone,
        }
    }

    pub fn store(&self) -> &Arc<PendingBookings> {
        &self.store
    }

    /// Current year in the booking time zone, used when a date omits it.
    pub fn current_year(&self) -> i32 {
        Utc::now().with_timezone(&self.time_zone).year()
    }

    /// Handles one text message from `sender_id`.
    ///
    /// Returns `None` for blank messages, which get no reply.
    pub async fn handle_message(&self, sender_id: &str, message: &str) -> Option<Outcome> {
        let message = message.trim();
        if message.is_empty() {
            debug!(sender_id, "ignoring blank message");
            return None;
        }

        let _guard = self.store.lock_sender(sender_id).await;

        let outcome = if is_confirm(message) {
            self.confirm(sender_id).await
        } else {
            self.propose(sender_id, message)
        };
        Some(outcome)
    }

    fn propose(&self, sender_id: &str, message: &str) -> Outcome {
        match parse_booking(message, self.current_year()) {
            Ok(draft) => {
                let replaced = self.store.set(sender_id, draft.clone()).is_some();
                info!(
                    sender_id,
                    date = %draft.date_string(),
                    time = %draft.time_range_string(),
                    replaced,
                    "booking draft pending confirmation"
                );
                Outcome::Summary(draft)
            }
            Err(err) => {
                debug!(sender_id, error = %err, "message is not a booking");
                Outcome::UsageError
            }
        }
    }

    async fn confirm(&self, sender_id: &str) -> Outcome {
        let Some(draft) = self.store.get(sender_id) else {
            info!(sender_id, "confirm without pending draft");
            return Outcome::NoPending;
        };

        match self.dispatcher.dispatch(sender_id, &draft).await {
            Ok(()) => {
                self.store.clear(sender_id);
                info!(sender_id, "booking confirmed");
                Outcome::Confirmed
            }
            Err(err) => {
                warn!(sender_id, error = %err, "dispatch failed, draft kept for retry");
                Outcome::DispatchFailed
            }
        }
    }
}
