// --- File: crates/linebook_booking/src/lib.rs ---
pub mod controller;
pub mod dispatch;
pub mod intent;
#[cfg(test)]
mod intent_proptest;
#[cfg(test)]
mod intent_test;
pub mod messages;
pub mod models;
pub mod store;

pub use controller::{is_confirm, BookingController, Outcome};
pub use dispatch::{
    build_event, BookingDispatcher, CalendarTarget, DispatchError, Dispatcher, SheetTarget,
};
pub use intent::{parse_booking, ParseError};
pub use models::BookingDraft;
pub use store::{PendingBookings, SenderGuard};
