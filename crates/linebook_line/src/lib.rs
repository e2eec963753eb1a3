// --- File: crates/linebook_line/src/lib.rs ---
pub mod client;
#[cfg(test)]
mod client_test;
pub mod doc;
pub mod handlers;
pub mod models;
pub mod routes;

pub use client::{LineError, LineMessagingClient};
pub use handlers::LineState;
pub use routes::routes;
