// --- File: crates/linebook_sheets/src/lib.rs ---
pub mod auth;
pub mod service;

pub use auth::{ServiceAccountTokenSource, TokenSource, SHEETS_SCOPE};
pub use service::{GoogleSheetsService, SheetsError};
