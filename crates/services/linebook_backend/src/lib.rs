// --- File: crates/services/linebook_backend/src/lib.rs ---
pub mod app_state;
pub mod service_factory;
