// --- File: crates/linebook_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

pub use error::{config_error, external_service_error, HttpStatusCode, LinebookError};

pub use http::{
    client::{create_client, HTTP_CLIENT},
    IntoHttpResponse,
};

pub use logging::{init, init_with_level, log_result};

// Shared building blocks for the booking bot crates: errors, logging,
// the outbound HTTP client and the collaborator service traits.
