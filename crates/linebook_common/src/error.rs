// --- File: crates/linebook_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by the booking bot crates.
///
/// Crate-specific errors stay local (`ParseError`, `SheetsError`, ...) and are
/// converted into this type where they cross into the service layer.
#[derive(Error, Debug)]
pub enum LinebookError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A Google or LINE collaborator could not be set up or failed a call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for LinebookError {
    fn status_code(&self) -> u16 {
        match self {
            LinebookError::ConfigError(_) => 503,
            LinebookError::ExternalServiceError { .. } => 502,
        }
    }
}

pub fn config_error<T: fmt::Display>(message: T) -> LinebookError {
    LinebookError::ConfigError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> LinebookError {
    LinebookError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}
