// File: crates/linebook_gcal/src/auth.rs
use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{parse_service_account_key, read_service_account_key, ServiceAccountAuthenticator},
    CalendarHub,
};
use linebook_config::GoogleConfig;
use std::path::Path;

use crate::service::GcalServiceError;

type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

/// Builds a `CalendarHub` authenticated with the shared service account.
///
/// Inline `service_account_json` wins over `key_path`.
pub async fn create_calendar_hub(config: &GoogleConfig) -> Result<HubType, GcalServiceError> {
    let auth_error = |e: std::io::Error| GcalServiceError::AuthError(e.to_string());

    let sa_key = match (config.service_account_json.as_deref(), config.key_path.as_deref()) {
        (Some(json), _) => parse_service_account_key(json).map_err(auth_error)?,
        (None, Some(key_path)) => read_service_account_key(Path::new(key_path))
            .await
            .map_err(auth_error)?,
        (None, None) => {
            return Err(GcalServiceError::AuthError(
                "Missing key_path or service_account_json in GoogleConfig".to_string(),
            ))
        }
    };

    let auth = ServiceAccountAuthenticator::builder(sa_key)
        .build()
        .await
        .map_err(auth_error)?;

    let https = HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(auth_error)?
        .https_or_http()
        .enable_http1()
        .build();

    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    Ok(CalendarHub::new(client, auth))
}
