// File: crates/linebook_sheets/src/auth.rs
use linebook_common::services::BoxFuture;
use linebook_config::GoogleConfig;
use std::path::Path;
use yup_oauth2::authenticator::DefaultAuthenticator;
use yup_oauth2::{parse_service_account_key, read_service_account_key, ServiceAccountAuthenticator};

use crate::service::SheetsError;

pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// Supplies bearer tokens for the Sheets API.
pub trait TokenSource: Send + Sync {
    fn access_token(&self) -> BoxFuture<'_, String, SheetsError>;
}

/// Service account credentials; tokens are cached and refreshed by yup-oauth2.
pub struct ServiceAccountTokenSource {
    auth: DefaultAuthenticator,
}

impl ServiceAccountTokenSource {
    /// Reads the key from `service_account_json` if set, otherwise from `key_path`.
    pub async fn from_config(config: &GoogleConfig) -> Result<Self, SheetsError> {
        let sa_key = if let Some(json) = config.service_account_json.as_deref() {
            parse_service_account_key(json)
                .map_err(|e| SheetsError::AuthError(format!("invalid service account JSON: {e}")))?
        } else if let Some(key_path) = config.key_path.as_deref() {
            read_service_account_key(Path::new(key_path))
                .await
                .map_err(|e| SheetsError::AuthError(format!("{key_path}: {e}")))?
        } else {
            return Err(SheetsError::ConfigError(
                "Missing key_path or service_account_json in GoogleConfig".to_string(),
            ));
        };

        let auth = ServiceAccountAuthenticator::builder(sa_key)
            .build()
            .await
            .map_err(|e| SheetsError::AuthError(e.to_string()))?;

        Ok(Self { auth })
    }
}

impl TokenSource for ServiceAccountTokenSource {
    fn access_token(&self) -> BoxFuture<'_, String, SheetsError> {
        Box::pin(async move {
            let token = self
                .auth
                .token(&[SHEETS_SCOPE])
                .await
                .map_err(|e| SheetsError::AuthError(e.to_string()))?;
            token
                .token()
                .map(str::to_string)
                .ok_or_else(|| SheetsError::AuthError("No token available".to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_credentials() {
        let result = ServiceAccountTokenSource::from_config(&GoogleConfig::default()).await;
        assert!(matches!(result, Err(SheetsError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_unreadable_key_path() {
        let config = GoogleConfig {
            key_path: Some("does/not/exist.json".to_string()),
            service_account_json: None,
        };
        let result = ServiceAccountTokenSource::from_config(&config).await;
        assert!(matches!(result, Err(SheetsError::AuthError(msg)) if msg.contains("does/not/exist.json")));
    }

    #[tokio::test]
    async fn test_invalid_inline_json() {
        let config = GoogleConfig {
            key_path: None,
            service_account_json: Some("{not json".to_string()),
        };
        let result = ServiceAccountTokenSource::from_config(&config).await;
        assert!(matches!(result, Err(SheetsError::AuthError(_))));
    }
}
