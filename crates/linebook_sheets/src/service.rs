// --- File: crates/linebook_sheets/src/service.rs ---
//! Google Sheets `spreadsheets.values.append` client.

use linebook_common::create_client;
use linebook_common::services::{AppendResult, BoxFuture, SheetService};
use reqwest::{header, Client, Url};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::auth::TokenSource;

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum SheetsError {
    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Sheets API error ({status}): {body}")]
    ApiError { status: u16, body: String },

    #[error("Missing configuration: {0}")]
    ConfigError(String),
}

#[derive(Serialize)]
struct ValueRange<'a> {
    values: [&'a [String]; 1],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendValuesResponse {
    updates: Option<UpdateValuesResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateValuesResponse {
    updated_range: Option<String>,
    updated_rows: Option<u32>,
}

/// Appends rows with `valueInputOption=USER_ENTERED` and
/// `insertDataOption=INSERT_ROWS`.
pub struct GoogleSheetsService {
    client: Client,
    base_url: Url,
    tokens: Arc<dyn TokenSource>,
}

impl GoogleSheetsService {
    pub fn new(base_url: &str, tokens: Arc<dyn TokenSource>) -> Result<Self, SheetsError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SheetsError::ConfigError(format!("invalid Sheets API URL {base_url}: {e}")))?;
        Ok(Self {
            client: create_client(REQUEST_TIMEOUT_SECS)?,
            base_url,
            tokens,
        })
    }

    fn append_url(&self, spreadsheet_id: &str, range: &str) -> Result<Url, SheetsError> {
        let append_segment = format!("{range}:append");
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SheetsError::ConfigError(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", spreadsheet_id, "values", append_segment.as_str()]);
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED")
            .append_pair("insertDataOption", "INSERT_ROWS");
        Ok(url)
    }

    pub async fn append(
        &self,
        spreadsheet_id: &str,
        range: &str,
        row: &[String],
    ) -> Result<AppendResult, SheetsError> {
        let url = self.append_url(spreadsheet_id, range)?;
        let token = self.tokens.access_token().await?;

        let response = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .json(&ValueRange { values: [row] })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: AppendValuesResponse = response.json().await?;
        let updates = parsed.updates;
        let result = AppendResult {
            updated_range: updates.as_ref().and_then(|u| u.updated_range.clone()),
            updated_rows: updates.and_then(|u| u.updated_rows).unwrap_or(0),
        };
        debug!(updated_range = ?result.updated_range, "row appended");
        Ok(result)
    }
}

impl SheetService for GoogleSheetsService {
    type Error = SheetsError;

    fn append_row(
        &self,
        spreadsheet_id: &str,
        range: &str,
        row: Vec<String>,
    ) -> BoxFuture<'_, AppendResult, Self::Error> {
        let spreadsheet_id = spreadsheet_id.to_string();
        let range = range.to_string();
        Box::pin(async move { self.append(&spreadsheet_id, &range, &row).await })
    }
}
