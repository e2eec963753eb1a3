// --- File: crates/linebook_config/src/models.rs ---

use serde::{Deserialize, Serialize};

pub const DEFAULT_TIME_ZONE: &str = "Asia/Bangkok";
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";
pub const DEFAULT_DISPATCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_EVENT_DESCRIPTION: &str = "สร้างจาก LINE Booking Bot";
pub const LINE_API_BASE_URL: &str = "https://api.line.me";
pub const SHEETS_API_BASE_URL: &str = "https://sheets.googleapis.com";

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

// --- LINE Messaging API Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LineConfig {
    pub channel_access_token: String, // usually "secret_from_env" -> LINE_CHANNEL_ACCESS_TOKEN
    pub api_base_url: Option<String>, // overridden in tests
}

impl LineConfig {
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(LINE_API_BASE_URL)
    }
}

// --- Google service account, shared by Sheets and Calendar ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GoogleConfig {
    /// Path to a service account key file.
    pub key_path: Option<String>,
    /// Inline service account JSON, takes precedence over `key_path`.
    pub service_account_json: Option<String>,
}

// --- Google Sheets Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    pub api_base_url: Option<String>,
}

impl SheetsConfig {
    /// The A1 range rows are appended to, five columns wide.
    pub fn append_range(&self) -> String {
        format!("{}!A:E", self.sheet_name)
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(SHEETS_API_BASE_URL)
    }
}

// --- Google Calendar Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GcalConfig {
    pub calendar_id: String,
}

// --- Booking flow ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    /// IANA zone used for year defaulting, event instants and sheet timestamps.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    #[serde(default = "default_dispatch_timeout_secs")]
    pub dispatch_timeout_secs: u64,
    #[serde(default = "default_event_description")]
    pub event_description: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            dispatch_timeout_secs: default_dispatch_timeout_secs(),
            event_description: default_event_description(),
        }
    }
}

fn default_sheet_name() -> String {
    DEFAULT_SHEET_NAME.to_string()
}

fn default_time_zone() -> String {
    DEFAULT_TIME_ZONE.to_string()
}

fn default_dispatch_timeout_secs() -> u64 {
    DEFAULT_DISPATCH_TIMEOUT_SECS
}

fn default_event_description() -> String {
    DEFAULT_EVENT_DESCRIPTION.to_string()
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_sheets: bool,
    #[serde(default)]
    pub use_gcal: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub line: Option<LineConfig>,
    #[serde(default)]
    pub google: Option<GoogleConfig>,
    #[serde(default)]
    pub sheets: Option<SheetsConfig>,
    #[serde(default)]
    pub gcal: Option<GcalConfig>,
    #[serde(default)]
    pub booking: BookingConfig,
}
