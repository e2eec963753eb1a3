// --- File: crates/services/linebook_backend/src/service_factory.rs ---
//! Builds the LINE, Sheets and Calendar collaborators from the configuration.

use linebook_common::services::{
    BoxedError, CalendarService, Erased, ReplyService, ServiceFactory, SheetService,
};
use linebook_common::{external_service_error, log_result, LinebookError};
use linebook_config::{AppConfig, GoogleConfig, SheetsConfig};
use linebook_gcal::{create_calendar_hub, GoogleCalendarService};
use linebook_line::LineMessagingClient;
use linebook_sheets::{GoogleSheetsService, ServiceAccountTokenSource};
use std::sync::Arc;
use tracing::{info, warn};

const SHEETS: &str = "google_sheets";
const GCAL: &str = "google_calendar";

/// Service factory for the booking bot.
///
/// A collaborator that is disabled, unconfigured or fails to initialise is
/// left as `None`; the server still starts and dispatch reports the gap.
pub struct LinebookServiceFactory {
    reply_service: Option<Arc<dyn ReplyService<Error = BoxedError>>>,
    sheet_service: Option<Arc<dyn SheetService<Error = BoxedError>>>,
    calendar_service: Option<Arc<dyn CalendarService<Error = BoxedError>>>,
}

impl LinebookServiceFactory {
    pub async fn new(config: Arc<AppConfig>) -> Self {
        Self {
            reply_service: Self::init_reply(&config),
            sheet_service: Self::init_sheets(&config).await,
            calendar_service: Self::init_calendar(&config).await,
        }
    }

    fn init_reply(config: &AppConfig) -> Option<Arc<dyn ReplyService<Error = BoxedError>>> {
        let Some(line) = config.line.as_ref() else {
            warn!("LINE section missing, replies are disabled");
            return None;
        };
        info!("Initializing LINE reply client...");
        Some(Arc::new(Erased(LineMessagingClient::new(line))))
    }

    async fn init_sheets(config: &AppConfig) -> Option<Arc<dyn SheetService<Error = BoxedError>>> {
        if !config.use_sheets {
            info!("Google Sheets disabled (use_sheets = false)");
            return None;
        }
        let (Some(sheets), Some(google)) = (config.sheets.as_ref(), config.google.as_ref()) else {
            warn!("use_sheets is set but the sheets or google section is missing");
            return None;
        };

        info!("Initializing Google Sheets service...");
        log_result(
            build_sheets(sheets, google).await,
            "Google Sheets service ready",
            "Google Sheets disabled",
        )
        .ok()
    }

    async fn init_calendar(
        config: &AppConfig,
    ) -> Option<Arc<dyn CalendarService<Error = BoxedError>>> {
        if !config.use_gcal {
            info!("Google Calendar disabled (use_gcal = false)");
            return None;
        }
        let (Some(_), Some(google)) = (config.gcal.as_ref(), config.google.as_ref()) else {
            warn!("use_gcal is set but the gcal or google section is missing");
            return None;
        };

        info!("Initializing Google Calendar service...");
        log_result(
            build_calendar(google).await,
            "Google Calendar service ready",
            "Google Calendar disabled",
        )
        .ok()
    }
}

pub(crate) async fn build_sheets(
    sheets: &SheetsConfig,
    google: &GoogleConfig,
) -> Result<Arc<dyn SheetService<Error = BoxedError>>, LinebookError> {
    let tokens = ServiceAccountTokenSource::from_config(google)
        .await
        .map_err(|e| external_service_error(SHEETS, e))?;
    let service = GoogleSheetsService::new(sheets.api_base_url(), Arc::new(tokens))
        .map_err(|e| external_service_error(SHEETS, e))?;
    Ok(Arc::new(Erased(service)))
}

pub(crate) async fn build_calendar(
    google: &GoogleConfig,
) -> Result<Arc<dyn CalendarService<Error = BoxedError>>, LinebookError> {
    let hub = create_calendar_hub(google)
        .await
        .map_err(|e| external_service_error(GCAL, e))?;
    Ok(Arc::new(Erased(GoogleCalendarService::new(Arc::new(hub)))))
}

impl ServiceFactory for LinebookServiceFactory {
    fn reply_service(&self) -> Option<Arc<dyn ReplyService<Error = BoxedError>>> {
        self.reply_service.clone()
    }

    fn sheet_service(&self) -> Option<Arc<dyn SheetService<Error = BoxedError>>> {
        self.sheet_service.clone()
    }

    fn calendar_service(&self) -> Option<Arc<dyn CalendarService<Error = BoxedError>>> {
        self.calendar_service.clone()
    }
}
