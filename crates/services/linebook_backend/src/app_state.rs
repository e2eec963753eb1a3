// --- File: crates/services/linebook_backend/src/app_state.rs ---
use axum::Router;
use chrono_tz::Tz;
use linebook_booking::{
    BookingController, BookingDispatcher, CalendarTarget, PendingBookings, SheetTarget,
};
use linebook_common::services::ServiceFactory;
use linebook_common::{config_error, LinebookError};
use linebook_config::AppConfig;
use linebook_line::{routes as line_routes, LineState};
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state that is shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub service_factory: Arc<dyn ServiceFactory>,
    /// Pending drafts, owned for the lifetime of the process.
    pub pending: Arc<PendingBookings>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, service_factory: Arc<dyn ServiceFactory>) -> Self {
        Self {
            config,
            service_factory,
            pending: Arc::new(PendingBookings::new()),
        }
    }

    pub fn time_zone(&self) -> Result<Tz, LinebookError> {
        let name = &self.config.booking.time_zone;
        name.parse::<Tz>()
            .map_err(|e| config_error(format!("unknown booking time zone {name}: {e}")))
    }

    /// Wires the dispatcher and controller from the configured collaborators.
    pub fn controller(&self) -> Result<BookingController, LinebookError> {
        let time_zone = self.time_zone()?;
        let booking = &self.config.booking;

        let mut dispatcher = BookingDispatcher::new(
            time_zone,
            Duration::from_secs(booking.dispatch_timeout_secs),
            booking.event_description.clone(),
        );

        if let (Some(service), Some(sheets)) =
            (self.service_factory.sheet_service(), self.config.sheets.as_ref())
        {
            dispatcher = dispatcher.with_sheet(SheetTarget {
                service,
                spreadsheet_id: sheets.spreadsheet_id.clone(),
                range: sheets.append_range(),
            });
        }

        if let (Some(service), Some(gcal)) =
            (self.service_factory.calendar_service(), self.config.gcal.as_ref())
        {
            dispatcher = dispatcher.with_calendar(CalendarTarget {
                service,
                calendar_id: gcal.calendar_id.clone(),
            });
        }

        info!(time_zone = %time_zone, "booking controller ready");
        Ok(BookingController::new(
            self.pending.clone(),
            Arc::new(dispatcher),
            time_zone,
        ))
    }

    /// The full HTTP application: LINE routes, request tracing and, with the
    /// `openapi` feature, Swagger UI under `/docs`.
    pub fn router(&self) -> Result<Router, LinebookError> {
        let line_state = Arc::new(LineState {
            controller: Arc::new(self.controller()?),
            reply: self.service_factory.reply_service(),
        });

        #[allow(unused_mut)] // mutated only with the openapi feature
        let mut app = line_routes(line_state);

        #[cfg(feature = "openapi")]
        {
            use linebook_line::doc::LineApiDoc;
            use utoipa::OpenApi;
            use utoipa_swagger_ui::SwaggerUi;

            #[derive(OpenApi)]
            #[openapi(info(
                title = "LINE Booking Bot",
                version = "0.1.0",
                description = "Webhook endpoints of the LINE booking bot",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ))]
            struct ApiDoc;

            let mut openapi_doc = ApiDoc::openapi();
            openapi_doc.merge(LineApiDoc::openapi());
            info!("Adding Swagger UI at /docs");
            app = app.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", openapi_doc));
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }
}
