use actix_cors::Cors;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use serde::{Deserialize, Serialize};

use utils::qr::QR_SIZE;
use utils::xlogging::{init_log, LoggingSettings};

pub mod routes;

fn default_qr_size() -> u32 {
    QR_SIZE
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub endpoint: String,
    #[serde(default)]
    pub default_prefix: bool,
    #[serde(default = "default_qr_size")]
    pub qr_size: u32,
    pub logging: LoggingSettings,
}

/// Read-only state shared by every worker.
#[derive(Clone)]
pub struct ServiceState {
    pub logger: slog::Logger,
    pub default_prefix: bool,
    pub qr_size: u32,
}

impl ServiceState {
    pub fn new(settings: &ApiSettings, logger: slog::Logger) -> Self {
        Self {
            logger,
            default_prefix: settings.default_prefix,
            qr_size: settings.qr_size,
        }
    }
}

pub type WebState = web::Data<ServiceState>;

pub async fn start(settings: ApiSettings) -> std::io::Result<()> {
    let logger = init_log(&settings.logging).map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;
    let state = ServiceState::new(&settings, logger.clone());

    slog::info!(logger, "Starting lnurl api"; "endpoint" => &settings.endpoint, "default_prefix" => settings.default_prefix);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(Data::new(state.clone()))
            .configure(routes::lnurl::configure)
    })
    .bind(&settings.endpoint)?
    .run()
    .await
}
