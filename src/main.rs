use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};
use volunteer_site::config::Config;
use volunteer_site::server::{self, AppState};
use volunteer_site::sheets::{RecordSink, SheetsClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("volunteer_site=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting volunteer site");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!(
        "Default language: {} ({})",
        config.default_language,
        config.default_language.direction()
    );

    let sink: Option<Arc<dyn RecordSink>> = match config.sheets.clone() {
        Some(sheets) => {
            info!("Volunteer signups go to spreadsheet {}", sheets.spreadsheet_id);
            Some(Arc::new(SheetsClient::new(sheets)?))
        }
        None => {
            warn!("Google Sheets credentials not set; volunteer signups will be refused");
            None
        }
    };

    server::serve(AppState::new(config, sink)).await
}
