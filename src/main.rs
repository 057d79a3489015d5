//! Bias of the Day plugin entry point.
//!
//! Stdout carries the BitBar protocol, so logs go to stderr.

use std::error::Error;
use std::sync::Arc;

use tracing::{error, warn};
use tracing_subscriber::{fmt, EnvFilter};

use bias_of_the_day::adapters::{
    BitBarRenderer, HtmlTagStripper, OfflineSummaryService, SystemClock, WikipediaSummaryService,
};
use bias_of_the_day::application::ShowBiasOfTheDayHandler;
use bias_of_the_day::config::AppConfig;
use bias_of_the_day::domain::taxonomy::Taxonomy;
use bias_of_the_day::ports::SummaryService;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let loaded = AppConfig::load();
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => AppConfig::default(),
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = &loaded {
        warn!("Falling back to default configuration: {}", e);
    }
    let config = match config.validate() {
        Ok(()) => config,
        Err(e) => {
            warn!("Invalid configuration, using defaults: {}", e);
            AppConfig::default()
        }
    };

    // Without a client the menu still renders, showing the connection notice
    let summary_service: Arc<dyn SummaryService> =
        match WikipediaSummaryService::new((&config.summary).into()) {
            Ok(service) => Arc::new(service),
            Err(e) => {
                warn!("{}", e);
                Arc::new(OfflineSummaryService::new(
                    config.summary.search_base_url.clone(),
                    e.to_string(),
                ))
            }
        };
    let handler = ShowBiasOfTheDayHandler::new(
        Taxonomy::cognitive_biases(),
        Arc::new(SystemClock),
        summary_service,
        Arc::new(HtmlTagStripper::new()),
        Arc::new(BitBarRenderer::stdout()),
    );

    if let Err(e) = handler.handle().await {
        error!("{}", e);
        return Err(e.into());
    }

    Ok(())
}
