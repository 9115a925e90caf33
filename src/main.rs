use anyhow::Result;
use clap::Parser;
use interview_prep::api::{ApiClient, InterviewApi};
use interview_prep::{create_router, AppState, Config, InterviewOrchestrator};
use std::sync::Arc;
use tracing::info;

/// Interview preparation service: drives one interview session against the
/// remote NLP service and exposes it over HTTP for the UI.
#[derive(Debug, Parser)]
#[command(name = "interview-prep")]
struct Args {
    /// Path to the configuration file (without extension)
    #[arg(long, default_value = "config/interview-prep")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} v0.1.0", cfg.service.name);
    info!("Remote interview service: {}", cfg.api.base_url);
    info!("Speech locale: {}", cfg.speech.locale);

    let api: Arc<dyn InterviewApi> = Arc::new(ApiClient::new(&cfg.api)?);
    let orchestrator = Arc::new(InterviewOrchestrator::new(Arc::clone(&api)));
    let state = AppState::new(orchestrator, api);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
