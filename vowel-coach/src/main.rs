//! vowel-coach - Long/short vowel practice backend
//!
//! Accepts a recorded practice word, transcribes it with OpenAI Whisper,
//! classifies the vowel as long or short from the recording duration and
//! compares that with the expected length for the word.
//!
//! Endpoints:
//! - `POST /analyze` (multipart: `file`, `word`)
//! - `GET /practice`
//! - `GET /health`

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vowel_coach::config::{Args, CorsPolicy, ServiceConfig};
use vowel_coach::services::{VowelAnalyzer, WhisperClient};
use vowel_coach::{build_router, cors_layer, AppState};
use vowel_common::config::load_config;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config file is read before tracing starts so its log level applies
    let loaded = load_config(args.config.as_deref())?;

    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| loaded.config.logging.level.clone());
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},tower_http=info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build identification first, before anything that can fail slowly
    info!(
        "Starting vowel-coach v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &loaded.source {
        Some(path) => info!("Config file: {}", path.display()),
        None => warn!("No config file found, using compiled defaults"),
    }

    let config = ServiceConfig::resolve(&args, &loaded.config)?;

    if !config.temp_dir.is_dir() {
        anyhow::bail!("Temporary directory does not exist: {}", config.temp_dir.display());
    }

    info!("Practice words: {}", config.expectations.len());
    info!("Temporary audio directory: {}", config.temp_dir.display());
    info!(
        "Transcription: {} (timeout {}s)",
        config.transcription_url,
        config.transcription_timeout.as_secs()
    );
    match &config.cors {
        CorsPolicy::Permissive => info!("CORS: all origins allowed"),
        CorsPolicy::Origins(origins) => info!("CORS: {} allowed origin(s)", origins.len()),
    }

    let transcriber = WhisperClient::new(config.openai_api_key.clone(), config.transcription_url.clone())
        .context("Failed to create transcription client")?;

    let analyzer = VowelAnalyzer::new(
        Arc::new(transcriber),
        config.expectations.clone(),
        config.temp_dir.clone(),
        config.transcription_timeout,
    );

    let state = AppState::new(analyzer, config.max_upload_bytes);
    let app = build_router(state).layer(cors_layer(&config.cors));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;
    info!("Listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/health", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("vowel-coach stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
