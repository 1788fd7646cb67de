//! Chat route server
//!
//! Entry point for the chat section of the application.

use std::sync::Arc;

use anyhow::Context;
use chat_route::config::AppConfig;
use chat_route::{server, telemetry};
use dotenvy::dotenv;
use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = AppConfig::load().context("Failed to load configuration")?;

    telemetry::init(&config.log);

    server::start_server(Arc::new(config))
        .await
        .context("Server exited with an error")
}
