use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use youtube_tools::config::Config;
use youtube_tools::locale::{EnvLocale, FixedLocale, LocaleSource};
use youtube_tools::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("youtube_tools=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting YouTube tools server");

    let config = Config::from_env()?;

    let fallback_locale: Arc<dyn LocaleSource> = match &config.locale_override {
        Some(locale) => {
            info!("Using locale override {}", locale);
            Arc::new(FixedLocale::new(locale.clone()))
        }
        None => Arc::new(EnvLocale),
    };

    // Each client's preference travels in its own cookie
    let app = server::router(AppState::new(fallback_locale));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
    }
}
