// Framework bootstrap for the gateway runtime.

use crate::frameworks::config::GatewayConfig;
use crate::frameworks::middleware;
use crate::interface_adapters::clients::{AuthClient, CatalogClient, build_http_client};
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::{io::Result, sync::Arc};

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, config: GatewayConfig) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(&config)?;

    // API routes first, then the stages that run before them.
    let app = middleware::gateway(routes::app(state), &config.static_dir);

    tracing::info!(%address, static_dir = %config.static_dir.display(), "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let config = GatewayConfig::load().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::other(e)
    })?;
    let address = config.socket_addr();

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, config).await
}

fn build_state(config: &GatewayConfig) -> Result<Arc<AppState>> {
    let http = build_http_client(config.upstream_timeout())
        .map_err(|e| std::io::Error::other(format!("failed to initialize http client: {e}")))?;

    tracing::debug!(
        products_url = %config.products_url,
        login_url = %config.login_url,
        upstream_timeout_ms = ?config.upstream_timeout_ms,
        login_policy = ?config.login_policy(),
        "upstream clients configured"
    );

    Ok(Arc::new(AppState {
        catalog: Arc::new(CatalogClient::new(http.clone(), config.products_url.clone())),
        auth: Arc::new(AuthClient::new(http, config.login_url.clone())),
        login_policy: config.login_policy(),
    }))
}
