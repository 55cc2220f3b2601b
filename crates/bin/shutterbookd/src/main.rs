//! # shutterbookd — shutterbook daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`shutterbook.toml` plus `SHUTTERBOOK_*` env vars)
//! - Initialise `tracing`
//! - Load the service catalog (JSON file or built-in demo data)
//! - Construct the sandbox payment gateway
//! - Construct application services, injecting adapters via port traits
//! - Build the axum router, including the sandbox's hosted checkout pages
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use shutterbook_adapter_catalog_json::{CatalogLoadError, JsonCatalog};
use shutterbook_adapter_http_axum::router::{self, HttpOptions};
use shutterbook_adapter_http_axum::spa::DashboardAssets;
use shutterbook_adapter_http_axum::state::AppState;
use shutterbook_adapter_payment_sandbox::{SandboxConfig, SandboxGateway, checkout};
use shutterbook_app::services::catalog_service::CatalogService;
use shutterbook_app::services::payment_service::PaymentService;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, ConfigError};

/// Anything that stops the daemon from starting.
#[derive(Debug, thiserror::Error)]
enum BootError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to load service catalog")]
    Catalog(#[from] CatalogLoadError),
    #[error("server I/O error")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), BootError> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Catalog
    let catalog = match &config.catalog.path {
        Some(path) => JsonCatalog::from_path(path)?,
        None => {
            tracing::info!("no catalog file configured, serving demo catalog");
            JsonCatalog::demo()?
        }
    };
    let catalog = Arc::new(catalog);

    // Payment provider
    let gateway = Arc::new(SandboxGateway::new(SandboxConfig {
        public_url: config.server.public_url.clone(),
        session_ttl_minutes: config.payment.session_ttl_minutes,
    }));

    // Services
    let catalog_service = CatalogService::new(Arc::clone(&catalog));
    let payment_service = PaymentService::new(
        catalog,
        Arc::clone(&gateway),
        config.server.public_url.as_str(),
    );

    // HTTP
    let state = AppState::new(catalog_service, payment_service);
    let options = HttpOptions {
        dashboard: DashboardAssets::new(config.dashboard.dist_dir.clone()),
        allowed_origin: config.dashboard.allowed_origin.clone(),
    };
    if !options.dashboard.dist_dir().exists() {
        tracing::warn!(
            dist_dir = %options.dashboard.dist_dir().display(),
            "dashboard bundle not found, serving placeholder page"
        );
    }
    let app = router::build(state, &options, checkout::routes(gateway));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        %bind_addr,
        public_url = %config.server.public_url,
        "shutterbookd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutterbookd stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
