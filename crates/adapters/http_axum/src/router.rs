//! Axum router assembly.

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use shutterbook_app::ports::{PaymentGateway, ServiceCatalog};

use crate::spa::DashboardAssets;
use crate::state::AppState;

/// Options of the HTTP surface that do not belong to application state.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// Compiled dashboard bundle.
    pub dashboard: DashboardAssets,
    /// Origin allowed to call `/api` from another host (e.g. a `trunk serve`
    /// dev server). `None` disables CORS headers.
    pub allowed_origin: Option<String>,
}

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api`, the routes contributed by other adapters
/// (`extra`, e.g. hosted checkout pages) and the dashboard at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<C, G>(state: AppState<C, G>, options: &HttpOptions, extra: Router) -> Router
where
    C: ServiceCatalog + Send + Sync + 'static,
    G: PaymentGateway + Send + Sync + 'static,
{
    let mut api = crate::api::routes::<C, G>();
    if let Some(cors) = options.allowed_origin.as_deref().and_then(cors_layer) {
        api = api.layer(cors);
    }

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .merge(crate::spa::routes(&options.dashboard))
        .with_state(state)
        .merge(extra)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origin: &str) -> Option<CorsLayer> {
    match origin.parse::<HeaderValue>() {
        Ok(origin) => Some(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        ),
        Err(err) => {
            tracing::warn!(error = %err, origin, "ignoring invalid CORS origin");
            None
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}
