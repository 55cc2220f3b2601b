//! Static hosting of the compiled dashboard.
//!
//! The dashboard is a client-side application: every client route must be
//! answered with the same `index.html`, while the hashed JS/WASM/CSS assets
//! are served from the `dist` directory as-is. Paths that are neither a
//! client route nor an existing file get a plain 404.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use shutterbook_domain::route::Route;

/// Shown when the dashboard bundle has not been built yet.
const PLACEHOLDER_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>shutterbook</title></head>
<body>
<h1>Dashboard not built</h1>
<p>Build it with <code>trunk build --release</code> in
<code>crates/adapters/dashboard_leptos</code>, or point
<code>SHUTTERBOOK_DASHBOARD_DIR</code> at an existing bundle.</p>
<p>The JSON API is available under <a href="/api/services">/api/services</a>.</p>
</body>
</html>
"#;

/// Location of the compiled dashboard bundle.
#[derive(Debug, Clone)]
pub struct DashboardAssets {
    dist_dir: PathBuf,
}

impl DashboardAssets {
    pub fn new(dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
        }
    }

    #[must_use]
    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

/// Build the sub-router serving client routes and static assets.
///
/// Everything is answered from the fallback so that client routes resolve
/// the same way the dashboard resolves them (trailing slash and query
/// ignored).
pub fn routes<S>(assets: &DashboardAssets) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let index = assets.index_path();
    let files = ServeDir::new(assets.dist_dir());
    Router::new().fallback(move |request: Request| serve(index.clone(), files.clone(), request))
}

async fn serve(index: PathBuf, files: ServeDir, request: Request) -> Response {
    let is_read = matches!(*request.method(), Method::GET | Method::HEAD);
    if is_read && Route::from_path(request.uri().path()).is_some() {
        return serve_index(index).await;
    }
    match files.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

async fn serve_index(index: PathBuf) -> Response {
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Html(html).into_response(),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %index.display(), "dashboard bundle missing, serving placeholder");
            Html(PLACEHOLDER_PAGE).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, path = %index.display(), "failed to read dashboard index");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
