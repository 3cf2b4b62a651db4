//! Static serving of the built dashboard (wasm bundle + index.html).
//!
//! The Leptos client is compiled separately to `wasm32-unknown-unknown`;
//! this module only hands out the resulting files so the dashboard runs
//! same-origin with the API. Unknown paths fall back to `index.html`.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Build the dashboard sub-router serving static assets from `assets_dir`.
pub fn routes<S>(assets_dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let index = ServeFile::new(assets_dir.join("index.html"));
    Router::new().fallback_service(ServeDir::new(assets_dir).not_found_service(index))
}
