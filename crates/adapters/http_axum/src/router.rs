//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use panstock_app::ports::StockRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and, when `dashboard_assets` is given,
/// serves the built dashboard for every other path. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG`
/// level using the `tracing` ecosystem.
pub fn build<SR>(state: AppState<SR>, dashboard_assets: Option<&Path>) -> Router
where
    SR: StockRepository + Send + Sync + 'static,
{
    let mut router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes());

    if let Some(dir) = dashboard_assets {
        router = router.merge(crate::dashboard::routes(dir));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
