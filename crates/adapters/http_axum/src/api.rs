//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod stock;

use axum::Router;
use axum::routing::{get, put};

use panstock_app::ports::StockRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<SR>() -> Router<AppState<SR>>
where
    SR: StockRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/stock", get(stock::list::<SR>).post(stock::create::<SR>))
        .route(
            "/stock/{id}",
            put(stock::update_quantity::<SR>).delete(stock::delete::<SR>),
        )
}
