//! Shared application state for axum handlers.

use std::sync::Arc;

use panstock_app::ports::StockRepository;
use panstock_app::services::StockService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<SR> {
    /// Supply item CRUD service.
    pub stock_service: Arc<StockService<SR>>,
}

impl<SR> Clone for AppState<SR> {
    fn clone(&self) -> Self {
        Self {
            stock_service: Arc::clone(&self.stock_service),
        }
    }
}

impl<SR> AppState<SR>
where
    SR: StockRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(stock_service: StockService<SR>) -> Self {
        Self {
            stock_service: Arc::new(stock_service),
        }
    }
}
