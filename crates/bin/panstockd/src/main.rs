//! # panstockd — panstock daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`panstock.toml` + env vars)
//! - Initialize tracing and the `SQLite` connection pool (with migrations)
//! - Construct the repository, application service, and axum router
//! - Bind to a TCP port and serve the API plus dashboard assets
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use config::Config;
use panstock_adapter_http_axum::router;
use panstock_adapter_http_axum::state::AppState;
use panstock_adapter_storage_sqlite_sqlx::SqliteStockRepository;
use panstock_app::services::StockService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = panstock_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database.url.clone(),
    }
    .build()
    .await?;

    // Repository and service
    let stock_repo = SqliteStockRepository::new(db.pool().clone());
    let stock_service = StockService::new(stock_repo);

    // HTTP
    let state = AppState::new(stock_service);
    let app = router::build(state, Some(config.dashboard.assets_dir.as_path()));

    let bind_addr = config.bind_addr();
    tracing::info!("panstockd listening on http://{bind_addr}");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
