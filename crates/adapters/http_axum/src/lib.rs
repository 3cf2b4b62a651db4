//! # panstock-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** consumed by the stock dashboard
//!   (`/api/stock`)
//! - Serve the **built dashboard assets** (wasm bundle + index.html) so the
//!   client runs same-origin with the API
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `panstock-app` (for the port trait and service) and
//! `panstock-domain` (for types used in request/response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
