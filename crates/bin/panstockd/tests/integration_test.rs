//! End-to-end smoke tests for the full panstockd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real
//! repository, real service, real axum router) and exercises the HTTP layer
//! via `tower::ServiceExt::oneshot` — no TCP port is bound. The scenario
//! tests replay the dashboard's merge flow: look up by name in the listed
//! rows, then PUT the adjusted total or POST a new item, then re-list.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use panstock_adapter_http_axum::router;
use panstock_adapter_http_axum::state::AppState;
use panstock_adapter_storage_sqlite_sqlx::{Config, SqliteStockRepository};
use panstock_app::services::StockService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let stock_repo = SqliteStockRepository::new(db.pool().clone());
    let state = AppState::new(StockService::new(stock_repo));

    router::build(state, None)
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

async fn list_stock(app: &Router) -> Vec<serde_json::Value> {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/stock")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await.as_array().unwrap().clone()
}

async fn post_item(app: &Router, nombre: &str, cantidad: i64, unidad: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/stock")
                .header("content-type", "application/json")
                .body(Body::from(format!(
                    r#"{{"nombre":"{nombre}","cantidad":{cantidad},"unidad":"{unidad}"}}"#
                )))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn put_quantity(app: &Router, id: &str, cantidad: i64) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/stock/{id}"))
                .header("content-type", "application/json")
                .body(Body::from(format!(r#"{{"cantidad":{cantidad}}}"#)))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Replay the dashboard's add/subtract merge flow against the API.
///
/// `sign` is `1` for the add form, `-1` for the subtract form. A row whose
/// name matches exactly absorbs the amount; otherwise a new row is created
/// with the amount as-is (including on subtract, the documented current
/// behavior of the client).
async fn submit_form(app: &Router, nombre: &str, cantidad: i64, unidad: &str, sign: i64) {
    let rows = list_stock(app).await;
    let existing = rows.iter().find(|row| row["nombre"] == nombre);

    let resp = match existing {
        Some(row) => {
            let id = row["id"].as_str().unwrap();
            let current = row["cantidad"].as_i64().unwrap();
            put_quantity(app, id, current + sign * cantidad).await
        }
        None => post_item(app, nombre, cantidad, unidad).await,
    };
    assert!(
        resp.status().is_success(),
        "form submission failed: {}",
        resp.status()
    );
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// API: CRUD cycle and validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_stock_crud_cycle() {
    let app = app().await;

    // Create
    let resp = post_item(&app, "Harina", 10_000, "gr").await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["nombre"], "Harina");
    assert_eq!(created["cantidad"], 10_000);
    assert_eq!(created["unidad"], "gr");

    // List
    let rows = list_stock(&app).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["nombre"], "Harina");

    // Update quantity
    let resp = put_quantity(&app, &id, 12_000).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["cantidad"], 12_000);
    assert_eq!(updated["nombre"], "Harina");

    // Delete
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/stock/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Verify gone
    let rows = list_stock(&app).await;
    assert!(rows.is_empty());
}

#[tokio::test]
async fn should_reject_create_with_empty_name() {
    let app = app().await;
    let resp = post_item(&app, "", 10, "kg").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn should_reject_create_with_non_positive_quantity() {
    let app = app().await;
    let resp = post_item(&app, "Harina", 0, "gr").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_reject_update_with_non_positive_quantity() {
    let app = app().await;
    let resp = post_item(&app, "Manteca", 10, "kg").await;
    let id = body_json(resp).await["id"].as_str().unwrap().to_string();

    let resp = put_quantity(&app, &id, -5).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_return_not_found_when_updating_unknown_item() {
    let app = app().await;
    let resp = put_quantity(&app, &uuid_like(), 5).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_reject_malformed_id_on_update() {
    let app = app().await;
    let resp = put_quantity(&app, "42", 5).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_succeed_when_deleting_unknown_id() {
    let app = app().await;
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/stock/{}", uuid_like()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

fn uuid_like() -> String {
    "00000000-0000-4000-8000-000000000000".to_string()
}

// ---------------------------------------------------------------------------
// Dashboard merge-flow scenarios
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_add_new_row_when_name_not_present() {
    let app = app().await;
    submit_form(&app, "Harina", 10_000, "gr", 1).await;

    submit_form(&app, "Manteca", 10, "kg", 1).await;

    let rows = list_stock(&app).await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["nombre"], "Manteca");
    assert_eq!(rows[1]["cantidad"], 10);
    assert_eq!(rows[1]["unidad"], "kg");
}

#[tokio::test]
async fn should_merge_into_existing_row_when_name_matches() {
    let app = app().await;
    submit_form(&app, "Manteca", 10, "kg", 1).await;

    submit_form(&app, "Manteca", 5, "kg", 1).await;

    let rows = list_stock(&app).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["cantidad"], 15);
}

#[tokio::test]
async fn should_decrease_existing_row_on_subtract() {
    let app = app().await;
    submit_form(&app, "Manteca", 15, "kg", 1).await;

    submit_form(&app, "Manteca", 5, "kg", -1).await;

    let rows = list_stock(&app).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["cantidad"], 10);
}

#[tokio::test]
async fn should_create_row_when_subtracting_unknown_name() {
    // Documented current behavior: the subtract form falls back to a
    // create, same as the add form.
    let app = app().await;
    submit_form(&app, "Harina", 10_000, "gr", 1).await;

    submit_form(&app, "Levadura", 500, "gr", -1).await;

    let rows = list_stock(&app).await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["nombre"], "Levadura");
    assert_eq!(rows[1]["cantidad"], 500);
}

#[tokio::test]
async fn should_remove_only_the_deleted_row() {
    let app = app().await;
    submit_form(&app, "Harina", 10_000, "gr", 1).await;
    submit_form(&app, "Manteca", 10, "kg", 1).await;

    let rows = list_stock(&app).await;
    let butter_id = rows[1]["id"].as_str().unwrap().to_string();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/stock/{butter_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let rows = list_stock(&app).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["nombre"], "Harina");
    assert_eq!(rows[0]["cantidad"], 10_000);
}

#[tokio::test]
async fn should_replay_the_full_bakery_scenario() {
    // Initial state: one item "Harina", 10000 gr.
    let app = app().await;
    submit_form(&app, "Harina", 10_000, "gr", 1).await;
    let initial = list_stock(&app).await.len();

    // Add Manteca/10/kg: one new row reading exactly Manteca | 10 | kg.
    submit_form(&app, "Manteca", 10, "kg", 1).await;
    let rows = list_stock(&app).await;
    assert_eq!(rows.len(), initial + 1);
    let butter = rows.iter().find(|r| r["nombre"] == "Manteca").unwrap();
    assert_eq!(butter["cantidad"], 10);
    assert_eq!(butter["unidad"], "kg");

    // Add Manteca/5/kg again: row count unchanged, quantity 15.
    submit_form(&app, "Manteca", 5, "kg", 1).await;
    let rows = list_stock(&app).await;
    assert_eq!(rows.len(), initial + 1);
    let butter = rows.iter().find(|r| r["nombre"] == "Manteca").unwrap();
    assert_eq!(butter["cantidad"], 15);

    // Subtract Manteca/5/kg: quantity back to 10.
    submit_form(&app, "Manteca", 5, "kg", -1).await;
    let rows = list_stock(&app).await;
    let butter = rows.iter().find(|r| r["nombre"] == "Manteca").unwrap();
    assert_eq!(butter["cantidad"], 10);
    let butter_id = butter["id"].as_str().unwrap().to_string();

    // Delete the Manteca row: row count returns to the original.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/stock/{butter_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let rows = list_stock(&app).await;
    assert_eq!(rows.len(), initial);
    assert_eq!(rows[0]["nombre"], "Harina");
    assert_eq!(rows[0]["cantidad"], 10_000);
}
