//! HTTP API client wrapping `gloo-net` for calls to `/api/stock`.

use gloo_net::http::{Request, Response};
use panstock_domain::id::ItemId;
use panstock_domain::supply_item::SupplyItem;
use serde::{Deserialize, Serialize};

/// Base URL of the stock endpoint. The dashboard is served same-origin by
/// the backend, so a relative path covers both the local development
/// target and the deployed target.
const STOCK_URL: &str = "/api/stock";

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", resp.status()),
    };
    Err(ApiError { message })
}

/// Fetch the full stock list from the API.
pub async fn fetch_stock() -> Result<Vec<SupplyItem>, ApiError> {
    let resp = check_response(Request::get(STOCK_URL).send().await?).await?;
    let items: Vec<SupplyItem> = resp.json().await?;
    Ok(items)
}

/// Create a new supply item via `POST /api/stock`.
pub async fn create_item(name: &str, quantity: i64, unit: &str) -> Result<SupplyItem, ApiError> {
    #[derive(Serialize)]
    struct CreateItemRequest<'a> {
        nombre: &'a str,
        cantidad: i64,
        unidad: &'a str,
    }

    let resp = check_response(
        Request::post(STOCK_URL)
            .json(&CreateItemRequest {
                nombre: name,
                cantidad: quantity,
                unidad: unit,
            })?
            .send()
            .await?,
    )
    .await?;
    let created: SupplyItem = resp.json().await?;
    Ok(created)
}

/// Replace an item's quantity via `PUT /api/stock/{id}`.
pub async fn update_quantity(id: ItemId, quantity: i64) -> Result<SupplyItem, ApiError> {
    #[derive(Serialize)]
    struct UpdateQuantityRequest {
        cantidad: i64,
    }

    let url = format!("{STOCK_URL}/{id}");
    let resp = check_response(
        Request::put(&url)
            .json(&UpdateQuantityRequest { cantidad: quantity })?
            .send()
            .await?,
    )
    .await?;
    let updated: SupplyItem = resp.json().await?;
    Ok(updated)
}

/// Remove an item via `DELETE /api/stock/{id}`.
pub async fn delete_item(id: ItemId) -> Result<(), ApiError> {
    let url = format!("{STOCK_URL}/{id}");
    check_response(Request::delete(&url).send().await?).await?;
    Ok(())
}
