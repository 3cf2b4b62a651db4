//! JSON REST handlers for supply items.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use panstock_app::ports::StockRepository;
use panstock_domain::error::{StockError, ValidationError};
use panstock_domain::id::ItemId;
use panstock_domain::supply_item::SupplyItem;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a supply item, in the backend's Spanish wire
/// vocabulary.
#[derive(Deserialize)]
pub struct CreateItemRequest {
    pub nombre: String,
    pub cantidad: i64,
    pub unidad: String,
}

/// Request body for replacing an item's quantity.
#[derive(Deserialize)]
pub struct UpdateQuantityRequest {
    pub cantidad: i64,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<SupplyItem>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<SupplyItem>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<SupplyItem>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(id: &str) -> Result<ItemId, ApiError> {
    ItemId::from_str(id)
        .map_err(|_| ApiError::from(StockError::Validation(ValidationError::InvalidId)))
}

/// `GET /api/stock`
pub async fn list<SR>(State(state): State<AppState<SR>>) -> Result<ListResponse, ApiError>
where
    SR: StockRepository + Send + Sync + 'static,
{
    let items = state.stock_service.list_items().await?;
    Ok(ListResponse::Ok(Json(items)))
}

/// `POST /api/stock`
pub async fn create<SR>(
    State(state): State<AppState<SR>>,
    Json(req): Json<CreateItemRequest>,
) -> Result<CreateResponse, ApiError>
where
    SR: StockRepository + Send + Sync + 'static,
{
    let item = SupplyItem::builder()
        .name(req.nombre)
        .quantity(req.cantidad)
        .unit(req.unidad)
        .build()?;

    let created = state.stock_service.create_item(item).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/stock/:id`
pub async fn update_quantity<SR>(
    State(state): State<AppState<SR>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateQuantityRequest>,
) -> Result<UpdateResponse, ApiError>
where
    SR: StockRepository + Send + Sync + 'static,
{
    let item_id = parse_id(&id)?;
    let updated = state
        .stock_service
        .set_quantity(item_id, req.cantidad)
        .await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /api/stock/:id`
pub async fn delete<SR>(
    State(state): State<AppState<SR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    SR: StockRepository + Send + Sync + 'static,
{
    let item_id = parse_id(&id)?;
    state.stock_service.delete_item(item_id).await?;
    Ok(DeleteResponse::NoContent)
}
