//! Handlers for the `staffs` resource.
//!
//! The path is `/staffs` but the stored records are orders (name, price,
//! total, note).

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::order::{CreateOrderRequest, OrderItem, UpdateOrderRequest};
use crate::api::extractors::{ApiJson, RecordId};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/v1/staffs`
pub async fn list_staffs_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderItem>>, AppError> {
    let orders = state.order_service.list().await?;

    Ok(Json(orders.into_iter().map(OrderItem::from).collect()))
}

/// `GET /api/v1/staffs/{id}`
pub async fn get_staff_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
) -> Result<Json<OrderItem>, AppError> {
    let order = state.order_service.get(&id).await?;

    Ok(Json(order.into()))
}

/// `POST /api/v1/staffs`
///
/// Accepts any subset of the order fields.
pub async fn create_staff_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderItem>), AppError> {
    let order = state.order_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(order.into())))
}

/// `PATCH /api/v1/staffs/{id}`
pub async fn update_staff_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateOrderRequest>,
) -> Result<Json<OrderItem>, AppError> {
    let order = state.order_service.update(&id, payload.into()).await?;

    Ok(Json(order.into()))
}

/// `PUT /api/v1/staffs/{id}`
pub async fn replace_staff_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateOrderRequest>,
) -> Result<Json<OrderItem>, AppError> {
    let order = state.order_service.replace(&id, payload.into()).await?;

    Ok(Json(order.into()))
}

/// `DELETE /api/v1/staffs/{id}`
pub async fn delete_staff_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.order_service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
