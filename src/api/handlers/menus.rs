//! Handlers for the `menus` resource.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::menu::{CreateMenuRequest, MenuItem, UpdateMenuRequest};
use crate::api::extractors::{ApiJson, RecordId};
use crate::domain::entities::{MenuPatch, NewMenu};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/v1/menus`
pub async fn list_menus_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuItem>>, AppError> {
    let menus = state.menu_service.list().await?;

    Ok(Json(menus.into_iter().map(MenuItem::from).collect()))
}

/// `GET /api/v1/menus/{id}`
pub async fn get_menu_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
) -> Result<Json<MenuItem>, AppError> {
    let menu = state.menu_service.get(&id).await?;

    Ok(Json(menu.into()))
}

/// `POST /api/v1/menus`
///
/// Only `name` is required.
pub async fn create_menu_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateMenuRequest>,
) -> Result<(StatusCode, Json<MenuItem>), AppError> {
    let new_menu = NewMenu::try_from(payload)?;
    let menu = state.menu_service.create(new_menu).await?;

    Ok((StatusCode::CREATED, Json(menu.into())))
}

/// `PATCH /api/v1/menus/{id}`
pub async fn update_menu_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateMenuRequest>,
) -> Result<Json<MenuItem>, AppError> {
    let patch = MenuPatch::try_from(payload)?;
    let menu = state.menu_service.update(&id, patch).await?;

    Ok(Json(menu.into()))
}

/// `PUT /api/v1/menus/{id}`
pub async fn replace_menu_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateMenuRequest>,
) -> Result<Json<MenuItem>, AppError> {
    let new_menu = NewMenu::try_from(payload)?;
    let menu = state.menu_service.replace(&id, new_menu).await?;

    Ok(Json(menu.into()))
}

/// `DELETE /api/v1/menus/{id}`
pub async fn delete_menu_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.menu_service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
