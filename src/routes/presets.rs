//! Preset routes. Reads are public; writes need the admin bearer token.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use palette::ColorPalette;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::routes::extract::{AdminAuth, ApiJson, ApiPath};
use crate::services::presets;
use crate::services::store::Preset;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreatePresetBody {
    pub name: String,
    pub palette: ColorPalette,
}

/// `GET /api/presets`
pub async fn list_presets(State(state): State<AppState>) -> Result<Json<Vec<Preset>>, ApiError> {
    Ok(Json(state.store.list_presets().await?))
}

/// `POST /api/presets`: admin only.
pub async fn create_preset(
    State(state): State<AppState>,
    _admin: AdminAuth,
    ApiJson(body): ApiJson<CreatePresetBody>,
) -> Result<(StatusCode, Json<Preset>), ApiError> {
    let preset = presets::create_preset(state.store.as_ref(), &body.name, body.palette).await?;
    Ok((StatusCode::CREATED, Json(preset)))
}

/// `DELETE /api/presets/:id`: admin only.
pub async fn delete_preset(
    State(state): State<AppState>,
    _admin: AdminAuth,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    presets::delete_preset(state.store.as_ref(), id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
#[path = "presets_test.rs"]
mod tests;
