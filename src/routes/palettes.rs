//! Palette routes: batch generation and the saved palette library.

use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use palette::{ColorPalette, ColorRoles, ExportFormat, GeneratedPalette, GenerationConstraints};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::routes::extract::{ApiJson, ApiPath, ApiQuery, CallerPlan};
use crate::services::palettes::{self, GenerateRequest, PalettePatch};
use crate::services::store::SavedPalette;
use crate::state::AppState;

/// Batch size when the request omits `count`; still clamped to the plan.
pub const DEFAULT_BATCH_COUNT: i64 = 5;

// =============================================================================
// GENERATE
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBody {
    pub count: Option<i64>,
    /// `random`, `light`, `dark`, or a theme name.
    pub mode: Option<String>,
    /// Theme name; wins over `mode` when both are set.
    pub theme: Option<String>,
    pub base_hue: Option<f64>,
    pub harmony: Option<String>,
    pub template_id: Option<String>,
    pub seed: Option<u64>,
}

impl GenerateBody {
    fn into_request(self) -> Result<GenerateRequest, ApiError> {
        let constraints = GenerationConstraints::from_names(
            self.mode.as_deref(),
            self.theme.as_deref(),
            self.base_hue,
            self.harmony.as_deref(),
        )?;

        Ok(GenerateRequest {
            count: self.count.unwrap_or(DEFAULT_BATCH_COUNT),
            constraints,
            template_id: self.template_id,
            seed: self.seed,
        })
    }
}

/// `POST /api/palettes/generate`: random batch, clamped to the caller's plan.
pub async fn generate(
    CallerPlan(plan): CallerPlan,
    ApiJson(body): ApiJson<GenerateBody>,
) -> Result<Json<Vec<GeneratedPalette>>, ApiError> {
    let request = body.into_request()?;
    Ok(Json(palettes::generate(&plan, &request)?))
}

// =============================================================================
// SAVED PALETTES
// =============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaletteBody {
    pub name: String,
    pub palette: ColorPalette,
    pub template_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaletteBody {
    pub name: Option<String>,
    pub palette: Option<ColorPalette>,
    /// Empty string clears the template.
    pub template_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SavedPaletteDetail {
    #[serde(flatten)]
    pub saved: SavedPalette,
    pub roles: ColorRoles,
}

/// `GET /api/palettes`: saved palettes, newest first.
pub async fn list_palettes(State(state): State<AppState>) -> Result<Json<Vec<SavedPalette>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

/// `POST /api/palettes`: save a palette.
pub async fn create_palette(
    State(state): State<AppState>,
    CallerPlan(plan): CallerPlan,
    ApiJson(body): ApiJson<CreatePaletteBody>,
) -> Result<(StatusCode, Json<SavedPalette>), ApiError> {
    let saved = palettes::create_palette(state.store.as_ref(), &plan, &body.name, body.palette, body.template_id).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// `GET /api/palettes/:id`: saved palette plus derived roles.
pub async fn get_palette(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<SavedPaletteDetail>, ApiError> {
    let (saved, roles) = palettes::load_with_roles(state.store.as_ref(), id).await?;
    Ok(Json(SavedPaletteDetail { saved, roles }))
}

/// `PATCH /api/palettes/:id`: rename, recolor or retemplate.
pub async fn update_palette(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<UpdatePaletteBody>,
) -> Result<Json<SavedPalette>, ApiError> {
    let patch = PalettePatch { name: body.name, palette: body.palette, template_id: body.template_id };
    Ok(Json(palettes::update_palette(state.store.as_ref(), id, patch).await?))
}

/// `DELETE /api/palettes/:id`
pub async fn delete_palette(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    palettes::delete_palette(state.store.as_ref(), id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

// =============================================================================
// EXPORT
// =============================================================================

#[derive(Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

/// `GET /api/palettes/:id/export?format=css`: download the palette.
pub async fn export_palette(
    State(state): State<AppState>,
    CallerPlan(plan): CallerPlan,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<ExportQuery>,
) -> Result<Response, ApiError> {
    let format = match query.format.as_deref() {
        Some(raw) => raw.parse::<ExportFormat>()?,
        None => ExportFormat::Css,
    };
    let exported = palettes::export_saved(state.store.as_ref(), &plan, id, format).await?;

    Ok((
        [
            (CONTENT_TYPE, exported.format.content_type().to_owned()),
            (CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", exported.file_name)),
        ],
        exported.body,
    )
        .into_response())
}

#[cfg(test)]
#[path = "palettes_test.rs"]
mod tests;
