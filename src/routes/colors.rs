//! Stateless color routes: role mapping, contrast lookup and conversion.

use axum::http::StatusCode;
use axum::response::Json;
use palette::contrast::{brightness, classify};
use palette::{ColorPalette, ColorRoles, parse_color};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::routes::extract::ApiJson;

/// `POST /api/roles`: derive every role for a palette.
pub async fn roles(ApiJson(body): ApiJson<ColorPalette>) -> Json<ColorRoles> {
    Json(palette::map_palette_to_roles(&body))
}

#[derive(Deserialize)]
pub struct ContrastBody {
    pub background: String,
}

#[derive(Debug, Serialize)]
pub struct ContrastResponse {
    pub background: String,
    pub foreground: &'static str,
    /// Perceived brightness 0..=255, `null` when the color did not parse.
    pub brightness: Option<f64>,
}

/// `POST /api/contrast`: readable foreground for one background.
pub async fn contrast(ApiJson(body): ApiJson<ContrastBody>) -> Json<ContrastResponse> {
    let foreground = classify(&body.background).hex();
    let brightness = parse_color(&body.background).map(brightness);
    Json(ContrastResponse { background: body.background, foreground, brightness })
}

#[derive(Deserialize)]
pub struct ConvertBody {
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub hex: String,
    pub hsl: String,
}

/// `POST /api/convert`: normalize a hex or HSL color to both notations.
pub async fn convert(ApiJson(body): ApiJson<ConvertBody>) -> Result<Json<ConvertResponse>, ApiError> {
    let Some(rgb) = parse_color(&body.color) else {
        return Err(ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "E_INVALID_COLOR",
            format!("not a hex or hsl color: {:?}", body.color),
        ));
    };
    Ok(Json(ConvertResponse { hex: rgb.to_hex(), hsl: rgb.to_hsl().to_string() }))
}

#[cfg(test)]
#[path = "colors_test.rs"]
mod tests;
