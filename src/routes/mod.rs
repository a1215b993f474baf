//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the JSON API. CORS is open because the API is
//! consumed by browser previews on other origins; responses are gzip'd and
//! every request gets a `tower_http` trace span.

pub mod catalog;
pub mod colors;
pub mod extract;
pub mod palettes;
pub mod presets;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/roles", post(colors::roles))
        .route("/api/contrast", post(colors::contrast))
        .route("/api/convert", post(colors::convert))
        .route("/api/palettes/generate", post(palettes::generate))
        .route("/api/palettes", get(palettes::list_palettes).post(palettes::create_palette))
        .route(
            "/api/palettes/{id}",
            get(palettes::get_palette)
                .patch(palettes::update_palette)
                .delete(palettes::delete_palette),
        )
        .route("/api/palettes/{id}/export", get(palettes::export_palette))
        .route("/api/templates", get(catalog::list_templates))
        .route("/api/plans", get(catalog::list_plans))
        .route("/api/presets", get(presets::list_presets).post(presets::create_preset))
        .route("/api/presets/{id}", delete(presets::delete_preset))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
