//! Read-only catalogs: templates and plans.

use axum::response::Json;

use crate::services::plans::{self, Plan};
use crate::services::templates::{self, Template};

/// `GET /api/templates`
pub async fn list_templates() -> Json<&'static [Template]> {
    Json(templates::catalog())
}

/// `GET /api/plans`: every plan with its limits.
pub async fn list_plans() -> Json<Vec<Plan>> {
    Json(plans::catalog())
}
