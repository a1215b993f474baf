//! Palette service: batch generation, saved palette CRUD and export.
//!
//! DESIGN
//! ======
//! Plan limits are enforced here, not in the routes, so every caller of the
//! service gets the same gating. Saved-palette limits count every stored
//! palette: there are no user accounts, so the store is one shared library.

use axum::http::StatusCode;
use palette::generate::{assign_templates, generate_batch_with_rng, now_ms};
use palette::{ColorPalette, ColorRoles, ExportFormat, GeneratedPalette, GenerationConstraints, PaletteError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use uuid::Uuid;

use super::plans::{Plan, PlanError};
use super::store::{PaletteStore, SavedPalette, StoreError};
use super::templates;
use crate::error::ErrorCode;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PaletteServiceError {
    #[error("palette name must not be empty")]
    EmptyName,
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ErrorCode for PaletteServiceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "E_INVALID_NAME",
            Self::UnknownTemplate(_) => "E_UNKNOWN_TEMPLATE",
            Self::Palette(e) => e.error_code(),
            Self::Plan(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::EmptyName => StatusCode::UNPROCESSABLE_ENTITY,
            Self::UnknownTemplate(_) => StatusCode::BAD_REQUEST,
            Self::Palette(e) => e.status(),
            Self::Plan(e) => e.status(),
            Self::Store(e) => e.status(),
        }
    }
}

/// Inputs for one generate call, already parsed from the wire.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub count: i64,
    pub constraints: GenerationConstraints,
    /// Pin every item to this template instead of cycling the catalog.
    pub template_id: Option<String>,
    /// Fixed RNG seed for reproducible colors.
    pub seed: Option<u64>,
}

/// Partial update for a saved palette. `template_id: Some("")` clears the
/// template.
#[derive(Debug, Clone, Default)]
pub struct PalettePatch {
    pub name: Option<String>,
    pub palette: Option<ColorPalette>,
    pub template_id: Option<String>,
}

/// Rendered export ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPalette {
    pub format: ExportFormat,
    pub file_name: String,
    pub body: String,
}

// =============================================================================
// GENERATION
// =============================================================================

/// Generate a batch clamped to `plan` and paired with templates.
///
/// # Errors
///
/// Returns [`PaletteServiceError::UnknownTemplate`] if a pinned template id
/// is not in the catalog.
pub fn generate(plan: &Plan, request: &GenerateRequest) -> Result<Vec<GeneratedPalette>, PaletteServiceError> {
    let pinned = request
        .template_id
        .as_deref()
        .map(|id| templates::find(id).ok_or_else(|| PaletteServiceError::UnknownTemplate(id.to_owned())))
        .transpose()?;

    let count = plan.clamp_batch(request.count);
    let mut batch = match request.seed {
        Some(seed) => generate_batch_with_rng(count, &request.constraints, &mut StdRng::seed_from_u64(seed)),
        None => generate_batch_with_rng(count, &request.constraints, &mut rand::rng()),
    };

    match pinned {
        Some(template) => assign_templates(&mut batch, &[(template.id, template.name)]),
        None => assign_templates(&mut batch, &templates::assignment_pairs()),
    }

    if count < request.count {
        info!(requested = request.count, served = count, tier = %plan.tier, "batch clamped to plan limit");
    }
    Ok(batch)
}

// =============================================================================
// SAVED PALETTES
// =============================================================================

fn check_template(template_id: Option<&str>) -> Result<(), PaletteServiceError> {
    match template_id {
        Some(id) if templates::find(id).is_none() => Err(PaletteServiceError::UnknownTemplate(id.to_owned())),
        _ => Ok(()),
    }
}

fn clean_name(name: &str) -> Result<String, PaletteServiceError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PaletteServiceError::EmptyName);
    }
    Ok(name.to_owned())
}

/// Save a new palette, subject to the plan's saved-palette cap.
///
/// # Errors
///
/// Returns a validation error for a blank name, bad colors or an unknown
/// template; [`PlanError::SavedLimit`] when the cap is reached; or a store
/// error.
pub async fn create_palette(
    store: &dyn PaletteStore,
    plan: &Plan,
    name: &str,
    palette: ColorPalette,
    template_id: Option<String>,
) -> Result<SavedPalette, PaletteServiceError> {
    let name = clean_name(name)?;
    palette.validate()?;
    check_template(template_id.as_deref())?;

    let now = now_ms();
    let saved = SavedPalette { id: Uuid::new_v4(), name, template_id, palette, created_at: now, updated_at: now };
    match plan.max_saved {
        Some(limit) => {
            if !store.insert_within(&saved, limit).await? {
                return Err(PlanError::SavedLimit { tier: plan.tier, limit }.into());
            }
        }
        None => store.save(&saved).await?,
    }
    info!(palette_id = %saved.id, name = %saved.name, "palette saved");
    Ok(saved)
}

/// Load a saved palette with its derived roles.
///
/// # Errors
///
/// Returns a store error, including `NotFound`.
pub async fn load_with_roles(
    store: &dyn PaletteStore,
    id: Uuid,
) -> Result<(SavedPalette, ColorRoles), PaletteServiceError> {
    let saved = store.load(id).await?;
    let roles = palette::map_palette_to_roles(&saved.palette);
    Ok((saved, roles))
}

/// Apply `patch` to a saved palette.
///
/// # Errors
///
/// Returns the same validation errors as [`create_palette`] for the fields
/// being changed, or a store error.
pub async fn update_palette(
    store: &dyn PaletteStore,
    id: Uuid,
    patch: PalettePatch,
) -> Result<SavedPalette, PaletteServiceError> {
    let mut saved = store.load(id).await?;

    if let Some(name) = patch.name.as_deref() {
        saved.name = clean_name(name)?;
    }
    if let Some(colors) = patch.palette {
        colors.validate()?;
        saved.palette = colors;
    }
    if let Some(template_id) = patch.template_id {
        if template_id.is_empty() {
            saved.template_id = None;
        } else {
            check_template(Some(&template_id))?;
            saved.template_id = Some(template_id);
        }
    }

    saved.updated_at = now_ms().max(saved.created_at);
    store.save(&saved).await?;
    info!(palette_id = %saved.id, "palette updated");
    Ok(saved)
}

/// # Errors
///
/// Returns a store error, including `NotFound`.
pub async fn delete_palette(store: &dyn PaletteStore, id: Uuid) -> Result<(), PaletteServiceError> {
    store.delete(id).await?;
    info!(palette_id = %id, "palette deleted");
    Ok(())
}

/// Render a saved palette in `format`, if the plan allows it.
///
/// # Errors
///
/// Returns [`PlanError::ExportNotAllowed`] or a store error.
pub async fn export_saved(
    store: &dyn PaletteStore,
    plan: &Plan,
    id: Uuid,
    format: ExportFormat,
) -> Result<ExportedPalette, PaletteServiceError> {
    plan.check_export(format)?;
    let saved = store.load(id).await?;
    Ok(ExportedPalette {
        format,
        file_name: format!("{}.{}", file_stem(&saved.name), format.file_extension()),
        body: palette::export_palette(&saved.palette, format),
    })
}

/// Lowercase ASCII slug of `name` for download file names.
fn file_stem(name: &str) -> String {
    let slug = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() { "palette".to_owned() } else { slug }
}

#[cfg(test)]
#[path = "palettes_test.rs"]
mod tests;
