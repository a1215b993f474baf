//! Storage seam for saved palettes and presets.
//!
//! DESIGN
//! ======
//! Handlers only see `Arc<dyn PaletteStore>`. `main` picks the Postgres
//! implementation when `DATABASE_URL` is set and the in-memory one
//! otherwise; tests always use the in-memory store.
//!
//! `save` and `save_preset` are upserts keyed by id, so create and update
//! share one path. `insert_within` is the capped insert used for new saved
//! palettes: the count check and the insert happen under one lock.

use std::collections::HashMap;

use axum::http::StatusCode;
use palette::ColorPalette;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ErrorCode;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(Uuid),
    #[error("stored record {id} is unreadable: {source}")]
    Corrupt { id: Uuid, source: serde_json::Error },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_NOT_FOUND",
            Self::Corrupt { .. } => "E_CORRUPT_RECORD",
            Self::Database(_) => "E_DATABASE",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Corrupt { .. } | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A palette a user chose to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPalette {
    pub id: Uuid,
    pub name: String,
    pub template_id: Option<String>,
    pub palette: ColorPalette,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    pub updated_at: i64,
}

/// An admin-curated palette offered to everyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: Uuid,
    pub name: String,
    pub palette: ColorPalette,
    pub created_at: i64,
}

#[async_trait::async_trait]
pub trait PaletteStore: Send + Sync {
    /// Saved palettes, newest first.
    async fn list(&self) -> Result<Vec<SavedPalette>, StoreError>;
    async fn load(&self, id: Uuid) -> Result<SavedPalette, StoreError>;
    async fn save(&self, palette: &SavedPalette) -> Result<(), StoreError>;
    /// Insert `palette` only while fewer than `limit` palettes are stored.
    /// Returns `false`, storing nothing, when the limit is already reached.
    async fn insert_within(&self, palette: &SavedPalette, limit: usize) -> Result<bool, StoreError>;
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// Presets, oldest first.
    async fn list_presets(&self) -> Result<Vec<Preset>, StoreError>;
    async fn save_preset(&self, preset: &Preset) -> Result<(), StoreError>;
    async fn delete_preset(&self, id: Uuid) -> Result<(), StoreError>;
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

#[derive(Default)]
pub struct MemoryPaletteStore {
    palettes: RwLock<HashMap<Uuid, SavedPalette>>,
    presets: RwLock<HashMap<Uuid, Preset>>,
}

impl MemoryPaletteStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl PaletteStore for MemoryPaletteStore {
    async fn list(&self) -> Result<Vec<SavedPalette>, StoreError> {
        let palettes = self.palettes.read().await;
        let mut out: Vec<SavedPalette> = palettes.values().cloned().collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(out)
    }

    async fn load(&self, id: Uuid) -> Result<SavedPalette, StoreError> {
        self.palettes
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn save(&self, palette: &SavedPalette) -> Result<(), StoreError> {
        self.palettes.write().await.insert(palette.id, palette.clone());
        Ok(())
    }

    async fn insert_within(&self, palette: &SavedPalette, limit: usize) -> Result<bool, StoreError> {
        let mut palettes = self.palettes.write().await;
        if palettes.len() >= limit {
            return Ok(false);
        }
        palettes.insert(palette.id, palette.clone());
        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        match self.palettes.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }

    async fn list_presets(&self) -> Result<Vec<Preset>, StoreError> {
        let presets = self.presets.read().await;
        let mut out: Vec<Preset> = presets.values().cloned().collect();
        out.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.name.cmp(&b.name)));
        Ok(out)
    }

    async fn save_preset(&self, preset: &Preset) -> Result<(), StoreError> {
        self.presets.write().await.insert(preset.id, preset.clone());
        Ok(())
    }

    async fn delete_preset(&self, id: Uuid) -> Result<(), StoreError> {
        match self.presets.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
