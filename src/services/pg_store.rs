//! Postgres-backed [`PaletteStore`].
//!
//! Palettes are stored as JSONB so the column set stays stable when palette
//! fields evolve; schema changes go through `src/db/migrations`.

use palette::ColorPalette;
use sqlx::PgPool;
use uuid::Uuid;

use super::store::{PaletteStore, Preset, SavedPalette, StoreError};

type SavedRow = (Uuid, String, Option<String>, serde_json::Value, i64, i64);
type PresetRow = (Uuid, String, serde_json::Value, i64);

pub struct PgPaletteStore {
    pool: PgPool,
}

impl PgPaletteStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn decode_palette(id: Uuid, value: serde_json::Value) -> Result<ColorPalette, StoreError> {
    serde_json::from_value(value).map_err(|source| StoreError::Corrupt { id, source })
}

fn encode_palette(id: Uuid, palette: &ColorPalette) -> Result<serde_json::Value, StoreError> {
    serde_json::to_value(palette).map_err(|source| StoreError::Corrupt { id, source })
}

fn saved_from_row(row: SavedRow) -> Result<SavedPalette, StoreError> {
    let (id, name, template_id, palette, created_at, updated_at) = row;
    Ok(SavedPalette { id, name, template_id, palette: decode_palette(id, palette)?, created_at, updated_at })
}

fn preset_from_row(row: PresetRow) -> Result<Preset, StoreError> {
    let (id, name, palette, created_at) = row;
    Ok(Preset { id, name, palette: decode_palette(id, palette)?, created_at })
}

fn upsert_saved(
    palette: &SavedPalette,
) -> Result<sqlx::query::Query<'static, sqlx::Postgres, sqlx::postgres::PgArguments>, StoreError> {
    Ok(sqlx::query(
        "INSERT INTO saved_palettes (id, name, template_id, palette, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6)
         ON CONFLICT (id) DO UPDATE SET
            name = EXCLUDED.name,
            template_id = EXCLUDED.template_id,
            palette = EXCLUDED.palette,
            updated_at = EXCLUDED.updated_at",
    )
    .bind(palette.id)
    .bind(palette.name.clone())
    .bind(palette.template_id.clone())
    .bind(encode_palette(palette.id, &palette.palette)?)
    .bind(palette.created_at)
    .bind(palette.updated_at))
}

#[async_trait::async_trait]
impl PaletteStore for PgPaletteStore {
    async fn list(&self) -> Result<Vec<SavedPalette>, StoreError> {
        let rows = sqlx::query_as::<_, SavedRow>(
            "SELECT id, name, template_id, palette, created_at, updated_at
             FROM saved_palettes
             ORDER BY created_at DESC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(saved_from_row).collect()
    }

    async fn load(&self, id: Uuid) -> Result<SavedPalette, StoreError> {
        let row = sqlx::query_as::<_, SavedRow>(
            "SELECT id, name, template_id, palette, created_at, updated_at
             FROM saved_palettes
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))?;

        saved_from_row(row)
    }

    async fn save(&self, palette: &SavedPalette) -> Result<(), StoreError> {
        upsert_saved(palette)?.execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_within(&self, palette: &SavedPalette, limit: usize) -> Result<bool, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let query = upsert_saved(palette)?;

        let mut tx = self.pool.begin().await?;
        // SHARE ROW EXCLUSIVE conflicts with itself, so capped inserts run one at a time.
        sqlx::query("LOCK TABLE saved_palettes IN SHARE ROW EXCLUSIVE MODE")
            .execute(tx.as_mut())
            .await?;
        let (count,) = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM saved_palettes")
            .fetch_one(tx.as_mut())
            .await?;
        if count >= limit {
            tx.rollback().await?;
            return Ok(false);
        }
        query.execute(tx.as_mut()).await?;
        tx.commit().await?;
        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM saved_palettes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn list_presets(&self) -> Result<Vec<Preset>, StoreError> {
        let rows = sqlx::query_as::<_, PresetRow>(
            "SELECT id, name, palette, created_at
             FROM presets
             ORDER BY created_at ASC, name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(preset_from_row).collect()
    }

    async fn save_preset(&self, preset: &Preset) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO presets (id, name, palette, created_at)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, palette = EXCLUDED.palette",
        )
        .bind(preset.id)
        .bind(&preset.name)
        .bind(encode_palette(preset.id, &preset.palette)?)
        .bind(preset.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_preset(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM presets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "pg_store_test.rs"]
mod tests;
