use super::*;
use crate::services::store::MemoryPaletteStore;
use crate::state::test_helpers::sample_palette;

#[test]
fn builtin_presets_are_valid_and_ordered() {
    let presets = builtin_presets(100);
    assert!(!presets.is_empty());
    for preset in &presets {
        preset.palette.validate().expect("builtin palette parses");
        assert!(preset.palette.section_bg_3.is_some());
    }
    let stamps: Vec<_> = presets.iter().map(|p| p.created_at).collect();
    assert_eq!(stamps[0], 100);
    assert!(stamps.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn seed_if_empty_runs_once() {
    let store = MemoryPaletteStore::new();
    let seeded = seed_if_empty(&store).await.expect("seed");
    assert_eq!(seeded, builtin_presets(0).len());
    assert_eq!(seed_if_empty(&store).await.expect("reseed"), 0);

    let names: Vec<_> = store.list_presets().await.expect("list").into_iter().map(|p| p.name).collect();
    assert_eq!(names.first().map(String::as_str), Some("Ocean Breeze"));
}

#[tokio::test]
async fn create_preset_trims_and_validates() {
    let store = MemoryPaletteStore::new();
    let preset = create_preset(&store, "  Studio  ", sample_palette()).await.expect("create");
    assert_eq!(preset.name, "Studio");
    assert_eq!(store.list_presets().await.expect("list").len(), 1);

    let err = create_preset(&store, "   ", sample_palette()).await.expect_err("blank");
    assert_eq!(err.error_code(), "E_INVALID_NAME");

    let mut bad = sample_palette();
    bad.accent = "chartreuse-ish".into();
    let err = create_preset(&store, "Bad", bad).await.expect_err("invalid color");
    assert_eq!(err.error_code(), "E_INVALID_COLOR");
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_unknown_preset_is_not_found() {
    let store = MemoryPaletteStore::new();
    let err = delete_preset(&store, Uuid::new_v4()).await.expect_err("missing");
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}
