use super::*;
use crate::services::presets::seed_if_empty;
use crate::state::test_helpers::{sample_palette, test_app_state};

#[tokio::test]
async fn list_presets_returns_seeded_builtins() {
    let state = test_app_state();
    let seeded = seed_if_empty(state.store.as_ref()).await.expect("seed");
    let Json(presets) = list_presets(State(state)).await.expect("list");
    assert_eq!(presets.len(), seeded);
}

#[tokio::test]
async fn admin_can_create_and_delete_presets() {
    let state = test_app_state();
    let body = CreatePresetBody { name: "Admin Pick".into(), palette: sample_palette() };
    let (status, Json(preset)) = create_preset(State(state.clone()), AdminAuth, ApiJson(body)).await.expect("create");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(preset.name, "Admin Pick");

    let Json(deleted) = delete_preset(State(state.clone()), AdminAuth, ApiPath(preset.id)).await.expect("delete");
    assert_eq!(deleted["ok"], true);
    let Json(presets) = list_presets(State(state)).await.expect("list");
    assert!(presets.is_empty());
}

#[tokio::test]
async fn create_preset_rejects_invalid_palette() {
    let state = test_app_state();
    let mut palette = sample_palette();
    palette.input_bg = "hsl(nope)".into();
    let body = CreatePresetBody { name: "Broken".into(), palette };
    let err = create_preset(State(state), AdminAuth, ApiJson(body)).await.expect_err("invalid");
    assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err.body.code, "E_INVALID_COLOR");
}
