use super::*;

#[test]
fn tier_parsing_is_case_insensitive() {
    assert_eq!("PRO".parse::<PlanTier>().expect("pro"), PlanTier::Pro);
    assert_eq!(" team ".parse::<PlanTier>().expect("team"), PlanTier::Team);
    let err = "enterprise".parse::<PlanTier>().expect_err("unknown");
    assert_eq!(err.error_code(), "E_UNKNOWN_PLAN");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn catalog_lists_tiers_cheapest_first() {
    let plans = catalog();
    let tiers: Vec<_> = plans.iter().map(|p| p.tier).collect();
    assert_eq!(tiers, vec![PlanTier::Free, PlanTier::Pro, PlanTier::Team]);
    assert!(plans.windows(2).all(|w| w[0].monthly_price_cents < w[1].monthly_price_cents));
    assert!(plans.windows(2).all(|w| w[0].max_batch < w[1].max_batch));
}

#[test]
fn clamp_batch_caps_at_plan_limit() {
    let free = PlanTier::Free.plan();
    assert_eq!(free.clamp_batch(3), 3);
    assert_eq!(free.clamp_batch(500), 5);
    assert_eq!(free.clamp_batch(0), 0);
    assert_eq!(free.clamp_batch(-4), -4);
}

#[test]
fn saved_limit_applies_to_capped_plans_only() {
    assert_eq!(PlanTier::Free.plan().max_saved, Some(10));
    assert_eq!(PlanTier::Pro.plan().max_saved, Some(200));
    assert_eq!(PlanTier::Team.plan().max_saved, None);

    let err = PlanError::SavedLimit { tier: PlanTier::Free, limit: 10 };
    assert_eq!(err.error_code(), "E_PLAN_LIMIT");
    assert_eq!(err.status(), StatusCode::FORBIDDEN);
}

#[test]
fn free_plan_exports_css_and_json_only() {
    let free = PlanTier::Free.plan();
    assert!(free.check_export(ExportFormat::Css).is_ok());
    assert!(free.check_export(ExportFormat::Json).is_ok());
    let err = free.check_export(ExportFormat::Tailwind).expect_err("tailwind");
    assert_eq!(err.error_code(), "E_PLAN_LIMIT");
    assert_eq!(err.to_string(), "tailwind export is not available on the free plan");

    let pro = PlanTier::Pro.plan();
    assert!(ExportFormat::ALL.into_iter().all(|f| pro.check_export(f).is_ok()));
}

#[test]
fn plan_serializes_camel_case() {
    let json = serde_json::to_value(PlanTier::Team.plan()).expect("serialize");
    assert_eq!(json["tier"], "team");
    assert_eq!(json["maxBatch"], 50);
    assert!(json["maxSaved"].is_null());
    assert_eq!(json["exportFormats"][2], "tailwind");
}
