use super::*;

#[test]
fn env_parse_missing_returns_default() {
    let val: u32 = env_parse("__TEST_PP_MISSING_4411__", 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_invalid_returns_default() {
    unsafe { std::env::set_var("__TEST_PP_INVALID_4412__", "lots") };
    let val: u32 = env_parse("__TEST_PP_INVALID_4412__", 7);
    assert_eq!(val, 7);
    unsafe { std::env::remove_var("__TEST_PP_INVALID_4412__") };
}

#[test]
fn env_parse_valid_value() {
    unsafe { std::env::set_var("__TEST_PP_VALID_4413__", "12") };
    let val: u32 = env_parse("__TEST_PP_VALID_4413__", 0);
    assert_eq!(val, 12);
    unsafe { std::env::remove_var("__TEST_PP_VALID_4413__") };
}

#[test]
fn non_empty_var_treats_blank_as_unset() {
    unsafe { std::env::set_var("__TEST_PP_BLANK_4414__", "   ") };
    assert_eq!(non_empty_var("__TEST_PP_BLANK_4414__"), None);
    unsafe { std::env::set_var("__TEST_PP_BLANK_4414__", "x") };
    assert_eq!(non_empty_var("__TEST_PP_BLANK_4414__").as_deref(), Some("x"));
    unsafe { std::env::remove_var("__TEST_PP_BLANK_4414__") };
}

// The only test touching the real variable names, so it runs them in sequence.
#[test]
fn from_env_defaults_overrides_and_errors() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("DB_MAX_CONNECTIONS");
        std::env::remove_var("ADMIN_TOKEN");
        std::env::remove_var("DEFAULT_PLAN");
    }
    let config = ServerConfig::from_env().expect("defaults");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.database_url, None);
    assert_eq!(config.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert_eq!(config.admin_token, None);
    assert_eq!(config.default_plan, PlanTier::Free);

    unsafe {
        std::env::set_var("PORT", "8080");
        std::env::set_var("ADMIN_TOKEN", "s3cret");
        std::env::set_var("DEFAULT_PLAN", "Pro");
    }
    let config = ServerConfig::from_env().expect("overrides");
    assert_eq!(config.port, 8080);
    assert_eq!(config.admin_token.as_deref(), Some("s3cret"));
    assert_eq!(config.default_plan, PlanTier::Pro);

    unsafe { std::env::set_var("PORT", "eighty") };
    let err = ServerConfig::from_env().expect_err("bad port");
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));

    unsafe {
        std::env::remove_var("PORT");
        std::env::set_var("DEFAULT_PLAN", "platinum");
    }
    let err = ServerConfig::from_env().expect_err("bad plan");
    assert!(matches!(err, ConfigError::Invalid { var: "DEFAULT_PLAN", .. }));

    unsafe {
        std::env::remove_var("ADMIN_TOKEN");
        std::env::remove_var("DEFAULT_PLAN");
    }
}
