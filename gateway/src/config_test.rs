use super::*;

// =============================================================================
// env_string — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_string_unset_returns_default() {
    assert_eq!(env_string("__TEST_GW_ES_UNSET_17__", "fallback"), "fallback");
}

#[test]
fn env_string_set_returns_value() {
    let key = "__TEST_GW_ES_SET_18__";
    unsafe { std::env::set_var(key, "http://backend:9000") };
    assert_eq!(env_string(key, "fallback"), "http://backend:9000");
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_string_blank_returns_default() {
    let key = "__TEST_GW_ES_BLANK_19__";
    unsafe { std::env::set_var(key, "   ") };
    assert_eq!(env_string(key, "fallback"), "fallback");
    unsafe { std::env::remove_var(key) };
}

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn env_parse_unset_returns_default() {
    assert_eq!(env_parse("__TEST_GW_EP_UNSET_31__", 10u64), 10);
}

#[test]
fn env_parse_valid_number() {
    let key = "__TEST_GW_EP_VALID_32__";
    unsafe { std::env::set_var(key, "30") };
    assert_eq!(env_parse(key, 10u64), 30);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_invalid_returns_default() {
    let key = "__TEST_GW_EP_INVALID_33__";
    unsafe { std::env::set_var(key, "soon") };
    assert_eq!(env_parse(key, 10u64), 10);
    unsafe { std::env::remove_var(key) };
}

// =============================================================================
// GatewayConfig
// =============================================================================

#[test]
fn new_uses_default_timeout() {
    let config = GatewayConfig::new("http://localhost:9000");
    assert_eq!(config.base_url, "http://localhost:9000");
    assert_eq!(config.timeout, Duration::from_secs(10));
}

#[test]
fn default_base_url_is_local_backend() {
    assert_eq!(DEFAULT_BASE_URL, "http://localhost:9000");
}
