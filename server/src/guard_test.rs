use super::*;

// =============================================================================
// Rule 1 — protected paths without a token redirect to login
// =============================================================================

#[test]
fn protected_landing_without_token_goes_to_login() {
    assert_eq!(decide("/medusa-dashboard", false), GuardDecision::ToLogin);
}

#[test]
fn protected_subpath_without_token_goes_to_login() {
    assert_eq!(decide("/medusa-dashboard/products", false), GuardDecision::ToLogin);
}

#[test]
fn dashboard_prefix_without_token_goes_to_login() {
    assert_eq!(decide("/dashboard", false), GuardDecision::ToLogin);
    assert_eq!(decide("/dashboard/orders", false), GuardDecision::ToLogin);
}

#[test]
fn protected_path_with_token_is_allowed() {
    assert_eq!(decide("/medusa-dashboard", true), GuardDecision::Allow);
    assert_eq!(decide("/dashboard/orders", true), GuardDecision::Allow);
}

// =============================================================================
// Rule 2 — login path with a token goes to the landing page
// =============================================================================

#[test]
fn login_with_token_goes_to_landing() {
    assert_eq!(decide("/login", true), GuardDecision::ToLanding);
}

#[test]
fn login_without_token_is_allowed() {
    assert_eq!(decide("/login", false), GuardDecision::Allow);
}

// =============================================================================
// Rule 3 — root redirects to the landing page
// =============================================================================

#[test]
fn root_redirects_to_landing_without_token() {
    assert_eq!(decide("/", false), GuardDecision::ToLanding);
}

#[test]
fn root_redirects_to_landing_with_token() {
    assert_eq!(decide("/", true), GuardDecision::ToLanding);
}

// =============================================================================
// Rule 4 — everything else passes through unchanged
// =============================================================================

#[test]
fn unrelated_path_is_allowed() {
    assert_eq!(decide("/healthz", false), GuardDecision::Allow);
    assert_eq!(decide("/favicon.ico", true), GuardDecision::Allow);
}

#[test]
fn api_paths_are_never_redirected() {
    assert_eq!(decide("/api/products", false), GuardDecision::Allow);
    assert_eq!(decide("/api/dashboard/stats", false), GuardDecision::Allow);
    assert_eq!(decide("/api/auth/login", false), GuardDecision::Allow);
}

#[test]
fn rules_evaluate_in_order_first_match_wins() {
    // A protected path shadows the login rule only when it is not the
    // login path itself; the two rule sets are disjoint by construction.
    assert_eq!(decide("/medusa-dashboard", false), GuardDecision::ToLogin);
    assert_eq!(decide("/login", true), GuardDecision::ToLanding);
}

#[test]
fn constants_match_navigation_targets() {
    assert_eq!(LOGIN_PATH, "/login");
    assert_eq!(LANDING_PATH, "/medusa-dashboard");
    assert_eq!(COOKIE_NAME, "medusa_auth_token");
}
