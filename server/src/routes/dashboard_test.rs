use super::*;

use axum::extract::State;

use crate::error::AppError;
use crate::routes::auth::AuthSession;
use crate::state::test_helpers::{
    MockCommerce, seed_customers, seed_orders, seed_products, test_app_state,
};

const EMAIL: &str = "admin@example.com";
const PASSWORD: &str = "supersecret";

async fn logged_in(state: &crate::state::AppState) -> AuthSession {
    let (token, _) = state
        .sessions
        .login(state.api.as_ref(), EMAIL, PASSWORD, None)
        .await
        .unwrap()
        .unwrap();
    let session = state.sessions.validate(&token).await.unwrap();
    AuthSession { session, token }
}

#[tokio::test]
async fn stats_aggregate_all_three_categories() {
    let mut api = MockCommerce::accepting(EMAIL, PASSWORD);
    api.products = seed_products(4);
    api.orders = seed_orders(&[1500, 2500]);
    api.customers = seed_customers(9);
    let state = test_app_state(api);
    let auth = logged_in(&state).await;

    let Json(resp) = stats(State(state), auth).await.unwrap();
    assert_eq!(resp.total_products, 4);
    assert_eq!(resp.total_orders, 2);
    assert_eq!(resp.total_customers, 9);
    assert_eq!(resp.revenue_cents, 4000);
    assert_eq!(resp.revenue_display, "$40.00");
    assert!(!resp.degraded);
}

#[tokio::test]
async fn failed_legs_degrade_to_zero_instead_of_erroring() {
    let mut api = MockCommerce::accepting(EMAIL, PASSWORD);
    api.fail_lists = true;
    let state = test_app_state(api);
    let auth = logged_in(&state).await;

    let Json(resp) = stats(State(state), auth).await.unwrap();
    assert!(resp.degraded);
    assert_eq!(resp.total_products, 0);
    assert_eq!(resp.revenue_cents, 0);
    assert_eq!(resp.revenue_display, "$0.00");
}

#[tokio::test]
async fn empty_store_is_zero_but_not_degraded() {
    let state = test_app_state(MockCommerce::accepting(EMAIL, PASSWORD));
    let auth = logged_in(&state).await;

    let Json(resp) = stats(State(state), auth).await.unwrap();
    assert!(!resp.degraded);
    assert_eq!(resp.total_orders, 0);
}

#[tokio::test]
async fn expired_bearer_clears_session_and_reports_auth() {
    let state = test_app_state(MockCommerce::accepting(EMAIL, PASSWORD));
    let mut auth = logged_in(&state).await;
    auth.session.bearer = "tok_revoked".to_owned();
    let token = auth.token.clone();

    let err = stats(State(state.clone()), auth).await.unwrap_err();
    assert!(matches!(err, AppError::AuthExpired));
    assert!(state.sessions.validate(&token).await.is_none());
}
