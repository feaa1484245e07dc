//! Thin proxy routes over the backend's admin surface.
//!
//! Payloads pass through opaque; the only local policy is expiring the
//! session when the backend rejects its bearer token, and the customer
//! phone-field guard carried over from the backend's own route rules.

use axum::Json;
use axum::extract::{Path, Query, State};
use gateway::{CustomerList, GatewayError, ListQuery, OrderList, ProductList};
use serde_json::Value;

use crate::error::AppError;
use crate::routes::auth::AuthSession;
use crate::state::AppState;

pub(crate) const PHONE_UPDATE_REJECTED: &str =
    "Phone number cannot be updated through admin. Use phone auth endpoints.";

/// Map a gateway failure, expiring the session first when the backend
/// rejected its bearer token.
async fn gateway_failure(state: &AppState, token: &str, err: GatewayError) -> AppError {
    if err.is_auth_expired() {
        state.sessions.expire(token).await;
    }
    AppError::from_gateway(err)
}

async fn proxy<T>(
    state: &AppState,
    auth: &AuthSession,
    result: Result<T, GatewayError>,
) -> Result<Json<T>, AppError> {
    match result {
        Ok(value) => Ok(Json(value)),
        Err(err) => Err(gateway_failure(state, &auth.token, err).await),
    }
}

/// Customer updates must not touch the phone number; it is owned by the
/// phone-auth flow on the backend.
pub(crate) fn updates_phone(body: &Value) -> bool {
    body.get("phone").is_some_and(|v| !v.is_null())
}

// =============================================================================
// PRODUCTS
// =============================================================================

/// `GET /api/products`
pub async fn list_products(
    State(state): State<AppState>,
    auth: AuthSession,
    Query(query): Query<ListQuery>,
) -> Result<Json<ProductList>, AppError> {
    let result = state.api.list_products(&auth.session.bearer, &query).await;
    proxy(&state, &auth, result).await
}

/// `GET /api/products/{id}`
pub async fn get_product(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let result = state.api.get_product(&auth.session.bearer, &id).await;
    proxy(&state, &auth, result).await
}

/// `POST /api/products`
pub async fn create_product(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let result = state.api.create_product(&auth.session.bearer, &body).await;
    proxy(&state, &auth, result).await
}

/// `POST /api/products/{id}` — updates are POST on this backend.
pub async fn update_product(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let result = state.api.update_product(&auth.session.bearer, &id, &body).await;
    proxy(&state, &auth, result).await
}

// =============================================================================
// ORDERS
// =============================================================================

/// `GET /api/orders`
pub async fn list_orders(
    State(state): State<AppState>,
    auth: AuthSession,
    Query(query): Query<ListQuery>,
) -> Result<Json<OrderList>, AppError> {
    let result = state.api.list_orders(&auth.session.bearer, &query).await;
    proxy(&state, &auth, result).await
}

/// `GET /api/orders/{id}`
pub async fn get_order(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let result = state.api.get_order(&auth.session.bearer, &id).await;
    proxy(&state, &auth, result).await
}

// =============================================================================
// CUSTOMERS
// =============================================================================

/// `GET /api/customers`
pub async fn list_customers(
    State(state): State<AppState>,
    auth: AuthSession,
    Query(query): Query<ListQuery>,
) -> Result<Json<CustomerList>, AppError> {
    let result = state.api.list_customers(&auth.session.bearer, &query).await;
    proxy(&state, &auth, result).await
}

/// `GET /api/customers/{id}`
pub async fn get_customer(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let result = state.api.get_customer(&auth.session.bearer, &id).await;
    proxy(&state, &auth, result).await
}

/// `POST /api/customers/{id}`
pub async fn update_customer(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    if updates_phone(&body) {
        return Err(AppError::Validation(PHONE_UPDATE_REJECTED.to_owned()));
    }
    let result = state.api.update_customer(&auth.session.bearer, &id, &body).await;
    proxy(&state, &auth, result).await
}

// =============================================================================
// STORE
// =============================================================================

/// `GET /api/store`
pub async fn store_details(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<Value>, AppError> {
    let result = state.api.store(&auth.session.bearer).await;
    proxy(&state, &auth, result).await
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
