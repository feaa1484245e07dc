//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two route families under one Axum router: the `/api` surface consumed
//! by screens and diagnostics, and the guarded page routes. The guard
//! wraps the whole router (fallback included) so it sees every incoming
//! navigation request; its rules only ever act on page paths, so API
//! requests pass through and authenticate per call via the session
//! extractor instead.

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::guard;
use crate::state::AppState;

fn api_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/products", get(admin::list_products).post(admin::create_product))
        .route("/api/products/{id}", get(admin::get_product).post(admin::update_product))
        .route("/api/orders", get(admin::list_orders))
        .route("/api/orders/{id}", get(admin::get_order))
        .route("/api/customers", get(admin::list_customers))
        .route("/api/customers/{id}", get(admin::get_customer).post(admin::update_customer))
        .route("/api/store", get(admin::store_details))
        .route("/api/dashboard/stats", get(dashboard::stats))
        .layer(cors)
}

fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(pages::login_page))
        .route("/medusa-dashboard", get(pages::dashboard_page))
        .route("/dashboard", get(pages::dashboard_alias))
}

#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api_routes())
        .merge(page_routes())
        .route("/healthz", get(healthz))
        .fallback(not_found)
        .layer(middleware::from_fn(guard::page_guard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
