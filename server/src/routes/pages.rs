//! Minimal page shells behind the route guard.
//!
//! Layout and presentation live elsewhere; these handlers exist so the
//! guard has real navigation targets to protect and redirect between.

use axum::response::{Html, Redirect};

use crate::guard::LANDING_PATH;

/// `GET /login`
pub async fn login_page() -> Html<&'static str> {
    Html(
        "<!doctype html><html><head><title>Sign in</title></head>\
         <body><main id=\"login\"></main></body></html>",
    )
}

/// `GET /medusa-dashboard`
pub async fn dashboard_page() -> Html<&'static str> {
    Html(
        "<!doctype html><html><head><title>Store Dashboard</title></head>\
         <body><main id=\"dashboard\"></main></body></html>",
    )
}

/// `GET /dashboard` — legacy alias for the landing page.
pub async fn dashboard_alias() -> Redirect {
    Redirect::temporary(LANDING_PATH)
}
