//! Dashboard stats route — the fan-out aggregate over the list endpoints.

use axum::Json;
use axum::extract::State;
use gateway::StatsOutcome;
use serde::Serialize;

use crate::error::AppError;
use crate::routes::auth::AuthSession;
use crate::state::AppState;

/// Wire shape for `GET /api/dashboard/stats`.
///
/// `degraded` is what distinguishes an empty store from a partial outage;
/// the raw numbers alone cannot tell the two apart.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_products: u64,
    pub total_orders: u64,
    pub total_customers: u64,
    pub revenue_cents: i64,
    pub revenue_display: String,
    pub degraded: bool,
}

impl From<StatsOutcome> for DashboardResponse {
    fn from(outcome: StatsOutcome) -> Self {
        Self {
            total_products: outcome.stats.total_products,
            total_orders: outcome.stats.total_orders,
            total_customers: outcome.stats.total_customers,
            revenue_cents: outcome.stats.revenue_cents,
            revenue_display: outcome.stats.revenue_display(),
            degraded: outcome.degraded,
        }
    }
}

/// `GET /api/dashboard/stats`
pub async fn stats(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<DashboardResponse>, AppError> {
    match gateway::dashboard_stats(state.api.as_ref(), &auth.session.bearer).await {
        Ok(outcome) => Ok(Json(outcome.into())),
        Err(err) => {
            if err.is_auth_expired() {
                state.sessions.expire(&auth.token).await;
            }
            Err(AppError::from_gateway(err))
        }
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
