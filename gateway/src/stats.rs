//! Dashboard aggregates over the backend's list endpoints.
//!
//! DESIGN
//! ======
//! The three list requests fan out concurrently and the join waits for all
//! of them; an individual failure degrades that one category to an empty
//! contribution without aborting its siblings. The single exception is an
//! expired credential: if any leg reports `AuthExpired`, the aggregate
//! reports `AuthExpired` after every leg has settled, so session expiry is
//! handled once, centrally, no matter which request tripped it.

use serde::Serialize;

use crate::client::CommerceApi;
use crate::error::GatewayError;
use crate::models::{CustomerList, ListQuery, OrderList, ProductList};

/// Headline numbers shown on the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_products: u64,
    pub total_orders: u64,
    pub total_customers: u64,
    /// All-time revenue, in cents.
    pub revenue_cents: i64,
}

impl DashboardStats {
    /// Revenue formatted for display, e.g. `$40.00` for 4000 cents.
    #[must_use]
    pub fn revenue_display(&self) -> String {
        format!("${:.2}", self.revenue_cents as f64 / 100.0)
    }
}

/// Aggregate result plus whether any category fell back to empty.
///
/// A degraded aggregate and a legitimately empty store produce the same
/// numbers; the flag is what tells them apart.
#[derive(Debug, Clone, Serialize)]
pub struct StatsOutcome {
    pub stats: DashboardStats,
    pub degraded: bool,
}

/// Fetch products, orders, and customers concurrently and fold the results.
///
/// # Errors
///
/// Returns `AuthExpired` if any leg was rejected with 401; every other
/// failure degrades its category to zero instead of erroring.
pub async fn dashboard_stats(
    api: &dyn CommerceApi,
    token: &str,
) -> Result<StatsOutcome, GatewayError> {
    let query = ListQuery::default();
    let (products, orders, customers) = tokio::join!(
        api.list_products(token, &query),
        api.list_orders(token, &query),
        api.list_customers(token, &query),
    );
    fold_stats(products, orders, customers)
}

pub(crate) fn fold_stats(
    products: Result<ProductList, GatewayError>,
    orders: Result<OrderList, GatewayError>,
    customers: Result<CustomerList, GatewayError>,
) -> Result<StatsOutcome, GatewayError> {
    if [
        products.as_ref().err(),
        orders.as_ref().err(),
        customers.as_ref().err(),
    ]
    .into_iter()
    .flatten()
    .any(GatewayError::is_auth_expired)
    {
        return Err(GatewayError::AuthExpired);
    }

    let mut degraded = false;
    let products = products.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "product fetch failed; treating category as empty");
        degraded = true;
        ProductList::default()
    });
    let orders = orders.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "order fetch failed; treating category as empty");
        degraded = true;
        OrderList::default()
    });
    let customers = customers.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "customer fetch failed; treating category as empty");
        degraded = true;
        CustomerList::default()
    });

    Ok(StatsOutcome {
        stats: DashboardStats {
            total_products: products.total(),
            total_orders: orders.total(),
            total_customers: customers.total(),
            revenue_cents: orders.revenue_cents(),
        },
        degraded,
    })
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;
