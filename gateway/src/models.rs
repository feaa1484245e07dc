//! Wire types for the Medusa admin REST surface.
//!
//! Catalog, order, and customer payloads are mostly opaque to this system:
//! each struct names the handful of fields the dashboard and diagnostics
//! read, and flattens everything else into `extra` so payloads pass through
//! unmodified.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// AUTH
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login carries an opaque bearer token and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: String,
}

/// Admin user profile as returned by `GET /admin/users/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// `GET /admin/users/me` wraps the profile in a `user` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub user: AdminUser,
}

// =============================================================================
// COLLECTIONS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductList {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Order total in cents. Absent totals contribute zero to revenue.
    #[serde(default)]
    pub total: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderList {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerList {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub count: Option<u64>,
}

impl ProductList {
    /// Backend-reported count, falling back to the page length.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.count.unwrap_or(self.products.len() as u64)
    }
}

impl OrderList {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.count.unwrap_or(self.orders.len() as u64)
    }

    /// Sum of order totals, in cents.
    #[must_use]
    pub fn revenue_cents(&self) -> i64 {
        self.orders.iter().map(|o| o.total).sum()
    }
}

impl CustomerList {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.count.unwrap_or(self.customers.len() as u64)
    }
}

// =============================================================================
// QUERIES
// =============================================================================

/// Optional list filters forwarded to the backend as query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

#[cfg(test)]
#[path = "models_test.rs"]
mod tests;
