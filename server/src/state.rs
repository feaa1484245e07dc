//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the commerce backend behind the `CommerceApi` trait seam and
//! the explicitly constructed session store — no ambient globals, so tests
//! swap in a mock backend and a fresh store per case.

use std::sync::Arc;

use gateway::CommerceApi;

use crate::session::SessionStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn CommerceApi>,
    pub sessions: SessionStore,
}

impl AppState {
    #[must_use]
    pub fn new(api: Arc<dyn CommerceApi>, sessions: SessionStore) -> Self {
        Self { api, sessions }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::atomic::AtomicUsize;

    use async_trait::async_trait;
    use gateway::{
        AdminUser, Customer, CustomerList, GatewayError, ListQuery, LoginResponse, Order,
        OrderList, Product, ProductList,
    };
    use serde_json::{Value, json};

    use super::*;

    /// Scriptable stand-in for the commerce backend.
    pub struct MockCommerce {
        /// Credentials accepted by `login`; everything else is rejected.
        pub valid_credentials: Option<(String, String)>,
        /// Bearer token issued on successful login and accepted elsewhere.
        pub bearer: String,
        /// Profile returned by `me` for the accepted bearer.
        pub profile: Option<AdminUser>,
        pub fail_login: bool,
        pub fail_logout: bool,
        pub fail_lists: bool,
        pub products: ProductList,
        pub orders: OrderList,
        pub customers: CustomerList,
        pub logout_calls: AtomicUsize,
    }

    impl MockCommerce {
        /// Backend that accepts one credential pair and validates its bearer.
        #[must_use]
        pub fn accepting(email: &str, password: &str) -> Self {
            Self {
                valid_credentials: Some((email.to_owned(), password.to_owned())),
                bearer: "tok_backend".to_owned(),
                profile: Some(AdminUser {
                    id: "user_1".to_owned(),
                    email: email.to_owned(),
                    first_name: Some("Ada".to_owned()),
                    last_name: Some("Admin".to_owned()),
                    role: Some("admin".to_owned()),
                }),
                fail_login: false,
                fail_logout: false,
                fail_lists: false,
                products: ProductList::default(),
                orders: OrderList::default(),
                customers: CustomerList::default(),
                logout_calls: AtomicUsize::new(0),
            }
        }

        /// Backend that rejects every credential pair and bearer.
        #[must_use]
        pub fn rejecting() -> Self {
            let mut mock = Self::accepting("nobody@example.com", "-");
            mock.valid_credentials = None;
            mock.profile = None;
            mock
        }

        fn list_failure() -> GatewayError {
            GatewayError::Api { status: 500, message: "backend exploded".into() }
        }

        fn check_bearer(&self, token: &str) -> Result<(), GatewayError> {
            if token == self.bearer { Ok(()) } else { Err(GatewayError::AuthExpired) }
        }
    }

    #[async_trait]
    impl CommerceApi for MockCommerce {
        async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, GatewayError> {
            if self.fail_login {
                return Err(GatewayError::Api { status: 500, message: "login unavailable".into() });
            }
            match &self.valid_credentials {
                Some((e, p)) if e == email && p == password => {
                    Ok(LoginResponse { token: self.bearer.clone() })
                }
                _ => Err(GatewayError::AuthExpired),
            }
        }

        async fn logout(&self, _token: &str) -> Result<(), GatewayError> {
            self.logout_calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if self.fail_logout {
                return Err(GatewayError::Api { status: 500, message: "logout failed".into() });
            }
            Ok(())
        }

        async fn me(&self, token: &str) -> Result<AdminUser, GatewayError> {
            self.check_bearer(token)?;
            self.profile.clone().ok_or(GatewayError::AuthExpired)
        }

        async fn store(&self, token: &str) -> Result<Value, GatewayError> {
            self.check_bearer(token)?;
            Ok(json!({ "store": { "name": "Test Store" } }))
        }

        async fn list_products(&self, token: &str, _query: &ListQuery) -> Result<ProductList, GatewayError> {
            self.check_bearer(token)?;
            if self.fail_lists {
                return Err(Self::list_failure());
            }
            Ok(self.products.clone())
        }

        async fn get_product(&self, token: &str, id: &str) -> Result<Value, GatewayError> {
            self.check_bearer(token)?;
            Ok(json!({ "product": { "id": id } }))
        }

        async fn create_product(&self, token: &str, body: &Value) -> Result<Value, GatewayError> {
            self.check_bearer(token)?;
            Ok(json!({ "product": body }))
        }

        async fn update_product(&self, token: &str, id: &str, body: &Value) -> Result<Value, GatewayError> {
            self.check_bearer(token)?;
            Ok(json!({ "product": { "id": id, "update": body } }))
        }

        async fn list_orders(&self, token: &str, _query: &ListQuery) -> Result<OrderList, GatewayError> {
            self.check_bearer(token)?;
            if self.fail_lists {
                return Err(Self::list_failure());
            }
            Ok(self.orders.clone())
        }

        async fn get_order(&self, token: &str, id: &str) -> Result<Value, GatewayError> {
            self.check_bearer(token)?;
            Ok(json!({ "order": { "id": id } }))
        }

        async fn list_customers(&self, token: &str, _query: &ListQuery) -> Result<CustomerList, GatewayError> {
            self.check_bearer(token)?;
            if self.fail_lists {
                return Err(Self::list_failure());
            }
            Ok(self.customers.clone())
        }

        async fn get_customer(&self, token: &str, id: &str) -> Result<Value, GatewayError> {
            self.check_bearer(token)?;
            Ok(json!({ "customer": { "id": id } }))
        }

        async fn update_customer(&self, token: &str, id: &str, body: &Value) -> Result<Value, GatewayError> {
            self.check_bearer(token)?;
            Ok(json!({ "customer": { "id": id, "update": body } }))
        }
    }

    /// Create a test `AppState` over the given mock backend.
    #[must_use]
    pub fn test_app_state(api: MockCommerce) -> AppState {
        AppState::new(Arc::new(api), SessionStore::new())
    }

    /// Seed a list of products with sequential ids.
    #[must_use]
    pub fn seed_products(n: usize) -> ProductList {
        let products = (0..n)
            .map(|i| Product {
                id: format!("prod_{i}"),
                title: Some(format!("Product {i}")),
                status: Some("published".to_owned()),
                extra: serde_json::Map::new(),
            })
            .collect();
        ProductList { products, count: None }
    }

    /// Seed orders with the given totals (in cents).
    #[must_use]
    pub fn seed_orders(totals: &[i64]) -> OrderList {
        let orders = totals
            .iter()
            .enumerate()
            .map(|(i, total)| Order {
                id: format!("order_{i}"),
                total: *total,
                extra: serde_json::Map::new(),
            })
            .collect();
        OrderList { orders, count: None }
    }

    /// Seed a list of customers with sequential ids.
    #[must_use]
    pub fn seed_customers(n: usize) -> CustomerList {
        let customers = (0..n)
            .map(|i| Customer {
                id: format!("cus_{i}"),
                email: Some(format!("customer{i}@example.com")),
                extra: serde_json::Map::new(),
            })
            .collect();
        CustomerList { customers, count: None }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
