//! The Medusa admin HTTP client and its trait seam.
//!
//! DESIGN
//! ======
//! `MedusaGateway` is configured once with a base address, a fixed JSON
//! content type, and a request timeout. Every operation is a thin wrapper
//! issuing a single HTTP request and returning the parsed body. The bearer
//! token, when present, is attached unconditionally — the client does not
//! distinguish which endpoints need auth.
//!
//! Consumers depend on the [`CommerceApi`] trait so the backend can be
//! replaced by a mock in tests and by alternative transports later.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::models::{
    AdminUser, CustomerList, ListQuery, LoginRequest, LoginResponse, OrderList, ProductList,
    ProfileResponse,
};

// =============================================================================
// TRAIT SEAM
// =============================================================================

/// Uniform access to the commerce backend's admin surface.
///
/// Detail payloads are returned as opaque JSON; only the fields the
/// dashboard aggregates read are typed.
#[async_trait]
pub trait CommerceApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, GatewayError>;
    async fn logout(&self, token: &str) -> Result<(), GatewayError>;
    async fn me(&self, token: &str) -> Result<AdminUser, GatewayError>;
    async fn store(&self, token: &str) -> Result<Value, GatewayError>;

    async fn list_products(&self, token: &str, query: &ListQuery) -> Result<ProductList, GatewayError>;
    async fn get_product(&self, token: &str, id: &str) -> Result<Value, GatewayError>;
    async fn create_product(&self, token: &str, body: &Value) -> Result<Value, GatewayError>;
    async fn update_product(&self, token: &str, id: &str, body: &Value) -> Result<Value, GatewayError>;

    async fn list_orders(&self, token: &str, query: &ListQuery) -> Result<OrderList, GatewayError>;
    async fn get_order(&self, token: &str, id: &str) -> Result<Value, GatewayError>;

    async fn list_customers(&self, token: &str, query: &ListQuery) -> Result<CustomerList, GatewayError>;
    async fn get_customer(&self, token: &str, id: &str) -> Result<Value, GatewayError>;
    async fn update_customer(&self, token: &str, id: &str, body: &Value) -> Result<Value, GatewayError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct MedusaGateway {
    http: reqwest::Client,
    base_url: String,
}

impl MedusaGateway {
    /// Build the client from a parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Start a request, attaching the bearer credential when one is held.
    pub(crate) fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let mut req = self.http.request(method, self.endpoint(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Send a request and map non-success statuses to typed errors.
    async fn send(&self, req: RequestBuilder) -> Result<reqwest::Response, GatewayError> {
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(GatewayError::from_status(status.as_u16(), &body))
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, GatewayError> {
        resp.json::<T>().await.map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, GatewayError> {
        let resp = self.send(self.request(Method::GET, path, Some(token))).await?;
        Self::decode(resp).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        body: &Value,
    ) -> Result<T, GatewayError> {
        let resp = self
            .send(self.request(Method::POST, path, Some(token)).json(body))
            .await?;
        Self::decode(resp).await
    }
}

#[async_trait]
impl CommerceApi for MedusaGateway {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, GatewayError> {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = self
            .send(self.request(Method::POST, "/auth/user/emailpass", None).json(&body))
            .await?;
        Self::decode(resp).await
    }

    async fn logout(&self, token: &str) -> Result<(), GatewayError> {
        self.send(self.request(Method::POST, "/auth/user/emailpass/logout", Some(token)))
            .await?;
        Ok(())
    }

    async fn me(&self, token: &str) -> Result<AdminUser, GatewayError> {
        let profile: ProfileResponse = self.get_json("/admin/users/me", token).await?;
        Ok(profile.user)
    }

    async fn store(&self, token: &str) -> Result<Value, GatewayError> {
        self.get_json("/admin/store", token).await
    }

    async fn list_products(&self, token: &str, query: &ListQuery) -> Result<ProductList, GatewayError> {
        let resp = self
            .send(self.request(Method::GET, "/admin/products", Some(token)).query(query))
            .await?;
        Self::decode(resp).await
    }

    async fn get_product(&self, token: &str, id: &str) -> Result<Value, GatewayError> {
        self.get_json(&format!("/admin/products/{id}"), token).await
    }

    async fn create_product(&self, token: &str, body: &Value) -> Result<Value, GatewayError> {
        self.post_json("/admin/products", token, body).await
    }

    // Updates go through POST on this backend, not PUT/PATCH.
    async fn update_product(&self, token: &str, id: &str, body: &Value) -> Result<Value, GatewayError> {
        self.post_json(&format!("/admin/products/{id}"), token, body).await
    }

    async fn list_orders(&self, token: &str, query: &ListQuery) -> Result<OrderList, GatewayError> {
        let resp = self
            .send(self.request(Method::GET, "/admin/orders", Some(token)).query(query))
            .await?;
        Self::decode(resp).await
    }

    async fn get_order(&self, token: &str, id: &str) -> Result<Value, GatewayError> {
        self.get_json(&format!("/admin/orders/{id}"), token).await
    }

    async fn list_customers(&self, token: &str, query: &ListQuery) -> Result<CustomerList, GatewayError> {
        let resp = self
            .send(self.request(Method::GET, "/admin/customers", Some(token)).query(query))
            .await?;
        Self::decode(resp).await
    }

    async fn get_customer(&self, token: &str, id: &str) -> Result<Value, GatewayError> {
        self.get_json(&format!("/admin/customers/{id}"), token).await
    }

    async fn update_customer(&self, token: &str, id: &str, body: &Value) -> Result<Value, GatewayError> {
        self.post_json(&format!("/admin/customers/{id}"), token, body).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
