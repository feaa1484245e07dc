//! HTTP gateway to the Medusa commerce backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin screen and diagnostic tool reaches the backend through this
//! crate. It owns the base address, the request timeout, bearer-credential
//! attachment, and the mapping from HTTP failures to typed errors. It does
//! not own navigation policy: an expired session surfaces as
//! [`GatewayError::AuthExpired`] and the caller decides what to do about it.
//!
//! ERROR HANDLING
//! ==============
//! No retries, no backoff, no caching. All non-2xx responses and transport
//! failures surface as typed rejected results to the caller.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod stats;

pub use client::{CommerceApi, MedusaGateway};
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use models::{
    AdminUser, Customer, CustomerList, ListQuery, LoginRequest, LoginResponse, Order, OrderList,
    Product, ProductList,
};
pub use stats::{DashboardStats, StatsOutcome, dashboard_stats};
