use super::*;

// =============================================================================
// LoginResponse
// =============================================================================

#[test]
fn login_response_with_token() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
    assert_eq!(resp.token, "abc123");
}

#[test]
fn login_response_missing_token_defaults_empty() {
    let resp: LoginResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.token.is_empty());
}

// =============================================================================
// AdminUser
// =============================================================================

#[test]
fn admin_user_minimal_fields() {
    let user: AdminUser =
        serde_json::from_str(r#"{"id":"user_1","email":"admin@example.com"}"#).unwrap();
    assert_eq!(user.id, "user_1");
    assert_eq!(user.email, "admin@example.com");
    assert!(user.first_name.is_none());
    assert!(user.role.is_none());
}

// =============================================================================
// Lists — counts and opaque passthrough
// =============================================================================

#[test]
fn product_list_uses_backend_count() {
    let list: ProductList =
        serde_json::from_str(r#"{"products":[{"id":"prod_1"}],"count":42}"#).unwrap();
    assert_eq!(list.total(), 42);
}

#[test]
fn product_list_missing_count_falls_back_to_length() {
    let list: ProductList =
        serde_json::from_str(r#"{"products":[{"id":"prod_1"},{"id":"prod_2"}]}"#).unwrap();
    assert_eq!(list.total(), 2);
}

#[test]
fn empty_body_is_empty_list() {
    let list: ProductList = serde_json::from_str("{}").unwrap();
    assert!(list.products.is_empty());
    assert_eq!(list.total(), 0);
}

#[test]
fn product_preserves_unknown_fields() {
    let json = r#"{"id":"prod_1","title":"Shirt","handle":"shirt","variants":[{"id":"var_1"}]}"#;
    let product: Product = serde_json::from_str(json).unwrap();
    assert_eq!(product.extra["handle"], "shirt");

    let round_tripped = serde_json::to_value(&product).unwrap();
    assert_eq!(round_tripped["variants"][0]["id"], "var_1");
}

#[test]
fn order_totals_sum_to_revenue_cents() {
    let list: OrderList = serde_json::from_str(
        r#"{"orders":[{"id":"order_1","total":1500},{"id":"order_2","total":2500}]}"#,
    )
    .unwrap();
    assert_eq!(list.revenue_cents(), 4000);
    assert_eq!(list.total(), 2);
}

#[test]
fn order_missing_total_contributes_zero() {
    let list: OrderList =
        serde_json::from_str(r#"{"orders":[{"id":"order_1"},{"id":"order_2","total":100}]}"#)
            .unwrap();
    assert_eq!(list.revenue_cents(), 100);
}

#[test]
fn customer_list_count_fallback() {
    let list: CustomerList = serde_json::from_str(
        r#"{"customers":[{"id":"cus_1","email":"a@b.co"}]}"#,
    )
    .unwrap();
    assert_eq!(list.total(), 1);
}

// =============================================================================
// ListQuery
// =============================================================================

#[test]
fn list_query_skips_absent_params() {
    let query = ListQuery::default();
    let encoded = serde_urlencoded_to_string(&query);
    assert_eq!(encoded, "");
}

#[test]
fn list_query_encodes_present_params() {
    let query = ListQuery { limit: Some(20), offset: Some(40), q: Some("shirt".into()) };
    let encoded = serde_urlencoded_to_string(&query);
    assert!(encoded.contains("limit=20"));
    assert!(encoded.contains("offset=40"));
    assert!(encoded.contains("q=shirt"));
}

fn serde_urlencoded_to_string(query: &ListQuery) -> String {
    serde_json::to_value(query)
        .unwrap()
        .as_object()
        .unwrap()
        .iter()
        .map(|(k, v)| match v {
            serde_json::Value::String(s) => format!("{k}={s}"),
            other => format!("{k}={other}"),
        })
        .collect::<Vec<_>>()
        .join("&")
}
