//! Integration tests for the public storefront endpoints.

#![allow(clippy::unwrap_used)]

use axum::http::{Method, Request, StatusCode};
use nokhba_integration_tests::TestApp;
use serde_json::json;
use tower::ServiceExt;

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn test_health() {
    let app = TestApp::in_memory();
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_categories_list_every_category() {
    let app = TestApp::in_memory();
    let (status, body) = app.get("/categories").await;
    assert_eq!(status, StatusCode::OK);

    let slugs: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, ["electronics", "home", "cars"]);
}

#[tokio::test]
async fn test_product_listing_filters() {
    let app = TestApp::in_memory();

    let (status, all) = app.get("/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 4);

    let (_, cars) = app.get("/products?category=cars").await;
    let cars = cars.as_array().unwrap();
    assert!(!cars.is_empty());
    assert!(cars.iter().all(|p| p["category"] == "cars"));

    let (_, explicit_all) = app.get("/products?category=all").await;
    assert_eq!(explicit_all, all);

    let (status, _) = app.get("/products?category=boats").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_product_detail() {
    let app = TestApp::in_memory();

    let (status, product) = app.get("/products/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["id"], "1");

    let (status, body) = app.get("/products/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("999"));
}

// =============================================================================
// Cart
// =============================================================================

#[tokio::test]
async fn test_repeated_add_increments_one_line() {
    let app = TestApp::in_memory();
    app.add_to_cart("1", 3).await;
    app.add_to_cart("2", 1).await;

    let (status, cart) = app.get("/cart").await;
    assert_eq!(status, StatusCode::OK);
    let items = cart["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], "1");
    assert_eq!(items[0]["quantity"], 3);
    assert_eq!(cart["count"], 4);

    let expected_total =
        items[0]["price"].as_u64().unwrap() * 3 + items[1]["price"].as_u64().unwrap();
    assert_eq!(cart["total"], expected_total);
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let app = TestApp::in_memory();
    let (status, _) = app.post("/cart/add", json!({ "productId": "nope" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, count) = app.get("/cart/count").await;
    assert_eq!(count["count"], 0);
}

#[tokio::test]
async fn test_update_quantity() {
    let app = TestApp::in_memory();
    app.add_to_cart("1", 1).await;

    let (status, cart) = app
        .post("/cart/update", json!({ "productId": "1", "quantity": 5 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["count"], 5);

    for bad in [0, -2] {
        let (status, _) = app
            .post("/cart/update", json!({ "productId": "1", "quantity": bad }))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
    let (_, count) = app.get("/cart/count").await;
    assert_eq!(count["count"], 5);

    let (status, _) = app
        .post("/cart/update", json!({ "productId": "3", "quantity": 2 }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let app = TestApp::in_memory();
    app.add_to_cart("2", 2).await;

    for _ in 0..2 {
        let (status, cart) = app.post("/cart/remove", json!({ "productId": "2" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cart["count"], 0);
    }
}

#[tokio::test]
async fn test_clear_cart() {
    let app = TestApp::in_memory();
    app.add_to_cart("1", 1).await;
    app.add_to_cart("4", 2).await;

    let (status, cart) = app.post("/cart/clear", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(cart["items"].as_array().unwrap().is_empty());
    assert_eq!(cart["total"], 0);
}

// =============================================================================
// Checkout
// =============================================================================

#[tokio::test]
async fn test_checkout_creates_pending_order_and_empties_cart() {
    let app = TestApp::in_memory();
    app.add_to_cart("1", 2).await;
    let (_, cart) = app.get("/cart").await;

    let order = app.checkout().await;
    assert_eq!(order["status"], "pending");
    assert_eq!(order["customerName"], "Ali");
    assert_eq!(order["totalPrice"], cart["total"]);
    assert_eq!(order["items"].as_array().unwrap().len(), 1);
    assert!(order["id"].as_str().unwrap().starts_with("ORD-"));

    let (_, count) = app.get("/cart/count").await;
    assert_eq!(count["count"], 0);

    let (status, body) = app
        .post(
            "/checkout",
            json!({ "customerName": "Ali", "city": "Casablanca", "phone": "0600000000" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("empty cart"));
}

#[tokio::test]
async fn test_checkout_with_blank_name_is_rejected() {
    let app = TestApp::in_memory();
    app.add_to_cart("3", 1).await;

    let (status, body) = app
        .post(
            "/checkout",
            json!({ "customerName": "   ", "city": "Rabat", "phone": "0611111111" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("customerName"));

    let (_, count) = app.get("/cart/count").await;
    assert_eq!(count["count"], 1);
    let (_, orders) = app.get("/admin/orders").await;
    assert!(orders.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_tracking_reports_configured_pixels() {
    let app = TestApp::in_memory();
    let (_, pixels) = app.get("/tracking").await;
    assert_eq!(pixels["fbPixel"], "");

    app.patch("/admin/settings", json!({ "fbPixel": "987" })).await;
    let (_, pixels) = app.get("/tracking").await;
    assert_eq!(pixels["fbPixel"], "987");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = TestApp::in_memory();
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/products")
                .header("x-request-id", "trace-abc")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "trace-abc");
}
