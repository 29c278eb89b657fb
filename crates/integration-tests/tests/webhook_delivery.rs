//! Integration tests for order webhook delivery over real HTTP.
//!
//! Each test binds a loopback listener that records the orders it receives.

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::{Json, Router, extract::State, routing::post};
use nokhba_integration_tests::TestApp;
use nokhba_storefront::services::WebhookNotifier;
use nokhba_storefront::store::StateStore;
use serde_json::{Value, json};
use tokio::sync::mpsc;

/// Start a webhook receiver. `/hook` accepts, `/broken` answers 500.
async fn spawn_receiver() -> (SocketAddr, mpsc::UnboundedReceiver<Value>) {
    let (tx, rx) = mpsc::unbounded_channel::<Value>();

    async fn accept(State(tx): State<mpsc::UnboundedSender<Value>>, Json(body): Json<Value>) {
        let _ = tx.send(body);
    }

    async fn broken(
        State(tx): State<mpsc::UnboundedSender<Value>>,
        Json(body): Json<Value>,
    ) -> StatusCode {
        let _ = tx.send(body);
        StatusCode::INTERNAL_SERVER_ERROR
    }

    let app = Router::new()
        .route("/hook", post(accept))
        .route("/broken", post(broken))
        .with_state(tx);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, rx)
}

fn webhook_app() -> TestApp {
    let notifier = WebhookNotifier::new(Duration::from_secs(5)).unwrap();
    TestApp::with(StateStore::in_memory(), Arc::new(notifier))
}

async fn expect_delivery(rx: &mut mpsc::UnboundedReceiver<Value>) -> Value {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("webhook was not delivered in time")
        .unwrap()
}

async fn expect_silence(rx: &mut mpsc::UnboundedReceiver<Value>) {
    let extra = tokio::time::timeout(Duration::from_millis(300), rx.recv()).await;
    assert!(extra.is_err(), "unexpected webhook delivery: {extra:?}");
}

#[tokio::test]
async fn test_checkout_posts_order_once() {
    let (addr, mut rx) = spawn_receiver().await;
    let app = webhook_app();
    app.patch(
        "/admin/settings",
        json!({ "googleSheetsUrl": format!("http://{addr}/hook") }),
    )
    .await;

    app.add_to_cart("1", 2).await;
    let order = app.checkout().await;

    let delivered = expect_delivery(&mut rx).await;
    assert_eq!(delivered["id"], order["id"]);
    assert_eq!(delivered["totalPrice"], order["totalPrice"]);
    assert_eq!(delivered["customerName"], "Ali");
    expect_silence(&mut rx).await;
}

#[tokio::test]
async fn test_no_delivery_without_url() {
    let (_, mut rx) = spawn_receiver().await;
    let app = webhook_app();

    app.add_to_cart("2", 1).await;
    app.checkout().await;
    expect_silence(&mut rx).await;
}

#[tokio::test]
async fn test_failed_delivery_does_not_affect_order() {
    let (addr, mut rx) = spawn_receiver().await;
    let app = webhook_app();
    app.patch(
        "/admin/settings",
        json!({ "googleSheetsUrl": format!("http://{addr}/broken") }),
    )
    .await;

    app.add_to_cart("3", 1).await;
    let order = app.checkout().await;
    let delivered = expect_delivery(&mut rx).await;
    assert_eq!(delivered["id"], order["id"]);
    expect_silence(&mut rx).await;

    let (_, orders) = app.get("/admin/orders").await;
    assert_eq!(orders[0]["id"], order["id"]);
    assert_eq!(orders[0]["status"], "pending");
}

#[tokio::test]
async fn test_unreachable_webhook_still_checks_out() {
    let app = webhook_app();
    app.patch(
        "/admin/settings",
        json!({ "googleSheetsUrl": "http://127.0.0.1:9/unreachable" }),
    )
    .await;

    app.add_to_cart("4", 1).await;
    let order = app.checkout().await;
    assert_eq!(order["status"], "pending");

    let (_, count) = app.get("/cart/count").await;
    assert_eq!(count["count"], 0);
}
