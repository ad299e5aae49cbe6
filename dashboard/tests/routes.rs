use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use ledger_core::{MockResponder, SAMPLE_ADDRESS, SAMPLE_ADDRESS_NORMALIZED, SAMPLE_HASH};
use serde_json::{Value, json};
use tower::ServiceExt;
use xem_dashboard::{AppState, router};

fn app() -> (Router, AppState) {
    let state = AppState::new(
        Arc::new(MockResponder::new()),
        Duration::from_secs(60),
        "http://bob.nem.ninja:7778",
    );
    (router(state.clone()), state)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let req = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    send(app, req).await
}

#[tokio::test]
async fn index_serves_html() {
    let (app, _) = app();
    let resp = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("XEM Mock Dashboard"));
}

#[tokio::test]
async fn status_reports_all_three_probes() {
    let (app, _) = app();
    for _ in 0..2 {
        let (status, body) = get(&app, "/api/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["chain_height"]["data"]["height"], 4_012_345u64);
        assert_eq!(body["heartbeat"]["data"]["code"], 1);
        assert!(body["node_info"].get("error").is_none());
    }
}

#[tokio::test]
async fn hyphenated_sample_address_is_found() {
    let (app, _) = app();
    let (status, body) = get(&app, &format!("/api/account/{}", SAMPLE_ADDRESS.to_lowercase())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["account"]["balance"], "123.456789");
    assert_eq!(body["account"]["importance"], "0.00012345");
    assert_eq!(body["raw"]["account"]["balance"], 123_456_789u64);
}

#[tokio::test]
async fn unknown_account_is_404() {
    let (app, _) = app();
    let (status, body) = get(&app, "/api/account/TALICEAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("account was not found"));
}

#[tokio::test]
async fn sample_transaction_is_decoded() {
    let (app, _) = app();
    let (status, body) = get(&app, &format!("/api/transaction/{}", SAMPLE_HASH.to_uppercase())).await;
    assert_eq!(status, StatusCode::OK);
    let tx = &body["transaction"];
    assert_eq!(tx["type_code"], 257);
    assert_eq!(tx["type_name"], "Transfer Transaction");
    assert_eq!(tx["short_hash"], "a1b2c3d4...a1b2");
    assert_eq!(tx["fee"], "0.100000");
    assert_eq!(tx["transfer"]["amount"], "50.000000");
    assert_eq!(tx["transfer"]["message"]["text"], "Day la tin nhan giao dich gia.");
    assert_eq!(tx["time_utc"], "2021-06-01 22:46:25 UTC");
}

#[tokio::test]
async fn wrong_length_hash_is_rejected_before_lookup() {
    let (app, state) = app();
    let (status, body) = get(&app, "/api/transaction/abc123").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("64"));
    assert!(state.client.is_empty());
}

#[tokio::test]
async fn other_full_length_hash_is_404() {
    let (app, _) = app();
    let (status, body) = get(&app, &format!("/api/transaction/{}", "f".repeat(64))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("transaction hash"));
}

#[tokio::test]
async fn tx_type_lookup() {
    let (app, _) = app();
    let (_, body) = get(&app, "/api/tx-type/4098").await;
    assert_eq!(body["name"], "Mosaic Creation Transaction");
    let (_, body) = get(&app, "/api/tx-type/12").await;
    assert_eq!(body["name"], "Unknown Transaction Type");
    let (status, _) = get(&app, "/api/tx-type/transfer").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn session_accounts_are_append_only() {
    let (app, _) = app();
    let (status, body) = post(
        &app,
        "/api/session/accounts",
        json!({ "address": SAMPLE_ADDRESS, "label": "demo" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected_address"], SAMPLE_ADDRESS_NORMALIZED);
    assert_eq!(body["accounts"][0]["short"], "NACTUSKR...");

    post(&app, "/api/session/accounts", json!({ "address": "TB-CCCC" })).await;
    let (_, body) = post(&app, "/api/session/accounts", json!({ "address": SAMPLE_ADDRESS })).await;
    assert_eq!(body["accounts"].as_array().unwrap().len(), 2);

    let (status, _) = post(&app, "/api/session/accounts", json!({ "address": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = post(&app, "/api/session/select", json!({ "address": "nowhere" })).await;
    assert_eq!(body["selected_address"], SAMPLE_ADDRESS_NORMALIZED);
}

#[tokio::test]
async fn node_url_can_be_changed() {
    let (app, _) = app();
    let (status, body) = post(&app, "/api/session/node", json!({ "url": "http://127.0.0.1:7890" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected_node"], "http://127.0.0.1:7890");
    let (status, _) = post(&app, "/api/session/node", json!({ "url": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn distinct_misses_do_not_pile_up_once_expired() {
    let state = AppState::new(
        Arc::new(MockResponder::new()),
        Duration::ZERO,
        "http://bob.nem.ninja:7778",
    );
    let app = router(state.clone());
    for i in 0..50 {
        let (status, _) = get(&app, &format!("/api/account/TMISS{:04}", i)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
    assert_eq!(state.client.len(), 1);
}

#[tokio::test]
async fn cache_clear_drops_memoized_lookups() {
    let (app, state) = app();
    get(&app, "/api/status").await;
    assert_eq!(state.client.len(), 3);
    let (_, body) = post(&app, "/api/cache/clear", json!({})).await;
    assert_eq!(body["cleared"], 3);
    assert!(state.client.is_empty());
}
