mod common;

use axum_test::TestServer;
use serde_json::{json, Value};

use common::NOW_MS;
use rocketlink::domain::stores::ClickLedger;

const EXPIRES_MS: i64 = NOW_MS + 30 * 60_000;

#[tokio::test]
async fn test_redirect_success() {
    let (state, store, _clock) = common::create_test_state();
    common::seed_link(
        &store,
        "go1234",
        "https://example.com/target",
        NOW_MS,
        EXPIRES_MS,
    )
    .await;

    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/go1234").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_records_exactly_one_direct_click() {
    let (state, store, _clock) = common::create_test_state();
    common::seed_link(&store, "go1234", "https://example.com", NOW_MS, EXPIRES_MS).await;

    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/go1234").await;
    assert_eq!(response.status_code(), 307);

    let clicks = store.for_code("go1234").await.unwrap();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].source, "Direct");
    assert_eq!(clicks[0].location, "Unknown");
    assert_eq!(clicks[0].timestamp, NOW_MS);
}

#[tokio::test]
async fn test_redirect_captures_referrer() {
    let (state, store, _clock) = common::create_test_state();
    common::seed_link(&store, "go1234", "https://example.com", NOW_MS, EXPIRES_MS).await;

    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .get("/go1234")
        .add_header("Referer", "https://news.ycombinator.com")
        .await;
    assert_eq!(response.status_code(), 307);

    let clicks = store.for_code("go1234").await.unwrap();
    assert_eq!(clicks[0].source, "https://news.ycombinator.com");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, store, _clock) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/nosuch").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
    assert!(store.all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_redirect_expired_is_gone_and_unrecorded() {
    let (state, store, clock) = common::create_test_state();
    common::seed_link(&store, "go1234", "https://example.com", NOW_MS, EXPIRES_MS).await;

    clock.set(EXPIRES_MS + 60_000);

    let server = TestServer::new(common::test_app(state)).unwrap();

    // resolving an expired code never appends, regardless of call count
    for _ in 0..3 {
        let response = server.get("/go1234").await;
        assert_eq!(response.status_code(), 410);
        assert_eq!(response.json::<Value>()["error"]["code"], "expired");
    }

    assert!(store.all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_redirect_expiry_boundary_is_strict() {
    let (state, store, clock) = common::create_test_state();
    common::seed_link(&store, "go1234", "https://example.com", NOW_MS, EXPIRES_MS).await;

    let server = TestServer::new(common::test_app(state)).unwrap();

    // at now == expires_at the link still resolves as live
    clock.set(EXPIRES_MS);
    let response = server.get("/go1234").await;
    assert_eq!(response.status_code(), 307);
    assert_eq!(store.for_code("go1234").await.unwrap().len(), 1);

    // one millisecond later it is expired
    clock.set(EXPIRES_MS + 1);
    let response = server.get("/go1234").await;
    assert_eq!(response.status_code(), 410);
    assert_eq!(store.for_code("go1234").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_then_resolve_roundtrip() {
    let (state, store, _clock) = common::create_test_state();
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "urls": [{ "url": "https://example.com", "shortcode": "abc" }] }))
        .await;
    response.assert_status_ok();

    let response = server.get("/abc").await;
    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com");

    let clicks = store.for_code("abc").await.unwrap();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].source, "Direct");
}
