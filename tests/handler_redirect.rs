mod common;

use axum::http::{StatusCode, header};
use chrono::TimeDelta;

#[tokio::test]
async fn test_redirect_success() {
    let (server, _clock) = common::create_test_server();
    common::create_link(&server, "https://a.test/x", "abcd", 10.0).await;

    let response = server.get("/shorturls/abcd").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header(header::LOCATION), "https://a.test/x");
}

#[tokio::test]
async fn test_redirect_records_referer_as_source() {
    let (server, _clock) = common::create_test_server();
    common::create_link(&server, "https://a.test/x", "abcd", 10.0).await;

    server
        .get("/shorturls/abcd")
        .add_header(header::REFERER, "https://news.test/post")
        .await
        .assert_status(StatusCode::FOUND);
    server
        .get("/shorturls/abcd")
        .await
        .assert_status(StatusCode::FOUND);

    let json = server
        .get("/shorturls/stats/abcd")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["totalClicks"], 2);
    assert_eq!(json["clickData"][0]["source"], "https://news.test/post");
    assert_eq!(json["clickData"][0]["location"], "Web");
    assert_eq!(json["clickData"][0]["timestamp"], 1_704_067_200);
    assert_eq!(json["clickData"][1]["source"], "Direct");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _clock) = common::create_test_server();

    let response = server.get("/shorturls/nonexistent").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "not_found"
    );
}

#[tokio::test]
async fn test_redirect_expired_link_is_gone() {
    let (server, clock) = common::create_test_server();
    common::create_link(&server, "https://a.test/x", "abcd", 1.0).await;

    clock.advance(TimeDelta::seconds(61));

    let response = server.get("/shorturls/abcd").await;

    response.assert_status(StatusCode::GONE);
    assert_eq!(response.json::<serde_json::Value>()["error"]["code"], "gone");

    let listing = server
        .get("/shorturls/allurls")
        .await
        .json::<serde_json::Value>();
    assert_eq!(listing["urls"][0]["totalClicks"], 0);
    assert_eq!(listing["urls"][0]["isExpired"], true);
}

#[tokio::test]
async fn test_redirect_at_exact_expiry_still_works() {
    let (server, clock) = common::create_test_server();
    common::create_link(&server, "https://a.test/x", "abcd", 1.0).await;

    clock.advance(TimeDelta::seconds(60));

    server
        .get("/shorturls/abcd")
        .await
        .assert_status(StatusCode::FOUND);
}

#[tokio::test]
async fn test_each_redirect_adds_one_click() {
    let (server, _clock) = common::create_test_server();
    common::create_link(&server, "https://a.test/x", "abcd", 10.0).await;

    for _ in 0..5 {
        server
            .get("/shorturls/abcd")
            .await
            .assert_status(StatusCode::FOUND);
    }

    let json = server
        .get("/shorturls/stats/abcd")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["totalClicks"], 5);
    assert_eq!(json["clickData"].as_array().unwrap().len(), 5);
}
