#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use shorturls::application::services::LinkSettings;
use shorturls::domain::clock::MockClock;
use shorturls::infrastructure::persistence::InMemoryLinkRepository;
use shorturls::routes::app_router;
use shorturls::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://sho.rt";

/// 2024-01-01T00:00:00Z
pub fn start_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_704_067_200, 0).unwrap()
}

pub fn create_test_state() -> (AppState, Arc<MockClock>) {
    let clock = Arc::new(MockClock::with_time(start_time()));
    let repository = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repository, clock.clone(), LinkSettings::new(BASE_URL));
    (state, clock)
}

pub fn create_test_server() -> (TestServer, Arc<MockClock>) {
    let (state, clock) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();
    (server, clock)
}

pub async fn create_link(server: &TestServer, url: &str, shortcode: &str, validity: f64) -> Value {
    let response = server
        .post("/shorturls")
        .json(&json!({
            "url": url,
            "shortcode": shortcode,
            "validity": validity,
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}
