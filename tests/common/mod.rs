//! Shared fixtures for integration tests.
#![allow(dead_code)]

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, http::StatusCode, web};
use pam_gateway::{AppMetrics, AppState, TrackerClient, TrackerConfig, UserDirectory};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_DATABASE: &str = "test-db";

/// One request as seen by the fake tracker
#[derive(Debug, Clone)]
pub struct ReceivedEvent {
    pub authorization: Option<String>,
    pub contact_cookie: Option<String>,
    pub cookie: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
pub struct FakeTracker {
    pub events: Arc<Mutex<Vec<ReceivedEvent>>>,
    status: u16,
    reply: &'static str,
    delay: Duration,
}

impl FakeTracker {
    pub fn received(&self) -> Vec<ReceivedEvent> {
        self.events.lock().unwrap().clone()
    }
}

fn header(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
}

async fn receive_event(
    req: HttpRequest,
    body: web::Json<serde_json::Value>,
    tracker: web::Data<FakeTracker>,
) -> HttpResponse {
    tracker.events.lock().unwrap().push(ReceivedEvent {
        authorization: header(&req, "authorization"),
        contact_cookie: header(&req, "x-allow-contact-id-cookie"),
        cookie: header(&req, "cookie"),
        body: body.into_inner(),
    });

    if !tracker.delay.is_zero() {
        actix_web::rt::time::sleep(tracker.delay).await;
    }

    HttpResponse::build(StatusCode::from_u16(tracker.status).unwrap()).body(tracker.reply)
}

/// Start a tracker stand-in on an ephemeral port; returns its base URL.
pub async fn start_fake_tracker(status: u16, reply: &'static str) -> (String, FakeTracker) {
    start_slow_tracker(status, reply, Duration::ZERO).await
}

/// Like [`start_fake_tracker`], but each answer is held back for `delay`.
pub async fn start_slow_tracker(
    status: u16,
    reply: &'static str,
    delay: Duration,
) -> (String, FakeTracker) {
    let tracker = FakeTracker {
        events: Arc::new(Mutex::new(Vec::new())),
        status,
        reply,
        delay,
    };

    let data = tracker.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(data.clone()))
            .route("/trackers/events", web::post().to(receive_event))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind fake tracker");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    (format!("http://{addr}"), tracker)
}

pub fn test_state(directory: UserDirectory, endpoint: &str) -> AppState {
    test_state_with_timeout(directory, endpoint, pam_gateway::services::TRACKER_TIMEOUT)
}

pub fn test_state_with_timeout(
    directory: UserDirectory,
    endpoint: &str,
    timeout: Duration,
) -> AppState {
    let config = TrackerConfig {
        endpoint: endpoint.to_string(),
        auth_token: TEST_TOKEN.to_string(),
        database: TEST_DATABASE.to_string(),
        users_json: None,
    };
    let metrics = AppMetrics::new().expect("metrics registry");
    let tracker = TrackerClient::with_timeout(&config, Some(metrics.clone()), timeout).expect("http client");
    AppState::new(directory, tracker, metrics)
}

/// Directory from a `USERS`-style JSON document
pub fn directory_from(json: &str) -> UserDirectory {
    UserDirectory::from_json(Some(json), TEST_DATABASE)
}

/// Tracker URL nothing listens on
pub const UNREACHABLE_TRACKER: &str = "http://127.0.0.1:1";
