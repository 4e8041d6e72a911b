// crates/revgeo-cli/tests/helpers.rs
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use revgeo_cli::http::{router, AppState, DEFAULT_CACHE_MINUTES};
use revgeo_core::{CityDb, CityLocator, Place};
use tower::ServiceExt;

pub fn london_paris() -> CityDb {
    CityDb::new(vec![
        Place::new("London", "GB", 51.5074, -0.1278),
        Place::new("Paris", "FR", 48.8566, 2.3522),
    ])
}

pub fn make_app(locator: CityLocator) -> (Router, AppState) {
    make_app_with_cache(locator, DEFAULT_CACHE_MINUTES)
}

pub fn make_app_with_cache(locator: CityLocator, cache_minutes: u64) -> (Router, AppState) {
    let state = AppState::new(locator, cache_minutes).unwrap();
    (router(state.clone()), state)
}

/// Sends a GET and returns status, content type and body text.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String, String) {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Sends a GET and returns the `Cache-Control` header, if any.
pub async fn cache_control(app: &Router, uri: &str) -> (StatusCode, Option<String>) {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let value = resp
        .headers()
        .get("cache-control")
        .map(|v| v.to_str().unwrap().to_string());
    (resp.status(), value)
}
