//! Integration tests for gbr-web routes
//!
//! The remote catalog is replaced by an in-process stub so every route can
//! be driven through the real router without a network.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use gbr_common::{RemoteGenre, Track};
use gbr_web::services::{CatalogError, GenreCache, MusicCatalog};
use gbr_web::{build_router, AppState};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::util::ServiceExt; // for `oneshot` method

type GenreReply = fn() -> Result<Vec<RemoteGenre>, CatalogError>;
type SearchReply = fn() -> Result<Vec<Track>, CatalogError>;

/// Catalog stub answering from fixed functions and recording search queries
struct StubCatalog {
    genres: GenreReply,
    search: SearchReply,
    queries: Mutex<Vec<String>>,
}

impl StubCatalog {
    fn new(genres: GenreReply, search: SearchReply) -> Arc<Self> {
        Arc::new(Self {
            genres,
            search,
            queries: Mutex::new(Vec::new()),
        })
    }

    fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl MusicCatalog for StubCatalog {
    async fn genres(&self) -> Result<Vec<RemoteGenre>, CatalogError> {
        (self.genres)()
    }

    async fn search(&self, query: &str) -> Result<Vec<Track>, CatalogError> {
        self.queries.lock().unwrap().push(query.to_string());
        (self.search)()
    }
}

fn remote_genres() -> Result<Vec<RemoteGenre>, CatalogError> {
    let body = json!([
        { "id": 0, "name": "All", "picture_medium": "https://img.example/all.jpg", "type": "genre" },
        { "id": 116, "name": "Rap/Hip Hop", "picture_medium": "https://img.example/rap.jpg", "type": "genre" },
        { "id": 152, "name": "Rock", "type": "genre" },
        { "id": 106, "name": "Electro", "picture_medium": "https://img.example/electro.jpg", "type": "genre" },
        { "id": 85, "name": "Alternative", "picture_medium": "https://img.example/alt.jpg", "type": "genre" },
    ]);
    Ok(serde_json::from_value(body).unwrap())
}

fn genres_rejected() -> Result<Vec<RemoteGenre>, CatalogError> {
    Err(CatalogError::Status(503))
}

fn genres_unreachable() -> Result<Vec<RemoteGenre>, CatalogError> {
    Err(CatalogError::Network("connection refused".to_string()))
}

fn genres_garbled() -> Result<Vec<RemoteGenre>, CatalogError> {
    Err(CatalogError::Parse("expected value at line 1".to_string()))
}

fn no_tracks() -> Result<Vec<Track>, CatalogError> {
    Ok(Vec::new())
}

fn search_fails() -> Result<Vec<Track>, CatalogError> {
    Err(CatalogError::Status(500))
}

fn two_tracks() -> Result<Vec<Track>, CatalogError> {
    let body = json!([
        {
            "id": 1,
            "title": "Canon in D",
            "duration": 301,
            "artist": { "name": "Pachelbel" },
            "album": { "cover_small": "https://img.example/canon.jpg" }
        },
        { "id": 2, "title": "Air", "duration": 62 }
    ]);
    Ok(serde_json::from_value(body).unwrap())
}

/// Test helper: router over a stub catalog, caching disabled
fn setup_app(catalog: Arc<StubCatalog>) -> axum::Router {
    let state = AppState::new(catalog, GenreCache::new(Duration::ZERO));
    build_router(state)
}

fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

async fn extract_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}

// =============================================================================
// Genre API
// =============================================================================

#[tokio::test]
async fn test_genres_reconciled_in_catalog_order() {
    let app = setup_app(StubCatalog::new(remote_genres, no_tracks));

    let response = app.oneshot(test_request("GET", "/api/genres")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let data = body["data"].as_array().expect("data array");
    let local_names: Vec<&str> = data
        .iter()
        .map(|genre| genre["localName"].as_str().unwrap())
        .collect();
    assert_eq!(local_names, vec!["Alternative", "Electronic", "Hip-Hop/Rap"]);

    // Remote fields pass through untouched
    assert_eq!(data[2]["id"], 116);
    assert_eq!(data[2]["name"], "Rap/Hip Hop");
    assert_eq!(data[2]["type"], "genre");
    assert_eq!(data[1]["picture_medium"], "https://img.example/electro.jpg");
}

#[tokio::test]
async fn test_genres_upstream_status_is_bad_gateway() {
    let app = setup_app(StubCatalog::new(genres_rejected, no_tracks));

    let response = app.oneshot(test_request("GET", "/api/genres")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Failed to fetch remote genres" }));
}

#[tokio::test]
async fn test_genres_network_failure_is_internal_error() {
    let app = setup_app(StubCatalog::new(genres_unreachable, no_tracks));

    let response = app.oneshot(test_request("GET", "/api/genres")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Unexpected error while fetching remote genres");
}

#[tokio::test]
async fn test_genres_parse_failure_is_internal_error() {
    let app = setup_app(StubCatalog::new(genres_garbled, no_tracks));

    let response = app.oneshot(test_request("GET", "/api/genres")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Health and build info
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app(StubCatalog::new(genres_unreachable, no_tracks));

    let response = app.oneshot(test_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "gbr-web");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_build_info_endpoint() {
    let app = setup_app(StubCatalog::new(remote_genres, no_tracks));

    let response = app.oneshot(test_request("GET", "/api/buildinfo")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert!(body["version"].is_string());
    assert!(body["git_hash"].is_string());
    assert!(body["build_profile"].is_string());
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_home_page_lists_genres_with_covers() {
    let app = setup_app(StubCatalog::new(remote_genres, no_tracks));

    let response = app.oneshot(test_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("accept-ch"));

    let html = extract_text(response.into_body()).await;
    assert!(html.contains("Categories"));
    assert!(html.contains("Fitness &amp; Workout"));
    assert!(html.contains("url('https://img.example/rap.jpg')"));
    assert!(html.contains(r#"href="/genre/classical/baroque""#));
    // Unmatched remote genres never show up
    assert!(!html.contains("all.jpg"));
}

#[tokio::test]
async fn test_home_page_falls_back_to_local_catalog() {
    let app = setup_app(StubCatalog::new(genres_rejected, no_tracks));

    let response = app.oneshot(test_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = extract_text(response.into_body()).await;
    let alternative = html.find("Alternative</span>").expect("Alternative listed");
    let industrial = html.find("Industrial</span>").expect("Industrial listed");
    assert!(alternative < industrial);
    assert!(!html.contains("background-image"));
}

#[tokio::test]
async fn test_subgenre_page_searches_with_resolved_labels() {
    let catalog = StubCatalog::new(remote_genres, two_tracks);
    let app = setup_app(catalog.clone());

    let response = app
        .oneshot(test_request("GET", "/genre/classical/baroque"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(catalog.queries(), vec!["Classical Baroque".to_string()]);

    let html = extract_text(response.into_body()).await;
    assert!(html.contains("Canon in D"));
    assert!(html.contains("Pachelbel"));
    assert!(html.contains("5:01"));
    assert!(html.contains("Unknown artist"));
    assert!(html.contains("1:02"));
}

#[tokio::test]
async fn test_subgenre_page_empty_result() {
    let app = setup_app(StubCatalog::new(remote_genres, no_tracks));

    let response = app
        .oneshot(test_request("GET", "/genre/classical/baroque"))
        .await
        .unwrap();
    let html = extract_text(response.into_body()).await;
    assert!(html.contains("No tracks found for this subgenre yet."));
}

#[tokio::test]
async fn test_subgenre_page_search_failure_shows_empty_state() {
    let app = setup_app(StubCatalog::new(remote_genres, search_fails));

    let response = app
        .oneshot(test_request("GET", "/genre/blues/delta-blues"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = extract_text(response.into_body()).await;
    assert!(html.contains("No tracks found for this subgenre yet."));
}

#[tokio::test]
async fn test_subgenre_page_unknown_slugs_are_humanized() {
    let catalog = StubCatalog::new(remote_genres, no_tracks);
    let app = setup_app(catalog.clone());

    let response = app
        .oneshot(test_request("GET", "/genre/synth-pop/dark-wave"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(catalog.queries(), vec!["Synth Pop Dark Wave".to_string()]);

    let html = extract_text(response.into_body()).await;
    assert!(html.contains("Synth Pop"));
    assert!(html.contains("Dark Wave"));
}

#[tokio::test]
async fn test_stylesheet_served() {
    let app = setup_app(StubCatalog::new(remote_genres, no_tracks));

    let response = app.oneshot(test_request("GET", "/static/app.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/css; charset=utf-8"
    );
}

// =============================================================================
// Theme
// =============================================================================

#[tokio::test]
async fn test_page_renders_dark_from_cookie() {
    let app = setup_app(StubCatalog::new(remote_genres, no_tracks));

    let request = Request::builder()
        .uri("/")
        .header(header::COOKIE, "theme=dark")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let html = extract_text(response.into_body()).await;
    assert!(html.contains(r#"<html lang="en" class="dark">"#));
    assert!(html.contains(r#"aria-pressed="true""#));
    assert!(html.contains("Switch to light mode"));
}

#[tokio::test]
async fn test_toggle_from_os_dark_sets_light_cookie() {
    let app = setup_app(StubCatalog::new(remote_genres, no_tracks));

    let request = Request::builder()
        .method("POST")
        .uri("/theme")
        .header("sec-ch-prefers-color-scheme", "\"dark\"")
        .header(header::REFERER, "http://localhost:5780/genre/blues/blues-rock")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/genre/blues/blues-rock");
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("theme=light;"));
}

#[tokio::test]
async fn test_toggle_without_preference_goes_dark() {
    let app = setup_app(StubCatalog::new(remote_genres, no_tracks));

    let response = app.oneshot(test_request("POST", "/theme")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("theme=dark;"));
}
