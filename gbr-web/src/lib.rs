//! gbr-web library - genre browser web service
//!
//! Serves the genre list, subgenre track pages and the reconciled genre
//! JSON API on top of the remote music catalog.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod services;

use services::{GenreCache, MusicCatalog};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Remote catalog (genres and track search)
    pub catalog: Arc<dyn MusicCatalog>,
    /// Last successful remote genre list
    pub genre_cache: Arc<GenreCache>,
}

impl AppState {
    /// Create new application state
    pub fn new(catalog: Arc<dyn MusicCatalog>, genre_cache: GenreCache) -> Self {
        Self {
            catalog,
            genre_cache: Arc::new(genre_cache),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        // HTML pages and static assets
        .merge(api::ui_routes())
        // JSON API
        .route("/api/genres", get(api::get_genres))
        .route("/api/buildinfo", get(api::get_build_info))
        .route("/theme", post(api::toggle_theme))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
