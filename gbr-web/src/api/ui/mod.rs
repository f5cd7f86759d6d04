//! UI Routes - server-rendered HTML pages
//!
//! - **Static Assets** (`static_assets`): stylesheet
//! - **Home** (`home`): genre categories with subgenre drilldown
//! - **Subgenre** (`subgenre`): track list for a genre/subgenre pair
//! - **Layout** (`layout`): shared document shell

use axum::{routing::get, Router};
use crate::AppState;

pub mod home;
pub mod layout;
mod static_assets;
pub mod subgenre;

use home::home_page;
use static_assets::serve_app_css;
use subgenre::subgenre_page;

/// Ask browsers for the OS color scheme hint on later requests
pub const CLIENT_HINT_HEADERS: [(&str, &str); 2] = [
    ("accept-ch", "Sec-CH-Prefers-Color-Scheme"),
    ("vary", "Sec-CH-Prefers-Color-Scheme, Cookie"),
];

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        // Page routes
        .route("/", get(home_page))
        .route("/genre/:genre/:subgenre", get(subgenre_page))
        // Static assets
        .route("/static/app.css", get(serve_app_css))
}
