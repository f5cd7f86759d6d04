//! HTTP API handlers for gbr-web

pub mod buildinfo;
pub mod genres;
pub mod health;
pub mod theme;
pub mod ui;

pub use buildinfo::get_build_info;
pub use genres::get_genres;
pub use health::health_routes;
pub use theme::toggle_theme;
pub use ui::ui_routes;
