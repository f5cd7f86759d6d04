//! Static asset serving

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const APP_CSS: &str = include_str!("../../../static/app.css");

/// GET /static/app.css
pub async fn serve_app_css() -> Response {
    (
        StatusCode::OK,
        [("content-type", "text/css; charset=utf-8")],
        APP_CSS,
    )
        .into_response()
}
