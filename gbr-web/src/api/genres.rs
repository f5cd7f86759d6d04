//! Reconciled genre list endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gbr_common::ReconciledGenre;
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use crate::services::{reconciled_genres, CatalogError};
use crate::AppState;

/// Successful response body
#[derive(Debug, Serialize)]
pub struct GenresResponse {
    pub data: Vec<ReconciledGenre>,
}

/// GET /api/genres
///
/// Remote genres that match the local catalog, in local catalog order,
/// each annotated with `localName`.
pub async fn get_genres(State(state): State<AppState>) -> Result<Json<GenresResponse>, GenresError> {
    let data = reconciled_genres(&state.genre_cache, state.catalog.as_ref()).await?;
    Ok(Json(GenresResponse { data }))
}

/// Genre endpoint errors
#[derive(Debug)]
pub enum GenresError {
    /// Remote answered with a non-success status
    Upstream(u16),
    /// Transport or parse failure
    Unexpected(String),
}

impl From<CatalogError> for GenresError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Status(status) => GenresError::Upstream(status),
            other => GenresError::Unexpected(other.to_string()),
        }
    }
}

impl IntoResponse for GenresError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            GenresError::Upstream(upstream) => {
                warn!(upstream_status = upstream, "Remote genre list request rejected");
                (StatusCode::BAD_GATEWAY, "Failed to fetch remote genres")
            }
            GenresError::Unexpected(detail) => {
                warn!("Remote genre list request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected error while fetching remote genres",
                )
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
