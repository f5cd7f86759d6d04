//! Track query adapter
//!
//! Builds a free-text query from a genre/subgenre label pair and relays it
//! to the remote search endpoint. No caching: every page view searches.

use gbr_common::track::search_query;
use gbr_common::{FetchOutcome, Track};
use tracing::warn;

use super::deezer_client::MusicCatalog;

/// Search for tracks, keeping failure distinct from "no results"
pub async fn search_tracks(
    catalog: &dyn MusicCatalog,
    genre_label: &str,
    subgenre_label: &str,
) -> FetchOutcome<Vec<Track>> {
    let query = search_query(genre_label, subgenre_label);

    match catalog.search(&query).await {
        Ok(tracks) => FetchOutcome::from_items(tracks),
        Err(e) => {
            warn!(query = %query, "Track search failed: {}", e);
            FetchOutcome::Failed(e.to_string())
        }
    }
}

/// Tracks for a genre/subgenre pair
///
/// Absence of results and a failed search both yield an empty list.
pub async fn fetch_tracks(
    catalog: &dyn MusicCatalog,
    genre_label: &str,
    subgenre_label: &str,
) -> Vec<Track> {
    search_tracks(catalog, genre_label, subgenre_label)
        .await
        .unwrap_or_default()
}
