//! Reconciled genre list
//!
//! Fetches the remote taxonomy (through the cache) and reconciles it
//! against the built-in catalog. The JSON API wants the error; the home
//! page wants a [`FetchOutcome`] so it can keep the local order.

use gbr_common::{reconcile, FetchOutcome, ReconciledGenre, GENRES};
use tracing::warn;

use super::deezer_client::{CatalogError, MusicCatalog};
use super::genre_cache::GenreCache;

/// Remote genres with a confirmed local match, in catalog order
pub async fn reconciled_genres(
    cache: &GenreCache,
    catalog: &dyn MusicCatalog,
) -> Result<Vec<ReconciledGenre>, CatalogError> {
    let remote = cache.get_or_fetch(catalog).await?;
    Ok(reconcile(remote, GENRES))
}

/// Reconciled genres for a view that falls back to local data
pub async fn load_genre_listing(
    cache: &GenreCache,
    catalog: &dyn MusicCatalog,
) -> FetchOutcome<Vec<ReconciledGenre>> {
    match reconciled_genres(cache, catalog).await {
        Ok(genres) => FetchOutcome::from_items(genres),
        Err(e) => {
            warn!("Remote genre list unavailable, keeping local order: {}", e);
            FetchOutcome::Failed(e.to_string())
        }
    }
}
