//! Time-bounded cache for the remote genre list
//!
//! The remote taxonomy changes rarely, so a successful fetch is reused
//! until it is older than the configured TTL. Failures are never cached.

use gbr_common::RemoteGenre;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

use super::deezer_client::{CatalogError, MusicCatalog};

struct CachedGenres {
    fetched_at: Instant,
    genres: Vec<RemoteGenre>,
}

/// Last successful remote genre list
pub struct GenreCache {
    ttl: Duration,
    entry: RwLock<Option<CachedGenres>>,
}

impl GenreCache {
    /// A zero `ttl` disables caching
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cached genres if still fresh, otherwise fetch from `catalog`
    pub async fn get_or_fetch(
        &self,
        catalog: &dyn MusicCatalog,
    ) -> Result<Vec<RemoteGenre>, CatalogError> {
        if let Some(genres) = self.fresh().await {
            debug!(count = genres.len(), "Serving remote genres from cache");
            return Ok(genres);
        }

        let genres = catalog.genres().await?;

        if !self.ttl.is_zero() {
            *self.entry.write().await = Some(CachedGenres {
                fetched_at: Instant::now(),
                genres: genres.clone(),
            });
        }

        Ok(genres)
    }

    async fn fresh(&self) -> Option<Vec<RemoteGenre>> {
        let entry = self.entry.read().await;
        entry
            .as_ref()
            .filter(|cached| cached.fetched_at.elapsed() < self.ttl)
            .map(|cached| cached.genres.clone())
    }
}
