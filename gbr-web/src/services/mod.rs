//! Remote catalog access and the logic built on it

pub mod deezer_client;
pub mod genre_cache;
pub mod genres;
pub mod tracks;

pub use deezer_client::{CatalogError, DeezerClient, MusicCatalog};
pub use genre_cache::GenreCache;
pub use genres::{load_genre_listing, reconciled_genres};
pub use tracks::{fetch_tracks, search_tracks};
