//! # Genre Browser Common Library
//!
//! Shared code for the genre browser service:
//! - Local genre catalog (static canonical genres)
//! - Name normalization and the remote alias table
//! - Genre reconciliation (remote taxonomy → local taxonomy)
//! - URL slug codec
//! - Track model and display helpers
//! - Theme preference state
//! - Configuration loading

pub mod alias;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod reconcile;
pub mod slug;
pub mod theme;
pub mod track;

pub use catalog::{CanonicalGenre, GenreColors, GENRES};
pub use error::{Error, Result};
pub use fetch::FetchOutcome;
pub use reconcile::{reconcile, GenreId, ReconciledGenre, RemoteGenre};
pub use theme::{Theme, ThemeState, ThemeStore};
pub use track::Track;
