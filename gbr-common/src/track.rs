//! Track model returned by the remote search endpoint

use serde::{Deserialize, Serialize};

/// Shown when the remote search response omits the artist
pub const UNKNOWN_ARTIST: &str = "Unknown artist";

/// Track artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

/// Album the track appears on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(default)]
    pub cover_small: String,
}

/// Track as returned by the remote search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: i64,
    pub title: String,
    /// Length in whole seconds
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub artist: Option<TrackArtist>,
    #[serde(default)]
    pub album: Option<TrackAlbum>,
}

impl Track {
    pub fn artist_name(&self) -> &str {
        self.artist
            .as_ref()
            .map(|artist| artist.name.as_str())
            .unwrap_or(UNKNOWN_ARTIST)
    }

    /// Small album cover URL, if the remote sent one
    pub fn cover(&self) -> Option<&str> {
        self.album
            .as_ref()
            .map(|album| album.cover_small.as_str())
            .filter(|url| !url.is_empty())
    }
}

/// Free-text search query for a genre/subgenre pair
pub fn search_query(genre_label: &str, subgenre_label: &str) -> String {
    format!("{} {}", genre_label, subgenre_label)
}

/// Format a duration in seconds as `m:ss`; negative values show as `0:00`
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
