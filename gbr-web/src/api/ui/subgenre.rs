//! Track list for a genre/subgenre pair

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{Html, IntoResponse},
};
use gbr_common::slug::resolve_labels;
use gbr_common::track::format_duration;
use gbr_common::{Track, GENRES};

use super::layout::{escape_html, render_page, Page};
use super::CLIENT_HINT_HEADERS;
use crate::api::theme::theme_for_request;
use crate::services::fetch_tracks;
use crate::AppState;

/// Shown when the search returns nothing (or fails)
pub const NO_TRACKS_MESSAGE: &str = "No tracks found for this subgenre yet.";

/// GET /genre/:genre/:subgenre
///
/// Slugs are resolved against the catalog; unknown ones still render with
/// a humanized label and are searched as-is.
pub async fn subgenre_page(
    State(state): State<AppState>,
    Path((genre_slug, subgenre_slug)): Path<(String, String)>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let labels = resolve_labels(&genre_slug, &subgenre_slug, GENRES);
    if labels.genre.is_none() {
        tracing::debug!(genre = %genre_slug, "Genre slug not in catalog, using humanized label");
    }

    let tracks = fetch_tracks(
        state.catalog.as_ref(),
        &labels.genre_label,
        &labels.subgenre_label,
    )
    .await;
    let theme = theme_for_request(&headers);

    let page = Page {
        caption: "Music",
        eyebrow: Some(&labels.genre_label),
        heading: &labels.subgenre_label,
        back_href: Some("/"),
        body: render_track_list(&tracks),
    };

    (
        CLIENT_HINT_HEADERS,
        Html(render_page(&page, theme.theme(), theme.indicator())),
    )
}

/// Track rows, or the empty-state notice
pub fn render_track_list(tracks: &[Track]) -> String {
    if tracks.is_empty() {
        return format!(
            r#"<div class="track-list"><div class="notice">{}</div></div>"#,
            NO_TRACKS_MESSAGE
        );
    }

    let mut html = String::from(r#"<div class="track-list">"#);
    for track in tracks {
        let cover = match track.cover() {
            Some(url) => format!(
                r#"<img class="cover" src="{}" alt="{} cover" width="48" height="48">"#,
                escape_html(url),
                escape_html(&track.title)
            ),
            None => r#"<div class="cover" aria-hidden="true"></div>"#.to_string(),
        };

        html.push_str(&format!(
            r#"
    <div class="track" data-track-id="{id}">
        {cover}
        <div class="track-text">
            <div class="track-title">{title}</div>
            <div class="track-artist">{artist}</div>
        </div>
        <div class="track-duration">{duration}</div>
    </div>"#,
            id = track.id,
            cover = cover,
            title = escape_html(&track.title),
            artist = escape_html(track.artist_name()),
            duration = format_duration(track.duration),
        ));
    }
    html.push_str("\n</div>");
    html
}
