//! Home page: genre categories
//!
//! Shows the local catalog, reordered to follow the reconciled remote list
//! when it is available, with each genre expanding to its subgenre links.
//! Any remote failure leaves the local order and no cover images.

use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse},
};
use gbr_common::reconcile::{cover_images, order_catalog};
use gbr_common::slug::subgenre_path;
use gbr_common::{CanonicalGenre, FetchOutcome, GENRES};
use std::collections::HashMap;

use super::layout::{escape_html, render_page, Page};
use super::CLIENT_HINT_HEADERS;
use crate::api::theme::theme_for_request;
use crate::services::load_genre_listing;
use crate::AppState;

/// GET /
pub async fn home_page(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let listing = load_genre_listing(&state.genre_cache, state.catalog.as_ref()).await;
    if let FetchOutcome::Empty = listing {
        tracing::debug!("No remote genres matched the catalog, keeping local order");
    }
    let reconciled = listing.unwrap_or_default();

    let ordered = order_catalog(&reconciled, GENRES);
    let images = cover_images(&reconciled);
    let theme = theme_for_request(&headers);

    let page = Page {
        caption: "Categories",
        eyebrow: None,
        heading: "Categories",
        back_href: None,
        body: render_genre_list(&ordered, &images),
    };

    (
        CLIENT_HINT_HEADERS,
        Html(render_page(&page, theme.theme(), theme.indicator())),
    )
}

/// Genre tiles with expandable subgenre panels
///
/// Panels are `<details>` sharing one `name`, so opening one closes the
/// others.
pub fn render_genre_list(genres: &[&CanonicalGenre], images: &HashMap<String, String>) -> String {
    let mut html = String::from(r#"<div class="genre-list">"#);

    for genre in genres {
        let panel_style = images
            .get(genre.name)
            .and_then(|url| css_url(url))
            .map(|url| {
                format!(
                    r#" style="background-image: linear-gradient(var(--panel-veil), var(--panel-veil)), url('{}')""#,
                    escape_html(&url)
                )
            })
            .unwrap_or_default();

        html.push_str(&format!(
            r#"
    <details class="genre" name="genres" style="--genre-bg: {light}; --genre-bg-dark: {dark}">
        <summary class="genre-header"><span>{name}</span><span class="dots">&bull;&bull;&bull;</span></summary>"#,
            light = escape_html(genre.colors.light),
            dark = escape_html(genre.colors.dark),
            name = escape_html(genre.name),
        ));

        if !genre.subgenres.is_empty() {
            html.push_str(&format!(r#"
        <div class="subgenres"{}>"#, panel_style));
            for subgenre in genre.subgenres {
                html.push_str(&format!(
                    r#"
            <a class="subgenre-link" href="{href}"><span>{label}</span><span class="chevron">&rsaquo;</span></a>"#,
                    href = escape_html(&subgenre_path(genre.name, subgenre)),
                    label = escape_html(subgenre),
                ));
            }
            html.push_str("\n        </div>");
        }

        html.push_str("\n    </details>");
    }

    html.push_str("\n</div>");
    html
}

/// Cover URL made safe for a quoted CSS `url('...')`
///
/// Only http(s) URLs are accepted. Quotes, parentheses, backslashes,
/// angle brackets and whitespace are percent-encoded, since entity-escaped
/// characters are decoded again before the CSS parser sees them.
fn css_url(url: &str) -> Option<String> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return None;
    }

    let mut encoded = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '\'' | '"' | '(' | ')' | '\\' | '<' | '>' => {
                encoded.push_str(&format!("%{:02X}", c as u32));
            }
            c if c.is_whitespace() || c.is_control() => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    encoded.push_str(&format!("%{:02X}", byte));
                }
            }
            c => encoded.push(c),
        }
    }
    Some(encoded)
}
