//! URL slug codec
//!
//! Slugs are one-way: `"Hip-Hop/Rap"` becomes `hip-hop-rap` and there is no
//! inverse. Incoming slugs are resolved by re-slugging every catalog
//! candidate and comparing. Anything left unmatched is humanized so the page
//! still has a readable label.

use crate::catalog::CanonicalGenre;

/// Convert a display name to a URL path segment
///
/// Lowercases, turns every run of characters outside `[a-z0-9]` into a
/// single `-`, and trims leading/trailing hyphens.
pub fn to_slug(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;

    for c in value.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Readable label for a slug with no catalog match
///
/// Hyphens become spaces and every character that starts a word is
/// uppercased: `synth-pop` → `Synth Pop`.
pub fn humanize(slug: &str) -> String {
    let mut label = String::with_capacity(slug.len());
    let mut previous_is_word = false;

    for c in slug.chars() {
        let c = if c == '-' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !previous_is_word {
            label.push(c.to_ascii_uppercase());
        } else {
            label.push(c);
        }
        previous_is_word = is_word;
    }

    label
}

/// Path of the track page for a genre/subgenre pair
pub fn subgenre_path(genre: &str, subgenre: &str) -> String {
    format!("/genre/{}/{}", to_slug(genre), to_slug(subgenre))
}

/// Display labels recovered from a `/genre/{genre}/{subgenre}` path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLabels<'a> {
    /// Catalog genre the genre slug matched, if any
    pub genre: Option<&'a CanonicalGenre>,
    pub genre_label: String,
    pub subgenre_label: String,
}

/// Resolve incoming slugs against the catalog
///
/// The first genre whose slug equals `genre_slug` wins; its subgenres are
/// searched the same way. Subgenres are only looked up inside a matched
/// genre. Each unmatched part falls back to [`humanize`].
pub fn resolve_labels<'a>(
    genre_slug: &str,
    subgenre_slug: &str,
    catalog: &'a [CanonicalGenre],
) -> PageLabels<'a> {
    let genre = catalog.iter().find(|genre| to_slug(genre.name) == genre_slug);
    let subgenre = genre.and_then(|genre| {
        genre
            .subgenres
            .iter()
            .find(|subgenre| to_slug(subgenre) == subgenre_slug)
    });

    PageLabels {
        genre,
        genre_label: genre
            .map(|genre| genre.name.to_string())
            .unwrap_or_else(|| humanize(genre_slug)),
        subgenre_label: subgenre
            .map(|subgenre| subgenre.to_string())
            .unwrap_or_else(|| humanize(subgenre_slug)),
    }
}
