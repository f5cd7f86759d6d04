//! Genre reconciliation
//!
//! Matches the remote catalog's genre taxonomy against the local canonical
//! catalog. The remote list is broader and differently named, so most of
//! the work is filtering:
//!
//! 1. Normalize each remote name
//! 2. Resolve it through the alias table, else through the normalized local names
//! 3. Drop anything without a confirmed local match
//! 4. Order survivors by the local catalog's declared order
//!
//! Reconciliation is pure and infallible; fetch failures are the caller's
//! concern.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alias::resolve_alias;
use crate::catalog::{position_of, CanonicalGenre};
use crate::normalize::normalize;

/// Remote genre identifier
///
/// The remote API sends numeric ids; string ids are accepted as well and
/// re-emitted exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenreId {
    Number(i64),
    Text(String),
}

/// Genre as returned by the remote catalog
///
/// Everything except `name` is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteGenre {
    pub id: GenreId,
    pub name: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub picture_small: String,
    #[serde(default)]
    pub picture_medium: String,
    #[serde(default)]
    pub picture_big: String,
    #[serde(default)]
    pub picture_xl: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Remote genre annotated with the local genre it matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciledGenre {
    #[serde(flatten)]
    pub remote: RemoteGenre,
    #[serde(rename = "localName")]
    pub local_name: String,
}

/// Reconcile remote genres against the local catalog
///
/// Returns only remote genres with a confirmed local match, stably sorted
/// by the position of their matched name in `catalog`. An alias pointing
/// at a name absent from `catalog` counts as no match.
pub fn reconcile(remote: Vec<RemoteGenre>, catalog: &[CanonicalGenre]) -> Vec<ReconciledGenre> {
    // Duplicate normalized names collapse to the last-seen entry
    let by_normalized: HashMap<String, &'static str> = catalog
        .iter()
        .map(|genre| (normalize(genre.name), genre.name))
        .collect();

    let remote_count = remote.len();

    let mut matched: Vec<(usize, ReconciledGenre)> = remote
        .into_iter()
        .filter_map(|genre| {
            let key = normalize(&genre.name);
            let local_name = resolve_alias(&key).or_else(|| by_normalized.get(&key).copied())?;
            let position = position_of(catalog, local_name)?;

            Some((
                position,
                ReconciledGenre {
                    remote: genre,
                    local_name: local_name.to_string(),
                },
            ))
        })
        .collect();

    // sort_by_key is stable: equal positions keep remote order
    matched.sort_by_key(|(position, _)| *position);

    debug!(
        remote = remote_count,
        matched = matched.len(),
        "Reconciled remote genres against local catalog"
    );

    matched.into_iter().map(|(_, genre)| genre).collect()
}

/// Reorder the local catalog to follow a reconciled list
///
/// Genres named in `reconciled` come first, in reconciled order (when a
/// local name appears more than once its last position counts). Genres the
/// remote side did not mention keep their relative order after them. An
/// empty reconciled list leaves the catalog order unchanged.
pub fn order_catalog<'a>(
    reconciled: &[ReconciledGenre],
    catalog: &'a [CanonicalGenre],
) -> Vec<&'a CanonicalGenre> {
    let order: HashMap<&str, usize> = reconciled
        .iter()
        .enumerate()
        .map(|(index, genre)| (genre.local_name.as_str(), index))
        .collect();

    let mut ordered: Vec<&CanonicalGenre> = catalog.iter().collect();
    ordered.sort_by(|a, b| match (order.get(a.name), order.get(b.name)) {
        (Some(a_index), Some(b_index)) => a_index.cmp(b_index),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    ordered
}

/// Map local genre name → medium cover picture
///
/// Entries with an empty medium picture are skipped; later entries win.
pub fn cover_images(reconciled: &[ReconciledGenre]) -> HashMap<String, String> {
    reconciled
        .iter()
        .filter(|genre| !genre.remote.picture_medium.is_empty())
        .map(|genre| (genre.local_name.clone(), genre.remote.picture_medium.clone()))
        .collect()
}
