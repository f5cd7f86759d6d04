//! Local genre catalog
//!
//! The canonical genre list is the authority for display grouping and
//! ordering. Remote genres are only shown when they reconcile to one of
//! these entries. Declaration order is display order.

use serde::Serialize;

/// Light/dark display color pair for a genre tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenreColors {
    pub light: &'static str,
    pub dark: &'static str,
}

/// Canonical local genre definition
///
/// `name` is unique across the catalog and doubles as the join key for
/// reconciled remote genres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CanonicalGenre {
    pub name: &'static str,
    pub colors: GenreColors,
    /// Subgenre names, unique within the genre, in display order
    pub subgenres: &'static [&'static str],
}

/// The built-in catalog, in display order
pub const GENRES: &[CanonicalGenre] = &[
    CanonicalGenre {
        name: "Alternative",
        colors: GenreColors { light: "#D70060", dark: "#B0004D" },
        subgenres: &["Indie Rock", "Alternative Rock", "Post-Punk", "Grunge"],
    },
    CanonicalGenre {
        name: "Blues",
        colors: GenreColors { light: "#E54028", dark: "#C2361F" },
        subgenres: &[
            "Acoustic Blues",
            "Blues Rock",
            "Canadian Blues",
            "Jazz Blues",
            "Piano Blues",
            "Soul Blues",
            "Swamp Blues",
        ],
    },
    CanonicalGenre {
        name: "Classical",
        colors: GenreColors { light: "#F18D05", dark: "#C87304" },
        subgenres: &["Baroque", "Romantic", "Modern", "Chamber"],
    },
    CanonicalGenre {
        name: "Country",
        colors: GenreColors { light: "#F59E0B", dark: "#C67C09" },
        subgenres: &["Outlaw Country", "Country Pop", "Bluegrass"],
    },
    CanonicalGenre {
        name: "Dance",
        colors: GenreColors { light: "#10B981", dark: "#0D9166" },
        subgenres: &["Mouse", "Techno", "Trance"],
    },
    CanonicalGenre {
        name: "Electronic",
        colors: GenreColors { light: "#34A853", dark: "#2B8643" },
        subgenres: &["Ambient", "Synthwave", "IDM"],
    },
    CanonicalGenre {
        name: "Fitness & Workout",
        colors: GenreColors { light: "#06B6D4", dark: "#0492AA" },
        subgenres: &["HIIT", "Running", "Cycling"],
    },
    CanonicalGenre {
        name: "Hip-Hop/Rap",
        colors: GenreColors { light: "#3B82F6", dark: "#2F67C5" },
        subgenres: &["Boom Bap", "Trap", "Conscious"],
    },
    CanonicalGenre {
        name: "Industrial",
        colors: GenreColors { light: "#115793", dark: "#0D4472" },
        subgenres: &["EBM", "Industrial Rock", "Electro-Industrial"],
    },
];

/// Position of a genre name in the catalog (first occurrence)
pub fn position_of(catalog: &[CanonicalGenre], name: &str) -> Option<usize> {
    catalog.iter().position(|genre| genre.name == name)
}
