//! Genre name normalization
//!
//! Two display names compare equal when they differ only by case and by
//! separators/punctuation: "Hip-Hop/Rap", "hip hop rap" and "HIPHOPRAP" all
//! normalize to `hiphoprap`.

/// Map a display name to its comparison key
///
/// Lowercases the input and deletes every character outside `[a-z0-9]`.
/// Non-ASCII letters are lowercased first and then removed like any other
/// separator.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}
