//! Outcome of a fetch that callers are expected to degrade gracefully on
//!
//! Views never surface remote failures to the user; they fall back to local
//! data or an empty list. Returning the three cases explicitly lets each
//! caller pick its fallback instead of swallowing errors along the way.

/// Result of a remote fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    /// Fetch succeeded with non-empty data
    Data(T),
    /// Fetch succeeded but produced nothing usable
    Empty,
    /// Fetch failed (status, transport or parse error)
    Failed(String),
}

impl<I> FetchOutcome<Vec<I>> {
    /// Classify a successful list fetch as `Data` or `Empty`
    pub fn from_items(items: Vec<I>) -> Self {
        if items.is_empty() {
            FetchOutcome::Empty
        } else {
            FetchOutcome::Data(items)
        }
    }
}

impl<T> FetchOutcome<T> {
    /// Data if present, otherwise the supplied fallback
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            FetchOutcome::Data(data) => data,
            FetchOutcome::Empty | FetchOutcome::Failed(_) => fallback,
        }
    }

    /// Data if present, otherwise `T::default()`
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or(T::default())
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }
}
