//! Search outcomes.

use core::fmt;

/// An index into the searched sequence, or `Sentinel` when nothing matched.
///
/// `Sentinel` is disjoint from every valid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchResult {
    Found(usize),
    Sentinel,
}

impl SearchResult {
    pub const fn index(self) -> Option<usize> {
        match self {
            SearchResult::Found(index) => Some(index),
            SearchResult::Sentinel => None,
        }
    }

    pub const fn is_found(self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub const fn is_sentinel(self) -> bool {
        matches!(self, SearchResult::Sentinel)
    }
}

impl From<Option<usize>> for SearchResult {
    fn from(index: Option<usize>) -> Self {
        index.map_or(SearchResult::Sentinel, SearchResult::Found)
    }
}

impl From<Option<Hit>> for SearchResult {
    fn from(hit: Option<Hit>) -> Self {
        hit.map_or(SearchResult::Sentinel, |hit| SearchResult::Found(hit.index))
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchResult::Found(index) => write!(f, "{}", index),
            SearchResult::Sentinel => f.write_str("sentinel"),
        }
    }
}

/// Where a search matched and which question answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hit {
    /// Position in the searched sequence.
    pub index: usize,
    /// Position of the satisfied question in the priority list.
    pub predicate: usize,
}
