//! Search and sort contract shared by the service and the screens.
//!
//! Matching is case-insensitive and takes the query as typed, spaces
//! included. An empty query matches nothing; callers that want every record
//! ask for the sorted set instead.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::Lexical;

/// Where in a field a query has to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchStartPoint {
    /// The field must begin with the query.
    #[default]
    Beginning,
    /// The query may occur anywhere in the field.
    Anywhere,
}

impl SearchStartPoint {
    pub fn toggle(self) -> Self {
        match self {
            Self::Beginning => Self::Anywhere,
            Self::Anywhere => Self::Beginning,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginning => "Starts with",
            Self::Anywhere => "Contains",
        }
    }
}

/// Which text field a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchField {
    #[default]
    Entry,
    Meaning,
}

impl SearchField {
    pub fn toggle(self) -> Self {
        match self {
            Self::Entry => Self::Meaning,
            Self::Meaning => Self::Entry,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Meaning => "Meaning",
        }
    }
}

/// True when `field` matches `query` under `start`.
pub fn matches(field: &str, query: &str, start: SearchStartPoint) -> bool {
    if query.is_empty() {
        return false;
    }

    let field = field.to_lowercase();
    let query = query.to_lowercase();
    match start {
        SearchStartPoint::Beginning => field.starts_with(&query),
        SearchStartPoint::Anywhere => field.contains(&query),
    }
}

/// Canonical ordering: entry term ignoring case, then exact term, then key.
pub fn canonical_cmp<T: Lexical>(a: &T, b: &T) -> Ordering {
    a.entry()
        .to_lowercase()
        .cmp(&b.entry().to_lowercase())
        .then_with(|| a.entry().cmp(b.entry()))
        .then_with(|| a.key().cmp(&b.key()))
}

pub fn sort_canonical<T: Lexical>(items: &mut [T]) {
    items.sort_by(canonical_cmp);
}
