use serde::{Deserialize, Serialize};

/// Upper bound on the pages followed by a single listing walk.
pub const MAX_PAGES: u32 = 100;

/// One page of a paginated list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Whether the backend advertises another page after this one.
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|next| !next.is_empty())
    }

    /// Whether a walk over the listing should request the next page.
    /// An empty page ends the walk even if `next` is set.
    pub fn should_continue(&self) -> bool {
        self.has_next() && !self.results.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}
