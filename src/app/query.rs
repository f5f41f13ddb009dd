//! Shared query state.
//!
//! The search string lives here rather than in the list view: it is seeded
//! from configuration or from a host pipe's arguments, and the list only reads
//! it when filtering.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    search: String,
}

impl QueryState {
    #[must_use]
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
        }
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn push(&mut self, c: char) {
        self.search.push(c);
    }

    /// Removes the last character. Returns `false` when already empty.
    pub fn pop(&mut self) -> bool {
        self.search.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.search.clear();
    }
}
