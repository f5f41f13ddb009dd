//! Page limit and scroll mode for the DAO list.
//!
//! The list grows by [`PAGE_SIZE`] entities each time more are requested.
//! The limit is an inclusive index bound: a limit of 11 shows 12 rows. It is
//! never clamped to the list length and never reset when the search changes.

/// Entities added per "load more".
pub const PAGE_SIZE: usize = 11;

/// Distance from the end of the visible slice that triggers infinite scroll.
pub const INFINITE_SCROLL_THRESHOLD: usize = 2;

/// How the list asks for more entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// An explicit "Load more" row after the visible slice.
    LoadMore,

    /// More entities are requested automatically near the end of the slice.
    Infinite,
}

impl ScrollMode {
    /// Narrow panes and host-embedded launches scroll infinitely.
    #[must_use]
    pub const fn resolve(is_mobile: bool, host_enabled: bool) -> Self {
        if is_mobile || host_enabled {
            Self::Infinite
        } else {
            Self::LoadMore
        }
    }
}

/// Display bound over the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

impl Pagination {
    #[must_use]
    pub const fn new() -> Self {
        Self { limit: PAGE_SIZE }
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Raises the limit by one page. There is no upper bound.
    pub fn show_more(&mut self) {
        self.limit = self.limit.saturating_add(PAGE_SIZE);
        tracing::debug!(limit = self.limit, "page limit raised");
    }

    /// Number of entities displayed out of `total`.
    ///
    /// Every index `<= limit` is shown, so this is `min(total, limit + 1)`.
    #[must_use]
    pub const fn visible_count(&self, total: usize) -> usize {
        let bound = self.limit.saturating_add(1);
        if total < bound {
            total
        } else {
            bound
        }
    }

    /// The displayed prefix of `items`.
    #[must_use]
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible_count(items.len())]
    }

    /// Whether entities beyond the displayed prefix exist.
    #[must_use]
    pub const fn has_more(&self, total: usize) -> bool {
        total > self.visible_count(total)
    }

    /// Whether a cursor at `cursor` should pull the next page in infinite mode.
    #[must_use]
    pub const fn should_auto_load(&self, cursor: usize, total: usize) -> bool {
        self.has_more(total)
            && cursor + INFINITE_SCROLL_THRESHOLD >= self.visible_count(total).saturating_sub(1)
    }
}
