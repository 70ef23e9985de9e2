//! Page state and navigation guards.
//!
//! The pager tracks the counts coming back from the activities endpoint
//! plus the number of items the batch renderer has put on the surface
//! for the current page. The displayed counter is shared with the
//! renderer and zeroed only at the start of a fresh page draw — it
//! accumulates across the batches of one page load.

use crate::api::types::ActivityPage;
use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_results: u32,
}

pub struct Pager {
    state: PageState,
    displayed: Arc<AtomicU32>,
}

impl Pager {
    pub fn new() -> Self {
        Self {
            state: PageState::default(),
            displayed: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    /// Takes the counts from a freshly fetched page
    pub fn apply_page(&mut self, page: &ActivityPage) {
        self.state.current_page = page.current_page;
        self.state.total_pages = page.total_pages;
        self.state.total_results = page.total_results;
    }

    /// Shared counter the batch renderer increments per rendered chunk
    pub fn displayed_counter(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.displayed)
    }

    pub fn displayed(&self) -> u32 {
        self.displayed.load(Ordering::Relaxed)
    }

    /// Zeroed at the start of a fresh page draw, never per batch
    pub fn reset_displayed(&self) {
        self.displayed.store(0, Ordering::Relaxed);
    }

    /// Guard for direct navigation: only pages 1..=total exist
    pub fn can_go_to(&self, page_number: u32) -> bool {
        page_number >= 1 && page_number <= self.state.total_pages
    }

    /// Target of the Next control, `None` when already on the last page
    pub fn next_target(&self) -> Option<u32> {
        (self.state.current_page < self.state.total_pages).then(|| self.state.current_page + 1)
    }

    /// Target of the Previous control, `None` when on the first page
    pub fn previous_target(&self) -> Option<u32> {
        (self.state.current_page > 1).then(|| self.state.current_page - 1)
    }

    /// Status line shown next to the navigation controls
    pub fn status_text(&self) -> String {
        format!(
            "page {}/{} (displaying {} of total {})",
            self.state.current_page,
            self.state.total_pages,
            self.displayed(),
            self.state.total_results
        )
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager_at(current: u32, total: u32) -> Pager {
        let mut pager = Pager::new();
        pager.apply_page(&ActivityPage {
            total_results: total * 10,
            total_pages: total,
            current_page: current,
            items: Vec::new(),
        });
        pager
    }

    #[test]
    fn test_navigation_guards() {
        let pager = pager_at(1, 3);
        assert!(!pager.can_go_to(0));
        assert!(pager.can_go_to(1));
        assert!(pager.can_go_to(3));
        assert!(!pager.can_go_to(4));

        assert_eq!(pager.next_target(), Some(2));
        assert_eq!(pager.previous_target(), None);

        let last = pager_at(3, 3);
        assert_eq!(last.next_target(), None);
        assert_eq!(last.previous_target(), Some(2));
    }

    #[test]
    fn test_guards_with_no_results() {
        let pager = Pager::new();
        assert!(!pager.can_go_to(1));
        assert_eq!(pager.next_target(), None);
        assert_eq!(pager.previous_target(), None);
    }

    #[test]
    fn test_status_text_format() {
        let pager = pager_at(2, 4);
        pager.displayed_counter().fetch_add(17, Ordering::Relaxed);
        assert_eq!(
            pager.status_text(),
            "page 2/4 (displaying 17 of total 40)"
        );
    }

    #[test]
    fn test_displayed_reset_only_on_fresh_draw() {
        let pager = pager_at(1, 2);
        let counter = pager.displayed_counter();
        counter.fetch_add(50, Ordering::Relaxed);
        counter.fetch_add(23, Ordering::Relaxed);
        assert_eq!(pager.displayed(), 73);

        pager.reset_displayed();
        assert_eq!(pager.displayed(), 0);
    }
}
