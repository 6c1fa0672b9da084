//! Page window over an admin table.

/// Rows per page when the configuration does not say otherwise
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Current page of a table. Pages are numbered from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    per_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl Pager {
    /// A pager on page 1. A `per_page` of zero is treated as one.
    #[must_use]
    pub fn new(per_page: usize) -> Self {
        Self {
            current: 1,
            per_page: per_page.max(1),
        }
    }

    /// Current page number
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Rows per page
    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages needed for `len` rows. An empty table has zero pages.
    #[must_use]
    pub const fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.per_page)
    }

    fn last_page(&self, len: usize) -> usize {
        self.total_pages(len).max(1)
    }

    /// Moves one page back, stopping at page 1.
    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1).max(1);
    }

    /// Moves one page forward, stopping at the last page.
    pub fn next(&mut self, len: usize) {
        self.current = (self.current + 1).min(self.last_page(len));
    }

    /// Jumps to `page`, clamped into the valid range.
    pub fn go_to(&mut self, page: usize, len: usize) {
        self.current = page.clamp(1, self.last_page(len));
    }

    /// Pulls the current page back into range after rows were removed.
    pub fn clamp(&mut self, len: usize) {
        self.current = self.current.min(self.last_page(len));
    }

    /// Rows visible on the current page.
    #[must_use]
    pub fn page_slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = (self.current - 1).saturating_mul(self.per_page).min(rows.len());
        let end = start.saturating_add(self.per_page).min(rows.len());
        &rows[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let pager = Pager::default();
        assert_eq!(pager.total_pages(0), 0);
        assert_eq!(pager.total_pages(5), 1);
        assert_eq!(pager.total_pages(6), 2);
        assert_eq!(pager.total_pages(11), 3);
    }

    #[test]
    fn test_previous_and_next_clamp() {
        let mut pager = Pager::default();
        pager.previous();
        assert_eq!(pager.current(), 1);

        pager.next(12);
        pager.next(12);
        pager.next(12);
        assert_eq!(pager.current(), 3);

        pager.previous();
        assert_eq!(pager.current(), 2);
    }

    #[test]
    fn test_next_on_empty_table_stays_on_first_page() {
        let mut pager = Pager::default();
        pager.next(0);
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn test_page_slice() {
        let rows: Vec<u32> = (1..=12).collect();
        let mut pager = Pager::new(5);
        assert_eq!(pager.page_slice(&rows), [1, 2, 3, 4, 5]);

        pager.go_to(3, rows.len());
        assert_eq!(pager.page_slice(&rows), [11, 12]);

        pager.go_to(10, rows.len());
        assert_eq!(pager.current(), 3);
    }

    #[test]
    fn test_clamp_after_rows_removed() {
        let mut pager = Pager::new(2);
        pager.go_to(3, 6);
        pager.clamp(3);
        assert_eq!(pager.current(), 2);
        assert!(pager.page_slice(&[1, 2, 3]) == [3]);
    }

    #[test]
    fn test_zero_per_page_is_treated_as_one() {
        assert_eq!(Pager::new(0).per_page(), 1);
    }
}
