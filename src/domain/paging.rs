/// Load-more pagination over an in-memory list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    visible: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            visible: page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of rows to show out of `total`.
    pub fn visible(&self, total: usize) -> usize {
        self.visible.min(total)
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    pub fn load_more(&mut self) {
        self.visible += self.page_size;
    }

    /// Back to the first page, e.g. after a filter change.
    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_through_items() {
        let mut pager = Paginator::new(3);
        assert_eq!(pager.visible(7), 3);
        assert!(pager.has_more(7));
        pager.load_more();
        pager.load_more();
        assert_eq!(pager.visible(7), 7);
        assert!(!pager.has_more(7));
        pager.reset();
        assert_eq!(pager.visible(7), 3);
    }

    #[test]
    fn zero_page_size_is_bumped() {
        let pager = Paginator::new(0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.visible(0), 0);
        assert!(!pager.has_more(0));
    }
}
