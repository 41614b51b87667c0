//! Page bookkeeping for the admin list. The backend returns a bare page of
//! records with no total count, so the page total is inferred from whether
//! the last fetch came back full.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub size: u32,
    total_pages: u32,
    last_len: usize,
}

impl Pager {
    pub fn new(size: u32) -> Self {
        Self {
            page: 0,
            size,
            total_pages: 0,
            last_len: 0,
        }
    }

    /// Record the outcome of fetching `page`: a short page is the last one,
    /// a full page presumes at least one more.
    pub fn observe(&mut self, page: u32, returned: usize) {
        self.page = page;
        self.last_len = returned;
        self.total_pages = if returned < self.size as usize {
            if page == 0 { 1 } else { page + 1 }
        } else {
            page + 2
        };
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages && self.last_len >= self.size as usize
    }

    /// `Page x of y` footer text (1-based for display).
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages.max(1))
    }
}
