//! Search paging state of the page

/// Page size used for the results counter
pub const PAGE_SIZE: usize = 9;

/// Total hits every search pretends to have
pub const TOTAL_RESULTS: usize = 45;

/// Sort key selected before any user choice
pub const DEFAULT_SORT: &str = "relevance";

/// State carried between a search and its "load more" pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub current_page: usize,
    pub current_query: String,
    /// Value of the sort dropdown. Results are never re-ordered by it.
    pub current_sort: String,
    pub is_loading: bool,
    pub has_more_results: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_page: 1,
            current_query: String::new(),
            current_sort: DEFAULT_SORT.to_string(),
            is_loading: false,
            has_more_results: true,
        }
    }
}

impl ViewState {
    /// Reset paging for a new query. Sort order survives.
    pub fn begin_search(&mut self, query: &str) {
        self.current_page = 1;
        self.current_query = query.to_string();
        self.has_more_results = true;
    }

    pub fn can_load_more(&self) -> bool {
        !self.is_loading && self.has_more_results
    }

    /// Move to the next page, returning its number
    pub fn advance_page(&mut self) -> usize {
        self.current_page += 1;
        self.current_page
    }

    /// Results shown so far according to the counter
    pub fn shown_results(page: usize) -> usize {
        (page * PAGE_SIZE).min(TOTAL_RESULTS)
    }

    /// Whether another page exists after `page`
    pub fn more_after(page: usize) -> bool {
        page * PAGE_SIZE < TOTAL_RESULTS
    }
}
