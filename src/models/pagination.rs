//! Page arithmetic shared by list and search

/// One requested page of a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number
    pub page: i64,
    pub per_page: i64,
}

impl Pagination {
    /// Pages below 1 are read as the first page
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Number of pages needed for `total` records
    pub fn page_count(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        (total + self.per_page - 1) / self.per_page
    }
}
