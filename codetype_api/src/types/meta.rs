use serde::{Deserialize, Serialize};

/// Paging metadata for list endpoints.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    #[serde(alias = "pageSize")]
    pub limit: i64,
    pub total_items: i64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl Pagination {
    /// Builds paging metadata for a response that did not carry any.
    pub fn derive(page: i64, page_size: i64, total_items: i64) -> Self {
        let total_items = total_items.max(0);
        let total_pages = if page_size > 0 {
            (total_items + page_size - 1) / page_size
        } else if total_items > 0 {
            1
        } else {
            0
        };
        Self {
            page,
            limit: page_size,
            total_items,
            total_pages,
            has_next_page: page_size > 0 && page.saturating_mul(page_size) < total_items,
            has_previous_page: page > 1,
        }
    }

    /// Clamps a requested page into `[1, total_pages]`.
    pub fn clamp_page(&self, page: i64) -> i64 {
        page.clamp(1, self.total_pages.max(1))
    }
}

/// Body of a list endpoint. `count` is the server's total when it sends no
/// pagination block.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListData<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
    pub count: Option<i64>,
}

impl<T> ListData<T> {
    /// Server pagination when present, otherwise derived from `count` (or the
    /// number of items returned) and the page that was requested.
    pub fn pagination_or_derive(&self, page: i64, page_size: i64) -> Pagination {
        match &self.pagination {
            Some(pagination) => pagination.clone(),
            None => {
                let total = self.count.unwrap_or(self.items.len() as i64);
                Pagination::derive(page, page_size, total)
            }
        }
    }
}

/// `{ "data": { "items": [...], ... } }`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListResponse<T> {
    pub data: ListData<T>,
}

/// `{ "data": {...} }`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Response<T> {
    pub data: T,
}
