use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 4;
pub const MAX_PAGE_SIZE: u32 = 20;

/// Page-number pagination parameters. Clients pick the page size via
/// `page_size`, clamped to [1, 20] with a default of 4.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageParams {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> i64 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE) as i64
    }

    pub fn offset(&self) -> i64 {
        (self.page() as i64 - 1) * self.limit()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub count: i64,
    pub next: Option<u32>,
    pub previous: Option<u32>,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn new(count: i64, params: &PageParams, results: Vec<T>) -> Self {
        let page = params.page();
        let next = if (page as i64) * params.limit() < count {
            Some(page + 1)
        } else {
            None
        };
        let previous = if page > 1 { Some(page - 1) } else { None };

        Self {
            count,
            next,
            previous,
            results,
        }
    }
}
