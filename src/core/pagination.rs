use serde::Deserialize;

/// Header carrying the unfiltered row count on list responses
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Query parameters for paginated list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_size() -> i64 {
    20
}

impl PageQuery {
    pub fn limit(&self) -> i64 {
        self.size.max(1)
    }

    pub fn offset(&self) -> i64 {
        self.page.max(0) * self.limit()
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: default_size(),
        }
    }
}

/// One page of results plus the total row count for the X-Total-Count header
#[derive(Debug)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_count: i64,
}
