use serde::Deserialize;

/// Upper bound on `entries` for every paginated endpoint.
pub const MAX_ENTRIES: u64 = 100;

/// Caps a zero-based page number so `page * per_page` stays within an SQL `BIGINT`
/// offset. Pages past the cap are empty anyway.
pub fn page_index(page: u64, per_page: u64) -> u64 {
    page.min(i64::MAX as u64 / per_page.max(1))
}

/// `?page=&entries=` query parameters shared by list endpoints.
///
/// `page` is zero-indexed.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 0,
            entries: default_entries(),
        }
    }
}

impl PaginationParams {
    /// Page size clamped to `1..=MAX_ENTRIES`.
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, MAX_ENTRIES)
    }
}

/// One page of domain items plus the metadata needed to render pagination controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

impl<T> Paginated<T> {
    /// Converts the page into its API representation.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> crate::model::api::PaginatedDto<D> {
        let page = self.map(f);

        crate::model::api::PaginatedDto {
            items: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }
    }
}
