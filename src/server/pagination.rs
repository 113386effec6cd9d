use serde::Deserialize;

pub const QUESTIONS_PER_PAGE: u32 = 10;

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

/// LIMIT/OFFSET bounds for a one-based page number. Page 0 is clamped to 1.
pub fn page_bounds(page: u32) -> (i64, i64) {
    let page = page.max(1);
    (
        QUESTIONS_PER_PAGE as i64,
        (page as i64 - 1) * QUESTIONS_PER_PAGE as i64,
    )
}

/// In-memory counterpart of [`page_bounds`] for result sets that are already
/// loaded, like the categories table.
pub fn slice_page<T>(items: &[T], page: u32) -> &[T] {
    let (limit, offset) = page_bounds(page);
    let start = (offset as usize).min(items.len());
    let end = (offset as usize + limit as usize).min(items.len());
    &items[start..end]
}
