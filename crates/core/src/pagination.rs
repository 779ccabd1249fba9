//! Page slicing over fully materialized result lists.
//!
//! Listing endpoints load the complete (small) selection, format it, and then
//! cut out one fixed-size page. Out-of-range pages produce an empty slice; the
//! caller decides whether that is a 404.

use serde::Deserialize;

/// Number of items returned per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page used when the client omits `?page` or sends something unparseable.
pub const DEFAULT_PAGE: i64 = 1;

/// `?page=` query parameter.
///
/// Kept as a raw string so that a malformed value degrades to
/// [`DEFAULT_PAGE`] instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// The requested 1-based page number.
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_PAGE)
    }
}

/// Return the items on `page` (1-based) using [`QUESTIONS_PER_PAGE`].
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    paginate_with(items, page, QUESTIONS_PER_PAGE)
}

/// Return the items in `[(page - 1) * per_page, page * per_page)`.
///
/// Pages below 1 and pages past the end are empty.
pub fn paginate_with<T>(items: Vec<T>, page: i64, per_page: usize) -> Vec<T> {
    if page < 1 || per_page == 0 {
        return Vec::new();
    }
    let Ok(index) = usize::try_from(page - 1) else {
        return Vec::new();
    };
    let Some(start) = index.checked_mul(per_page) else {
        return Vec::new();
    };
    items.into_iter().skip(start).take(per_page).collect()
}
