use serde::{Deserialize, Serialize};

/// Pagers show every page up to this many; past it they collapse into gaps.
const MAX_PAGES_WITHOUT_GAPS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Paginated<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageMarker {
    Page(u32),
    Gap,
}

/// Number of pages needed for `total_items`. An empty collection still has one page.
pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    let pages = total_items.div_ceil(page_size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

pub fn clamp_page(page: u32, total_items: u64, page_size: u32) -> u32 {
    page.clamp(1, total_pages(total_items, page_size))
}

/// Contiguous, non-wrapping slice `[(page-1)*size, page*size)` clamped to the
/// bounds of `items`.
pub fn page_window<T>(items: &[T], page: u32, page_size: u32) -> &[T] {
    let page_size = page_size.max(1) as usize;
    let page = page.max(1) as usize;
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Page markers for a pager: first and last page always, the current page
/// with its direct neighbours, and a gap wherever pages are skipped.
pub fn page_numbers(total_pages: u32, current: u32) -> Vec<PageMarker> {
    if total_pages <= MAX_PAGES_WITHOUT_GAPS {
        return (1..=total_pages).map(PageMarker::Page).collect();
    }

    let mut markers = vec![PageMarker::Page(1)];
    if current > 3 {
        markers.push(PageMarker::Gap);
    }

    let start = current.saturating_sub(1).max(2);
    let end = current.saturating_add(1).min(total_pages - 1);
    markers.extend((start..=end).map(PageMarker::Page));

    if current < total_pages - 2 {
        markers.push(PageMarker::Gap);
    }
    markers.push(PageMarker::Page(total_pages));
    markers
}

/// Page to show after one item was removed from a listing of `total_items`.
pub fn page_after_delete(page: u32, total_items: u64, page_size: u32) -> u32 {
    let remaining_pages = total_pages(total_items.saturating_sub(1), page_size);
    if page > remaining_pages {
        remaining_pages
    } else {
        page.max(1)
    }
}
