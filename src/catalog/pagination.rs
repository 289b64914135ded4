//! Pagination calculator.
//!
//! Pure: it reports whether the requested page was out of range but never
//! corrects anyone's state. The [`CatalogController`](super::CatalogController)
//! owns the page number and applies the reset.

/// One page of a sorted sequence plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The visible slice, at most `page_size` long.
    pub items: &'a [T],
    /// `ceil(total_count / page_size)`; 0 for an empty sequence.
    pub total_pages: usize,
    /// The 1-based page actually used for slicing.
    pub effective_page: usize,
    /// The requested page exceeded a populated range and was reset to 1.
    pub out_of_range: bool,
}

/// Number of pages needed for `total_count` items.
///
/// # Examples
///
/// ```
/// use podshelf::catalog::pagination::total_pages;
///
/// assert_eq!(total_pages(0, 8), 0);
/// assert_eq!(total_pages(8, 8), 1);
/// assert_eq!(total_pages(10, 8), 2);
/// ```
#[must_use]
pub const fn total_pages(total_count: usize, page_size: usize) -> usize {
    let page_size = if page_size == 0 { 1 } else { page_size };
    total_count.div_ceil(page_size)
}

/// Slices `sorted` to the requested 1-based page.
///
/// A page past the last populated page resolves to page 1 and sets
/// [`Page::out_of_range`]. Page 0 is read as page 1. A zero page size is read as 1.
///
/// # Examples
///
/// ```
/// use podshelf::catalog::paginate;
///
/// let items: Vec<u32> = (1..=10).collect();
///
/// let second = paginate(&items, 2, 8);
/// assert_eq!(second.items, &[9, 10]);
/// assert_eq!(second.total_pages, 2);
///
/// let past_end = paginate(&items, 5, 8);
/// assert!(past_end.out_of_range);
/// assert_eq!(past_end.effective_page, 1);
/// assert_eq!(past_end.items, &items[..8]);
/// ```
#[must_use]
pub fn paginate<T>(sorted: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(sorted.len(), page_size);
    let requested = page.max(1);

    let out_of_range = total_pages > 0 && requested > total_pages;
    let effective_page = if out_of_range {
        1
    } else {
        requested.min(total_pages.max(1))
    };

    let start = ((effective_page - 1) * page_size).min(sorted.len());
    let end = start.saturating_add(page_size).min(sorted.len());

    tracing::trace!(
        total_count = sorted.len(),
        page_size,
        requested_page = page,
        effective_page,
        total_pages,
        out_of_range,
        "page computed"
    );

    Page {
        items: &sorted[start..end],
        total_pages,
        effective_page,
        out_of_range,
    }
}
