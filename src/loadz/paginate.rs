//! # Paginator
//!
//! Slices an ordered result sequence into fixed-size, 1-based pages.
//!
//! The paginator never clamps: asking for a page past the end yields an
//! empty slice with an accurate `total_pages`, and it is the session's job
//! to keep the current page in range (see [`crate::session`]).

/// A fixed-size contiguous slice of the filtered/sorted result sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

/// Number of pages needed for `len` items, 0 when there are none.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// Extracts 1-based page `page` from `results`.
///
/// The slice is truncated at the end of `results`; a page past the last one
/// is empty, not an error.
pub fn paginate<T: Clone>(results: &[T], page_size: usize, page: usize) -> Page<T> {
    debug_assert!(page_size > 0);
    debug_assert!(page > 0);

    let start = (page - 1).saturating_mul(page_size);
    let items = if start >= results.len() {
        Vec::new()
    } else {
        let end = (start + page_size).min(results.len());
        results[start..end].to_vec()
    };

    Page {
        items,
        total_pages: total_pages(results.len(), page_size),
    }
}
