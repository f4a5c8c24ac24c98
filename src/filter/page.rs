//! Pagination over already-filtered record lists
//!
//! A page is a contiguous window clipped to the sequence bounds. A page
//! index past the end yields an empty slice, never an error, so a stale
//! index against a freshly shortened filter result degrades gracefully.

/// Take the `page_index`-th window of `page_size` records
///
/// `page_size == 0` yields an empty slice; the pager is total over its
/// whole input domain.
#[must_use]
pub fn paginate<T>(records: &[T], page_index: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let Some(start) = page_index.checked_mul(page_size) else {
        return &[];
    };
    if start >= records.len() {
        return &[];
    }
    let end = records.len().min(start.saturating_add(page_size));
    &records[start..end]
}

/// Number of pages needed to show `len` records at `page_size` per page
#[must_use]
pub const fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 { 0 } else { len.div_ceil(page_size) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_are_clipped_to_the_sequence() {
        let items: Vec<u32> = (0..8).collect();
        assert_eq!(paginate(&items, 0, 5), &[0, 1, 2, 3, 4]);
        assert_eq!(paginate(&items, 1, 5), &[5, 6, 7]);
        assert!(paginate(&items, 2, 5).is_empty());
    }

    #[test]
    fn degenerate_inputs_yield_empty_pages() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 0, 0).is_empty());
        assert!(paginate(&items, usize::MAX, usize::MAX).is_empty());
        assert!(paginate::<u32>(&[], 0, 5).is_empty());
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(8, 5), 2);
        assert_eq!(page_count(10, 5), 2);
        assert_eq!(page_count(0, 5), 0);
        assert_eq!(page_count(3, 0), 0);
    }
}
