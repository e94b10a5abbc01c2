//! Client-side pagination over the loaded records.

use std::num::NonZeroUsize;

use crate::error::{Error, InvalidInputError};

/// Records shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Returns the slice of `items` shown on `page` (1-based).
///
/// Pages past the end, and page 0, yield an empty slice.
pub fn slice<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> &[T] {
    let Some(index) = page.checked_sub(1) else {
        return &[];
    };
    let start = index.saturating_mul(page_size.get());
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size.get()).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `count` items; 0 when there are none.
pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get())
}

/// The current page and the fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: NonZeroUsize,
    page_size: NonZeroUsize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: NonZeroUsize::MIN,
            page_size: NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl Pagination {
    /// Start on page 1 with the given page size.
    ///
    /// # Errors
    ///
    /// Returns an error if `page_size` is zero.
    pub fn new(page_size: usize) -> Result<Self, Error> {
        let page_size =
            NonZeroUsize::new(page_size).ok_or(InvalidInputError::PageSize { value: page_size })?;
        Ok(Self {
            current_page: NonZeroUsize::MIN,
            page_size,
        })
    }

    /// The 1-based current page.
    pub fn current_page(&self) -> usize {
        self.current_page.get()
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Move to page `n`.
    ///
    /// Any page from 1 up is accepted, including pages past the end; the
    /// view of such a page is simply empty.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero.
    pub fn set_page(&mut self, n: usize) -> Result<(), Error> {
        self.current_page = NonZeroUsize::new(n).ok_or(InvalidInputError::Page { value: n })?;
        Ok(())
    }

    /// Compute the visible page of `items`.
    pub fn view<'a, T>(&self, items: &'a [T]) -> PageView<'a, T> {
        PageView {
            items: slice(items, self.current_page.get(), self.page_size),
            page: self.current_page.get(),
            total_pages: total_pages(items.len(), self.page_size),
            total_items: items.len(),
        }
    }
}

/// One computed page.
#[derive(Debug, PartialEq, Eq)]
pub struct PageView<'a, T> {
    /// The items on this page.
    pub items: &'a [T],
    /// The 1-based page number.
    pub page: usize,
    /// Pages available for the whole list.
    pub total_pages: usize,
    /// Items in the whole list.
    pub total_items: usize,
}

impl<T> PageView<'_, T> {
    /// Returns true if the current page lies beyond the last page, as happens
    /// when the list shrinks under a page the user had selected.
    pub fn is_past_end(&self) -> bool {
        self.page > self.total_pages.max(1)
    }

    /// The page numbers a front end should offer.
    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }
}

impl<T> Clone for PageView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PageView<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn twelve_items_in_pages_of_five() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(total_pages(items.len(), size(5)), 3);
        assert_eq!(slice(&items, 1, size(5)), &[1, 2, 3, 4, 5]);
        assert_eq!(slice(&items, 3, size(5)), &[11, 12]);
    }

    #[test]
    fn empty_list_has_no_pages() {
        let items: Vec<u32> = Vec::new();
        assert_eq!(total_pages(0, size(5)), 0);
        assert!(slice(&items, 1, size(5)).is_empty());
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (1..=3).collect();
        assert!(slice(&items, 0, size(2)).is_empty());
        assert!(slice(&items, 3, size(2)).is_empty());
        assert!(slice(&items, usize::MAX, size(2)).is_empty());
    }

    #[test]
    fn pages_concatenate_to_the_list() {
        for len in 0..=23 {
            let items: Vec<usize> = (0..len).collect();
            for n in 1..=7 {
                let joined: Vec<usize> = (1..=total_pages(len, size(n)))
                    .flat_map(|p| slice(&items, p, size(n)).iter().copied())
                    .collect();
                assert_eq!(joined, items, "len {} size {}", len, n);
            }
        }
    }

    #[test]
    fn set_page_rejects_zero_only() {
        let mut pagination = Pagination::default();
        assert!(pagination.set_page(0).is_err());
        assert_eq!(pagination.current_page(), 1);
        pagination.set_page(40).unwrap();
        assert_eq!(pagination.current_page(), 40);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(Pagination::new(0).is_err());
        assert_eq!(Pagination::new(3).unwrap().page_size(), 3);
    }

    #[test]
    fn view_past_end() {
        let items: Vec<u32> = (1..=6).collect();
        let mut pagination = Pagination::default();
        pagination.set_page(2).unwrap();

        let view = pagination.view(&items);
        assert_eq!(view.items, &[6]);
        assert!(!view.is_past_end());

        let view = pagination.view(&items[..5]);
        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 1);
        assert!(view.is_past_end());
        assert_eq!(view.page_numbers().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn first_page_of_empty_list_is_not_past_end() {
        let items: Vec<u32> = Vec::new();
        assert!(!Pagination::default().view(&items).is_past_end());
    }
}
