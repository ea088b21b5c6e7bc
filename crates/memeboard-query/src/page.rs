use crate::error::{QueryError, QueryResult};

/// Largest page a single query may request.
pub const MAX_PAGE_SIZE: i64 = 10;

/// A validated, 1-based page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    /// Validate raw caller input.
    ///
    /// `page` must be at least 1 and `page_size` must lie in
    /// `1..=MAX_PAGE_SIZE`.
    pub fn new(page: i64, page_size: i64) -> QueryResult<Self> {
        if page < 1 {
            return Err(QueryError::InvalidArgument(format!(
                "page must be at least 1, got {page}"
            )));
        }
        if page_size < 1 {
            return Err(QueryError::InvalidArgument(format!(
                "page size must be at least 1, got {page_size}"
            )));
        }
        if page_size > MAX_PAGE_SIZE {
            return Err(QueryError::InvalidArgument(format!(
                "page size must be at most {MAX_PAGE_SIZE}, got {page_size}"
            )));
        }
        Ok(Self {
            page: page as u64,
            page_size: page_size as u64,
        })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Half-open index range `[start, end)` of this page within a sequence
    /// of `len` items, or `None` if the page starts past the end.
    pub fn bounds(&self, len: usize) -> Option<(usize, usize)> {
        let start = self.page.saturating_sub(1).saturating_mul(self.page_size);
        let start = usize::try_from(start).unwrap_or(usize::MAX);
        if start >= len {
            return None;
        }
        let end = start.saturating_add(self.page_size as usize).min(len);
        Some((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_page_below_one() {
        assert!(matches!(PageRequest::new(0, 5), Err(QueryError::InvalidArgument(_))));
        assert!(matches!(PageRequest::new(-3, 5), Err(QueryError::InvalidArgument(_))));
    }

    #[test]
    fn rejects_page_size_out_of_bounds() {
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, -1).is_err());
        assert!(PageRequest::new(1, 11).is_err());
        assert!(PageRequest::new(1, 10).is_ok());
        assert!(PageRequest::new(1, 1).is_ok());
    }

    #[test]
    fn bounds_full_and_partial_pages() {
        let p1 = PageRequest::new(1, 2).unwrap();
        let p3 = PageRequest::new(3, 2).unwrap();
        let p4 = PageRequest::new(4, 2).unwrap();
        assert_eq!(p1.bounds(5), Some((0, 2)));
        assert_eq!(p3.bounds(5), Some((4, 5)));
        assert_eq!(p4.bounds(5), None);
    }

    #[test]
    fn bounds_on_empty_sequence() {
        assert_eq!(PageRequest::new(1, 10).unwrap().bounds(0), None);
    }

    #[test]
    fn first_page_starts_at_zero() {
        let p = PageRequest::new(1, 3).unwrap();
        assert_eq!(p.page(), 1);
        assert_eq!(p.bounds(2), Some((0, 2)));
    }

    #[test]
    fn zero_page_saturates_instead_of_panicking() {
        let unchecked = PageRequest { page: 0, page_size: 0 };
        assert_eq!(unchecked.bounds(5), Some((0, 0)));
        assert_eq!(unchecked.bounds(0), None);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let p = PageRequest::new(i64::MAX, 10).unwrap();
        assert_eq!(p.bounds(100), None);
    }
}
