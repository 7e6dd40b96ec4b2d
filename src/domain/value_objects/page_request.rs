use crate::domain::errors::DomainError;

/// One-based page request as received from callers.
///
/// Converts to the zero-based `LIMIT`/`OFFSET` pair used by the record store.
/// No upper bound is placed on `size`; that is left to the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    size: i64,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Result<Self, DomainError> {
        if page < 1 {
            return Err(DomainError::InvalidPage(page));
        }
        if size < 1 {
            return Err(DomainError::InvalidPageSize(size));
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    /// Zero-based page index
    pub fn index(&self) -> i64 {
        self.page - 1
    }

    pub fn limit(&self) -> i64 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        self.index().saturating_mul(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_starts_at_zero() {
        let page = PageRequest::new(1, 10).unwrap();
        assert_eq!(page.index(), 0);
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn test_second_page_follows_first() {
        let first = PageRequest::new(1, 25).unwrap();
        let second = PageRequest::new(2, 25).unwrap();
        assert_eq!(second.offset(), first.offset() + first.limit());
    }

    #[test]
    fn test_rejects_zero_and_negative_pages() {
        assert_eq!(PageRequest::new(0, 10), Err(DomainError::InvalidPage(0)));
        assert_eq!(PageRequest::new(-3, 10), Err(DomainError::InvalidPage(-3)));
    }

    #[test]
    fn test_rejects_empty_page_size() {
        assert_eq!(PageRequest::new(1, 0), Err(DomainError::InvalidPageSize(0)));
    }

    #[test]
    fn test_huge_page_saturates_instead_of_overflowing() {
        let page = PageRequest::new(i64::MAX, i64::MAX).unwrap();
        assert_eq!(page.offset(), i64::MAX);
    }
}
