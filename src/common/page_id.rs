//! Page identifier type.

use std::fmt;

/// Identifies a page in a reference string.
///
/// Page identifiers are opaque: two references name the same page exactly
/// when their identifiers are equal. Negative values are legal.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(-7);
/// assert_eq!(page_id.0, -7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }

    /// Number of characters needed to print this identifier.
    ///
    /// Negative values take one extra column for the sign.
    pub fn display_width(&self) -> usize {
        let digits = self.0.unsigned_abs().checked_ilog10().unwrap_or(0) as usize + 1;
        if self.0 < 0 {
            digits + 1
        } else {
            digits
        }
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
        assert_eq!(PageId::from(42), pid);
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "Page(42)");
        assert_eq!(format!("{}", PageId::new(-3)), "Page(-3)");
    }

    #[test]
    fn test_display_width() {
        assert_eq!(PageId::new(0).display_width(), 1);
        assert_eq!(PageId::new(9).display_width(), 1);
        assert_eq!(PageId::new(10).display_width(), 2);
        assert_eq!(PageId::new(-1).display_width(), 2);
        assert_eq!(PageId::new(-100).display_width(), 4);
        assert_eq!(PageId::new(i64::MIN).display_width(), 20);
    }
}
