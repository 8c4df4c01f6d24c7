//! Reference strings and their loader.
//!
//! A [`ReferenceString`] is the full, immutable sequence of page references
//! a simulation replays. It is materialized up front so the OPT policy can
//! look ahead over the remaining references.

use std::fs::File;
use std::io::Read;
use std::ops::Index;
use std::path::Path;

use log::{debug, warn};

use crate::common::{Error, PageId, Result};

/// An ordered, immutable sequence of page references.
///
/// Several simulations may share one `&ReferenceString`.
///
/// # Example
/// ```
/// use pagesim::{PageId, ReferenceString};
///
/// let refs: ReferenceString = "1 2 x 3".parse().unwrap();
/// assert_eq!(refs.len(), 3);
/// assert_eq!(refs[2], PageId::new(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceString {
    pages: Vec<PageId>,
}

impl ReferenceString {
    /// Wrap an existing sequence.
    pub fn new(pages: Vec<PageId>) -> Self {
        Self { pages }
    }

    /// Load whitespace-separated integers from a file.
    ///
    /// # Errors
    /// - `Error::SourceUnavailable` if the file cannot be opened or read
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let unavailable = |source| Error::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        let refs = Self::from_reader(file).map_err(|err| match err {
            Error::Io(source) => unavailable(source),
            other => other,
        })?;

        debug!("loaded {} references from {}", refs.len(), path.display());
        Ok(refs)
    }

    /// Parse whitespace-separated integers from any reader.
    ///
    /// Tokens that are not integers, including ones that are not valid
    /// UTF-8, are skipped with a warning.
    ///
    /// # Errors
    /// - `Error::Io` if reading fails
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let pages = bytes
            .split(|&b| b == b'\n')
            .enumerate()
            .flat_map(|(i, line)| parse_tokens(line, i + 1))
            .collect();

        Ok(Self { pages })
    }

    /// Number of references.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True for an empty reference string.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The references as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    /// References strictly after position `i`.
    #[inline]
    pub fn after(&self, i: usize) -> &[PageId] {
        self.pages.get(i + 1..).unwrap_or(&[])
    }

    /// Iterate over the references in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PageId> {
        self.pages.iter()
    }

    /// Widest printed reference, used to align report columns.
    pub fn display_width(&self) -> usize {
        self.pages
            .iter()
            .map(PageId::display_width)
            .max()
            .unwrap_or(1)
    }
}

fn parse_tokens(line: &[u8], line_no: usize) -> impl Iterator<Item = PageId> + '_ {
    line.split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty())
        .filter_map(move |token| {
            let parsed = std::str::from_utf8(token)
                .ok()
                .and_then(|s| s.parse::<i64>().ok());
            if parsed.is_none() {
                warn!(
                    "skipping malformed reference {:?} on line {}",
                    String::from_utf8_lossy(token),
                    line_no
                );
            }
            parsed.map(PageId::new)
        })
}

impl std::str::FromStr for ReferenceString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let pages = s
            .lines()
            .enumerate()
            .flat_map(|(i, line)| parse_tokens(line.as_bytes(), i + 1))
            .collect();
        Ok(Self { pages })
    }
}

impl From<Vec<i64>> for ReferenceString {
    fn from(ids: Vec<i64>) -> Self {
        Self::new(ids.into_iter().map(PageId::new).collect())
    }
}

impl From<&[i64]> for ReferenceString {
    fn from(ids: &[i64]) -> Self {
        Self::new(ids.iter().copied().map(PageId::new).collect())
    }
}

impl Index<usize> for ReferenceString {
    type Output = PageId;

    fn index(&self, i: usize) -> &PageId {
        &self.pages[i]
    }
}

impl<'a> IntoIterator for &'a ReferenceString {
    type Item = &'a PageId;
    type IntoIter = std::slice::Iter<'a, PageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
