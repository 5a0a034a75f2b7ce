use core::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Error, Range, Result};

lazy_static! {
    static ref SEPARATOR: Regex = Regex::new(r"\s*,\s*").unwrap();
}

/// Ranges for the leading axes of an array, outermost first.
///
/// Axes beyond the last range are kept whole when the info is applied.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SliceInfo {
    ranges: Vec<Range>,
}

impl SliceInfo {
    /// Parses a comma-separated list of `start:stop:step` expressions.
    pub fn parse(spec: &str) -> Result<Self> {
        Self::parse_for(spec, usize::MAX)
    }

    /// Like [`SliceInfo::parse`], but fails with [`Error::TooManySlices`]
    /// before parsing anything if there are more than `n_dims` expressions.
    pub(crate) fn parse_for(spec: &str, n_dims: usize) -> Result<Self> {
        let parts = SEPARATOR.split(spec).collect::<Vec<_>>();
        check_len(parts.len(), n_dims)?;

        let ranges = parts
            .into_iter()
            .map(Range::parse)
            .collect::<Result<Vec<_>>>()
            .map_err(|e| {
                tracing::debug!(spec, error = %e, "rejected slice spec");
                e
            })?;
        tracing::trace!(spec, n_slices = ranges.len(), "parsed slice spec");

        Ok(Self { ranges })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

pub(crate) fn check_len(n_slices: usize, n_dims: usize) -> Result<()> {
    if n_slices > n_dims {
        tracing::debug!(n_slices, n_dims, "too many slices");
        return Err(Error::TooManySlices { n_slices, n_dims });
    }
    Ok(())
}

impl AsRef<[Range]> for SliceInfo {
    fn as_ref(&self) -> &[Range] {
        &self.ranges
    }
}

impl From<Vec<Range>> for SliceInfo {
    fn from(ranges: Vec<Range>) -> Self {
        Self { ranges }
    }
}

impl FromIterator<Range> for SliceInfo {
    fn from_iter<I: IntoIterator<Item = Range>>(iter: I) -> Self {
        Self {
            ranges: iter.into_iter().collect(),
        }
    }
}

impl FromStr for SliceInfo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Builds a [`SliceInfo`] from Rust range expressions, with an optional
/// step after a semicolon.
///
/// ```
/// use ndnest::{s, SliceInfo};
///
/// let info = s![1..3, ..;2];
/// assert_eq!(info, "1:3, 0::2".parse::<SliceInfo>().unwrap());
/// ```
#[macro_export]
macro_rules! s {
    (@range $r:expr; $s:expr) => {
        $crate::Range::from($r).step_by(
            ::core::num::NonZeroIsize::new($s).expect("slice step cannot be zero"),
        )
    };
    (@range $r:expr) => {
        $crate::Range::from($r)
    };
    ($( $r:expr $(; $s:expr)? ),* $(,)?) => {
        $crate::SliceInfo::from(::std::vec![$( $crate::s!(@range $r $(; $s)?) ),*])
    };
}
