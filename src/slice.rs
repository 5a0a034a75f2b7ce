use core::{
    fmt,
    num::NonZeroIsize,
    ops::{RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive},
    str::FromStr,
};

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::{Error, Result};

lazy_static! {
    static ref WITH_STEP: Regex =
        Regex::new(r"^\s*(-?[0-9]+)?\s*:\s*(-?[0-9]+)?\s*:\s*(-?[0-9]+)?\s*$").unwrap();
    static ref WITHOUT_STEP: Regex = Regex::new(r"^\s*(-?[0-9]+)?\s*:\s*(-?[0-9]+)?\s*$").unwrap();
}

const ONE: NonZeroIsize = match NonZeroIsize::new(1) {
    Some(v) => v,
    None => unreachable!(),
};

/// A strided range over one axis, written `start:stop:step`.
///
/// A missing `stop` means "up to the length of the axis", which is resolved
/// only when the range is applied. Indices visited by a range are
/// normalized one by one, so `start` may be negative; `stop` is compared
/// against the raw index and is not normalized.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Range {
    start: isize,
    stop: Option<isize>,
    step: NonZeroIsize,
}

impl Default for Range {
    fn default() -> Self {
        Self::from(..)
    }
}

impl Range {
    pub const fn new(start: isize, stop: Option<isize>, step: NonZeroIsize) -> Self {
        Self { start, stop, step }
    }

    /// Parses `start:stop:step` or `start:stop`, every part optional.
    ///
    /// ```
    /// use ndnest::Range;
    ///
    /// let r = Range::parse(" 1 : 5 : 2 ").unwrap();
    /// assert_eq!((r.start(), r.stop(), r.step()), (1, Some(5), 2));
    /// assert!(Range::parse("3").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let (caps, has_step) = match WITH_STEP.captures(s) {
            Some(caps) => (caps, true),
            None => match WITHOUT_STEP.captures(s) {
                Some(caps) => (caps, false),
                None => return Err(Error::format(s, "expected `start:stop[:step]`")),
            },
        };

        let start = parse_group(s, &caps, 1)?.unwrap_or(0);
        let stop = parse_group(s, &caps, 2)?;
        let step = if has_step {
            parse_group(s, &caps, 3)?.unwrap_or(1)
        } else {
            1
        };
        let step = NonZeroIsize::new(step).ok_or_else(|| Error::format(s, "step cannot be zero"))?;

        Ok(Self { start, stop, step })
    }

    #[inline]
    pub const fn start(&self) -> isize {
        self.start
    }

    #[inline]
    pub const fn stop(&self) -> Option<isize> {
        self.stop
    }

    #[inline]
    pub const fn step(&self) -> isize {
        self.step.get()
    }

    #[inline]
    pub const fn has_stop(&self) -> bool {
        self.stop.is_some()
    }

    pub const fn step_by(self, step: NonZeroIsize) -> Self {
        Self { step, ..self }
    }

    /// Returns the raw indices visited on an axis of length `len`.
    ///
    /// Iteration starts at `start` and advances by `step` while the index is
    /// below `stop` (or `len` if there is no stop). The indices are not
    /// normalized here.
    pub fn positions(&self, len: usize) -> Result<Positions> {
        let limit = match self.stop {
            Some(stop) => stop,
            None => isize::try_from(len)?,
        };
        Ok(Positions {
            next: Some(self.start),
            limit,
            step: self.step.get(),
        })
    }
}

fn parse_group(input: &str, caps: &Captures<'_>, i: usize) -> Result<Option<isize>> {
    caps.get(i)
        .map(|m| {
            m.as_str()
                .parse::<isize>()
                .map_err(|_| Error::format(input, "integer does not fit in isize"))
        })
        .transpose()
}

/// Iterator returned by [`Range::positions`].
#[derive(Clone, Debug)]
pub struct Positions {
    next: Option<isize>,
    limit: isize,
    step: isize,
}

impl Iterator for Positions {
    type Item = isize;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.next.filter(|&i| i < self.limit)?;
        self.next = i.checked_add(self.step);
        Some(i)
    }
}

impl FromStr for Range {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stop {
            Some(stop) => write!(f, "{}:{}:{}", self.start, stop, self.step),
            None => write!(f, "{}::{}", self.start, self.step),
        }
    }
}

impl From<core::ops::Range<isize>> for Range {
    fn from(v: core::ops::Range<isize>) -> Self {
        Self::new(v.start, Some(v.end), ONE)
    }
}

impl From<RangeFrom<isize>> for Range {
    fn from(v: RangeFrom<isize>) -> Self {
        Self::new(v.start, None, ONE)
    }
}

impl From<RangeFull> for Range {
    fn from(_: RangeFull) -> Self {
        Self::new(0, None, ONE)
    }
}

impl From<RangeInclusive<isize>> for Range {
    fn from(v: RangeInclusive<isize>) -> Self {
        Self::new(*v.start(), Some(v.end().saturating_add(1)), ONE)
    }
}

impl From<RangeTo<isize>> for Range {
    fn from(v: RangeTo<isize>) -> Self {
        Self::new(0, Some(v.end), ONE)
    }
}

impl From<RangeToInclusive<isize>> for Range {
    fn from(v: RangeToInclusive<isize>) -> Self {
        Self::new(0, Some(v.end.saturating_add(1)), ONE)
    }
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroIsize;

    use super::Range;
    use crate::{Error, Result};

    #[test]
    fn parse_with_step() -> Result<()> {
        let r = Range::parse("1:5:2")?;

        assert_eq!(r.start(), 1);
        assert_eq!(r.stop(), Some(5));
        assert_eq!(r.step(), 2);
        assert!(r.has_stop());

        Ok(())
    }

    #[test]
    fn parse_defaults() -> Result<()> {
        let r = Range::parse(":5")?;
        assert_eq!((r.start(), r.stop(), r.step()), (0, Some(5), 1));

        let r = Range::parse("1:")?;
        assert_eq!((r.start(), r.stop(), r.step()), (1, None, 1));
        assert!(!r.has_stop());

        let r = Range::parse("::")?;
        assert_eq!((r.start(), r.stop(), r.step()), (0, None, 1));

        let r = Range::parse(":")?;
        assert_eq!(r, Range::from(..));

        let r = Range::parse("::-1")?;
        assert_eq!((r.start(), r.stop(), r.step()), (0, None, -1));

        Ok(())
    }

    #[test]
    fn parse_tolerates_whitespace() -> Result<()> {
        let r = Range::parse("  -3 :\t-1 : 2 ")?;

        assert_eq!((r.start(), r.stop(), r.step()), (-3, Some(-1), 2));

        Ok(())
    }

    #[test]
    fn parse_invalid() {
        for s in ["abc", "3", "", "1:2:3:4", "1 2:3", "+1:2", "1.5:2", "a:b"] {
            assert!(
                matches!(Range::parse(s), Err(Error::Format { .. })),
                "input: {:?}",
                s
            );
        }
    }

    #[test]
    fn parse_rejects_zero_step() {
        let err = Range::parse("0:4:0").unwrap_err();

        assert_eq!(
            err,
            Error::Format {
                input: "0:4:0".into(),
                reason: "step cannot be zero",
            }
        );
    }

    #[test]
    fn parse_rejects_overflowing_integer() {
        assert!(matches!(
            Range::parse("0:99999999999999999999999"),
            Err(Error::Format { .. })
        ));
    }

    #[test]
    fn display_round_trips() -> Result<()> {
        for s in ["1:5:2", "-2::1", "0:-1:-3"] {
            let r: Range = s.parse()?;
            assert_eq!(r.to_string().parse::<Range>()?, r);
        }
        assert_eq!(Range::from(2..).to_string(), "2::1");

        Ok(())
    }

    #[test]
    fn convert_from_std_ranges() {
        assert_eq!(Range::from(1..4), Range::parse("1:4").unwrap());
        assert_eq!(Range::from(1..), Range::parse("1:").unwrap());
        assert_eq!(Range::from(..), Range::parse(":").unwrap());
        assert_eq!(Range::from(..4), Range::parse(":4").unwrap());
        assert_eq!(Range::from(1..=4), Range::parse("1:5").unwrap());
        assert_eq!(Range::from(..=4), Range::parse(":5").unwrap());
        assert_eq!(Range::default(), Range::from(..));
    }

    #[test]
    fn step_by() {
        let r = Range::from(1..8).step_by(NonZeroIsize::new(3).unwrap());

        assert_eq!(r, Range::parse("1:8:3").unwrap());
    }

    #[test]
    fn positions_without_stop() -> Result<()> {
        let r = Range::parse("1::2")?;

        assert_eq!(r.positions(6)?.collect::<Vec<_>>(), [1, 3, 5]);
        assert_eq!(r.positions(0)?.count(), 0);

        Ok(())
    }

    #[test]
    fn positions_use_raw_stop() -> Result<()> {
        assert_eq!(Range::parse("0:3")?.positions(10)?.collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(Range::parse("-2:")?.positions(3)?.collect::<Vec<_>>(), [-2, -1, 0, 1, 2]);
        assert_eq!(Range::parse("0:-1")?.positions(10)?.count(), 0);
        assert_eq!(Range::parse("2:8")?.positions(3)?.collect::<Vec<_>>(), [2, 3, 4, 5, 6, 7]);

        Ok(())
    }

    #[test]
    fn positions_with_negative_step() -> Result<()> {
        assert_eq!(Range::parse("3:1:-1")?.positions(5)?.count(), 0);
        assert_eq!(
            Range::parse("0:1:-2")?.positions(5)?.take(4).collect::<Vec<_>>(),
            [0, -2, -4, -6]
        );

        Ok(())
    }

    #[test]
    fn positions_stop_on_overflow() -> Result<()> {
        let r = Range::new(isize::MAX - 1, None, NonZeroIsize::new(4).unwrap());

        assert_eq!(r.positions(usize::MAX >> 1)?.collect::<Vec<_>>(), [isize::MAX - 1]);

        let r = Range::new(isize::MAX - 5, Some(isize::MAX), NonZeroIsize::new(4).unwrap());
        assert_eq!(r.positions(0)?.collect::<Vec<_>>(), [isize::MAX - 5, isize::MAX - 1]);

        Ok(())
    }
}
