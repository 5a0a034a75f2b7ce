mod fmt;
pub use fmt::{Element, INDENT_WIDTH};

use core::slice;

use crate::{Error, Result};

/// A growable sequence addressed by signed indices.
///
/// Negative indices count from the end, so `-1` is the last element. This is
/// the only place indices are normalized; arrays of every rank go through
/// [`Sequence::at`] and [`Sequence::at_mut`].
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Sequence<T>(Vec<T>);

impl<T> Sequence<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.0.push(value)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_mut_slice()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    pub fn at(&self, index: isize) -> Result<&T> {
        let i = self.normalize(index)?;
        Ok(&self.0[i])
    }

    pub fn at_mut(&mut self, index: isize) -> Result<&mut T> {
        let i = self.normalize(index)?;
        Ok(&mut self.0[i])
    }

    fn normalize(&self, index: isize) -> Result<usize> {
        let len = self.0.len();
        let i = if index < 0 {
            index + isize::try_from(len)?
        } else {
            index
        };
        usize::try_from(i)
            .ok()
            .filter(|&i| i < len)
            .ok_or_else(|| {
                tracing::trace!(index, len, "index out of range");
                Error::OutOfRange { index, len }
            })
    }

    /// Renders the sequence as nested brackets, `indent` levels deep.
    pub fn render(&self, indent: usize) -> String
    where
        T: Element,
    {
        let mut s = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write_rendered(indent, &mut s);
        s
    }

    pub(crate) fn write_rendered<W>(&self, indent: usize, w: &mut W) -> core::fmt::Result
    where
        T: Element,
        W: core::fmt::Write,
    {
        T::fmt_items(self.as_slice(), indent, w)
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(data: Vec<T>) -> Self {
        Self(data)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(Vec::from_iter(iter))
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl<T: Element> core::fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.write_rendered(0, f)
    }
}
