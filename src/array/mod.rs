mod fmt;

mod lift;

mod ops;

use core::{
    hash::{Hash, Hasher},
    slice,
};

use num_traits::{One, Zero};

use crate::{
    slice_info::{self, SliceInfo},
    storage::Sequence,
    ArrayIndex, Dimensionality, Range, Result,
};

/// A nested array of `T` with a rank fixed by `D`.
///
/// Each axis is an owned [`Sequence`] of children: scalars at rank 1, arrays
/// of one rank lower above that. Cloning copies the whole tree. Sibling
/// sub-arrays are not required to have equal lengths; see
/// [`Array::is_rectangular`].
pub struct Array<T, D>
where
    D: Dimensionality,
{
    data: Sequence<<D as Dimensionality>::Item<T>>,
}

impl<T, D> Array<T, D>
where
    D: Dimensionality,
{
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: Sequence::new(),
        }
    }

    /// Builds an array from nested `Vec`s, one level per axis.
    ///
    /// ```
    /// use ndnest::Array2;
    ///
    /// let a = Array2::from_nested(vec![vec![1, 2, 3], vec![4]]);
    /// assert_eq!(a.len(), 2);
    /// assert_eq!(a.at(1).unwrap().len(), 1);
    /// ```
    pub fn from_nested(nested: Vec<<D as Dimensionality>::Nested<T>>) -> Self {
        nested.into_iter().map(D::item_from_nested).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn ndims(&self) -> usize {
        D::N_DIMS
    }

    #[inline]
    pub fn push(&mut self, item: <D as Dimensionality>::Item<T>) {
        self.data.push(item)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, <D as Dimensionality>::Item<T>> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, <D as Dimensionality>::Item<T>> {
        self.data.iter_mut()
    }

    #[inline]
    pub fn as_sequence(&self) -> &Sequence<<D as Dimensionality>::Item<T>> {
        &self.data
    }

    /// Returns the child at `index` on the outermost axis.
    #[inline]
    pub fn at(&self, index: isize) -> Result<&<D as Dimensionality>::Item<T>> {
        self.data.at(index)
    }

    #[inline]
    pub fn at_mut(&mut self, index: isize) -> Result<&mut <D as Dimensionality>::Item<T>> {
        self.data.at_mut(index)
    }

    /// Resolves `index` one axis at a time.
    ///
    /// ```
    /// use ndnest::Array2;
    ///
    /// let a = Array2::from_nested(vec![vec![1, 2], vec![3, 4]]);
    /// assert_eq!(*a.get((1, -1)).unwrap(), 4);
    /// assert_eq!(a.get(-2).unwrap().to_nested(), vec![1, 2]);
    /// assert!(a.get((0, 2)).is_err());
    /// ```
    #[inline]
    pub fn get<I>(&self, index: I) -> Result<&I::Output>
    where
        I: ArrayIndex<Self>,
    {
        index.index_of(self)
    }

    #[inline]
    pub fn get_mut<I>(&mut self, index: I) -> Result<&mut I::Output>
    where
        I: ArrayIndex<Self>,
    {
        index.index_of_mut(self)
    }

    /// Returns the length of every axis, following the first child at each
    /// level. Axes below an empty one are reported as 0.
    pub fn shape(&self) -> <D as Dimensionality>::Shape {
        let mut shape = D::shape_zeroed();
        self.fill_shape(shape.as_mut());
        shape
    }

    pub(crate) fn fill_shape(&self, shape: &mut [usize]) {
        if let Some((len, rest)) = shape.split_first_mut() {
            *len = self.len();
            if let Some(first) = self.data.as_slice().first() {
                D::item_shape(first, rest);
            }
        }
    }

    /// Whether sibling sub-arrays have equal lengths at every level.
    pub fn is_rectangular(&self) -> bool {
        D::items_rectangular(self.data.as_slice())
    }
}

impl<T, D> Array<T, D>
where
    D: Dimensionality,
    T: Clone,
{
    /// Builds an array of the given shape with every element set to `elem`.
    ///
    /// ```
    /// use ndnest::Array2;
    ///
    /// let a = Array2::from_elem([3, 4], 0);
    /// assert_eq!(a.shape(), [3, 4]);
    /// assert!(a.iter().all(|row| row.iter().all(|&x| x == 0)));
    /// ```
    pub fn from_elem(shape: <D as Dimensionality>::Shape, elem: T) -> Self {
        Self::fill(shape.as_ref(), &elem)
    }

    pub fn from_shape(shape: <D as Dimensionality>::Shape) -> Self
    where
        T: Default,
    {
        Self::from_elem(shape, T::default())
    }

    pub fn zeros(shape: <D as Dimensionality>::Shape) -> Self
    where
        T: Zero,
    {
        Self::from_elem(shape, T::zero())
    }

    pub fn ones(shape: <D as Dimensionality>::Shape) -> Self
    where
        T: One,
    {
        Self::from_elem(shape, T::one())
    }

    pub(crate) fn fill(shape: &[usize], elem: &T) -> Self {
        let (len, rest) = match shape.split_first() {
            Some((&len, rest)) => (len, rest),
            None => (0, shape),
        };
        (0..len).map(|_| D::fill_item(rest, elem)).collect()
    }

    pub fn to_nested(&self) -> Vec<<D as Dimensionality>::Nested<T>> {
        self.iter().map(D::item_to_nested).collect()
    }

    /// Copies out the elements selected by `spec`.
    ///
    /// `spec` holds one `start:stop:step` expression per leading axis,
    /// separated by commas. Axes without an expression are copied whole.
    /// The result never shares anything with `self`.
    ///
    /// ```
    /// use ndnest::Array2;
    ///
    /// let a = Array2::from_nested(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    /// let b = a.slice("::2, 1:").unwrap();
    /// assert_eq!(b.to_nested(), vec![vec![2, 3], vec![8, 9]]);
    /// ```
    pub fn slice(&self, spec: &str) -> Result<Self> {
        let info = SliceInfo::parse_for(spec, D::N_DIMS)?;
        self.select(info.as_ref())
    }

    /// Like [`Array::slice`], with ranges that are already parsed.
    pub fn slice_with<S>(&self, info: S) -> Result<Self>
    where
        S: AsRef<[Range]>,
    {
        let ranges = info.as_ref();
        slice_info::check_len(ranges.len(), D::N_DIMS)?;
        self.select(ranges)
    }

    pub(crate) fn select(&self, ranges: &[Range]) -> Result<Self> {
        let Some((range, rest)) = ranges.split_first() else {
            return self.iter().map(|item| D::select_item(item, &[])).collect();
        };
        range
            .positions(self.len())?
            .map(|i| D::select_item(self.data.at(i)?, rest))
            .collect()
    }
}

impl<T, D> Clone for Array<T, D>
where
    D: Dimensionality,
    <D as Dimensionality>::Item<T>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<T, D> Default for Array<T, D>
where
    D: Dimensionality,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, D> PartialEq for Array<T, D>
where
    D: Dimensionality,
    <D as Dimensionality>::Item<T>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T, D> Eq for Array<T, D>
where
    D: Dimensionality,
    <D as Dimensionality>::Item<T>: Eq,
{
}

impl<T, D> Hash for Array<T, D>
where
    D: Dimensionality,
    <D as Dimensionality>::Item<T>: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state)
    }
}

impl<T, D> From<Vec<<D as Dimensionality>::Item<T>>> for Array<T, D>
where
    D: Dimensionality,
{
    fn from(items: Vec<<D as Dimensionality>::Item<T>>) -> Self {
        Self {
            data: Sequence::from(items),
        }
    }
}

impl<T, D> From<Sequence<<D as Dimensionality>::Item<T>>> for Array<T, D>
where
    D: Dimensionality,
{
    fn from(data: Sequence<<D as Dimensionality>::Item<T>>) -> Self {
        Self { data }
    }
}

impl<T, D> FromIterator<<D as Dimensionality>::Item<T>> for Array<T, D>
where
    D: Dimensionality,
{
    fn from_iter<I: IntoIterator<Item = <D as Dimensionality>::Item<T>>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T, D> IntoIterator for Array<T, D>
where
    D: Dimensionality,
{
    type Item = <D as Dimensionality>::Item<T>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, D> IntoIterator for &'a Array<T, D>
where
    D: Dimensionality,
{
    type Item = &'a <D as Dimensionality>::Item<T>;
    type IntoIter = slice::Iter<'a, <D as Dimensionality>::Item<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, D> IntoIterator for &'a mut Array<T, D>
where
    D: Dimensionality,
{
    type Item = &'a mut <D as Dimensionality>::Item<T>;
    type IntoIter = slice::IterMut<'a, <D as Dimensionality>::Item<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

/// Builds an [`Array`] from bracketed literals, one level per axis.
///
/// The rank comes from the expected type.
///
/// ```
/// use ndnest::{array, Array2};
///
/// let a: Array2<i32> = array![[1, 2], [3]];
/// assert_eq!(a.to_nested(), vec![vec![1, 2], vec![3]]);
/// ```
#[macro_export]
macro_rules! array {
    ($([$($inner:tt)*]),+ $(,)?) => {
        $crate::Array::from(::std::vec![$($crate::array![$($inner)*]),+])
    };
    ($($elem:expr),* $(,)?) => {
        $crate::Array::from(::std::vec![$($elem),*])
    };
}
