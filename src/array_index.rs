use crate::{storage::Sequence, Array, Dimensionality, Result};

/// A container with one indexable outermost axis.
pub trait Axis {
    type Child;

    fn axis_len(&self) -> usize;
    fn child(&self, index: isize) -> Result<&Self::Child>;
    fn child_mut(&mut self, index: isize) -> Result<&mut Self::Child>;
}

impl<T> Axis for Sequence<T> {
    type Child = T;

    #[inline]
    fn axis_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn child(&self, index: isize) -> Result<&Self::Child> {
        self.at(index)
    }

    #[inline]
    fn child_mut(&mut self, index: isize) -> Result<&mut Self::Child> {
        self.at_mut(index)
    }
}

impl<T, D> Axis for Array<T, D>
where
    D: Dimensionality,
{
    type Child = <D as Dimensionality>::Item<T>;

    #[inline]
    fn axis_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn child(&self, index: isize) -> Result<&Self::Child> {
        self.at(index)
    }

    #[inline]
    fn child_mut(&mut self, index: isize) -> Result<&mut Self::Child> {
        self.at_mut(index)
    }
}

/// Indices into the leading axes of `A`, outermost first.
///
/// Implemented for `isize` and tuples of `isize`. A tuple shorter than the
/// rank selects a sub-array; a tuple longer than the rank does not
/// implement this trait.
pub trait ArrayIndex<A: ?Sized> {
    type Output: ?Sized;

    fn index_of(self, array: &A) -> Result<&Self::Output>;
    fn index_of_mut(self, array: &mut A) -> Result<&mut Self::Output>;
}

impl<A> ArrayIndex<A> for isize
where
    A: Axis + ?Sized,
{
    type Output = <A as Axis>::Child;

    fn index_of(self, array: &A) -> Result<&Self::Output> {
        array.child(self)
    }

    fn index_of_mut(self, array: &mut A) -> Result<&mut Self::Output> {
        array.child_mut(self)
    }
}

impl<A> ArrayIndex<A> for (isize,)
where
    A: Axis + ?Sized,
{
    type Output = <A as Axis>::Child;

    fn index_of(self, array: &A) -> Result<&Self::Output> {
        array.child(self.0)
    }

    fn index_of_mut(self, array: &mut A) -> Result<&mut Self::Output> {
        array.child_mut(self.0)
    }
}

macro_rules! impl_tuple_index {
    (@isize $i:ident) => { isize };
    ($head:ident; $($tail:ident),+) => {
        impl<A> ArrayIndex<A> for (isize, $(impl_tuple_index!(@isize $tail),)+)
        where
            A: Axis + ?Sized,
            ($(impl_tuple_index!(@isize $tail),)+): ArrayIndex<<A as Axis>::Child>,
        {
            type Output =
                <($(impl_tuple_index!(@isize $tail),)+) as ArrayIndex<<A as Axis>::Child>>::Output;

            fn index_of(self, array: &A) -> Result<&Self::Output> {
                let ($head, $($tail,)+) = self;
                ($($tail,)+).index_of(array.child($head)?)
            }

            fn index_of_mut(self, array: &mut A) -> Result<&mut Self::Output> {
                let ($head, $($tail,)+) = self;
                ($($tail,)+).index_of_mut(array.child_mut($head)?)
            }
        }
    };
}

impl_tuple_index!(i0; i1);
impl_tuple_index!(i0; i1, i2);
impl_tuple_index!(i0; i1, i2, i3);
impl_tuple_index!(i0; i1, i2, i3, i4);
impl_tuple_index!(i0; i1, i2, i3, i4, i5);
