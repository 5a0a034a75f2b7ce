use core::{fmt::Debug, hash::Hash};

use crate::{Array, Range, Result};

/// Type-level rank of an [`Array`].
///
/// Every rank names the type stored along its outermost axis: scalars at
/// rank 1 and arrays of one rank lower above that. The per-rank steps of the
/// recursive algorithms live here so that [`Array`] stays generic over its
/// rank.
pub trait Dimensionality: Copy + Debug + Eq + Hash + 'static {
    const N_DIMS: usize;

    type Shape: AsRef<[usize]> + AsMut<[usize]> + Clone + Debug + Eq + Hash;

    /// Children along the outermost axis.
    type Item<T>;

    /// Nested `Vec` literal for one child.
    type Nested<T>;

    fn shape_zeroed() -> Self::Shape;

    fn fill_item<T: Clone>(shape: &[usize], elem: &T) -> Self::Item<T>;

    fn item_from_nested<T>(nested: Self::Nested<T>) -> Self::Item<T>;

    fn item_to_nested<T: Clone>(item: &Self::Item<T>) -> Self::Nested<T>;

    /// Applies `ranges` to the axes below the outermost one.
    fn select_item<T: Clone>(item: &Self::Item<T>, ranges: &[Range]) -> Result<Self::Item<T>>;

    fn item_shape<T>(item: &Self::Item<T>, shape: &mut [usize]);

    fn items_rectangular<T>(items: &[Self::Item<T>]) -> bool;
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NDims<const N: usize>;

impl Dimensionality for NDims<1> {
    const N_DIMS: usize = 1;

    type Shape = [usize; 1];
    type Item<T> = T;
    type Nested<T> = T;

    fn shape_zeroed() -> Self::Shape {
        [0]
    }

    fn fill_item<T: Clone>(_shape: &[usize], elem: &T) -> Self::Item<T> {
        elem.clone()
    }

    fn item_from_nested<T>(nested: Self::Nested<T>) -> Self::Item<T> {
        nested
    }

    fn item_to_nested<T: Clone>(item: &Self::Item<T>) -> Self::Nested<T> {
        item.clone()
    }

    fn select_item<T: Clone>(item: &Self::Item<T>, ranges: &[Range]) -> Result<Self::Item<T>> {
        debug_assert!(ranges.is_empty());
        Ok(item.clone())
    }

    fn item_shape<T>(_item: &Self::Item<T>, _shape: &mut [usize]) {}

    fn items_rectangular<T>(_items: &[Self::Item<T>]) -> bool {
        true
    }
}

macro_rules! impl_dimensionality {
    ($n:literal => $lower:literal) => {
        impl Dimensionality for NDims<$n> {
            const N_DIMS: usize = $n;

            type Shape = [usize; $n];
            type Item<T> = Array<T, NDims<$lower>>;
            type Nested<T> = Vec<<NDims<$lower> as Dimensionality>::Nested<T>>;

            fn shape_zeroed() -> Self::Shape {
                [0; $n]
            }

            fn fill_item<T: Clone>(shape: &[usize], elem: &T) -> Self::Item<T> {
                Array::fill(shape, elem)
            }

            fn item_from_nested<T>(nested: Self::Nested<T>) -> Self::Item<T> {
                Array::from_nested(nested)
            }

            fn item_to_nested<T: Clone>(item: &Self::Item<T>) -> Self::Nested<T> {
                item.to_nested()
            }

            fn select_item<T: Clone>(
                item: &Self::Item<T>,
                ranges: &[Range],
            ) -> Result<Self::Item<T>> {
                item.select(ranges)
            }

            fn item_shape<T>(item: &Self::Item<T>, shape: &mut [usize]) {
                item.fill_shape(shape)
            }

            fn items_rectangular<T>(items: &[Self::Item<T>]) -> bool {
                items.iter().all(Array::is_rectangular)
                    && items.windows(2).all(|w| w[0].shape() == w[1].shape())
            }
        }
    };
}

impl_dimensionality!(2 => 1);
impl_dimensionality!(3 => 2);
impl_dimensionality!(4 => 3);
impl_dimensionality!(5 => 4);
impl_dimensionality!(6 => 5);

#[cfg(test)]
mod tests {
    use super::{Dimensionality, NDims};

    #[test]
    fn get_n_dims() {
        assert_eq!(NDims::<1>::N_DIMS, 1);
        assert_eq!(NDims::<4>::N_DIMS, 4);
        assert_eq!(NDims::<6>::N_DIMS, 6);
    }

    #[test]
    fn get_shape_zeroed() {
        assert_eq!(NDims::<1>::shape_zeroed(), [0]);
        assert_eq!(NDims::<3>::shape_zeroed(), [0; 3]);
    }

    #[test]
    fn fill_scalar_item() {
        assert_eq!(NDims::<1>::fill_item(&[], &7), 7);
    }

    #[test]
    fn fill_nested_item() {
        let item = NDims::<3>::fill_item(&[2, 3], &1_u8);

        assert_eq!(item.shape(), [2, 3]);
        assert_eq!(item.to_nested(), vec![vec![1, 1, 1], vec![1, 1, 1]]);
    }
}
