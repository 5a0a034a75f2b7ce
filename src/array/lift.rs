//! Rank lift: an array of lower rank becomes the single outermost element
//! of an array of higher rank.

use core::iter;

use super::Array;
use crate::NDims;

macro_rules! impl_lift {
    ($n:literal => $m:literal $(, $lower:literal)*) => {
        impl<T> From<Array<T, NDims<$m>>> for Array<T, NDims<$n>> {
            fn from(lower: Array<T, NDims<$m>>) -> Self {
                iter::once(lower).collect()
            }
        }

        $(
            impl<T> From<Array<T, NDims<$lower>>> for Array<T, NDims<$n>> {
                fn from(lower: Array<T, NDims<$lower>>) -> Self {
                    iter::once(Array::<T, NDims<$m>>::from(lower)).collect()
                }
            }
        )*
    };
}

impl_lift!(2 => 1);
impl_lift!(3 => 2, 1);
impl_lift!(4 => 3, 2, 1);
impl_lift!(5 => 4, 3, 2, 1);
impl_lift!(6 => 5, 4, 3, 2, 1);
