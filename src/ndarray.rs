//! Names for arrays by element type and rank.

use crate::{Array, NDims};

/// An array of `T` with rank `N`.
pub type Ndarray<T, const N: usize> = Array<T, NDims<N>>;

pub type Array1<T> = Array<T, NDims<1>>;
pub type Array2<T> = Array<T, NDims<2>>;
pub type Array3<T> = Array<T, NDims<3>>;
pub type Array4<T> = Array<T, NDims<4>>;
pub type Array5<T> = Array<T, NDims<5>>;
pub type Array6<T> = Array<T, NDims<6>>;

/// Maps the spelling `[T; N]` to the array of `T` with rank `N`.
pub trait ArraySpelling {
    type Array;
}

impl<T, const N: usize> ArraySpelling for [T; N]
where
    NDims<N>: crate::Dimensionality,
{
    type Array = Array<T, NDims<N>>;
}

/// `Nd<[f64; 3]>` is the rank-3 array of `f64`.
///
/// ```
/// use ndnest::{Array, Nd};
///
/// let a: Nd<[f64; 3]> = Array::from_elem([2, 1, 2], 0.5);
/// assert_eq!(a.shape(), [2, 1, 2]);
/// ```
pub type Nd<S> = <S as ArraySpelling>::Array;

#[cfg(test)]
mod tests {
    use super::{Array2, Nd, Ndarray};
    use crate::{Array, Dimensionality, NDims};

    fn n_dims<T, D: Dimensionality>(_: &Array<T, D>) -> usize {
        D::N_DIMS
    }

    #[test]
    fn aliases_name_the_same_type() {
        let a: Ndarray<u8, 2> = Array2::from_elem([1, 2], 3);
        let b: Nd<[u8; 2]> = a.clone();
        let c: Array<u8, NDims<2>> = b;

        assert_eq!(c, a);
        assert_eq!(n_dims(&c), 2);
    }

    #[test]
    fn spelling_supports_every_rank() {
        let a: Nd<[i32; 1]> = Array::new();
        let b: Nd<[i32; 4]> = Array::new();
        let c: Ndarray<i32, 6> = Array::new();

        assert_eq!(n_dims(&a), 1);
        assert_eq!(n_dims(&b), 4);
        assert_eq!(n_dims(&c), 6);
    }
}
