use core::ops::{Index, IndexMut};

use super::Array;
use crate::{ArrayIndex, Dimensionality};

impl<D, I, T> Index<I> for Array<T, D>
where
    D: Dimensionality,
    I: ArrayIndex<Array<T, D>>,
{
    type Output = <I as ArrayIndex<Array<T, D>>>::Output;

    #[track_caller]
    fn index(&self, index: I) -> &Self::Output {
        match index.index_of(self) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<D, I, T> IndexMut<I> for Array<T, D>
where
    D: Dimensionality,
    I: ArrayIndex<Array<T, D>>,
{
    #[track_caller]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        match index.index_of_mut(self) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{array, Array2, Array3};

    #[test]
    fn index_with_brackets() {
        let a: Array3<i32> = array![[[1, 2], [3, 4]], [[5, 6], [7, 8]]];

        assert_eq!(a[(1, 1, 0)], 7);
        assert_eq!(a[(-1, 0, -1)], 6);
        assert_eq!(a[(0, 1)].to_nested(), vec![3, 4]);
        assert_eq!(a[-2].shape(), [2, 2]);
    }

    #[test]
    fn assign_with_brackets() {
        let mut a = Array2::from_elem([2, 3], 0_u8);
        a[(1, -1)] = 4;
        a[0][1] = 2;

        assert_eq!(a.to_nested(), vec![vec![0, 2, 0], vec![0, 0, 4]]);
    }

    #[test]
    #[should_panic(expected = "index 2 is out of range for axis of length 2")]
    fn index_out_of_range() {
        let a = Array2::from_elem([2, 2], 0);
        let _x = a[(0, 2)];
    }

    #[test]
    #[should_panic(expected = "index -3 is out of range for axis of length 2")]
    fn index_below_negative_range() {
        let mut a = Array2::from_elem([2, 2], 0);
        a[-3].push(1);
    }
}
