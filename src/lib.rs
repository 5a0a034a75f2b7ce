//! Nested multi-dimensional arrays whose rank is part of the type.
//!
//! An [`Array<T, NDims<N>>`](Array) is a sequence of arrays of rank `N - 1`,
//! down to a sequence of `T` at rank 1. Elements are read and written with
//! signed indices, negative ones counting from the end. Slicing takes text
//! such as `"1:, ::2"` and copies the selected elements into a new array.
//!
//! ```
//! use ndnest::{array, Array2};
//!
//! let mut a: Array2<i32> = array![[1, 2, 3], [4, 5, 6]];
//! a[(-1, 0)] = 40;
//!
//! let b = a.slice("1:, ::2").unwrap();
//! assert_eq!(b.to_string(), "[\n  [ 40, 6 ]\n]");
//! ```

mod array;
pub use array::Array;

mod array_index;
pub use array_index::{ArrayIndex, Axis};

mod dimension;
pub use dimension::{Dimensionality, NDims};

mod error;
pub use error::{Error, Result};

mod ndarray;
pub use ndarray::{Array1, Array2, Array3, Array4, Array5, Array6, ArraySpelling, Nd, Ndarray};

mod slice;
pub use slice::{Positions, Range};

mod slice_info;
pub use slice_info::SliceInfo;

pub mod storage;
