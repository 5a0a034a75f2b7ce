use core::fmt::{self, Write};

use super::Array;
use crate::{
    storage::{Element, INDENT_WIDTH},
    Dimensionality,
};

impl<T, D> Element for Array<T, D>
where
    D: Dimensionality,
    <D as Dimensionality>::Item<T>: Element,
{
    fn fmt_items<W: Write>(items: &[Self], indent: usize, w: &mut W) -> fmt::Result {
        if items.is_empty() {
            return w.write_str("[ ]");
        }

        w.write_str("[\n")?;
        for (i, item) in items.iter().enumerate() {
            if i != 0 {
                w.write_str(",\n")?;
            }
            write!(w, "{:1$}", "", INDENT_WIDTH * (indent + 1))?;
            item.data.write_rendered(indent + 1, w)?;
        }
        write!(w, "\n{:1$}]", "", INDENT_WIDTH * indent)
    }
}

impl<T, D> Array<T, D>
where
    D: Dimensionality,
    <D as Dimensionality>::Item<T>: Element,
{
    /// Renders the array as nested brackets.
    ///
    /// Arrays of scalars fit on one line. Arrays of arrays put each child on
    /// its own line, indented two spaces per level below `indent`.
    pub fn render(&self, indent: usize) -> String {
        self.data.render(indent)
    }
}

impl<T, D> fmt::Display for Array<T, D>
where
    D: Dimensionality,
    <D as Dimensionality>::Item<T>: Element,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.write_rendered(0, f)
    }
}

impl<T, D> fmt::Debug for Array<T, D>
where
    D: Dimensionality,
    <D as Dimensionality>::Item<T>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use num_complex::Complex;

    use crate::{array, Array1, Array2, Array3};

    #[test]
    fn format_1d_array() {
        let a: Array1<i32> = array![1, 2, 3];

        assert_eq!(a.render(0), "[ 1, 2, 3 ]");
        assert_eq!(format!("{}", a), "[ 1, 2, 3 ]");
    }

    #[test]
    fn format_empty_arrays() {
        assert_eq!(Array1::<f64>::new().render(0), "[ ]");
        assert_eq!(Array2::<f64>::new().render(0), "[ ]");
        assert_eq!(Array2::<u8>::from_shape([2, 0]).render(0), "[\n  [ ],\n  [ ]\n]");
    }

    #[test]
    fn format_2d_array() {
        let a: Array2<i32> = array![[1, 2], [3]];

        assert_eq!(a.to_string(), "[\n  [ 1, 2 ],\n  [ 3 ]\n]");
    }

    #[test]
    fn format_3d_array() {
        let a: Array3<i32> = array![[[1, 2], [3, 4]], [[5]]];
        let expected = "\
[
  [
    [ 1, 2 ],
    [ 3, 4 ]
  ],
  [
    [ 5 ]
  ]
]";

        assert_eq!(a.to_string(), expected);
    }

    #[test]
    fn format_with_indent() {
        let a: Array2<&str> = array![["a"], ["b", "c"]];

        assert_eq!(a.render(1), "[\n    [ a ],\n    [ b, c ]\n  ]");
    }

    #[test]
    fn format_complex_elements() {
        let a: Array1<Complex<i32>> = array![Complex::new(1, 2), Complex::new(3, -4)];

        assert_eq!(a.to_string(), "[ 1+2i, 3-4i ]");
    }

    #[test]
    fn format_debug() {
        let a: Array2<i32> = array![[1, 2], [3]];

        assert_eq!(format!("{:?}", a), "[[1, 2], [3]]");
    }
}
