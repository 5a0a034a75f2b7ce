use core::fmt::{self, Display, Write};

use num_complex::Complex;

/// Number of spaces per nesting level in rendered output.
pub const INDENT_WIDTH: usize = 2;

/// How a slice of elements is rendered.
///
/// Scalars and text render on one line as `[ a, b, c ]`. Arrays implement
/// this to render one child per line, each indented one level deeper than
/// the enclosing brackets. Empty sequences render as `[ ]` either way.
pub trait Element: Sized {
    fn fmt_items<W: Write>(items: &[Self], indent: usize, w: &mut W) -> fmt::Result;
}

fn fmt_flat<T: Display, W: Write>(items: &[T], w: &mut W) -> fmt::Result {
    let Some((first, rest)) = items.split_first() else {
        return w.write_str("[ ]");
    };
    write!(w, "[ {}", first)?;
    for item in rest {
        write!(w, ", {}", item)?;
    }
    w.write_str(" ]")
}

macro_rules! impl_scalar_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                fn fmt_items<W: Write>(items: &[Self], _indent: usize, w: &mut W) -> fmt::Result {
                    fmt_flat(items, w)
                }
            }
        )*
    };
}

impl_scalar_element!(
    bool, char, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String,
);

impl Element for &str {
    fn fmt_items<W: Write>(items: &[Self], _indent: usize, w: &mut W) -> fmt::Result {
        fmt_flat(items, w)
    }
}

impl<T> Element for Complex<T>
where
    Complex<T>: Display,
{
    fn fmt_items<W: Write>(items: &[Self], _indent: usize, w: &mut W) -> fmt::Result {
        fmt_flat(items, w)
    }
}
