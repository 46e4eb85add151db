//! Text rendering shared by the board types.

use crate::EDGE_LENGTH;
use itertools::iproduct;
use std::fmt::{self, Formatter, Write};

/// Write an 8x8 grid with 1-indexed headers, asking `square` for the
/// character at each (row, col).
pub fn format_grid<F>(f: &mut Formatter, mut square: F) -> fmt::Result
where
    F: FnMut(usize, usize) -> char,
{
    f.write_str("  1 2 3 4 5 6 7 8")?;

    for (row, col) in iproduct!(0..EDGE_LENGTH, 0..EDGE_LENGTH) {
        if col == 0 {
            write!(f, "\n{} ", row + 1)?;
        }
        f.write_char(square(row, col))?;
        f.write_char(' ')?;
    }
    Ok(())
}
