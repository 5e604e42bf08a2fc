//! Text rendering of a board.

use core::fmt;

use crate::board::{Board, Cell};
use crate::coordinate::Coordinate;

impl Cell {
    /// Marker drawn for this cell; ships are drawn as water when `hidden`.
    pub fn marker(self, hidden: bool) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Ship if hidden => '0',
            Cell::Ship => '■',
            Cell::Hit => 'X',
            Cell::Miss | Cell::Buffer => '.',
        }
    }
}

/// Header row of column numbers, then one line per row, all `|`-delimited.
///
/// ```text
/// 0 | 1 | 2 | 3 |
/// 1 | 0 | ■ | . |
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for c in 0..=n {
            write!(f, "{} |", c)?;
            if c < n {
                write!(f, " ")?;
            }
        }
        for r in 0..n {
            write!(f, "\n{} |", r + 1)?;
            for c in 0..n {
                let cell = self
                    .cell(Coordinate::new(r as i32, c as i32))
                    .unwrap_or(Cell::Empty);
                write!(f, " {} |", cell.marker(self.hidden()))?;
            }
        }
        Ok(())
    }
}
