//! Grid cells.

use core::fmt;
use core::hash::{Hash, Hasher};

/// A single cell of the board.
///
/// Identity is the `(row, column)` pair only: the `occupied` and `hit` flags
/// are state carried by the cell and never take part in equality or hashing,
/// so a freshly built `Position` can be used to look up a cell owned by a ship.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    row: i32,
    column: i32,
    occupied: bool,
    hit: bool,
}

impl Position {
    /// Create an unoccupied, unhit cell. Coordinates may lie off the board;
    /// bounds are only checked when a ship is admitted to a fleet.
    pub const fn new(row: i32, column: i32) -> Self {
        Self {
            row,
            column,
            occupied: false,
            hit: false,
        }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// Mark the cell as holding part of a ship.
    pub fn occupy(&mut self) {
        self.occupied = true;
    }

    /// Mark the cell as hit. Repeated shots leave it hit.
    pub fn shoot(&mut self) {
        self.hit = true;
    }

    /// True for the 8 surrounding cells (Chebyshev distance 1). A cell is not
    /// adjacent to itself.
    pub fn is_adjacent_to(&self, other: &Position) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.column.abs_diff(other.column);
        dr.max(dc) == 1
    }

    /// The same coordinates moved by `(dr, dc)`, with fresh flags. `None` if
    /// either coordinate leaves the `i32` range.
    pub fn offset(&self, dr: i32, dc: i32) -> Option<Position> {
        Some(Position::new(
            self.row.checked_add(dr)?,
            self.column.checked_add(dc)?,
        ))
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.column == other.column
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.column.hash(state);
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, column): (i32, i32)) -> Self {
        Position::new(row, column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
