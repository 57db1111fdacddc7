//! Ship kinds, their layouts, and placed ships.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;
use crate::compass::Compass;
use crate::position::Position;

/// The closed set of ship classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Barge,
    Caravel,
    Carrack,
    Frigate,
    Galleon,
}

// Galleon cells relative to the anchor, one table per heading.
const GALLEON_NORTH: [(i32, i32); 5] = [(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)];
const GALLEON_SOUTH: [(i32, i32); 5] = [(0, 0), (1, 0), (2, -1), (2, 0), (2, 1)];
const GALLEON_EAST: [(i32, i32); 5] = [(0, 0), (1, -2), (1, -1), (1, 0), (2, 0)];
const GALLEON_WEST: [(i32, i32); 5] = [(0, 0), (1, 0), (1, 1), (1, 2), (2, 0)];

impl ShipKind {
    pub const ALL: [ShipKind; 5] = [
        ShipKind::Barge,
        ShipKind::Caravel,
        ShipKind::Carrack,
        ShipKind::Frigate,
        ShipKind::Galleon,
    ];

    /// Number of cells a ship of this kind occupies.
    pub const fn size(self) -> usize {
        match self {
            ShipKind::Barge => 1,
            ShipKind::Caravel => 2,
            ShipKind::Carrack => 3,
            ShipKind::Frigate => 4,
            ShipKind::Galleon => 5,
        }
    }

    /// Category label, as matched by `Fleet::ships_like`.
    pub const fn category(self) -> &'static str {
        match self {
            ShipKind::Barge => "Barca",
            ShipKind::Caravel => "Caravela",
            ShipKind::Carrack => "Nau",
            ShipKind::Frigate => "Fragata",
            ShipKind::Galleon => "Galeao",
        }
    }

    /// Kind string accepted by [`Ship::build`].
    pub const fn key(self) -> &'static str {
        match self {
            ShipKind::Barge => "barca",
            ShipKind::Caravel => "caravela",
            ShipKind::Carrack => "nau",
            ShipKind::Frigate => "fragata",
            ShipKind::Galleon => "galeao",
        }
    }

    /// Cells occupied by a ship of this kind anchored at `anchor`.
    ///
    /// Straight ships always grow towards increasing indices: north and south
    /// both step down the rows, east and west both step right along the
    /// columns. The galleon is a five-cell shape rotated per heading.
    pub fn layout(self, anchor: &Position, bearing: Compass) -> Result<Vec<Position>, BoardError> {
        let offsets: Vec<(i32, i32)> = match (self, bearing) {
            (_, Compass::Unknown) => return Err(BoardError::InvalidBearing),
            (ShipKind::Galleon, Compass::North) => GALLEON_NORTH.to_vec(),
            (ShipKind::Galleon, Compass::South) => GALLEON_SOUTH.to_vec(),
            (ShipKind::Galleon, Compass::East) => GALLEON_EAST.to_vec(),
            (ShipKind::Galleon, Compass::West) => GALLEON_WEST.to_vec(),
            (_, Compass::North | Compass::South) => {
                (0..self.size() as i32).map(|i| (i, 0)).collect()
            }
            (_, Compass::East | Compass::West) => {
                (0..self.size() as i32).map(|i| (0, i)).collect()
            }
        };
        offsets
            .into_iter()
            .map(|(dr, dc)| {
                let mut cell = anchor.offset(dr, dc).ok_or(BoardError::ShipOutOfBounds)?;
                cell.occupy();
                Ok(cell)
            })
            .collect()
    }
}

impl FromStr for ShipKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShipKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or(BoardError::UnknownShipKind)
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category())
    }
}

/// A ship anchored on the board.
///
/// The cell list is derived once from `(kind, bearing, anchor)` and only the
/// hit flags of its cells change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    kind: ShipKind,
    bearing: Compass,
    anchor: Position,
    positions: Vec<Position>,
}

impl Ship {
    /// Lay out a ship of `kind`. Fails for `Compass::Unknown`, or with
    /// `ShipOutOfBounds` when a cell would leave the `i32` coordinate range.
    pub fn new(kind: ShipKind, bearing: Compass, anchor: Position) -> Result<Self, BoardError> {
        let positions = kind.layout(&anchor, bearing)?;
        Ok(Ship {
            kind,
            bearing,
            anchor,
            positions,
        })
    }

    /// Build a ship from a kind string such as `"nau"`.
    /// Unrecognized kinds yield `BoardError::UnknownShipKind`.
    pub fn build(kind: &str, bearing: Compass, anchor: Position) -> Result<Self, BoardError> {
        Ship::new(kind.parse()?, bearing, anchor)
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn category(&self) -> &'static str {
        self.kind.category()
    }

    pub fn size(&self) -> usize {
        self.positions.len()
    }

    pub fn bearing(&self) -> Compass {
        self.bearing
    }

    /// Anchor the ship was laid out from.
    pub fn anchor(&self) -> &Position {
        &self.anchor
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// True while at least one cell is unhit.
    pub fn still_floating(&self) -> bool {
        self.positions.iter().any(|p| !p.is_hit())
    }

    pub fn top_most(&self) -> &Position {
        self.extreme(|p| p.row(), Ordering::Less)
    }

    pub fn bottom_most(&self) -> &Position {
        self.extreme(|p| p.row(), Ordering::Greater)
    }

    pub fn left_most(&self) -> &Position {
        self.extreme(|p| p.column(), Ordering::Less)
    }

    pub fn right_most(&self) -> &Position {
        self.extreme(|p| p.column(), Ordering::Greater)
    }

    /// Earliest cell whose key beats every other in direction `wins`.
    fn extreme(&self, key: impl Fn(&Position) -> i32, wins: Ordering) -> &Position {
        self.positions
            .iter()
            .reduce(|best, p| if key(p).cmp(&key(best)) == wins { p } else { best })
            .unwrap_or(&self.anchor)
    }

    pub fn occupies(&self, pos: &Position) -> bool {
        self.positions.iter().any(|p| p == pos)
    }

    /// True if any cell of `other` touches a cell of this ship. Shared cells
    /// alone do not count; see `Fleet::try_add_ship` for the overlap check.
    pub fn too_close_to(&self, other: &Ship) -> bool {
        other
            .positions
            .iter()
            .any(|p| self.too_close_to_position(p))
    }

    pub fn too_close_to_position(&self, pos: &Position) -> bool {
        self.positions.iter().any(|p| p.is_adjacent_to(pos))
    }

    /// Mark every cell equal to `pos` as hit. Cells the ship does not own
    /// are ignored.
    pub fn shoot(&mut self, pos: &Position) {
        self.positions
            .iter_mut()
            .filter(|p| **p == *pos)
            .for_each(Position::shoot);
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.kind.category(), self.bearing, self.anchor)
    }
}
