//! Common types for the fleet: errors and shot results.

use crate::cell_mask::CellMaskError;
use crate::ship::ShipKind;

/// Result of a shot fired at a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// No ship occupies the cell.
    Miss,
    /// The cell belongs to a ship that still floats.
    Hit(ShipKind),
    /// The cell belongs to a ship with no unhit cell left.
    Sunk(ShipKind),
}

/// Errors returned by ship construction and fleet operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying cell mask error (coordinates off the board).
    CellMask(CellMaskError),
    /// Kind string does not name a ship.
    UnknownShipKind,
    /// Ships need one of the four real headings.
    InvalidBearing,
    /// Some ship cell lies outside the board.
    ShipOutOfBounds,
    /// Some ship cell touches a cell of a ship already in the fleet.
    ShipTooClose,
    /// Some ship cell is already held by a ship in the fleet.
    ShipOverlaps,
    /// The fleet admits no more ships.
    FleetFull,
    /// Random placement found no legal spot.
    UnableToPlaceShip,
}

impl From<CellMaskError> for BoardError {
    fn from(err: CellMaskError) -> Self {
        BoardError::CellMask(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::CellMask(e) => write!(f, "Cell mask error: {}", e),
            BoardError::UnknownShipKind => write!(f, "Unknown ship kind"),
            BoardError::InvalidBearing => write!(f, "Ship bearing must be n, s, e or o"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipTooClose => write!(f, "Ship placement is too close to another ship"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::FleetFull => write!(f, "Fleet is full"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
