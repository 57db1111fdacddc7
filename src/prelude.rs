//! Commonly used types and utilities for ease of import.

pub use crate::{
    random_fleet, render_grid, BoardError, Compass, Fleet, Position, Ship, ShipKind, ShotResult,
    BOARD_SIZE, FLEET_SIZE,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
