//! Fleet registry: placement validation and spatial queries.
//!
//! A `Fleet` is a plain owned collection with no interior synchronization;
//! share it across threads only behind a lock.

use alloc::vec::Vec;
use log::{debug, trace};

use crate::cell_mask::{CellMask, Grid};
use crate::common::{BoardError, ShotResult};
use crate::config::{BOARD_SIZE, FLEET_SIZE};
use crate::position::Position;
use crate::ship::Ship;

/// Ships admitted to one side of the board, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Fleet { ships: Vec::new() }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Admit `ship` if it is legal; the fleet is left untouched otherwise.
    pub fn add_ship(&mut self, ship: Ship) -> bool {
        self.try_add_ship(ship).is_ok()
    }

    /// Admit `ship`, reporting why it was refused.
    ///
    /// The size guard compares with `>`, so `FLEET_SIZE + 1` ships fit.
    pub fn try_add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if let Err(err) = self.check_placement(&ship) {
            debug!("rejected {}: {}", ship, err);
            return Err(err);
        }
        debug!("admitted {} as ship #{}", ship, self.ships.len() + 1);
        self.ships.push(ship);
        Ok(())
    }

    /// Run every admission rule against `ship` without mutating the fleet.
    pub fn check_placement(&self, ship: &Ship) -> Result<(), BoardError> {
        if self.ships.len() > FLEET_SIZE {
            return Err(BoardError::FleetFull);
        }
        if !Self::inside_board(ship) {
            return Err(BoardError::ShipOutOfBounds);
        }
        if self.ships.iter().any(|s| s.too_close_to(ship)) {
            return Err(BoardError::ShipTooClose);
        }
        if ship.positions().iter().any(|p| self.ship_at(p).is_some()) {
            return Err(BoardError::ShipOverlaps);
        }
        Ok(())
    }

    fn inside_board(ship: &Ship) -> bool {
        let on_board = |v: i32| (0..BOARD_SIZE).contains(&v);
        on_board(ship.top_most().row())
            && on_board(ship.bottom_most().row())
            && on_board(ship.left_most().column())
            && on_board(ship.right_most().column())
    }

    /// Ships whose category equals `category` exactly, in fleet order.
    pub fn ships_like(&self, category: &str) -> Vec<&Ship> {
        self.ships
            .iter()
            .filter(|s| s.category() == category)
            .collect()
    }

    /// Ships with at least one unhit cell, in fleet order.
    pub fn floating_ships(&self) -> Vec<&Ship> {
        self.ships.iter().filter(|s| s.still_floating()).collect()
    }

    /// First ship occupying `pos`.
    pub fn ship_at(&self, pos: &Position) -> Option<&Ship> {
        self.ships.iter().find(|s| s.occupies(pos))
    }

    /// True once no ship floats.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| !s.still_floating())
    }

    /// Fire at `pos`, marking the hit on the first ship that occupies it.
    pub fn shoot(&mut self, pos: &Position) -> ShotResult {
        let Some(ship) = self.ships.iter_mut().find(|s| s.occupies(pos)) else {
            trace!("shot at {} missed", pos);
            return ShotResult::Miss;
        };
        ship.shoot(pos);
        let result = if ship.still_floating() {
            ShotResult::Hit(ship.kind())
        } else {
            ShotResult::Sunk(ship.kind())
        };
        trace!("shot at {} -> {:?}", pos, result);
        result
    }

    /// Every cell held by a ship. Admitted ships lie on the board, so this
    /// cannot fail.
    pub fn occupancy(&self) -> Grid {
        self.cells_where(|_| true)
    }

    /// Every ship cell that has been hit.
    pub fn hits(&self) -> Grid {
        self.cells_where(Position::is_hit)
    }

    /// Cells a new ship must avoid: the occupancy grown by one cell.
    pub fn exclusion_zone(&self) -> Grid {
        self.occupancy().dilate()
    }

    fn cells_where(&self, keep: impl Fn(&Position) -> bool) -> Grid {
        let mut grid = CellMask::new();
        for pos in self.ships.iter().flat_map(|s| s.positions()) {
            if keep(pos) {
                let _ = grid.set(pos);
            }
        }
        grid
    }
}
