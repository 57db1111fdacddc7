//! Random fleet generation.

use log::{debug, info};
use rand::Rng;

use crate::cell_mask::Grid;
use crate::common::BoardError;
use crate::compass::Compass;
use crate::config::{BOARD_SIZE, MAX_FLEET_ATTEMPTS, MAX_PLACEMENT_ATTEMPTS, STANDARD_FLEET};
use crate::fleet::Fleet;
use crate::position::Position;
use crate::ship::{Ship, ShipKind};

/// Draw a ship of `kind` that `fleet` would admit.
///
/// Anchors are drawn over the whole board and candidates whose cells hit the
/// fleet's exclusion zone are skipped before the full admission check runs.
pub fn random_ship<R: Rng>(rng: &mut R, kind: ShipKind, fleet: &Fleet) -> Result<Ship, BoardError> {
    let blocked = fleet.exclusion_zone();
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let bearing = Compass::ALL[rng.random_range(0..Compass::ALL.len())];
        let anchor = Position::new(
            rng.random_range(0..BOARD_SIZE),
            rng.random_range(0..BOARD_SIZE),
        );
        let ship = Ship::new(kind, bearing, anchor)?;
        let Ok(cells) = Grid::from_positions(ship.positions()) else {
            continue;
        };
        if !(cells & blocked).is_empty() {
            continue;
        }
        if fleet.check_placement(&ship).is_ok() {
            return Ok(ship);
        }
    }
    Err(BoardError::UnableToPlaceShip)
}

/// Build the standard fleet, largest ships first. A layout that leaves no
/// room for a later ship is discarded and started over.
pub fn random_fleet<R: Rng>(rng: &mut R) -> Result<Fleet, BoardError> {
    for attempt in 1..=MAX_FLEET_ATTEMPTS {
        match try_standard_fleet(rng) {
            Ok(fleet) => {
                info!("generated random fleet of {} ships (attempt {})", fleet.len(), attempt);
                return Ok(fleet);
            }
            Err(BoardError::UnableToPlaceShip) => debug!("fleet layout {} got stuck", attempt),
            Err(e) => return Err(e),
        }
    }
    Err(BoardError::UnableToPlaceShip)
}

fn try_standard_fleet<R: Rng>(rng: &mut R) -> Result<Fleet, BoardError> {
    let mut fleet = Fleet::new();
    for (kind, count) in STANDARD_FLEET {
        for _ in 0..count {
            let ship = random_ship(rng, kind, &fleet)?;
            fleet.try_add_ship(ship)?;
        }
    }
    Ok(fleet)
}
