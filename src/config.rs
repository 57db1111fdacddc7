use crate::ship::ShipKind;

/// Side of the square board; valid rows and columns are `0..BOARD_SIZE`.
pub const BOARD_SIZE: i32 = 10;

/// Nominal fleet capacity. `Fleet::add_ship` admits `FLEET_SIZE + 1` ships
/// before it starts rejecting.
pub const FLEET_SIZE: usize = 10;

pub const NUM_KINDS: usize = 5;

/// Regular fleet composition, largest ships first.
pub const STANDARD_FLEET: [(ShipKind, usize); NUM_KINDS] = [
    (ShipKind::Galleon, 1),
    (ShipKind::Frigate, 1),
    (ShipKind::Carrack, 2),
    (ShipKind::Caravel, 3),
    (ShipKind::Barge, 4),
];

/// Total number of ships in [`STANDARD_FLEET`].
pub const STANDARD_FLEET_SHIPS: usize = 1 + 1 + 2 + 3 + 4;

/// Random anchor/bearing draws tried per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Whole-fleet layouts tried by `random_fleet` before giving up.
pub const MAX_FLEET_ATTEMPTS: usize = 100;

/// Environment variable read by `init_logging`.
pub const LOG_ENV: &str = "FLEET_LOG";
