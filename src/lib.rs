#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod cell_mask;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod compass;
pub mod config;
mod fleet;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod position;
pub mod prelude;
pub mod report;
mod ship;

pub use cell_mask::{CellMask, CellMaskError, Cells, Grid};
pub use common::*;
pub use compass::Compass;
pub use config::*;
pub use fleet::Fleet;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level_from};
pub use placement::{random_fleet, random_ship};
pub use position::Position;
pub use report::{render_grid, ship_list};
pub use ship::{Ship, ShipKind};
