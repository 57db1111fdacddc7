//! Text rendering of fleets for whatever front end displays them.

use alloc::string::String;
use core::fmt::Write;

use crate::config::BOARD_SIZE;
use crate::fleet::Fleet;
use crate::position::Position;
use crate::ship::{Ship, ShipKind};

/// One `Display` line per ship.
pub fn ship_list<'a, I>(ships: I) -> String
where
    I: IntoIterator<Item = &'a Ship>,
{
    let mut out = String::new();
    for ship in ships {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", ship);
    }
    out
}

/// Board map: `.` water, `#` intact ship cell, `X` hit ship cell.
pub fn render_grid(fleet: &Fleet) -> String {
    let occupied = fleet.occupancy();
    let hits = fleet.hits();
    let mut out = String::from("   ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", c);
    }
    out.push('\n');
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "{:2} ", r);
        for c in 0..BOARD_SIZE {
            let pos = Position::new(r, c);
            let cell = if hits.get(&pos).unwrap_or(false) {
                'X'
            } else if occupied.get(&pos).unwrap_or(false) {
                '#'
            } else {
                '.'
            };
            let _ = write!(out, " {}", cell);
        }
        out.push('\n');
    }
    out
}

impl Fleet {
    pub fn describe_all(&self) -> String {
        ship_list(self.ships())
    }

    pub fn describe_category(&self, category: &str) -> String {
        ship_list(self.ships_like(category))
    }

    pub fn describe_floating(&self) -> String {
        ship_list(self.floating_ships())
    }

    /// Per-category counts followed by floating and sunk totals.
    pub fn describe_status(&self) -> String {
        let mut out = String::new();
        for kind in ShipKind::ALL {
            let ships = self.ships_like(kind.category());
            let afloat = ships.iter().filter(|s| s.still_floating()).count();
            let _ = writeln!(out, "{:<9} {} ({} afloat)", kind.category(), ships.len(), afloat);
        }
        let floating = self.floating_ships().len();
        let _ = writeln!(
            out,
            "Total     {} ships, {} floating, {} sunk",
            self.len(),
            floating,
            self.len() - floating
        );
        out
    }
}
