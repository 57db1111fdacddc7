#![cfg(feature = "std")]
//! Parsing of command-line ship and cell arguments.

use anyhow::{anyhow, bail, Context};

use crate::compass::Compass;
use crate::fleet::Fleet;
use crate::position::Position;
use crate::ship::Ship;

/// Parse `row,col` (e.g. `2,3`). Coordinates may be negative; bounds are the
/// fleet's business.
pub fn parse_cell(input: &str) -> anyhow::Result<Position> {
    let (row, col) = input
        .trim()
        .split_once(',')
        .ok_or_else(|| anyhow!("cell '{}' must look like row,col", input))?;
    let row: i32 = row
        .trim()
        .parse()
        .with_context(|| format!("invalid row '{}'", row))?;
    let col: i32 = col
        .trim()
        .parse()
        .with_context(|| format!("invalid column '{}'", col))?;
    Ok(Position::new(row, col))
}

/// Parse `kind:heading:row,col` (e.g. `nau:n:2,3`) into a ship.
pub fn parse_ship_spec(input: &str) -> anyhow::Result<Ship> {
    let mut parts = input.splitn(3, ':');
    let (Some(kind), Some(heading), Some(cell)) = (parts.next(), parts.next(), parts.next()) else {
        bail!("ship '{}' must look like kind:heading:row,col", input);
    };
    let mut chars = heading.chars();
    let bearing = match (chars.next(), chars.next()) {
        (Some(c), None) => Compass::from_char(c),
        _ => bail!("heading '{}' must be a single character", heading),
    };
    let anchor = parse_cell(cell)?;
    Ship::build(kind, bearing, anchor).map_err(|e| anyhow!("ship '{}': {}", input, e))
}

/// Build a fleet from ship arguments. Arguments that fail to parse or that the
/// fleet rejects are skipped; each skip is reported as a message.
pub fn place_all<S: AsRef<str>>(specs: &[S]) -> (Fleet, Vec<String>) {
    let mut fleet = Fleet::new();
    let mut skipped = Vec::new();
    for spec in specs {
        let spec = spec.as_ref();
        match parse_ship_spec(spec) {
            Ok(ship) => {
                let label = ship.to_string();
                if let Err(e) = fleet.try_add_ship(ship) {
                    skipped.push(format!("Skipping {}: {}", label, e));
                }
            }
            Err(e) => skipped.push(format!("Skipping {}: {}", spec, e)),
        }
    }
    (fleet, skipped)
}
