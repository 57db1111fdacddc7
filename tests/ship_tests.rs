use battleship_fleet::{BoardError, Compass, Position, Ship, ShipKind};
use std::collections::HashSet;

fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

fn cells(ship: &Ship) -> HashSet<(i32, i32)> {
    ship.positions().iter().map(|c| (c.row(), c.column())).collect()
}

#[test]
fn test_build_by_kind_string() -> Result<(), BoardError> {
    let expected = [
        ("barca", ShipKind::Barge, "Barca", 1),
        ("caravela", ShipKind::Caravel, "Caravela", 2),
        ("nau", ShipKind::Carrack, "Nau", 3),
        ("fragata", ShipKind::Frigate, "Fragata", 4),
        ("galeao", ShipKind::Galleon, "Galeao", 5),
    ];
    for (key, kind, category, size) in expected {
        let ship = Ship::build(key, Compass::East, p(5, 5))?;
        assert_eq!(ship.kind(), kind);
        assert_eq!(ship.category(), category);
        assert_eq!(ship.size(), size);
        assert_eq!(ship.positions().len(), size);
        assert_eq!(ship.bearing(), Compass::East);
        assert_eq!(ship.anchor(), &p(5, 5));
    }
    Ok(())
}

#[test]
fn test_build_unknown_kind() {
    assert_eq!(
        Ship::build("submarino", Compass::North, p(1, 1)).unwrap_err(),
        BoardError::UnknownShipKind
    );
    // kind strings are lowercase
    assert_eq!(
        Ship::build("Nau", Compass::North, p(1, 1)).unwrap_err(),
        BoardError::UnknownShipKind
    );
}

#[test]
fn test_unknown_bearing_is_refused() {
    for kind in ShipKind::ALL {
        assert_eq!(
            Ship::new(kind, Compass::Unknown, p(1, 1)).unwrap_err(),
            BoardError::InvalidBearing
        );
    }
}

#[test]
fn test_caravel_north_layout_and_sinking() -> Result<(), BoardError> {
    let mut caravel = Ship::new(ShipKind::Caravel, Compass::North, p(2, 3))?;
    assert_eq!(caravel.positions(), &[p(2, 3), p(3, 3)]);
    assert!(caravel.positions().iter().all(|c| c.is_occupied()));

    assert_eq!(caravel.top_most().row(), 2);
    assert_eq!(caravel.bottom_most().row(), 3);
    assert_eq!(caravel.left_most().column(), 3);
    assert_eq!(caravel.right_most().column(), 3);

    assert!(caravel.occupies(&p(2, 3)));
    assert!(caravel.occupies(&p(3, 3)));
    assert!(!caravel.occupies(&p(4, 3)));

    assert!(caravel.still_floating());
    caravel.shoot(&p(2, 3));
    assert!(caravel.still_floating());
    // repeated shot changes nothing
    caravel.shoot(&p(2, 3));
    assert!(caravel.positions()[0].is_hit());
    assert!(caravel.still_floating());
    caravel.shoot(&p(3, 3));
    assert!(!caravel.still_floating());
    Ok(())
}

#[test]
fn test_straight_ships_grow_towards_higher_indices() -> Result<(), BoardError> {
    let north = Ship::new(ShipKind::Frigate, Compass::North, p(1, 1))?;
    let south = Ship::new(ShipKind::Frigate, Compass::South, p(1, 1))?;
    assert_eq!(north.positions(), &[p(1, 1), p(2, 1), p(3, 1), p(4, 1)]);
    assert_eq!(north.positions(), south.positions());

    let east = Ship::new(ShipKind::Carrack, Compass::East, p(4, 2))?;
    let west = Ship::new(ShipKind::Carrack, Compass::West, p(4, 2))?;
    assert_eq!(east.positions(), &[p(4, 2), p(4, 3), p(4, 4)]);
    assert_eq!(east.positions(), west.positions());
    Ok(())
}

#[test]
fn test_galleon_layouts() -> Result<(), BoardError> {
    let cases = [
        (Compass::North, p(1, 1), [(1, 1), (1, 2), (1, 3), (2, 2), (3, 2)]),
        (Compass::South, p(1, 2), [(1, 2), (2, 2), (3, 1), (3, 2), (3, 3)]),
        (Compass::East, p(2, 3), [(2, 3), (3, 1), (3, 2), (3, 3), (4, 3)]),
        (Compass::West, p(2, 2), [(2, 2), (3, 2), (3, 3), (3, 4), (4, 2)]),
    ];
    for (bearing, anchor, expected) in cases {
        let galleon = Ship::new(ShipKind::Galleon, bearing, anchor)?;
        assert_eq!(galleon.size(), 5);
        assert_eq!(cells(&galleon), expected.into_iter().collect::<HashSet<_>>());
    }
    Ok(())
}

#[test]
fn test_galleon_extremes() -> Result<(), BoardError> {
    let north = Ship::new(ShipKind::Galleon, Compass::North, p(1, 1))?;
    assert_eq!(north.top_most(), &p(1, 1));
    assert_eq!(north.bottom_most(), &p(3, 2));
    assert_eq!(north.left_most(), &p(1, 1));
    assert_eq!(north.right_most(), &p(1, 3));

    let east = Ship::new(ShipKind::Galleon, Compass::East, p(2, 3))?;
    assert_eq!(east.left_most(), &p(3, 1));
    assert_eq!(east.bottom_most(), &p(4, 3));
    Ok(())
}

#[test]
fn test_extremes_prefer_first_cell_on_ties() -> Result<(), BoardError> {
    let frigate = Ship::new(ShipKind::Frigate, Compass::East, p(1, 1))?;
    let first = &frigate.positions()[0];
    assert!(std::ptr::eq(frigate.top_most(), first));
    assert!(std::ptr::eq(frigate.bottom_most(), first));

    let column = Ship::new(ShipKind::Frigate, Compass::South, p(1, 1))?;
    let first = &column.positions()[0];
    assert!(std::ptr::eq(column.left_most(), first));
    assert!(std::ptr::eq(column.right_most(), first));
    Ok(())
}

#[test]
fn test_too_close_to() -> Result<(), BoardError> {
    let barge = Ship::new(ShipKind::Barge, Compass::North, p(4, 3))?;
    let caravel = Ship::new(ShipKind::Caravel, Compass::North, p(2, 3))?;
    assert!(barge.too_close_to(&caravel));
    assert!(caravel.too_close_to(&barge));
    assert!(caravel.too_close_to_position(&p(4, 4)));
    assert!(!caravel.too_close_to_position(&p(5, 3)));

    let far = Ship::new(ShipKind::Barge, Compass::North, p(10, 10))?;
    let origin = Ship::new(ShipKind::Barge, Compass::North, p(0, 0))?;
    assert!(!far.too_close_to(&origin));
    assert!(!origin.too_close_to(&far));
    Ok(())
}

#[test]
fn test_too_close_to_ignores_shared_cells() -> Result<(), BoardError> {
    let a = Ship::new(ShipKind::Barge, Compass::North, p(5, 5))?;
    let b = Ship::new(ShipKind::Barge, Compass::East, p(5, 5))?;
    assert!(!a.too_close_to(&b));
    assert!(a.occupies(b.anchor()));
    Ok(())
}

#[test]
fn test_shoot_elsewhere_is_ignored() -> Result<(), BoardError> {
    let mut nau = Ship::new(ShipKind::Carrack, Compass::East, p(0, 0))?;
    nau.shoot(&p(1, 1));
    assert!(nau.positions().iter().all(|c| !c.is_hit()));
    Ok(())
}

#[test]
fn test_display_mentions_category() -> Result<(), BoardError> {
    let frigate = Ship::new(ShipKind::Frigate, Compass::South, p(1, 1))?;
    let s = frigate.to_string();
    assert!(s.contains("Fragata"));
    assert_eq!(s, "[Fragata s (1, 1)]");
    Ok(())
}

#[test]
fn test_kind_parsing() {
    assert_eq!("galeao".parse::<ShipKind>(), Ok(ShipKind::Galleon));
    assert_eq!("".parse::<ShipKind>(), Err(BoardError::UnknownShipKind));
    for kind in ShipKind::ALL {
        assert_eq!(kind.key().parse::<ShipKind>(), Ok(kind));
    }
}

#[test]
fn test_layout_past_coordinate_limits_is_refused() {
    let anchor = p(i32::MAX, 0);
    assert_eq!(
        Ship::new(ShipKind::Caravel, Compass::North, anchor).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    // A single cell still fits at the very edge.
    assert!(Ship::new(ShipKind::Barge, Compass::North, anchor).is_ok());
    // South galleon reaches one column left of its anchor.
    assert_eq!(
        Ship::new(ShipKind::Galleon, Compass::South, p(0, i32::MIN)).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::build("fragata", Compass::East, p(0, i32::MAX - 2)).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
}

#[test]
fn test_extremes_of_every_layout_are_own_cells() -> Result<(), BoardError> {
    for kind in ShipKind::ALL {
        for heading in Compass::ALL {
            let ship = Ship::new(kind, heading, p(4, 4))?;
            for extreme in [
                ship.top_most(),
                ship.bottom_most(),
                ship.left_most(),
                ship.right_most(),
            ] {
                assert!(ship.occupies(extreme), "{} lost {}", ship, extreme);
            }
            let rows = ship.positions().iter().map(Position::row);
            assert_eq!(ship.top_most().row(), rows.clone().min().unwrap());
            assert_eq!(ship.bottom_most().row(), rows.max().unwrap());
        }
    }
    Ok(())
}
