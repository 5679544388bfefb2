#![cfg(feature = "serde")]

use fresco_core::{Direction, GridSize, Mark, Paint, Position, TileSnapshot, Waypoints};

#[test]
fn tile_snapshot_roundtrips_via_serde() {
    let tile = TileSnapshot {
        position: Position::new(5, -3),
        paint: Paint::AllySecondary,
        mark: Mark::Secondary,
        ruin: true,
    };

    let json = serde_json::to_string(&tile).expect("serialize tile");
    let back: TileSnapshot = serde_json::from_str(&json).expect("deserialize tile");

    assert_eq!(back, tile);
}

#[test]
fn waypoints_roundtrip_via_serde() {
    let waypoints = Waypoints::for_map(GridSize::new(24, 18));

    let json = serde_json::to_string(&waypoints).expect("serialize waypoints");
    let back: Waypoints = serde_json::from_str(&json).expect("deserialize waypoints");

    assert_eq!(back, waypoints);
}

#[test]
fn direction_names_are_stable() {
    let json = serde_json::to_string(&Direction::Northwest).expect("serialize direction");
    assert_eq!(json, "\"Northwest\"");
    let back: Direction = serde_json::from_str(&json).expect("deserialize direction");
    assert_eq!(back, Direction::Northwest);
}
