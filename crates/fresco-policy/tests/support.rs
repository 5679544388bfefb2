mod common;

use common::{tile, Command, MockWorld};
use fresco_core::{Direction, Paint, Position, TickContext, TickOutcome, UnitKind};
use fresco_policy::{Brain, PolicyConfig};

fn ctx(round: u32) -> TickContext {
    TickContext { round, seed: 7 }
}

fn brain_for(kind: UnitKind) -> Brain<MockWorld> {
    Brain::new(11u64, kind, &PolicyConfig::default())
}

#[test]
fn mopper_scrubs_the_first_attackable_enemy_tile() {
    let mut world = MockWorld::unit_of_kind(UnitKind::Mopper, Position::new(5, 5));
    let mut enemy_tile = tile(6, 5);
    enemy_tile.paint = Paint::Enemy;
    world.add_tile(enemy_tile);
    let mut brain = brain_for(UnitKind::Mopper);

    let outcome = brain.tick(&ctx(1), &mut world);

    assert_eq!(
        outcome,
        TickOutcome::Acted {
            behavior: "mop-enemy-tile"
        }
    );
    assert_eq!(
        world.commands,
        vec![Command::Attack(Position::new(6, 5), false)]
    );
}

#[test]
fn mopper_chases_enemy_paint_out_of_reach() {
    let mut world = MockWorld::unit_of_kind(UnitKind::Mopper, Position::new(5, 5));
    let mut far_tile = tile(9, 5);
    far_tile.paint = Paint::Enemy;
    world.add_tile(far_tile);
    let mut brain = brain_for(UnitKind::Mopper);

    let outcome = brain.tick(&ctx(1), &mut world);

    assert_eq!(
        outcome,
        TickOutcome::Acted {
            behavior: "chase-enemy-paint"
        }
    );
    assert_eq!(world.moves(), vec![Direction::East]);
}

#[test]
fn mopper_reclaims_bare_ground_when_no_enemy_paint_remains() {
    let mut world = MockWorld::unit_of_kind(UnitKind::Mopper, Position::new(5, 5));
    world.add_tile(tile(4, 5));
    let mut brain = brain_for(UnitKind::Mopper);

    let outcome = brain.tick(&ctx(1), &mut world);

    assert_eq!(
        outcome,
        TickOutcome::Acted {
            behavior: "scrub-empty-tile"
        }
    );
    assert_eq!(
        world.commands,
        vec![Command::Attack(Position::new(4, 5), false)]
    );
}

#[test]
fn splasher_splashes_its_own_tile_over_enemy_paint() {
    let here = Position::new(5, 5);
    let mut world = MockWorld::unit_of_kind(UnitKind::Splasher, here);
    let mut enemy_tile = tile(6, 6);
    enemy_tile.paint = Paint::Enemy;
    world.add_tile(enemy_tile);
    let mut brain = brain_for(UnitKind::Splasher);

    let outcome = brain.tick(&ctx(1), &mut world);

    assert_eq!(
        outcome,
        TickOutcome::Acted {
            behavior: "splash-self"
        }
    );
    assert_eq!(world.commands, vec![Command::Attack(here, false)]);
}

#[test]
fn splasher_splashes_over_enough_bare_ground() {
    let here = Position::new(5, 5);
    let mut world = MockWorld::unit_of_kind(UnitKind::Splasher, here);
    world.add_tile(tile(4, 4));
    world.add_tile(tile(4, 5));
    world.add_tile(tile(4, 6));
    let mut brain = brain_for(UnitKind::Splasher);

    let outcome = brain.tick(&ctx(1), &mut world);

    assert_eq!(
        outcome,
        TickOutcome::Acted {
            behavior: "splash-self"
        }
    );
}

#[test]
fn splasher_holds_fire_over_thin_pickings() {
    let here = Position::new(5, 5);
    let mut world = MockWorld::unit_of_kind(UnitKind::Splasher, here);
    // Two empty tiles: under the threshold, and no enemy paint anywhere.
    world.add_tile(tile(4, 4));
    world.add_tile(tile(4, 5));
    let mut config = PolicyConfig::default();
    config.nav.idle_chance = 0.0;
    let mut brain = Brain::new(11u64, UnitKind::Splasher, &config);

    let outcome = brain.tick(&ctx(1), &mut world);

    // Nothing worth a splash and no enemy paint to chase: the tick falls
    // through to the navigation fallback.
    assert_eq!(
        outcome,
        TickOutcome::Acted {
            behavior: "nav-fallback"
        }
    );
    assert!(!world
        .commands
        .iter()
        .any(|c| matches!(c, Command::Attack(_, _))));
}
