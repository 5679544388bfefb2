use fresco_core::{DeterministicRng, Direction, WorldMut, DIRECTIONS};

use crate::NavOutcome;

/// Cheap frontier-spreading movement for unassigned explorers.
///
/// Each agent keeps one persistent heading (`heading` slot in its memory),
/// chosen uniformly at random on first use. The tick tries the heading,
/// then heading±45° (left first), then heading±90°. Only when all five
/// fail does the heading flip to its exact opposite — the flip is stored
/// and persists to later ticks — and the flipped heading is tried
/// immediately. If even that is blocked the scan falls back to all 8
/// directions in canonical order.
pub fn dominant_step<W, R>(world: &mut W, rng: &mut R, heading: &mut Option<Direction>) -> NavOutcome
where
    W: WorldMut,
    R: DeterministicRng,
{
    let current = *heading.get_or_insert_with(|| DIRECTIONS[rng.next_below(8)]);

    let left = current.rotate_left();
    let right = current.rotate_right();
    let candidates = [current, left, right, left.rotate_left(), right.rotate_right()];
    for candidate in candidates {
        if world.can_move(candidate) {
            world.move_unit(candidate);
            return NavOutcome::Moved(candidate);
        }
    }

    // Dead end: reverse and keep the reversal.
    let flipped = current.opposite();
    *heading = Some(flipped);
    if world.can_move(flipped) {
        world.move_unit(flipped);
        return NavOutcome::Moved(flipped);
    }

    // Surrounded; take anything legal.
    for direction in DIRECTIONS {
        if world.can_move(direction) {
            world.move_unit(direction);
            return NavOutcome::Moved(direction);
        }
    }

    NavOutcome::Blocked
}
