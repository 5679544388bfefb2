use fresco_core::{DeterministicRng, Position, WorldMut};

use crate::{wander, NavOutcome};

/// Greedy goal-seeking with local obstacle avoidance.
///
/// Takes the direct bearing toward `target`, then scans outward in
/// alternating 45-degree steps (left first) up to ±135°. The first
/// direction whose move predicate passes is taken; if the bearing and all
/// six rotated candidates are blocked, delegates to the random walk.
///
/// Within acting range of the target (`distance² ≤ 2`) this is a no-op.
pub fn bounce_toward<W, R>(world: &mut W, rng: &mut R, idle_chance: f32, target: Position) -> NavOutcome
where
    W: WorldMut,
    R: DeterministicRng,
{
    let here = world.self_unit().position;
    if here.is_adjacent(target) {
        return NavOutcome::Arrived;
    }

    let Some(bearing) = here.direction_to(target) else {
        return NavOutcome::Arrived;
    };

    if world.can_move(bearing) {
        world.move_unit(bearing);
        return NavOutcome::Moved(bearing);
    }

    let mut left = bearing;
    let mut right = bearing;
    for _ in 0..3 {
        left = left.rotate_left();
        if world.can_move(left) {
            world.move_unit(left);
            return NavOutcome::Moved(left);
        }
        right = right.rotate_right();
        if world.can_move(right) {
            world.move_unit(right);
            return NavOutcome::Moved(right);
        }
    }

    wander::random_step(world, rng, idle_chance)
}
