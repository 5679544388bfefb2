use fresco_core::{DeterministicRng, WorldMut, DIRECTIONS};

use crate::NavOutcome;

/// Shuffled random walk with a cautious idle roll.
///
/// The shuffle is intentional jitter to keep co-located agents from
/// convoying; it draws from the injected seeded stream and is therefore
/// replay-stable.
pub fn random_step<W, R>(world: &mut W, rng: &mut R, idle_chance: f32) -> NavOutcome
where
    W: WorldMut,
    R: DeterministicRng,
{
    if rng.chance(idle_chance) {
        return NavOutcome::Idle;
    }

    let mut choices = DIRECTIONS;
    rng.shuffle(&mut choices);
    for direction in choices {
        if world.can_move(direction) {
            world.move_unit(direction);
            return NavOutcome::Moved(direction);
        }
    }

    NavOutcome::Blocked
}
