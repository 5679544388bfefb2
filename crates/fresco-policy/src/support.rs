use fresco_core::{AgentMemory, Paint, SplitMix64, TickContext, TickError, WorldMut};
use fresco_nav::bounce_toward;

use crate::behavior::{Behavior, BehaviorOutcome};
use crate::soldier::nav_result;

/// Mopper priority 1: scrub the first attackable enemy-painted tile.
/// Stable sensed order; moppers do not jitter their scan.
pub struct MopEnemyTile;

impl<W> Behavior<W> for MopEnemyTile
where
    W: WorldMut,
{
    fn name(&self) -> &'static str {
        "mop-enemy-tile"
    }

    fn tick(
        &mut self,
        _ctx: &TickContext,
        world: &mut W,
        _memory: &mut AgentMemory,
        _rng: &mut SplitMix64,
    ) -> Result<BehaviorOutcome, TickError> {
        for tile in world.nearby_tiles() {
            if tile.paint.is_enemy() && world.can_attack(tile.position) {
                world.attack(tile.position, false);
                return Ok(BehaviorOutcome::Handled);
            }
        }
        Ok(BehaviorOutcome::Pass)
    }
}

/// Close distance to the nearest sensed enemy paint. Shared by moppers
/// (priority 2) and splashers (priority 2).
pub struct ChaseEnemyPaint {
    pub idle_chance: f32,
}

impl<W> Behavior<W> for ChaseEnemyPaint
where
    W: WorldMut,
{
    fn name(&self) -> &'static str {
        "chase-enemy-paint"
    }

    fn tick(
        &mut self,
        _ctx: &TickContext,
        world: &mut W,
        _memory: &mut AgentMemory,
        rng: &mut SplitMix64,
    ) -> Result<BehaviorOutcome, TickError> {
        let here = world.self_unit().position;
        let tiles = world.nearby_tiles();
        let Some(target) = tiles
            .iter()
            .filter(|tile| tile.paint.is_enemy())
            .min_by_key(|tile| here.distance_squared(tile.position))
        else {
            return Ok(BehaviorOutcome::Pass);
        };

        Ok(nav_result(bounce_toward(
            world,
            rng,
            self.idle_chance,
            target.position,
        )))
    }
}

/// Mopper priority 3: with no enemy paint anywhere, reclaim bare ground.
pub struct ScrubEmptyTile;

impl<W> Behavior<W> for ScrubEmptyTile
where
    W: WorldMut,
{
    fn name(&self) -> &'static str {
        "scrub-empty-tile"
    }

    fn tick(
        &mut self,
        _ctx: &TickContext,
        world: &mut W,
        _memory: &mut AgentMemory,
        _rng: &mut SplitMix64,
    ) -> Result<BehaviorOutcome, TickError> {
        for tile in world.nearby_tiles() {
            if tile.paint == Paint::Empty && world.can_attack(tile.position) {
                world.attack(tile.position, false);
                return Ok(BehaviorOutcome::Handled);
            }
        }
        Ok(BehaviorOutcome::Pass)
    }
}

/// Splasher priority 1: area attack on the standing tile, worth it only
/// when the neighborhood holds enemy paint or at least 3 empty tiles.
pub struct SplashSelf {
    pub min_empty: usize,
}

impl Default for SplashSelf {
    fn default() -> Self {
        Self { min_empty: 3 }
    }
}

impl<W> Behavior<W> for SplashSelf
where
    W: WorldMut,
{
    fn name(&self) -> &'static str {
        "splash-self"
    }

    fn tick(
        &mut self,
        _ctx: &TickContext,
        world: &mut W,
        _memory: &mut AgentMemory,
        _rng: &mut SplitMix64,
    ) -> Result<BehaviorOutcome, TickError> {
        let here = world.self_unit().position;
        if !world.can_attack(here) {
            return Ok(BehaviorOutcome::Pass);
        }

        let mut enemy = 0usize;
        let mut empty = 0usize;
        for tile in world.nearby_tiles() {
            if tile.paint.is_enemy() {
                enemy += 1;
            } else if tile.paint == Paint::Empty {
                empty += 1;
            }
        }

        if enemy > 0 || empty >= self.min_empty {
            world.attack(here, false);
            return Ok(BehaviorOutcome::Handled);
        }
        Ok(BehaviorOutcome::Pass)
    }
}
