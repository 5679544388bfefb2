use fresco_core::{
    AgentMemory, DeterministicRng as _, SplitMix64, Team, TickContext, TickError, UnitKind,
    WorldMut, DIRECTIONS,
};

use crate::behavior::{Behavior, BehaviorOutcome};
use crate::economy::{EconomyConfig, SpawnRule};

/// Tower priority 1: shoot the nearest sensed enemy when legal. Towers
/// never chase.
pub struct TowerAttack;

impl<W> Behavior<W> for TowerAttack
where
    W: WorldMut,
{
    fn name(&self) -> &'static str {
        "tower-attack"
    }

    fn tick(
        &mut self,
        _ctx: &TickContext,
        world: &mut W,
        _memory: &mut AgentMemory,
        _rng: &mut SplitMix64,
    ) -> Result<BehaviorOutcome, TickError> {
        let here = world.self_unit().position;
        let enemies = world.nearby_units(Some(Team::Enemy));
        let Some(target) = enemies
            .iter()
            .min_by_key(|enemy| here.distance_squared(enemy.position))
        else {
            return Ok(BehaviorOutcome::Pass);
        };

        if world.can_attack(target.position) {
            world.attack(target.position, false);
            return Ok(BehaviorOutcome::Handled);
        }
        Ok(BehaviorOutcome::Pass)
    }
}

/// Tower priority 2: consult the spawn economy and attempt exactly one
/// build at a random adjacent tile.
///
/// On build-precondition failure the attempt falls back to the default
/// soldier category at the same tile without re-rolling; the spawn-cycle
/// counter advances only when the rolled category actually builds.
pub struct TowerSpawn {
    pub economy: EconomyConfig,
}

impl<W> Behavior<W> for TowerSpawn
where
    W: WorldMut,
{
    fn name(&self) -> &'static str {
        "tower-spawn"
    }

    fn tick(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        memory: &mut AgentMemory,
        rng: &mut SplitMix64,
    ) -> Result<BehaviorOutcome, TickError> {
        let under_threat = !world.nearby_units(Some(Team::Enemy)).is_empty();
        let Some(kind) = self.economy.decide(
            ctx.round,
            world.treasury(),
            under_threat,
            memory.spawn_cycle,
            rng,
        ) else {
            return Ok(BehaviorOutcome::Pass);
        };

        let here = world.self_unit().position;
        let spot = here.step(DIRECTIONS[rng.next_below(8)]);

        if world.can_build(kind, spot) {
            world.build(kind, spot);
            if self.uses_cycle(ctx.round) {
                memory.spawn_cycle = memory.spawn_cycle.wrapping_add(1);
            }
            return Ok(BehaviorOutcome::Handled);
        }

        if kind != UnitKind::Soldier && world.can_build(UnitKind::Soldier, spot) {
            world.build(UnitKind::Soldier, spot);
            return Ok(BehaviorOutcome::Handled);
        }

        Ok(BehaviorOutcome::Pass)
    }
}

impl TowerSpawn {
    fn uses_cycle(&self, round: u32) -> bool {
        matches!(
            self.economy.phase_for(round),
            Some(phase) if matches!(phase.rule, SpawnRule::Cycle(_))
        )
    }
}
