use fresco_core::{
    AgentMemory, DeterministicRng as _, Mark, Paint, Position, SplitMix64, Team, TickContext,
    TickError, TileSnapshot, TowerKind, WorldMut, DIRECTIONS,
};
use fresco_nav::{bounce_toward, dominant_step, random_step, NavOutcome};

use crate::behavior::{Behavior, BehaviorOutcome};
use crate::roles::SoldierDuty;

pub(crate) fn nav_result(outcome: NavOutcome) -> BehaviorOutcome {
    if outcome.moved() {
        BehaviorOutcome::Handled
    } else {
        BehaviorOutcome::Pass
    }
}

fn nearest<'a, I>(from: Position, tiles: I) -> Option<&'a TileSnapshot>
where
    I: IntoIterator<Item = &'a TileSnapshot>,
{
    let mut best: Option<&TileSnapshot> = None;
    let mut best_dist = i64::MAX;
    for tile in tiles {
        let dist = from.distance_squared(tile.position);
        if dist < best_dist {
            best_dist = dist;
            best = Some(tile);
        }
    }
    best
}

/// Priority 1: never forfeit a ready completion.
///
/// Checks every sensed ruin for a completable tower pattern, then the self
/// tile and its 8 neighbors for a completable resource pattern.
pub struct CompleteStructure {
    pub tower_kind: TowerKind,
}

impl Default for CompleteStructure {
    fn default() -> Self {
        Self {
            tower_kind: TowerKind::Paint,
        }
    }
}

impl<W> Behavior<W> for CompleteStructure
where
    W: WorldMut,
{
    fn name(&self) -> &'static str {
        "complete-structure"
    }

    fn tick(
        &mut self,
        _ctx: &TickContext,
        world: &mut W,
        _memory: &mut AgentMemory,
        _rng: &mut SplitMix64,
    ) -> Result<BehaviorOutcome, TickError> {
        for tile in world.nearby_tiles() {
            if tile.ruin && world.can_complete_tower(self.tower_kind, tile.position) {
                world.complete_tower(self.tower_kind, tile.position);
                return Ok(BehaviorOutcome::Handled);
            }
        }

        let here = world.self_unit().position;
        if world.can_complete_resource(here) {
            world.complete_resource(here);
            return Ok(BehaviorOutcome::Handled);
        }
        for direction in DIRECTIONS {
            let adjacent = here.step(direction);
            if world.can_complete_resource(adjacent) {
                world.complete_resource(adjacent);
                return Ok(BehaviorOutcome::Handled);
            }
        }

        Ok(BehaviorOutcome::Pass)
    }
}

/// Priority 2: finish what somebody started. Pick the nearest sensed tile
/// whose mark is unmet; paint it if in range, else close distance.
pub struct PaintProject {
    pub idle_chance: f32,
}

impl<W> Behavior<W> for PaintProject
where
    W: WorldMut,
{
    fn name(&self) -> &'static str {
        "paint-project"
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
        let Some(project) = nearest(here, tiles.iter().filter(|t| t.needs_project_paint())) else {
            return Ok(BehaviorOutcome::Pass);
        };
        let target = project.position;

        if world.can_attack(target) {
            // Re-read the mark at act time; the sensed list entry may be a
            // stale copy of a tile the simulator no longer exposes.
            let fresh = world
                .tile_at(target)
                .ok_or(TickError::TileOutOfView { at: target })?;
            world.attack(target, fresh.mark == Mark::Secondary);
            return Ok(BehaviorOutcome::Handled);
        }

        Ok(nav_result(bounce_toward(world, rng, self.idle_chance, target)))
    }
}

/// Priority 3: attack the nearest sensed enemy when in range, otherwise
/// close distance. One command per tick, never both.
pub struct Combat {
    pub idle_chance: f32,
}

impl<W> Behavior<W> for Combat
where
    W: WorldMut,
{
    fn name(&self) -> &'static str {
        "combat"
    }

    fn tick(
        &mut self,
        _ctx: &TickContext,
        world: &mut W,
        _memory: &mut AgentMemory,
        rng: &mut SplitMix64,
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

        Ok(nav_result(bounce_toward(
            world,
            rng,
            self.idle_chance,
            target.position,
        )))
    }
}

/// Priority 4: expand. Approach and mark the nearest virgin ruin; failing
/// that, and only with no enemy in sight, stake out a fresh resource
/// pattern in the local neighborhood.
pub struct MarkStructure {
    pub tower_kind: TowerKind,
    pub scan_radius: i32,
    pub idle_chance: f32,
}

impl<W> Behavior<W> for MarkStructure
where
    W: WorldMut,
{
    fn name(&self) -> &'static str {
        "mark-structure"
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
        let candidate = nearest(
            here,
            tiles.iter().filter(|tile| {
                if !tile.ruin || tile.mark != Mark::Empty {
                    return false;
                }
                // A ruin an ally is already working does not need us too.
                !matches!(world.unit_at(tile.position), Some(unit) if unit.team == Team::Ally)
            }),
        );

        if let Some(ruin) = candidate {
            let target = ruin.position;
            if here.is_adjacent(target) {
                if world.can_mark_tower(self.tower_kind, target) {
                    world.mark_tower(self.tower_kind, target);
                    return Ok(BehaviorOutcome::Handled);
                }
                // Adjacent but unmarkable (cooldown, contested): fall
                // through to the resource-pattern scan below.
            } else {
                return Ok(nav_result(bounce_toward(world, rng, self.idle_chance, target)));
            }
        }

        if world.nearby_units(Some(Team::Enemy)).is_empty() {
            for dx in -self.scan_radius..=self.scan_radius {
                for dy in -self.scan_radius..=self.scan_radius {
                    let spot = here.translate(dx, dy);
                    if world.can_mark_resource(spot) {
                        world.mark_resource(spot);
                        return Ok(BehaviorOutcome::Handled);
                    }
                }
            }
        }

        Ok(BehaviorOutcome::Pass)
    }
}

/// Priority 5: claim ground. Rank the 8 adjacent tiles (shuffled for
/// load-spreading) by paint priority and hit the best legal one.
pub struct AggressivePaint;

fn paint_priority(paint: Paint) -> u8 {
    match paint {
        Paint::Enemy => 3,
        Paint::Empty => 2,
        Paint::AllyPrimary | Paint::AllySecondary => 0,
    }
}

impl<W> Behavior<W> for AggressivePaint
where
    W: WorldMut,
{
    fn name(&self) -> &'static str {
        "aggressive-paint"
    }

    fn tick(
        &mut self,
        _ctx: &TickContext,
        world: &mut W,
        _memory: &mut AgentMemory,
        rng: &mut SplitMix64,
    ) -> Result<BehaviorOutcome, TickError> {
        let here = world.self_unit().position;
        let mut scan = DIRECTIONS;
        rng.shuffle(&mut scan);

        let mut best: Option<(Position, u8)> = None;
        for direction in scan {
            let spot = here.step(direction);
            if !world.can_attack(spot) {
                continue;
            }
            let Some(tile) = world.tile_at(spot) else {
                continue;
            };
            let priority = paint_priority(tile.paint);
            if best.map_or(true, |(_, p)| priority > p) {
                best = Some((spot, priority));
            }
        }

        match best {
            Some((spot, priority)) if priority > 0 => {
                world.attack(spot, false);
                Ok(BehaviorOutcome::Handled)
            }
            _ => Ok(BehaviorOutcome::Pass),
        }
    }
}

/// Priority 6: movement. Rangers march their dominant heading; surveyors
/// mix waypoint-seeking with a wander so explorers spread instead of
/// convoying.
pub struct Explore {
    pub duty: SoldierDuty,
    pub explore_bias: f32,
    pub idle_chance: f32,
}

impl<W> Behavior<W> for Explore
where
    W: WorldMut,
{
    fn name(&self) -> &'static str {
        "explore"
    }

    fn tick(
        &mut self,
        _ctx: &TickContext,
        world: &mut W,
        memory: &mut AgentMemory,
        rng: &mut SplitMix64,
    ) -> Result<BehaviorOutcome, TickError> {
        match self.duty {
            SoldierDuty::Ranger => Ok(nav_result(dominant_step(world, rng, &mut memory.heading))),
            SoldierDuty::Surveyor => {
                if rng.chance(self.explore_bias) {
                    let here = world.self_unit().position;
                    if let Some(waypoint) = memory.nearest_unexplored_waypoint(here) {
                        return Ok(nav_result(bounce_toward(
                            world,
                            rng,
                            self.idle_chance,
                            waypoint,
                        )));
                    }
                }
                Ok(nav_result(random_step(world, rng, self.idle_chance)))
            }
        }
    }
}
