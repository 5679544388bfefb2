use fresco_core::{
    AgentId, AgentMemory, SplitMix64, TickContext, TickError, TickOutcome, TowerKind, UnitKind,
    WorldMut,
};
use fresco_nav::random_step;
use fresco_tools::{NullTraceSink, TraceEvent, TraceSink};

use crate::behavior::{Behavior, BehaviorOutcome};
use crate::config::{PolicyConfig, SoldierBehavior};
use crate::roles::{Role, SoldierDuty};
use crate::soldier::{
    AggressivePaint, Combat, CompleteStructure, Explore, MarkStructure, PaintProject,
};
use crate::support::{ChaseEnemyPaint, MopEnemyTile, ScrubEmptyTile, SplashSelf};
use crate::tower::{TowerAttack, TowerSpawn};

/// All decision-path randomness draws from this stream.
const STREAM_DECISION: u64 = 0;

/// A role's ordered behavior list. Evaluated front-to-back once per tick;
/// the first behavior that issues a command ends the tick.
pub struct PriorityPolicy<W>
where
    W: WorldMut,
{
    behaviors: Vec<Box<dyn Behavior<W>>>,
    /// Mobile roles get the shuffled random-walk fallback after the list;
    /// towers do not move and skip it.
    nav_fallback: bool,
    idle_chance: f32,
}

impl<W> PriorityPolicy<W>
where
    W: WorldMut,
{
    pub fn new(behaviors: Vec<Box<dyn Behavior<W>>>, nav_fallback: bool, idle_chance: f32) -> Self {
        Self {
            behaviors,
            nav_fallback,
            idle_chance,
        }
    }

    /// The behavior list for one unit kind: a single match, no reflection.
    pub fn for_role(kind: UnitKind, stable_id: u64, config: &PolicyConfig) -> Self {
        let idle_chance = config.nav.idle_chance;
        match Role::of(kind) {
            Role::Soldier => {
                let duty = SoldierDuty::assign(stable_id, config.soldier.directional_pct);
                let behaviors = config
                    .soldier
                    .priorities
                    .iter()
                    .map(|behavior| -> Box<dyn Behavior<W>> {
                        match behavior {
                            SoldierBehavior::CompleteStructure => {
                                Box::new(CompleteStructure::default())
                            }
                            SoldierBehavior::PaintProject => Box::new(PaintProject { idle_chance }),
                            SoldierBehavior::Combat => Box::new(Combat { idle_chance }),
                            SoldierBehavior::MarkStructure => Box::new(MarkStructure {
                                tower_kind: TowerKind::Paint,
                                scan_radius: config.soldier.mark_scan_radius,
                                idle_chance,
                            }),
                            SoldierBehavior::AggressivePaint => Box::new(AggressivePaint),
                            SoldierBehavior::Explore => Box::new(Explore {
                                duty,
                                explore_bias: config.soldier.explore_bias,
                                idle_chance,
                            }),
                        }
                    })
                    .collect();
                Self::new(behaviors, true, idle_chance)
            }
            Role::Mopper => Self::new(
                vec![
                    Box::new(MopEnemyTile),
                    Box::new(ChaseEnemyPaint { idle_chance }),
                    Box::new(ScrubEmptyTile),
                ],
                true,
                idle_chance,
            ),
            Role::Splasher => Self::new(
                vec![
                    Box::new(SplashSelf::default()),
                    Box::new(ChaseEnemyPaint { idle_chance }),
                ],
                true,
                idle_chance,
            ),
            Role::Tower => Self::new(
                vec![
                    Box::new(TowerAttack),
                    Box::new(TowerSpawn {
                        economy: config.economy.clone(),
                    }),
                ],
                false,
                idle_chance,
            ),
        }
    }

    pub fn tick(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        memory: &mut AgentMemory,
        rng: &mut SplitMix64,
    ) -> Result<TickOutcome, TickError> {
        for behavior in &mut self.behaviors {
            match behavior.tick(ctx, world, memory, rng)? {
                BehaviorOutcome::Handled => {
                    return Ok(TickOutcome::Acted {
                        behavior: behavior.name(),
                    })
                }
                BehaviorOutcome::Pass => continue,
            }
        }

        if self.nav_fallback && random_step(world, rng, self.idle_chance).moved() {
            return Ok(TickOutcome::Acted {
                behavior: "nav-fallback",
            });
        }

        Ok(TickOutcome::Idle)
    }
}

/// One agent's decision state: memory, role policy, and trace sink.
///
/// Owned by the integration layer and fed the world seam once per tick.
/// The brain is the fault boundary: a behavior error degrades the tick to
/// a logged no-op and the agent stays able to act next tick.
pub struct Brain<W>
where
    W: WorldMut,
{
    agent: W::Agent,
    memory: AgentMemory,
    policy: PriorityPolicy<W>,
    trace: Box<dyn TraceSink>,
}

impl<W> Brain<W>
where
    W: WorldMut,
{
    pub fn new(agent: W::Agent, kind: UnitKind, config: &PolicyConfig) -> Self {
        Self {
            agent,
            memory: AgentMemory::new(),
            policy: PriorityPolicy::for_role(kind, agent.stable_id(), config),
            trace: Box::new(NullTraceSink),
        }
    }

    pub fn with_trace(mut self, trace: Box<dyn TraceSink>) -> Self {
        self.trace = trace;
        self
    }

    pub fn memory(&self) -> &AgentMemory {
        &self.memory
    }

    pub fn tick(&mut self, ctx: &TickContext, world: &mut W) -> TickOutcome {
        // First-tick bookkeeping runs before any behavior: spawn origin,
        // waypoint derivation, then folding this tick's sensing into memory.
        let me = world.self_unit();
        self.memory.record_spawn(me.position);
        if let Some(size) = world.map_size() {
            self.memory.ensure_waypoints(size);
        }
        let tiles = world.nearby_tiles();
        self.memory.observe(tiles.iter());

        let mut rng = ctx.rng_for_agent(self.agent, STREAM_DECISION);
        match self.policy.tick(ctx, world, &mut self.memory, &mut rng) {
            Ok(outcome) => {
                if let TickOutcome::Acted { behavior } = outcome {
                    self.trace
                        .emit(TraceEvent::new(ctx.round, behavior).with_a(self.agent.stable_id()));
                    tracing::debug!(
                        agent = self.agent.stable_id(),
                        round = ctx.round,
                        behavior,
                        "behavior fired"
                    );
                }
                outcome
            }
            Err(error) => {
                self.trace
                    .emit(TraceEvent::new(ctx.round, "tick.fault").with_a(self.agent.stable_id()));
                tracing::warn!(
                    agent = self.agent.stable_id(),
                    round = ctx.round,
                    %error,
                    "tick degraded to no-op"
                );
                TickOutcome::Fault(error)
            }
        }
    }
}
