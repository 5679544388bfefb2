use fresco_core::{AgentMemory, SplitMix64, TickContext, TickError, WorldMut};

/// What one behavior did with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorOutcome {
    /// Exactly one world-mutating command was issued; the tick is over.
    Handled,
    /// No command was issued; the engine falls through to the next
    /// behavior. Never retried within the same tick.
    Pass,
}

/// One entry in a role's priority list.
///
/// A behavior either issues exactly one command and reports `Handled`, or
/// issues none and reports `Pass`. `Err` is reserved for unexpected faults
/// (inconsistent sensing), which the supervisor converts into a logged
/// no-op tick.
pub trait Behavior<W>
where
    W: WorldMut,
{
    fn name(&self) -> &'static str;

    fn tick(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        memory: &mut AgentMemory,
        rng: &mut SplitMix64,
    ) -> Result<BehaviorOutcome, TickError>;
}
