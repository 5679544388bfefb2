use crate::{rng, AgentId, SplitMix64};

/// Per-tick invocation context handed to the engine by the integration
/// layer. `seed` is the global replay seed; all agent randomness derives
/// from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickContext {
    pub round: u32,
    pub seed: u64,
}

impl TickContext {
    /// Deterministic RNG for one agent and one named stream.
    ///
    /// Separate streams keep unrelated draws (tie-break shuffles vs spawn
    /// rolls) from perturbing each other across tuning changes.
    pub fn rng_for_agent<A: AgentId>(&self, agent: A, stream: u64) -> SplitMix64 {
        let seed = rng::derive_seed(self.seed, agent.stable_id(), stream ^ ((self.round as u64) << 32));
        SplitMix64::new(seed)
    }
}
