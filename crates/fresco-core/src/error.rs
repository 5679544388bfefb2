use thiserror::Error;

use crate::Position;

/// Unexpected fault while evaluating sensing or computing a target.
///
/// Expected inapplicability (a false predicate, an empty target search) is
/// not an error; it surfaces as behavior fallthrough instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TickError {
    /// A tile selected from the sensed list could not be re-read this tick.
    #[error("sensed tile at ({}, {}) vanished from view", .at.x, .at.y)]
    TileOutOfView { at: Position },

    /// The world reported no map dimensions where they were required.
    #[error("map dimensions unavailable")]
    MapSizeUnknown,

    /// Catch-all for integration-layer failures surfaced through the seam.
    #[error("world fault: {reason}")]
    World { reason: String },
}

/// Result of one per-tick engine invocation.
///
/// Faults are reported, never propagated as panics: a bad tick degrades to
/// a no-op and the agent must stay able to act on subsequent ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// A behavior (or the navigation fallback) issued one command.
    Acted { behavior: &'static str },
    /// Every behavior passed and the fallback had no legal move.
    Idle,
    /// The tick degraded to a no-op; the reason was logged.
    Fault(TickError),
}

impl TickOutcome {
    pub fn acted(&self) -> bool {
        matches!(self, TickOutcome::Acted { .. })
    }
}
