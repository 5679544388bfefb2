//! Reactive local navigation strategies.
//!
//! All strategies are memoryless beyond the current tick's sensed
//! neighborhood (plus, for the dominant strategy, one persistent heading in
//! agent memory): steering without pathfinding state.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bounce;
pub mod dominant;
pub mod wander;

pub use bounce::bounce_toward;
pub use dominant::dominant_step;
pub use wander::random_step;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a navigation call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavOutcome {
    /// One move command was issued.
    Moved(fresco_core::Direction),
    /// Already within acting range of the target; no command issued.
    Arrived,
    /// The idle roll came up; deliberately no command this tick.
    Idle,
    /// No candidate direction passed its predicate; no command issued.
    Blocked,
}

impl NavOutcome {
    pub fn moved(self) -> bool {
        matches!(self, NavOutcome::Moved(_))
    }

    /// True when the call issued no command at all.
    pub fn passed(self) -> bool {
        !self.moved()
    }
}
