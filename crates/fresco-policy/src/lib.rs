//! Priority-ordered decision engine for paint-game agents.
//!
//! A brain owns one agent's memory, its role's ordered behavior list, and a
//! trace sink. The engine runs the list front-to-back once per tick and
//! stops at the first behavior that issues a command; the navigation
//! fallback (never counted as a behavior) runs last.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod behavior;
pub mod config;
pub mod economy;
pub mod engine;
pub mod roles;
pub mod soldier;
pub mod support;
pub mod tower;

pub use behavior::{Behavior, BehaviorOutcome};
pub use config::{NavConfig, PolicyConfig, SoldierBehavior, SoldierConfig};
pub use economy::{EconomyConfig, SpawnPhase, SpawnRule, SpawnWeights};
pub use engine::{Brain, PriorityPolicy};
pub use roles::{Role, SoldierDuty};
