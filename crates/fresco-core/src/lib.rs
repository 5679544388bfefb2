//! Deterministic, simulator-agnostic kernel primitives for paint-game agents.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod error;
pub mod grid;
pub mod memory;
pub mod rng;
pub mod tick;
pub mod tile;
pub mod unit;
pub mod world;

pub use agent::AgentId;
pub use error::{TickError, TickOutcome};
pub use grid::{Direction, GridSize, Position, DIRECTIONS};
pub use memory::{AgentMemory, TileSummary, Waypoints};
pub use rng::{DeterministicRng, SplitMix64};
pub use tick::TickContext;
pub use tile::{Mark, Paint, TileSnapshot};
pub use unit::{Team, TowerKind, UnitKind, UnitSnapshot};
pub use world::{WorldMut, WorldView};
