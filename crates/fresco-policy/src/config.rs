use serde::{Deserialize, Serialize};

use crate::economy::EconomyConfig;

/// The soldier behaviors that can appear in a priority list.
///
/// The ordering of the list is a tuned play-style parameter, not a semantic
/// requirement, so it ships as configuration; the default is the most
/// evolved tuning's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoldierBehavior {
    CompleteStructure,
    PaintProject,
    Combat,
    MarkStructure,
    AggressivePaint,
    Explore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoldierConfig {
    pub priorities: Vec<SoldierBehavior>,
    /// `identity mod 100 < directional_pct` makes a soldier a ranger
    /// (dominant-heading explorer); the rest become surveyors.
    pub directional_pct: u64,
    /// Probability a surveyor steers for its nearest unexplored waypoint
    /// instead of wandering.
    pub explore_bias: f32,
    /// Half-width of the neighborhood scanned for a fresh resource-pattern
    /// spot when marking.
    pub mark_scan_radius: i32,
}

impl Default for SoldierConfig {
    fn default() -> Self {
        Self {
            priorities: vec![
                SoldierBehavior::CompleteStructure,
                SoldierBehavior::PaintProject,
                SoldierBehavior::Combat,
                SoldierBehavior::MarkStructure,
                SoldierBehavior::AggressivePaint,
                SoldierBehavior::Explore,
            ],
            directional_pct: 80,
            explore_bias: 0.7,
            mark_scan_radius: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Idle probability of the random walk (cautious exploration).
    pub idle_chance: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { idle_chance: 0.2 }
    }
}

/// Full engine configuration. Everything here is an empirically tuned
/// play-style parameter; defaults reproduce the reference tuning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub soldier: SoldierConfig,
    pub nav: NavConfig,
    pub economy: EconomyConfig,
}
