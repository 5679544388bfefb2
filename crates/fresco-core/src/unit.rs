use crate::Position;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Team, always relative to the acting agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Team {
    Ally,
    Enemy,
}

/// Tower specialization. Ruin completion produces paint towers by default;
/// money and defense variants come from the spawn economy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TowerKind {
    Paint,
    Money,
    Defense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitKind {
    Soldier,
    Mopper,
    Splasher,
    Tower(TowerKind),
}

impl UnitKind {
    pub const fn is_tower(self) -> bool {
        matches!(self, UnitKind::Tower(_))
    }
}

/// One sensed unit (or the acting agent itself), as of the previous
/// committed tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitSnapshot {
    pub id: u64,
    pub kind: UnitKind,
    pub team: Team,
    pub health: u32,
    pub position: Position,
}
