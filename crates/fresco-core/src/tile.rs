use crate::Position;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-tile ownership paint. Exactly one value per tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Paint {
    #[default]
    Empty,
    AllyPrimary,
    AllySecondary,
    Enemy,
}

impl Paint {
    pub const fn is_ally(self) -> bool {
        matches!(self, Paint::AllyPrimary | Paint::AllySecondary)
    }

    pub const fn is_enemy(self) -> bool {
        matches!(self, Paint::Enemy)
    }
}

/// Per-tile template marker: the paint a pattern requires at that tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mark {
    #[default]
    Empty,
    Primary,
    Secondary,
}

impl Mark {
    /// The ally paint this mark demands, or `None` for an unmarked tile.
    pub const fn required_paint(self) -> Option<Paint> {
        match self {
            Mark::Empty => None,
            Mark::Primary => Some(Paint::AllyPrimary),
            Mark::Secondary => Some(Paint::AllySecondary),
        }
    }
}

/// One sensed tile, as of the previous committed tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileSnapshot {
    pub position: Position,
    pub paint: Paint,
    pub mark: Mark,
    /// Immutable once observed: ruins never appear or disappear mid-game.
    pub ruin: bool,
}

impl TileSnapshot {
    /// An unfinished pattern project: marked, but not yet painted to match.
    pub fn needs_project_paint(&self) -> bool {
        match self.mark.required_paint() {
            Some(required) => self.paint != required,
            None => false,
        }
    }
}
