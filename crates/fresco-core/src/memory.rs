use std::collections::BTreeMap;

use crate::{Direction, GridSize, Position, TileSnapshot};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimal retained summary of an observed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileSummary {
    pub ruin: bool,
    pub enemy_paint: bool,
}

/// Fixed strategic coordinates derived once from map dimensions: the four
/// corners inset by 2 tiles, the four edge midpoints, and the center.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoints {
    targets: Vec<Position>,
}

impl Waypoints {
    pub fn for_map(size: GridSize) -> Self {
        let (w, h) = (size.width, size.height);
        let targets = vec![
            Position::new(2, 2),
            Position::new(w - 3, 2),
            Position::new(2, h - 3),
            Position::new(w - 3, h - 3),
            Position::new(w / 2, 2),
            Position::new(w / 2, h - 3),
            Position::new(2, h / 2),
            Position::new(w - 3, h / 2),
            size.center(),
        ];
        Self { targets }
    }

    pub fn targets(&self) -> &[Position] {
        &self.targets
    }
}

/// Per-agent persistent state, exclusively owned by one agent instance.
///
/// Created empty on the agent's first tick and discarded when the agent
/// dies; it never transfers to another agent. The explored set only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentMemory {
    pub spawn_origin: Option<Position>,
    pub heading: Option<Direction>,
    pub spawn_cycle: u32,
    waypoints: Option<Waypoints>,
    explored: BTreeMap<Position, TileSummary>,
}

impl AgentMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// First-tick bookkeeping: record where this agent came to life.
    pub fn record_spawn(&mut self, at: Position) {
        if self.spawn_origin.is_none() {
            self.spawn_origin = Some(at);
        }
    }

    /// Derive the waypoint list once map dimensions are known. Immutable
    /// for the rest of the agent's lifetime.
    pub fn ensure_waypoints(&mut self, size: GridSize) {
        if self.waypoints.is_none() {
            self.waypoints = Some(Waypoints::for_map(size));
        }
    }

    pub fn waypoints(&self) -> Option<&Waypoints> {
        self.waypoints.as_ref()
    }

    /// Fold one tick's sensed tiles into the explored map. Monotonic: a
    /// coordinate once present is never removed.
    pub fn observe<'a>(&mut self, tiles: impl IntoIterator<Item = &'a TileSnapshot>) {
        for tile in tiles {
            self.explored.insert(
                tile.position,
                TileSummary {
                    ruin: tile.ruin,
                    enemy_paint: tile.paint.is_enemy(),
                },
            );
        }
    }

    pub fn is_explored(&self, at: Position) -> bool {
        self.explored.contains_key(&at)
    }

    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }

    pub fn summary_at(&self, at: Position) -> Option<TileSummary> {
        self.explored.get(&at).copied()
    }

    /// Nearest waypoint not yet marked explored, or `None` when the list is
    /// exhausted (or not yet derived).
    pub fn nearest_unexplored_waypoint(&self, from: Position) -> Option<Position> {
        let waypoints = self.waypoints.as_ref()?;
        waypoints
            .targets()
            .iter()
            .copied()
            .filter(|&wp| !self.is_explored(wp))
            .min_by_key(|&wp| from.distance_squared(wp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Paint};

    fn tile(x: i32, y: i32, paint: Paint, ruin: bool) -> TileSnapshot {
        TileSnapshot {
            position: Position::new(x, y),
            paint,
            mark: Mark::Empty,
            ruin,
        }
    }

    #[test]
    fn waypoints_cover_corners_edges_center() {
        let wp = Waypoints::for_map(GridSize::new(30, 20));
        assert_eq!(wp.targets().len(), 9);
        assert!(wp.targets().contains(&Position::new(2, 2)));
        assert!(wp.targets().contains(&Position::new(27, 17)));
        assert!(wp.targets().contains(&Position::new(15, 10)));
    }

    #[test]
    fn explored_set_is_monotonic() {
        let mut memory = AgentMemory::new();
        memory.observe([tile(1, 1, Paint::Enemy, false)].iter());
        assert!(memory.is_explored(Position::new(1, 1)));

        // Re-observing with different content updates the summary but never
        // removes the coordinate.
        memory.observe([tile(1, 1, Paint::Empty, false)].iter());
        assert!(memory.is_explored(Position::new(1, 1)));
        assert_eq!(
            memory.summary_at(Position::new(1, 1)),
            Some(TileSummary {
                ruin: false,
                enemy_paint: false
            })
        );
        assert_eq!(memory.explored_count(), 1);
    }

    #[test]
    fn nearest_unexplored_waypoint_filters_visited() {
        let mut memory = AgentMemory::new();
        memory.ensure_waypoints(GridSize::new(10, 10));

        let near = Position::new(2, 2);
        assert_eq!(memory.nearest_unexplored_waypoint(Position::new(0, 0)), Some(near));

        memory.observe(
            [TileSnapshot {
                position: near,
                paint: Paint::Empty,
                mark: Mark::Empty,
                ruin: false,
            }]
            .iter(),
        );
        let next = memory.nearest_unexplored_waypoint(Position::new(0, 0));
        assert_ne!(next, Some(near));
        assert!(next.is_some());
    }

    #[test]
    fn spawn_origin_recorded_once() {
        let mut memory = AgentMemory::new();
        memory.record_spawn(Position::new(5, 5));
        memory.record_spawn(Position::new(9, 9));
        assert_eq!(memory.spawn_origin, Some(Position::new(5, 5)));
    }
}
