#![allow(dead_code)]

use std::collections::BTreeSet;

use fresco_core::{
    Direction, GridSize, Position, Team, TileSnapshot, TowerKind, UnitKind, UnitSnapshot,
    WorldMut, WorldView,
};

/// Every world-mutating command the mock saw, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Attack(Position, bool),
    Build(UnitKind, Position),
    MarkTower(TowerKind, Position),
    MarkResource(Position),
    CompleteTower(TowerKind, Position),
    CompleteResource(Position),
}

/// Scriptable world double. Legality is data: attack legality follows the
/// adjacency model (`distance² ≤ 2`), everything else is explicit sets.
pub struct MockWorld {
    pub me: UnitSnapshot,
    pub round: u32,
    pub size: Option<GridSize>,
    pub treasury: u32,
    pub units: Vec<UnitSnapshot>,
    pub tiles: Vec<TileSnapshot>,
    pub blocked: BTreeSet<Position>,
    pub attacks_enabled: bool,
    pub build_enabled: bool,
    pub build_denied: Vec<UnitKind>,
    pub markable_towers: BTreeSet<Position>,
    pub markable_resources: BTreeSet<Position>,
    pub completable_towers: BTreeSet<Position>,
    pub completable_resources: BTreeSet<Position>,
    /// Positions `tile_at` pretends not to see, to provoke sensing faults.
    pub hidden_tiles: BTreeSet<Position>,
    pub commands: Vec<Command>,
}

impl MockWorld {
    pub fn soldier_at(position: Position) -> Self {
        Self::unit_of_kind(UnitKind::Soldier, position)
    }

    pub fn unit_of_kind(kind: UnitKind, position: Position) -> Self {
        Self {
            me: UnitSnapshot {
                id: 7,
                kind,
                team: Team::Ally,
                health: 100,
                position,
            },
            round: 1,
            size: Some(GridSize::new(20, 20)),
            treasury: 0,
            units: Vec::new(),
            tiles: Vec::new(),
            blocked: BTreeSet::new(),
            attacks_enabled: true,
            build_enabled: true,
            build_denied: Vec::new(),
            markable_towers: BTreeSet::new(),
            markable_resources: BTreeSet::new(),
            completable_towers: BTreeSet::new(),
            completable_resources: BTreeSet::new(),
            hidden_tiles: BTreeSet::new(),
            commands: Vec::new(),
        }
    }

    pub fn add_enemy(&mut self, position: Position) {
        self.units.push(UnitSnapshot {
            id: 100 + self.units.len() as u64,
            kind: UnitKind::Soldier,
            team: Team::Enemy,
            health: 100,
            position,
        });
    }

    pub fn add_ally(&mut self, position: Position) {
        self.units.push(UnitSnapshot {
            id: 200 + self.units.len() as u64,
            kind: UnitKind::Soldier,
            team: Team::Ally,
            health: 100,
            position,
        });
    }

    pub fn add_tile(&mut self, tile: TileSnapshot) {
        self.tiles.push(tile);
    }

    pub fn moves(&self) -> Vec<Direction> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                Command::Move(direction) => Some(*direction),
                _ => None,
            })
            .collect()
    }
}

impl WorldView for MockWorld {
    type Agent = u64;

    fn round(&self) -> u32 {
        self.round
    }

    fn map_size(&self) -> Option<GridSize> {
        self.size
    }

    fn self_unit(&self) -> UnitSnapshot {
        self.me
    }

    fn treasury(&self) -> u32 {
        self.treasury
    }

    fn nearby_units(&self, team: Option<Team>) -> Vec<UnitSnapshot> {
        self.units
            .iter()
            .filter(|unit| team.map_or(true, |t| unit.team == t))
            .copied()
            .collect()
    }

    fn nearby_tiles(&self) -> Vec<TileSnapshot> {
        self.tiles.clone()
    }

    fn tile_at(&self, at: Position) -> Option<TileSnapshot> {
        if self.hidden_tiles.contains(&at) {
            return None;
        }
        self.tiles.iter().find(|tile| tile.position == at).copied()
    }

    fn unit_at(&self, at: Position) -> Option<UnitSnapshot> {
        if self.me.position == at {
            return Some(self.me);
        }
        self.units.iter().find(|unit| unit.position == at).copied()
    }
}

impl WorldMut for MockWorld {
    fn can_move(&self, direction: Direction) -> bool {
        let target = self.me.position.step(direction);
        let inside = self.size.map_or(true, |size| size.contains(target));
        inside && !self.blocked.contains(&target)
    }

    fn move_unit(&mut self, direction: Direction) {
        self.me.position = self.me.position.step(direction);
        self.commands.push(Command::Move(direction));
    }

    fn can_attack(&self, at: Position) -> bool {
        self.attacks_enabled && self.me.position.is_adjacent(at)
    }

    fn attack(&mut self, at: Position, use_secondary: bool) {
        self.commands.push(Command::Attack(at, use_secondary));
    }

    fn can_build(&self, kind: UnitKind, at: Position) -> bool {
        self.build_enabled
            && self.me.position.is_adjacent(at)
            && !self.build_denied.contains(&kind)
    }

    fn build(&mut self, kind: UnitKind, at: Position) {
        self.commands.push(Command::Build(kind, at));
    }

    fn can_mark_tower(&self, _kind: TowerKind, at: Position) -> bool {
        self.markable_towers.contains(&at)
    }

    fn mark_tower(&mut self, kind: TowerKind, at: Position) {
        self.commands.push(Command::MarkTower(kind, at));
    }

    fn can_mark_resource(&self, at: Position) -> bool {
        self.markable_resources.contains(&at)
    }

    fn mark_resource(&mut self, at: Position) {
        self.commands.push(Command::MarkResource(at));
    }

    fn can_complete_tower(&self, _kind: TowerKind, at: Position) -> bool {
        self.completable_towers.contains(&at)
    }

    fn complete_tower(&mut self, kind: TowerKind, at: Position) {
        self.commands.push(Command::CompleteTower(kind, at));
    }

    fn can_complete_resource(&self, at: Position) -> bool {
        self.completable_resources.contains(&at)
    }

    fn complete_resource(&mut self, at: Position) {
        self.commands.push(Command::CompleteResource(at));
    }
}

pub fn tile(x: i32, y: i32) -> TileSnapshot {
    TileSnapshot {
        position: Position::new(x, y),
        paint: fresco_core::Paint::Empty,
        mark: fresco_core::Mark::Empty,
        ruin: false,
    }
}
