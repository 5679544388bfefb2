use crate::{AgentId, Direction, GridSize, Position, Team, TileSnapshot, TowerKind, UnitKind, UnitSnapshot};

/// Read-only sensing access, always reflecting the previous committed tick.
///
/// Sensed lists are returned in the simulator's stable iteration order;
/// nearest-target ties break on that order unless a component documents a
/// seeded shuffle.
pub trait WorldView {
    type Agent: AgentId;

    fn round(&self) -> u32;

    /// `None` until the simulator reports dimensions.
    fn map_size(&self) -> Option<GridSize>;

    /// The acting agent's own committed state.
    fn self_unit(&self) -> UnitSnapshot;

    /// Team treasury. Only meaningful for tower roles.
    fn treasury(&self) -> u32;

    fn nearby_units(&self, team: Option<Team>) -> Vec<UnitSnapshot>;

    fn nearby_tiles(&self) -> Vec<TileSnapshot>;

    fn tile_at(&self, at: Position) -> Option<TileSnapshot>;

    fn unit_at(&self, at: Position) -> Option<UnitSnapshot>;
}

/// Command access. Every command is paired with a same-named legality
/// predicate; the engine never issues a command whose predicate was not
/// checked `true` in the same tick. A false predicate is ordinary
/// inapplicability, not an error.
pub trait WorldMut: WorldView {
    fn can_move(&self, direction: Direction) -> bool;
    fn move_unit(&mut self, direction: Direction);

    fn can_attack(&self, at: Position) -> bool;
    fn attack(&mut self, at: Position, use_secondary: bool);

    fn can_build(&self, kind: UnitKind, at: Position) -> bool;
    fn build(&mut self, kind: UnitKind, at: Position);

    fn can_mark_tower(&self, kind: TowerKind, at: Position) -> bool;
    fn mark_tower(&mut self, kind: TowerKind, at: Position);

    fn can_mark_resource(&self, at: Position) -> bool;
    fn mark_resource(&mut self, at: Position);

    fn can_complete_tower(&self, kind: TowerKind, at: Position) -> bool;
    fn complete_tower(&mut self, kind: TowerKind, at: Position);

    fn can_complete_resource(&self, at: Position) -> bool;
    fn complete_resource(&mut self, at: Position);
}
