#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the 8 compass directions, closed under 45-degree rotation.
///
/// The canonical order is clockwise starting at north. Code that scans
/// directions without shuffling must use `DIRECTIONS` so replays stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

/// Canonical clockwise scan order.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::Northeast,
    Direction::East,
    Direction::Southeast,
    Direction::South,
    Direction::Southwest,
    Direction::West,
    Direction::Northwest,
];

impl Direction {
    pub const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::Northeast => 1,
            Direction::East => 2,
            Direction::Southeast => 3,
            Direction::South => 4,
            Direction::Southwest => 5,
            Direction::West => 6,
            Direction::Northwest => 7,
        }
    }

    pub const fn from_index(index: usize) -> Self {
        DIRECTIONS[index % 8]
    }

    /// Rotate 45 degrees counter-clockwise.
    pub const fn rotate_left(self) -> Self {
        Self::from_index(self.index() + 7)
    }

    /// Rotate 45 degrees clockwise.
    pub const fn rotate_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// Unit grid offset, y-up.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::Northeast => (1, 1),
            Direction::East => (1, 0),
            Direction::Southeast => (1, -1),
            Direction::South => (0, -1),
            Direction::Southwest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::Northwest => (-1, 1),
        }
    }
}

/// Integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        self.translate(dx, dy)
    }

    pub const fn distance_squared(self, other: Self) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }

    /// Within acting range of `other`: the 8 surrounding tiles or the tile itself.
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.distance_squared(other) <= 2
    }

    /// Bearing from `self` toward `other`, or `None` when they coincide.
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        let dx = (other.x - self.x).signum();
        let dy = (other.y - self.y).signum();
        match (dx, dy) {
            (0, 0) => None,
            (0, 1) => Some(Direction::North),
            (1, 1) => Some(Direction::Northeast),
            (1, 0) => Some(Direction::East),
            (1, -1) => Some(Direction::Southeast),
            (0, -1) => Some(Direction::South),
            (-1, -1) => Some(Direction::Southwest),
            (-1, 0) => Some(Direction::West),
            (-1, 1) => Some(Direction::Northwest),
            _ => unreachable!(),
        }
    }
}

/// Map dimensions, known once the simulator reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

impl GridSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub const fn contains(self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }
}
