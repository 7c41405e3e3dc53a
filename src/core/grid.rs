// Grid coordinates and cardinal directions

use glam::IVec2;

/// Integer cell coordinate on the map grid (+x = right, +y = up)
pub type CellPos = IVec2;

/// One of the four cardinal directions a creature can walk or face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in input priority order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step on the grid for this direction
    pub fn offset(self) -> CellPos {
        match self {
            Self::Up => IVec2::Y,
            Self::Down => IVec2::NEG_Y,
            Self::Left => IVec2::NEG_X,
            Self::Right => IVec2::X,
        }
    }

    /// The cell one step away from `cell` in this direction
    pub fn step(self, cell: CellPos) -> CellPos {
        cell + self.offset()
    }

    /// Left-facing poses reuse the right-facing clip mirrored
    pub fn is_mirrored(self) -> bool {
        self == Self::Left
    }
}
