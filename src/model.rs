//! Engine-agnostic tile data and merge logic

use enum_map::Enum;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::EngineError;

mod axis;
mod grid;
mod merge;
mod tiles;

pub use axis::AxisMapping;
pub use grid::GridMap;
pub use merge::{MergeEngine, MoveOutcome, SlideOutcome};
pub use tiles::{Tile, TileId, TileSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub cols: usize,
    pub rows: usize,
}

/// Cell coordinates on the board. Column 0 is the left edge and row 0 the top edge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Direction {
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Up | Self::Down => Orientation::Vertical,
            Self::Left | Self::Right => Orientation::Horizontal,
        }
    }

    /// Whether lanes are scanned from their highest index toward zero.
    pub fn is_reversed(self) -> bool {
        matches!(self, Self::Down | Self::Right)
    }
}

impl Dimensions {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    pub fn cells(&self) -> usize {
        self.cols * self.rows
    }

    pub fn contains(&self, position: Position) -> bool {
        (position.col < self.cols) && (position.row < self.rows)
    }

    pub fn check(&self, position: Position) -> Result<(), EngineError> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                position,
                dims: *self,
            })
        }
    }

    pub fn iter(self) -> impl DoubleEndedIterator<Item = Position> {
        (0..self.cells()).map(move |idx| self.position(idx))
    }

    fn position(&self, idx: usize) -> Position {
        Position::new(idx % self.cols, idx / self.cols)
    }

    fn index(&self, position: Position) -> usize {
        debug_assert!(
            self.contains(position),
            "{:?} is outside {:?}",
            position,
            self
        );
        position.row * self.cols + position.col
    }
}

impl Position {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl From<(usize, usize)> for Position {
    fn from(value: (usize, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}
