use thiserror::Error;

use crate::model::{Dimensions, MoveOutcome, Position, TileId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("position {position:?} is outside the {}x{} board", .dims.cols, .dims.rows)]
    OutOfBounds {
        position: Position,
        dims: Dimensions,
    },

    #[error("no empty cell left to spawn a tile")]
    BoardFull,

    #[error("cell {0:?} is already occupied")]
    Occupied(Position),

    #[error("invalid tile value {0}, expected a power of two of at least 2")]
    InvalidValue(u32),

    #[error("invalid board dimensions {cols}x{rows}")]
    InvalidDimensions { cols: usize, rows: usize },

    #[error("tile set is {}x{}, engine expects {}x{}", .actual.cols, .actual.rows, .expected.cols, .expected.rows)]
    DimensionMismatch {
        expected: Dimensions,
        actual: Dimensions,
    },
}

/// Failure of [`MergeEngine::apply_move`](crate::MergeEngine::apply_move).
#[derive(Error, Debug)]
pub enum MoveError {
    /// The slide was rejected before any tile moved.
    #[error("move rejected: {0}")]
    Slide(#[source] EngineError),

    /// The slide completed but spawning failed. The tile set is consistent and
    /// `outcome` still lists the tiles consumed by merges.
    #[error("move completed but spawning failed: {source}")]
    Spawn {
        outcome: MoveOutcome,
        source: EngineError,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    #[error("tile {id:?} is stored at {cell:?} but claims {claimed:?}")]
    Misplaced {
        id: TileId,
        cell: Position,
        claimed: Position,
    },

    #[error("tile id {0:?} appears more than once")]
    DuplicateId(TileId),

    #[error("tile id {0:?} was never allocated by this set")]
    UnknownId(TileId),

    #[error("tile {id:?} has invalid value {value}")]
    BadValue { id: TileId, value: u32 },

    #[error("removed tile {0:?} is still live")]
    RemovedStillLive(TileId),
}
