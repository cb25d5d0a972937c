//! Sliding-tile merge puzzle engine.
//!
//! Tiles sit on a fixed grid. A [`Direction`] slides every tile toward one edge,
//! merging equal neighbors once per move, after which new tiles are spawned at
//! random empty cells. Drawing, animation and input handling are left to the
//! caller, which owns the [`TileSet`] and re-renders from it after each move.

pub mod board;
pub mod config;
pub mod error;
pub mod model;

pub use board::Board;
pub use config::{EngineConfig, SpawnPolicy};
pub use error::{ConsistencyError, EngineError, MoveError};
pub use model::{
    AxisMapping, Dimensions, Direction, MergeEngine, MoveOutcome, Orientation, Position,
    SlideOutcome, Tile, TileId, TileSet,
};
