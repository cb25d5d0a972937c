use std::collections::HashSet;

use crate::error::{ConsistencyError, EngineError};

use super::grid::GridMap;
use super::{Dimensions, Position};

/// Stable identity of a tile within one [`TileSet`]. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    position: Position,
    value: u32,
}

/// The live tiles of one game, indexed by position.
#[derive(Debug, Clone)]
pub struct TileSet {
    cells: GridMap<Tile>,
    len: usize,
    next_id: u64,
}

impl Tile {
    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl TileSet {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            cells: GridMap::new(dims),
            len: 0,
            next_id: 0,
        }
    }

    pub fn dims(&self) -> &Dimensions {
        self.cells.dims()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.dims().cells()
    }

    pub fn get(&self, position: Position) -> Option<&Tile> {
        self.cells.get(position)
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.iter().find(|tile| tile.id == id)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Tile> {
        self.cells.iter().map(|(_, tile)| tile)
    }

    pub fn empty_positions(&self) -> impl DoubleEndedIterator<Item = Position> + '_ {
        self.cells.vacant()
    }

    pub fn total_value(&self) -> u64 {
        self.iter().map(|tile| u64::from(tile.value)).sum()
    }

    pub fn spawn(&mut self, position: Position, value: u32) -> Result<TileId, EngineError> {
        self.dims().check(position)?;
        if !is_tile_value(value) {
            return Err(EngineError::InvalidValue(value));
        }
        if !self.cells.is_vacant(position) {
            return Err(EngineError::Occupied(position));
        }

        let id = TileId(self.next_id);
        self.next_id += 1;
        self.cells.set(
            position,
            Tile {
                id,
                position,
                value,
            },
        );
        self.len += 1;
        Ok(id)
    }

    pub fn remove(&mut self, position: Position) -> Option<Tile> {
        let tile = self.cells.take(position)?;
        self.len -= 1;
        Some(tile)
    }

    /// Moves the tile at `from` into the empty cell `to`. Does nothing if `from` is empty.
    pub fn relocate(&mut self, from: Position, to: Position) {
        if from == to {
            return;
        }
        assert!(self.cells.is_vacant(to), "relocating onto occupied {:?}", to);
        if let Some(mut tile) = self.cells.take(from) {
            tile.position = to;
            self.cells.set(to, tile);
        }
    }

    pub(super) fn double(&mut self, position: Position) -> Option<u32> {
        let tile = self.cells.get_mut(position)?;
        tile.value = merged_value(tile.value)?;
        Some(tile.value)
    }

    pub fn check_consistency(&self, removed: &[Tile]) -> Result<(), ConsistencyError> {
        let mut seen = HashSet::with_capacity(self.len);
        for (cell, tile) in self.cells.iter() {
            if tile.position != cell {
                return Err(ConsistencyError::Misplaced {
                    id: tile.id,
                    cell,
                    claimed: tile.position,
                });
            }
            if tile.id.0 >= self.next_id {
                return Err(ConsistencyError::UnknownId(tile.id));
            }
            if !seen.insert(tile.id) {
                return Err(ConsistencyError::DuplicateId(tile.id));
            }
            if !is_tile_value(tile.value) {
                return Err(ConsistencyError::BadValue {
                    id: tile.id,
                    value: tile.value,
                });
            }
        }
        match removed.iter().find(|tile| seen.contains(&tile.id)) {
            Some(tile) => Err(ConsistencyError::RemovedStillLive(tile.id)),
            None => Ok(()),
        }
    }
}

pub(super) fn is_tile_value(value: u32) -> bool {
    value >= 2 && value.is_power_of_two()
}

/// Value of two merged `value` tiles, or `None` if it does not fit in a tile.
pub(super) fn merged_value(value: u32) -> Option<u32> {
    value.checked_mul(2)
}
