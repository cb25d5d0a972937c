use enum_map::EnumMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::config::{EngineConfig, SpawnPolicy};
use crate::error::{EngineError, MoveError};

use super::axis::AxisMapping;
use super::tiles::{is_tile_value, merged_value, Tile, TileId, TileSet};
use super::{Dimensions, Direction};

/// Slides, merges and spawns tiles on a caller-owned [`TileSet`].
#[derive(Debug, Clone)]
pub struct MergeEngine<R: Rng = StdRng> {
    config: EngineConfig,
    axes: EnumMap<Direction, AxisMapping>,
    rng: R,
}

/// Result of the slide/merge pass of a move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideOutcome {
    /// Tiles consumed by merges, no longer in the set.
    pub removed: Vec<Tile>,
    pub merges: usize,
    /// Whether any tile moved or merged.
    pub changed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    pub removed: Vec<Tile>,
    pub merges: usize,
    pub changed: bool,
    pub spawned: SmallVec<[TileId; 1]>,
}

impl MergeEngine<StdRng> {
    pub fn seeded(config: EngineConfig, seed: u64) -> Result<Self, EngineError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: EngineConfig) -> Result<Self, EngineError> {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> MergeEngine<R> {
    pub fn new(config: EngineConfig, rng: R) -> Result<Self, EngineError> {
        let dims = config.dims();
        if dims.cells() == 0 {
            return Err(EngineError::InvalidDimensions {
                cols: dims.cols,
                rows: dims.rows,
            });
        }
        if !is_tile_value(config.spawn_value) {
            return Err(EngineError::InvalidValue(config.spawn_value));
        }
        let axes = EnumMap::from_fn(|direction| AxisMapping::new(dims, direction));
        Ok(Self { config, axes, rng })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn dims(&self) -> Dimensions {
        self.config.dims()
    }

    /// Creates an empty tile set and fills it with the configured starting tiles.
    pub fn new_tile_set(&mut self) -> Result<TileSet, EngineError> {
        let mut tiles = TileSet::new(self.dims());
        self.spawn(&mut tiles, self.config.initial_tiles)?;
        Ok(tiles)
    }

    /// Slides every lane toward `direction`, then spawns according to the spawn policy.
    pub fn apply_move(
        &mut self,
        tiles: &mut TileSet,
        direction: Direction,
    ) -> Result<MoveOutcome, MoveError> {
        let slide = self.slide(tiles, direction).map_err(MoveError::Slide)?;

        let mut outcome = MoveOutcome {
            removed: slide.removed,
            merges: slide.merges,
            changed: slide.changed,
            spawned: SmallVec::new(),
        };

        let count = match self.config.spawn_policy {
            SpawnPolicy::Always => self.config.spawn_per_move,
            SpawnPolicy::OnChange if outcome.changed => self.config.spawn_per_move,
            SpawnPolicy::OnChange => 0,
        };
        match self.spawn_into(tiles, count, &mut outcome.spawned) {
            Ok(()) => Ok(outcome),
            Err(source) => Err(MoveError::Spawn { outcome, source }),
        }
    }

    pub fn slide(
        &self,
        tiles: &mut TileSet,
        direction: Direction,
    ) -> Result<SlideOutcome, EngineError> {
        if *tiles.dims() != self.dims() {
            return Err(EngineError::DimensionMismatch {
                expected: self.dims(),
                actual: *tiles.dims(),
            });
        }

        let mapping = &self.axes[direction];
        let mut outcome = SlideOutcome::default();
        for lane in 0..mapping.lanes {
            slide_lane(tiles, mapping, lane, &mut outcome);
        }
        trace!(
            %direction,
            merges = outcome.merges,
            changed = outcome.changed,
            "slide finished"
        );
        debug_assert_eq!(tiles.check_consistency(&outcome.removed), Ok(()));

        Ok(outcome)
    }

    /// Adds `count` tiles of the configured spawn value at random empty cells.
    ///
    /// Tiles placed before a failure stay in the set.
    pub fn spawn(
        &mut self,
        tiles: &mut TileSet,
        count: usize,
    ) -> Result<SmallVec<[TileId; 1]>, EngineError> {
        let mut spawned = SmallVec::new();
        self.spawn_into(tiles, count, &mut spawned)?;
        Ok(spawned)
    }

    fn spawn_into(
        &mut self,
        tiles: &mut TileSet,
        count: usize,
        spawned: &mut SmallVec<[TileId; 1]>,
    ) -> Result<(), EngineError> {
        for _ in 0..count {
            spawned.push(self.spawn_one(tiles)?);
        }
        Ok(())
    }

    fn spawn_one(&mut self, tiles: &mut TileSet) -> Result<TileId, EngineError> {
        let empty = tiles.dims().cells() - tiles.len();
        if empty == 0 {
            warn!(tiles = tiles.len(), "no empty cell to spawn into");
            return Err(EngineError::BoardFull);
        }
        let pick = self.rng.gen_range(0..empty);
        let position = tiles
            .empty_positions()
            .nth(pick)
            .ok_or(EngineError::BoardFull)?;
        let id = tiles.spawn(position, self.config.spawn_value)?;
        debug!(?id, ?position, value = self.config.spawn_value, "spawned tile");
        Ok(id)
    }
}

fn slide_lane(tiles: &mut TileSet, mapping: &AxisMapping, lane: usize, outcome: &mut SlideOutcome) {
    let mut cells = mapping.lane(lane);
    let Some(mut cursor) = cells.next() else {
        return;
    };

    // The cursor always stays behind `from`, so stepping it forward cannot
    // leave the lane while movers remain.
    for from in cells {
        let Some(mover) = tiles.get(from).map(Tile::value) else {
            continue;
        };

        match tiles.get(cursor).map(Tile::value) {
            None => {
                tiles.relocate(from, cursor);
                outcome.changed = true;
            }
            Some(value) if value == mover && merged_value(mover).is_some() => {
                if let Some(consumed) = tiles.remove(cursor) {
                    outcome.removed.push(consumed);
                }
                tiles.relocate(from, cursor);
                let merged = tiles.double(cursor);
                debug!(?from, to = ?cursor, ?merged, "merged tiles");
                outcome.merges += 1;
                outcome.changed = true;
                let Some(next) = mapping.offset(cursor, 1) else {
                    break;
                };
                cursor = next;
            }
            Some(_) => {
                let Some(next) = mapping.offset(cursor, 1) else {
                    break;
                };
                cursor = next;
                if cursor != from {
                    tiles.relocate(from, cursor);
                    outcome.changed = true;
                }
            }
        }
    }
}
