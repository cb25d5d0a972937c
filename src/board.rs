//! Board geometry for presentation layers.

use crate::error::EngineError;
use crate::model::{Dimensions, GridMap, Position};

pub const TILE_SIZE: f32 = 100.0;
pub const TILE_GAP: f32 = 20.0;

/// Maps cell positions to the top-left anchor of the tile drawn there.
#[derive(Debug, Clone)]
pub struct Board {
    dims: Dimensions,
    tile_size: f32,
    tile_gap: f32,
    anchors: GridMap<(f32, f32)>,
}

impl Board {
    pub fn new(dims: Dimensions) -> Self {
        Self::with_metrics(dims, TILE_SIZE, TILE_GAP)
    }

    pub fn with_metrics(dims: Dimensions, tile_size: f32, tile_gap: f32) -> Self {
        let pitch = tile_size + tile_gap;
        let mut anchors = GridMap::new(dims);
        for position in dims.iter() {
            let x = pitch * position.col as f32;
            let y = pitch * position.row as f32;
            anchors.set(position, (x, y));
        }
        Self {
            dims,
            tile_size,
            tile_gap,
            anchors,
        }
    }

    pub fn dims(&self) -> &Dimensions {
        &self.dims
    }

    pub fn xy(&self, position: Position) -> Result<(f32, f32), EngineError> {
        self.dims.check(position)?;
        self.anchors
            .get(position)
            .copied()
            .ok_or(EngineError::OutOfBounds {
                position,
                dims: self.dims,
            })
    }

    /// Finds the cell under a point, if the point lies on a tile rather than a gap.
    pub fn position_at(&self, x: f32, y: f32) -> Option<Position> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let pitch = self.tile_size + self.tile_gap;
        let col = (x / pitch).trunc() as usize;
        let row = (y / pitch).trunc() as usize;
        let position = Position::new(col, row);
        if !self.dims.contains(position) {
            return None;
        }
        let (left, top) = self.xy(position).ok()?;
        ((x - left) < self.tile_size && (y - top) < self.tile_size).then_some(position)
    }

    /// Width and height covered by the tiles, without a trailing gap.
    pub fn extent(&self) -> (f32, f32) {
        let span = |cells: usize| {
            cells as f32 * self.tile_size + cells.saturating_sub(1) as f32 * self.tile_gap
        };
        (span(self.dims.cols), span(self.dims.rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors() {
        let board = Board::new(Dimensions::new(5, 4));
        assert_eq!(board.xy((0, 0).into()), Ok((0.0, 0.0)));
        assert_eq!(board.xy((1, 0).into()), Ok((120.0, 0.0)));
        assert_eq!(board.xy((4, 3).into()), Ok((480.0, 360.0)));
    }

    #[test]
    fn out_of_bounds() {
        let board = Board::new(Dimensions::new(5, 4));
        assert_eq!(
            board.xy((5, 0).into()),
            Err(EngineError::OutOfBounds {
                position: (5, 0).into(),
                dims: Dimensions::new(5, 4),
            })
        );
        assert!(board.xy((0, 4).into()).is_err());
    }

    #[test]
    fn hit_test() {
        let board = Board::with_metrics(Dimensions::new(3, 2), 10.0, 2.0);
        assert_eq!(board.position_at(5.0, 5.0), Some(Position::new(0, 0)));
        assert_eq!(board.position_at(13.0, 14.0), Some(Position::new(1, 1)));
        assert_eq!(board.position_at(11.0, 5.0), None);
        assert_eq!(board.position_at(40.0, 5.0), None);
        assert_eq!(board.position_at(-1.0, 5.0), None);
        assert_eq!(board.extent(), (34.0, 22.0));
    }
}
