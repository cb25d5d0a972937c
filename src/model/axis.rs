use super::{Dimensions, Direction, Orientation, Position};

/// Lane geometry for one move direction.
///
/// A lane is a column for vertical moves and a row for horizontal moves. Steps
/// count from the edge the tiles slide toward, so step 0 is always the near
/// edge regardless of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMapping {
    pub orientation: Orientation,
    pub lanes: usize,
    pub length: usize,
    pub reversed: bool,
}

impl AxisMapping {
    pub fn new(dims: Dimensions, direction: Direction) -> Self {
        let orientation = direction.orientation();
        let (lanes, length) = match orientation {
            Orientation::Vertical => (dims.cols, dims.rows),
            Orientation::Horizontal => (dims.rows, dims.cols),
        };
        Self {
            orientation,
            lanes,
            length,
            reversed: direction.is_reversed(),
        }
    }

    pub fn position(&self, lane: usize, step: usize) -> Position {
        debug_assert!(lane < self.lanes && step < self.length);
        let idx = if self.reversed {
            self.length - step - 1
        } else {
            step
        };
        match self.orientation {
            Orientation::Vertical => Position::new(lane, idx),
            Orientation::Horizontal => Position::new(idx, lane),
        }
    }

    pub fn lane(&self, lane: usize) -> impl Iterator<Item = Position> + '_ {
        (0..self.length).map(move |step| self.position(lane, step))
    }

    /// Moves `position` `delta` steps away from the near edge, staying in its lane.
    pub fn offset(&self, position: Position, delta: isize) -> Option<Position> {
        let delta = if self.reversed { -delta } else { delta };
        match self.orientation {
            Orientation::Vertical => position
                .row
                .checked_add_signed(delta)
                .filter(|&row| row < self.length)
                .map(|row| Position::new(position.col, row)),
            Orientation::Horizontal => position
                .col
                .checked_add_signed(delta)
                .filter(|&col| col < self.length)
                .map(|col| Position::new(col, position.row)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_edge_per_direction() {
        let dims = Dimensions::new(5, 4);
        let up = AxisMapping::new(dims, Direction::Up);
        assert_eq!((up.lanes, up.length), (5, 4));
        assert_eq!(up.position(2, 0), Position::new(2, 0));

        let down = AxisMapping::new(dims, Direction::Down);
        assert_eq!(down.position(2, 0), Position::new(2, 3));
        assert_eq!(down.position(2, 3), Position::new(2, 0));

        let left = AxisMapping::new(dims, Direction::Left);
        assert_eq!((left.lanes, left.length), (4, 5));
        assert_eq!(left.position(1, 0), Position::new(0, 1));

        let right = AxisMapping::new(dims, Direction::Right);
        assert_eq!(right.position(1, 0), Position::new(4, 1));
    }

    #[test]
    fn lane_scan_order() {
        let right = AxisMapping::new(Dimensions::new(3, 2), Direction::Right);
        let lane: Vec<Position> = right.lane(1).collect();
        assert_eq!(
            lane,
            vec![(2, 1).into(), (1, 1).into(), (0, 1).into()]
        );
    }

    #[test]
    fn offset_stays_in_lane() {
        let dims = Dimensions::new(4, 4);
        let down = AxisMapping::new(dims, Direction::Down);
        assert_eq!(
            down.offset((1, 3).into(), 1),
            Some(Position::new(1, 2))
        );
        assert_eq!(down.offset((1, 0).into(), 1), None);

        let left = AxisMapping::new(dims, Direction::Left);
        assert_eq!(
            left.offset((2, 1).into(), 1),
            Some(Position::new(3, 1))
        );
        assert_eq!(left.offset((3, 1).into(), 1), None);
        assert_eq!(left.offset((0, 1).into(), -1), None);
    }
}
