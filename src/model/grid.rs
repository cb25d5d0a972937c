use smallvec::{smallvec, SmallVec};

use super::{Dimensions, Position};

/// Inline cell capacity; larger boards spill to the heap.
const INLINE_CELLS: usize = 36;

/// Dense position-indexed storage. Each cell holds at most one value.
#[derive(Debug, Clone)]
pub struct GridMap<T: Clone> {
    dims: Dimensions,
    cells: SmallVec<[Option<T>; INLINE_CELLS]>,
}

impl<T: Clone> GridMap<T> {
    pub fn new(dims: Dimensions) -> Self {
        let cells = smallvec![None; dims.cells()];
        Self { dims, cells }
    }

    pub fn dims(&self) -> &Dimensions {
        &self.dims
    }

    pub fn get(&self, position: Position) -> Option<&T> {
        self.cells[self.dims.index(position)].as_ref()
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        self.cells[self.dims.index(position)].as_mut()
    }

    pub fn set<V: Into<Option<T>>>(&mut self, position: Position, value: V) {
        self.cells[self.dims.index(position)] = value.into();
    }

    pub fn take(&mut self, position: Position) -> Option<T> {
        self.cells[self.dims.index(position)].take()
    }

    pub fn is_vacant(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Position, &T)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, opt)| Some((idx, opt.as_ref()?)))
            .map(|(idx, value)| (self.dims.position(idx), value))
    }

    pub fn vacant(&self) -> impl DoubleEndedIterator<Item = Position> + '_ {
        self.dims
            .iter()
            .filter(|&position| self.is_vacant(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_take() {
        let mut grid = GridMap::new(Dimensions::new(3, 2));
        grid.set((2, 1).into(), 'a');
        grid.set((0, 1).into(), 'b');
        assert_eq!(grid.get((2, 1).into()), Some(&'a'));
        assert!(grid.is_vacant((1, 1).into()));

        let items: Vec<_> = grid.iter().collect();
        assert_eq!(items, vec![((0, 1).into(), &'b'), ((2, 1).into(), &'a')]);

        assert_eq!(grid.take((2, 1).into()), Some('a'));
        assert!(grid.is_vacant((2, 1).into()));
        assert_eq!(grid.vacant().count(), 5);
    }

    #[test]
    fn spills_past_inline_capacity() {
        let dims = Dimensions::new(20, 15);
        let mut grid = GridMap::new(dims);
        grid.set((19, 14).into(), 7u32);
        assert_eq!(grid.get((19, 14).into()), Some(&7));
        assert_eq!(grid.vacant().count(), dims.cells() - 1);
    }
}
