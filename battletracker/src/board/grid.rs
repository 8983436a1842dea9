// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Defines the cells that make up the board and the grid that owns them.

use std::ops::{Index, IndexMut};

use crate::board::Coordinate;

/// A single cell in the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Space {
    /// Position of this cell.
    coord: Coordinate,

    /// Whether a ship occupies this cell.
    contains_ship: bool,

    /// Whether this cell has been fired upon.
    fired_upon: bool,
}

impl Space {
    pub(crate) fn new(coord: Coordinate) -> Self {
        Self {
            coord,
            contains_ship: false,
            fired_upon: false,
        }
    }

    /// Horizontal position of this cell.
    pub fn x(&self) -> usize {
        self.coord.x
    }

    /// Vertical position of this cell.
    pub fn y(&self) -> usize {
        self.coord.y
    }

    /// Position of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Whether a ship occupies this cell.
    pub fn contains_ship(&self) -> bool {
        self.contains_ship
    }

    /// Whether this cell has been fired upon.
    pub fn fired_upon(&self) -> bool {
        self.fired_upon
    }

    pub(crate) fn set_contains_ship(&mut self, contains_ship: bool) {
        self.contains_ship = contains_ship;
    }

    pub(crate) fn set_fired_upon(&mut self, fired_upon: bool) {
        self.fired_upon = fired_upon;
    }
}

/// Square grid of [`Space`]s owned by the board.
///
/// Cells are stored column by column (`x * size + y`) so each column is one slice.
#[derive(Debug, Clone)]
pub(crate) struct Grid {
    /// Width and height of the grid.
    pub(crate) size: usize,
    /// Cells that make up this grid.
    cells: Box<[Space]>,
}

impl Grid {
    pub(crate) fn new(size: usize) -> Self {
        let cells = (0..size)
            .flat_map(|x| (0..size).map(move |y| Space::new(Coordinate::new(x, y))))
            .collect();
        Self { size, cells }
    }

    /// Convert a coordinate to an index into `cells`, or `None` if out of bounds.
    fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if coord.x < self.size && coord.y < self.size {
            Some(coord.x * self.size + coord.y)
        } else {
            None
        }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(crate) fn get(&self, coord: &Coordinate) -> Option<&Space> {
        self.try_linearize(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(crate) fn get_mut(&mut self, coord: &Coordinate) -> Option<&mut Space> {
        self.try_linearize(coord)
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Iterate the columns of the grid; column `x` holds the cells `(x, 0..size)`.
    pub(crate) fn columns(&self) -> impl Iterator<Item = &[Space]> {
        // chunks panics on 0, and an empty grid has no columns anyway.
        self.cells.chunks(self.size.max(1))
    }
}

impl Index<&Coordinate> for Grid {
    type Output = Space;

    fn index(&self, coord: &Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl IndexMut<&Coordinate> for Grid {
    fn index_mut(&mut self, coord: &Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4);
        for x in 0..4 {
            for y in 0..4 {
                let space = &grid[&Coordinate::new(x, y)];
                assert_eq!((space.x(), space.y()), (x, y));
                assert!(!space.contains_ship());
                assert!(!space.fired_upon());
            }
        }
        assert!(grid.get(&Coordinate::new(4, 0)).is_none());
        assert!(grid.get(&Coordinate::new(0, 4)).is_none());
    }

    #[test]
    fn columns_are_indexed_by_x() {
        let grid = Grid::new(3);
        let columns: Vec<_> = grid.columns().collect();
        assert_eq!(columns.len(), 3);
        for (x, column) in columns.iter().enumerate() {
            assert_eq!(column.len(), 3);
            for (y, space) in column.iter().enumerate() {
                assert_eq!(space.coord(), Coordinate::new(x, y));
            }
        }
    }

    #[test]
    fn empty_grid_has_no_columns() {
        assert_eq!(Grid::new(0).columns().count(), 0);
    }

    #[test]
    fn space_equality_includes_flags() {
        let mut a = Space::new(Coordinate::new(1, 2));
        let b = Space::new(Coordinate::new(1, 2));
        assert_eq!(a, b);
        a.set_fired_upon(true);
        assert_ne!(a, b);
    }
}
