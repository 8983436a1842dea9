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
//! Types that make up the game board.

use std::fmt::Display;

use log::{debug, error, warn};

use crate::ships::{Orientation, Ship, ShipPlacement};

use self::grid::Grid;
pub use self::{
    coordinate::{validate_board_value, validate_cell_value, Coordinate},
    errors::{CoordinateError, PlaceError, ShotError},
    grid::Space,
};

pub mod coordinate;
mod errors;
mod grid;

/// Width and height of a board built with [`Board::default`].
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Handle to a ship that allows getting information about its status.
#[derive(Debug, Copy, Clone)]
pub struct ShipRef<'a> {
    /// Grid from the board.
    grid: &'a Grid,

    /// The cells the ship was placed on.
    ship: &'a Ship,
}

impl<'a> ShipRef<'a> {
    /// Get the underlying [`Ship`].
    pub fn ship(&self) -> &'a Ship {
        self.ship
    }

    /// Get an iterator over the coordinates of this ship.
    pub fn coords(&self) -> impl 'a + Iterator<Item = &'a Coordinate> {
        self.ship.coords().iter()
    }

    /// Get an iterator over the current state of the cells of this ship.
    pub fn spaces(&self) -> impl 'a + Iterator<Item = &'a Space> {
        let grid = self.grid;
        self.coords().map(move |coord| &grid[coord])
    }

    /// Check if every cell of this ship has been fired upon. A ship with no cells is
    /// never destroyed.
    pub fn is_destroyed(&self) -> bool {
        !self.ship.is_empty() && self.spaces().all(|space| space.fired_upon())
    }
}

/// A single square board: the grid of [`Space`]s and the ships placed on it.
///
/// Ships may be placed until the first shot lands; after that the board only accepts
/// shots.
#[derive(Debug, Clone)]
pub struct Board {
    /// Cells of the board.
    grid: Grid,

    /// Ships in the order they were placed.
    ships: Vec<Ship>,

    /// Set by the first successful shot.
    game_begun: bool,
}

impl Board {
    /// Construct an empty board of `size` by `size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            ships: Vec::new(),
            game_begun: false,
        }
    }

    /// Width and height of this board.
    pub fn size(&self) -> usize {
        self.grid.size
    }

    /// Returns true once a shot has been fired on this board.
    pub fn game_begun(&self) -> bool {
        self.game_begun
    }

    /// Get an iterator over all ships on this board, in placement order.
    pub fn read_ship_list(&self) -> impl ExactSizeIterator<Item = ShipRef> {
        let grid = &self.grid;
        self.ships.iter().map(move |ship| ShipRef { grid, ship })
    }

    /// Get the cells of the board as columns, so that `spaces[x][y]` is the cell at
    /// (`x`, `y`).
    pub fn read_board_spaces(&self) -> Vec<&[Space]> {
        self.grid.columns().collect()
    }

    /// Get the cell at (`x`, `y`), or `None` if it is off the board.
    pub fn get_space(&self, x: usize, y: usize) -> Option<&Space> {
        self.grid.get(&Coordinate::new(x, y))
    }

    /// Returns true if at least one ship was placed and every ship has been destroyed.
    pub fn is_game_over(&self) -> bool {
        !self.ships.is_empty() && self.read_ship_list().all(|ship| ship.is_destroyed())
    }

    /// Add a ship to the board, hanging it to the right of its start when horizontal or
    /// downwards when vertical.
    ///
    /// Nothing on the board changes unless the whole ship can be placed.
    pub fn place_ship(&mut self, placement: ShipPlacement) -> Result<ShipRef, PlaceError> {
        if self.game_begun {
            return Err(logged(PlaceError::GameBegun));
        }
        let start = self.validate_placement(&placement)?;
        let length = placement.length() as usize;
        let coords: Vec<Coordinate> = (0..length)
            .map(|i| match placement.orientation() {
                Orientation::Horizontal => Coordinate::new(start.x + i, start.y),
                Orientation::Vertical => Coordinate::new(start.x, start.y + i),
            })
            .collect();

        if let Some(taken) = coords.iter().find(|coord| self.grid[*coord].contains_ship()) {
            return Err(logged(PlaceError::Overlap {
                x: taken.x,
                y: taken.y,
            }));
        }
        // Every cell is on the board and free.
        for coord in coords.iter() {
            self.grid[coord].set_contains_ship(true);
        }
        self.ships.push(Ship::new(coords));

        let ship = &self.ships[self.ships.len() - 1];
        Ok(ShipRef {
            grid: &self.grid,
            ship,
        })
    }

    /// Check the length and bounds of a placement, returning its starting cell.
    fn validate_placement(&self, placement: &ShipPlacement) -> Result<Coordinate, PlaceError> {
        let size = self.size();
        let length = placement.length();
        if length <= 0 || length as u64 > size as u64 {
            return Err(logged(PlaceError::InvalidLength(length)));
        }
        placement_start(placement, size).map_err(|source| {
            logged(PlaceError::OutOfBounds {
                x: placement.starting_x(),
                y: placement.starting_y(),
                length,
                orientation: placement.orientation(),
                source,
            })
        })
    }

    /// Fire at (`x`, `y`). Returns `true` on a hit and `false` on a miss.
    ///
    /// The first shot that lands closes the board to further placements.
    pub fn attack_position(&mut self, x: i32, y: i32) -> Result<bool, ShotError> {
        if self.ships.is_empty() {
            return Err(logged(ShotError::NoShips));
        }
        let size = self.size();
        let coord = validate_cell_value(x.into(), size)
            .and_then(|cx| validate_cell_value(y.into(), size).map(|cy| Coordinate::new(cx, cy)))
            .map_err(|source| logged(ShotError::OutOfBounds { x, y, source }))?;

        let space = &mut self.grid[&coord];
        if space.fired_upon() {
            let err = ShotError::AlreadyFired {
                x: coord.x,
                y: coord.y,
            };
            warn!("{}", err);
            return Err(err);
        }
        space.set_fired_upon(true);
        let hit = space.contains_ship();
        self.game_begun = true;
        Ok(hit)
    }

    /// Draw the board as text, one line per row. Cells are `x` for a ship that has been
    /// hit, `o` for a ship that has not been hit when `owns_board` is set, and `-`
    /// otherwise.
    pub fn build_board_string(&self, owns_board: bool) -> String {
        let size = self.size();
        let mut out = String::with_capacity(size * (size + 1));
        for y in 0..size {
            for x in 0..size {
                let space = &self.grid[&Coordinate::new(x, y)];
                out.push(match (space.contains_ship(), space.fired_upon()) {
                    (true, true) => 'x',
                    (true, false) if owns_board => 'o',
                    _ => '-',
                });
            }
            out.push('\n');
        }
        debug!("\n{}", out);
        out
    }
}

impl Default for Board {
    /// Construct an empty 10x10 board.
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

/// Check the start and far end of a placement against the board size.
fn placement_start(placement: &ShipPlacement, size: usize) -> Result<Coordinate, CoordinateError> {
    let x = i64::from(placement.starting_x());
    let y = i64::from(placement.starting_y());
    let length = i64::from(placement.length());
    let start = Coordinate::new(validate_cell_value(x, size)?, validate_cell_value(y, size)?);
    match placement.orientation() {
        Orientation::Horizontal => validate_board_value(x + length, size)?,
        Orientation::Vertical => validate_board_value(y + length, size)?,
    }
    Ok(start)
}

/// Log a rejected request before handing the error back.
fn logged<E: Display>(err: E) -> E {
    error!("{}", err);
    err
}
