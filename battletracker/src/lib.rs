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
//! Game-state tracker for a single board of Battleship.
//!
//! A [`GameTracker`] owns one [`Board`](board::Board). Ships are placed on the board
//! until the first shot is fired, after which the board only accepts shots; the game is
//! over once every cell of every ship has been hit.
//!
//! ```
//! use battletracker::{GameTracker, Orientation};
//!
//! let mut game = GameTracker::new();
//! game.place_ship(3, 4, 2, Orientation::Horizontal).unwrap();
//! assert!(game.attack_position(3, 4).unwrap());
//! assert!(!game.attack_position(0, 0).unwrap());
//! assert!(!game.is_game_over());
//! assert!(game.attack_position(4, 4).unwrap());
//! assert!(game.is_game_over());
//! ```

pub mod board;
pub mod game;
pub mod ships;

pub use crate::{
    board::{Board, CoordinateError, PlaceError, ShotError, DEFAULT_BOARD_SIZE},
    game::GameTracker,
    ships::{Orientation, ShipPlacement},
};
