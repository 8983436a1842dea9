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
//! Tracks a single game by owning its [`Board`] and translating plain values into board
//! requests.
use log::info;

use crate::{
    board::{Board, PlaceError, ShotError},
    ships::{Orientation, ShipPlacement},
};

/// Owns the board for the current game. Starting a new game replaces the board; errors
/// from the board are passed back unchanged.
#[derive(Debug, Default)]
pub struct GameTracker {
    /// Board for the current game.
    board: Board,
}

impl GameTracker {
    /// Create a tracker with a fresh 10x10 board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current board and start over with an empty one.
    pub fn start_new_game(&mut self) {
        info!("Starting new game!");
        self.board = Board::default();
    }

    /// Place a ship of `length` cells at (`x`, `y`).
    pub fn place_ship(
        &mut self,
        x: i32,
        y: i32,
        length: i32,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        info!(
            "Placing ship at co-ordinates {},{} with length {} and orientation {}",
            x, y, length, orientation
        );
        self.board
            .place_ship(ShipPlacement::new(x, y, length, orientation))
            .map(|_| ())
    }

    /// Fire at (`x`, `y`), returning whether a ship was hit.
    pub fn attack_position(&mut self, x: i32, y: i32) -> Result<bool, ShotError> {
        info!("Attacking position {},{}", x, y);
        self.board.attack_position(x, y)
    }

    /// Returns true once every ship on the current board has been destroyed.
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Read-only access to the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_default_board() {
        let tracker = GameTracker::new();
        assert_eq!(tracker.board().size(), 10);
        assert_eq!(tracker.board().read_ship_list().len(), 0);
        assert!(!tracker.is_game_over());
    }

    #[test]
    fn place_forwards_to_board() {
        let mut tracker = GameTracker::new();
        tracker.place_ship(1, 2, 3, Orientation::Vertical).unwrap();
        let ships: Vec<Vec<(usize, usize)>> = tracker
            .board()
            .read_ship_list()
            .map(|ship| ship.coords().map(|c| (c.x, c.y)).collect())
            .collect();
        assert_eq!(ships, vec![vec![(1, 2), (1, 3), (1, 4)]]);
    }

    #[test]
    fn errors_pass_through() {
        let mut tracker = GameTracker::new();
        assert_eq!(
            tracker.attack_position(0, 0).unwrap_err(),
            ShotError::NoShips
        );
        assert_eq!(
            tracker.place_ship(0, 0, 11, Orientation::Horizontal).unwrap_err(),
            PlaceError::InvalidLength(11)
        );
        tracker.place_ship(0, 0, 2, Orientation::Horizontal).unwrap();
        assert_eq!(
            tracker.place_ship(1, 0, 2, Orientation::Vertical).unwrap_err(),
            PlaceError::Overlap { x: 1, y: 0 }
        );
    }

    #[test]
    fn play_to_game_over() {
        let mut tracker = GameTracker::new();
        tracker.place_ship(6, 5, 3, Orientation::Vertical).unwrap();
        assert!(!tracker.attack_position(0, 0).unwrap());
        assert!(tracker.attack_position(6, 5).unwrap());
        assert!(tracker.attack_position(6, 6).unwrap());
        assert!(!tracker.is_game_over());
        assert!(tracker.attack_position(6, 7).unwrap());
        assert!(tracker.is_game_over());
    }

    #[test]
    fn new_game_replaces_board() {
        let mut tracker = GameTracker::new();
        tracker.place_ship(0, 0, 1, Orientation::Horizontal).unwrap();
        tracker.attack_position(0, 0).unwrap();
        assert!(tracker.is_game_over());
        assert_eq!(
            tracker.place_ship(2, 2, 2, Orientation::Horizontal).unwrap_err(),
            PlaceError::GameBegun
        );

        tracker.start_new_game();
        assert!(!tracker.is_game_over());
        assert!(!tracker.board().game_begun());
        assert_eq!(tracker.board().read_ship_list().len(), 0);
        tracker.place_ship(2, 2, 2, Orientation::Horizontal).unwrap();
    }
}
