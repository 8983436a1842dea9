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
//! Errors used by the [`Board`][crate::board::Board].

use thiserror::Error;

use crate::ships::Orientation;

/// Error returned when a coordinate, or the far end of a ship, falls off the board.
///
/// Never returned on its own by the board; it is always the source of a [`PlaceError`]
/// or a [`ShotError`].
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("Value {value} does not fit on the board")]
pub struct CoordinateError {
    /// The value that was rejected.
    value: i64,
}

impl CoordinateError {
    pub(crate) fn new(value: i64) -> Self {
        Self { value }
    }

    /// Get the value that did not fit on the board.
    pub fn value(&self) -> i64 {
        self.value
    }
}

/// Reason why a ship could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum PlaceError {
    /// A shot has already been fired on the board.
    #[error("Cannot place a ship after a shot has been fired.")]
    GameBegun,

    /// The length was not positive, or longer than the board.
    #[error("Invalid ship length: {0}")]
    InvalidLength(i32),

    /// The start of the ship or its far end did not fit on the board.
    #[error(
        "Invalid ship placement attempted with values - X: {x} Y: {y} Length: {length} \
         Orientation: {orientation}"
    )]
    OutOfBounds {
        x: i32,
        y: i32,
        length: i32,
        orientation: Orientation,
        source: CoordinateError,
    },

    /// One of the cells was already occupied. Carries the first such cell in scan order.
    #[error(
        "Attempted to place a ship on top of another - ship already exists at space {x}, {y}"
    )]
    Overlap { x: usize, y: usize },
}

/// Reason why a shot could not be fired.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ShotError {
    /// No ships are on the board yet.
    #[error("Cannot fire a shot before any ships are placed.")]
    NoShips,

    /// The target was off the board.
    #[error("Invalid shot attempted at co-ordinates {x}, {y}")]
    OutOfBounds {
        x: i32,
        y: i32,
        source: CoordinateError,
    },

    /// The target has already been shot.
    #[error("Attempted to shoot a space already fired on at co-ordinates {x}, {y}")]
    AlreadyFired { x: usize, y: usize },
}
