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
//! Types used for describing ships and where they go.
use std::fmt;

use crate::board::Coordinate;

/// Direction a ship extends from its starting cell. Horizontal ships extend towards
/// increasing `x`, vertical ships towards increasing `y`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Orientation::Horizontal => "HORIZONTAL",
            Orientation::Vertical => "VERTICAL",
        })
    }
}

#[cfg(feature = "rng_gen")]
impl rand::distributions::Distribution<Orientation> for rand::distributions::Standard {
    /// Picks horizontal or vertical with equal probability.
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Request to place a ship of `length` cells starting at (`x`, `y`).
///
/// Values are taken as given; the board decides whether they fit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShipPlacement {
    x: i32,
    y: i32,
    length: i32,
    orientation: Orientation,
}

impl ShipPlacement {
    /// Construct a placement request.
    pub fn new(x: i32, y: i32, length: i32, orientation: Orientation) -> Self {
        Self {
            x,
            y,
            length,
            orientation,
        }
    }

    /// Starting `x` of the ship.
    pub fn starting_x(&self) -> i32 {
        self.x
    }

    /// Starting `y` of the ship.
    pub fn starting_y(&self) -> i32 {
        self.y
    }

    /// Number of cells the ship occupies.
    pub fn length(&self) -> i32 {
        self.length
    }

    /// Direction the ship extends from its start.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

/// A ship on the board, recorded as the coordinates of the cells it occupies. The state
/// of those cells lives in the board; see [`ShipRef`][crate::board::ShipRef].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Ship {
    /// Occupied cells, in the order they were scanned during placement.
    coords: Vec<Coordinate>,
}

impl Ship {
    pub(crate) fn new(coords: Vec<Coordinate>) -> Self {
        Self { coords }
    }

    /// Coordinates of the cells this ship occupies.
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Number of cells this ship occupies.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns true if the ship occupies no cells.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_display_is_upper_case() {
        assert_eq!(Orientation::Horizontal.to_string(), "HORIZONTAL");
        assert_eq!(Orientation::Vertical.to_string(), "VERTICAL");
    }

    #[test]
    fn placement_keeps_values() {
        let placement = ShipPlacement::new(-1, 4, 7, Orientation::Vertical);
        assert_eq!(placement.starting_x(), -1);
        assert_eq!(placement.starting_y(), 4);
        assert_eq!(placement.length(), 7);
        assert_eq!(placement.orientation(), Orientation::Vertical);
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn random_orientation_yields_both() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        let picks: Vec<Orientation> = (0..64).map(|_| rng.gen()).collect();
        assert!(picks.contains(&Orientation::Horizontal));
        assert!(picks.contains(&Orientation::Vertical));
    }
}
