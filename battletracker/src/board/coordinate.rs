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
//! Coordinates of cells in the board and the bounds checks applied to caller input.

use log::error;

use crate::board::CoordinateError;

/// The coordinates of a [`Space`][crate::board::Space] in the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub x: usize,
    /// Vertical position of the cell.
    pub y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

/// Check that `value` lies within `[0, size]`.
///
/// The upper bound is inclusive because this checks the endpoint of a span: a ship of
/// length `n` starting at `size - n` ends at exactly `size`.
pub fn validate_board_value(value: i64, size: usize) -> Result<(), CoordinateError> {
    if value < 0 || value as u64 > size as u64 {
        let err = CoordinateError::new(value);
        error!("{}", err);
        Err(err)
    } else {
        Ok(())
    }
}

/// Check that `value` names a cell of a board with the given size, i.e. lies within
/// `[0, size)`, and return it as an index.
pub fn validate_cell_value(value: i64, size: usize) -> Result<usize, CoordinateError> {
    if value < 0 || value as u64 >= size as u64 {
        let err = CoordinateError::new(value);
        error!("{}", err);
        Err(err)
    } else {
        Ok(value as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_value_accepts_span_endpoint() {
        assert!(validate_board_value(0, 10).is_ok());
        assert!(validate_board_value(9, 10).is_ok());
        assert!(validate_board_value(10, 10).is_ok());
    }

    #[test]
    fn board_value_rejects_outside() {
        let err = validate_board_value(-1, 10).unwrap_err();
        assert_eq!(err.value(), -1);
        assert_eq!(err.to_string(), "Value -1 does not fit on the board");

        let err = validate_board_value(11, 10).unwrap_err();
        assert_eq!(err.to_string(), "Value 11 does not fit on the board");
    }

    #[test]
    fn cell_value_is_exclusive() {
        assert_eq!(validate_cell_value(0, 10), Ok(0));
        assert_eq!(validate_cell_value(9, 10), Ok(9));
        assert_eq!(
            validate_cell_value(10, 10).unwrap_err().to_string(),
            "Value 10 does not fit on the board"
        );
        assert!(validate_cell_value(-3, 10).is_err());
        assert!(validate_cell_value(0, 0).is_err());
    }
}
