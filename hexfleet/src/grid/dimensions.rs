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
//! Column and row extent of a grid.

use std::convert::TryFrom;

use crate::grid::{GridConfigError, OffsetCoordinate};

/// Column and row extent of a grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GridDimensions {
    /// Number of columns. This corresponds to the `col` [`OffsetCoordinate`].
    columns: i32,
    /// Number of rows. This corresponds to the `row` [`OffsetCoordinate`].
    rows: i32,
}

impl GridDimensions {
    /// Create new [`GridDimensions`]. Panics if either count is 0 or does not fit in an
    /// `i32`.
    pub fn new(columns: u32, rows: u32) -> Self {
        match Self::try_new(columns, rows) {
            Ok(dim) => dim,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create new [`GridDimensions`], returning an error if either count is 0 or does not
    /// fit in an `i32`.
    pub fn try_new(columns: u32, rows: u32) -> Result<Self, GridConfigError> {
        if columns == 0 || rows == 0 {
            return Err(GridConfigError::EmptyGrid { columns, rows });
        }
        match (i32::try_from(columns), i32::try_from(rows)) {
            (Ok(columns), Ok(rows)) => Ok(Self { columns, rows }),
            _ => Err(GridConfigError::TooLarge { columns, rows }),
        }
    }

    /// Get the number of columns.
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Get the number of rows.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Index of the easternmost column.
    pub fn last_col(&self) -> i32 {
        self.columns - 1
    }

    /// Index of the southernmost row.
    pub fn last_row(&self) -> i32 {
        self.rows - 1
    }

    /// Total number of cells.
    pub fn total_size(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Check if the given [`OffsetCoordinate`] lies inside these dimensions.
    #[inline]
    pub fn in_bounds(&self, coord: OffsetCoordinate) -> bool {
        (0..self.columns).contains(&coord.col) && (0..self.rows).contains(&coord.row)
    }

    /// Move the coordinate onto the nearest column and row inside these dimensions.
    pub fn clamp(&self, coord: OffsetCoordinate) -> OffsetCoordinate {
        OffsetCoordinate {
            col: coord.col.max(0).min(self.last_col()),
            row: coord.row.max(0).min(self.last_row()),
        }
    }

    /// Iterate all coordinates in row-major order.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = OffsetCoordinate> {
        let columns = self.columns;
        (0..self.rows)
            .flat_map(move |row| (0..columns).map(move |col| OffsetCoordinate { col, row }))
    }

    /// Pick a uniformly random in-bounds coordinate.
    #[cfg(feature = "rng_gen")]
    pub fn random_cell<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> OffsetCoordinate {
        OffsetCoordinate {
            col: rng.gen_range(0, self.columns),
            row: rng.gen_range(0, self.rows),
        }
    }
}
