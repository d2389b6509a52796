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
//! Coordinate types used by the grid.
use std::{
    fmt,
    ops::{Add, Sub},
};

/// Logical position of a cell in the grid, as a column and row. Signed so that requests
/// which fall off the grid can still be expressed and rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct OffsetCoordinate {
    /// Horizontal position of the cell.
    pub col: i32,
    /// Vertical position of the cell.
    pub row: i32,
}

impl OffsetCoordinate {
    /// Construct an [`OffsetCoordinate`] from the given `col` and `row`.
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// True if this coordinate is on an odd row. Odd rows are shoved right by half a
    /// cell.
    pub fn odd_row(&self) -> bool {
        self.row & 1 != 0
    }
}

impl From<(i32, i32)> for OffsetCoordinate {
    /// Construct an [`OffsetCoordinate`] from the given `(col, row)` pair.
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

impl From<OffsetCoordinate> for (i32, i32) {
    /// Convert the [`OffsetCoordinate`] into a `(col, row)` pair.
    fn from(coord: OffsetCoordinate) -> Self {
        (coord.col, coord.row)
    }
}

impl From<CubeCoordinate> for OffsetCoordinate {
    fn from(cube: CubeCoordinate) -> Self {
        Self {
            col: cube.x.wrapping_add(row_shift(cube.z)),
            row: cube.z,
        }
    }
}

impl fmt::Display for OffsetCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Cube form of a hex coordinate. Always satisfies `x + y + z == 0`, which is enforced
/// by only exposing constructors that derive one axis from the other two.
///
/// Axis arithmetic wraps at the `i32` limits, so conversion to and from
/// [`OffsetCoordinate`] is exact for every offset, even those whose cube axes would not
/// fit in an `i32`. For such coordinates the axes sum to zero modulo 2^32.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CubeCoordinate {
    x: i32,
    y: i32,
    z: i32,
}

impl CubeCoordinate {
    /// Construct a cube coordinate from its `x` and `z` axes.
    pub fn new(x: i32, z: i32) -> Self {
        Self {
            x,
            y: x.wrapping_neg().wrapping_sub(z),
            z,
        }
    }

    /// The `x` axis, which grows toward the east.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// The `y` axis, which grows toward the northwest.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// The `z` axis, which is the same as the offset row.
    pub fn z(&self) -> i32 {
        self.z
    }

    /// Number of steps between two cells. Only meaningful when the difference between
    /// the two cells fits in an `i32`.
    pub fn distance(&self, other: &CubeCoordinate) -> u32 {
        let d = *self - *other;
        d.x.unsigned_abs().max(d.y.unsigned_abs()).max(d.z.unsigned_abs())
    }

    /// Round fractional cube axes to the cube coordinate of the containing cell. The
    /// axis with the largest rounding error is rebuilt from the other two.
    pub(crate) fn round(x0: f64, z0: f64) -> Self {
        let y0 = -x0 - z0;
        let mut x = x0.round();
        let y = y0.round();
        let mut z = z0.round();

        let x_diff = (x - x0).abs();
        let y_diff = (y - y0).abs();
        let z_diff = (z - z0).abs();

        if x_diff > y_diff && x_diff > z_diff {
            x = -y - z;
        } else if z_diff > y_diff {
            z = -x - y;
        }
        Self::new(x as i32, z as i32)
    }
}

impl From<OffsetCoordinate> for CubeCoordinate {
    fn from(coord: OffsetCoordinate) -> Self {
        Self::new(coord.col.wrapping_sub(row_shift(coord.row)), coord.row)
    }
}

/// Columns by which the start of `row` is shifted relative to the cube `x` axis. Never
/// overflows: `row - (row & 1)` only clears the low bit.
fn row_shift(row: i32) -> i32 {
    (row - (row & 1)) / 2
}

impl Add for CubeCoordinate {
    type Output = CubeCoordinate;

    fn add(self, rhs: CubeCoordinate) -> Self::Output {
        Self::new(self.x.wrapping_add(rhs.x), self.z.wrapping_add(rhs.z))
    }
}

impl Sub for CubeCoordinate {
    type Output = CubeCoordinate;

    fn sub(self, rhs: CubeCoordinate) -> Self::Output {
        Self::new(self.x.wrapping_sub(rhs.x), self.z.wrapping_sub(rhs.z))
    }
}

/// A point in world-space pixels.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PixelPosition {
    /// Horizontal position, growing to the right.
    pub x: f32,
    /// Vertical position, growing downward.
    pub y: f32,
}

impl PixelPosition {
    /// Construct a [`PixelPosition`] from its `x` and `y` components.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for PixelPosition {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for PixelPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
