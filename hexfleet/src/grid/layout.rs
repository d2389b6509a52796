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
//! Pixel placement of pointy-topped hexes in an "odd rows shoved right" layout.
use std::f64::consts::PI;

use crate::grid::{GridConfigError, GridDimensions, OffsetCoordinate, PixelPosition};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Farthest a cell corner may sit from the world origin, in cell radii. Beyond this an
/// `f32` pixel can no longer tell neighbouring cells apart reliably.
const PRECISE_EXTENT: f64 = (1u32 << 20) as f64;

/// Where the grid sits in world space and how big each cell is.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HexLayout {
    /// Pixel position of the centre of cell `(0, 0)`.
    origin: PixelPosition,
    /// Distance from a cell centre to each of its corners.
    radius: f32,
}

impl HexLayout {
    /// Create a layout. The origin must be finite and the radius a normal, positive
    /// number.
    pub fn try_new(origin: PixelPosition, radius: f32) -> Result<Self, GridConfigError> {
        if !origin.x.is_finite() || !origin.y.is_finite() {
            return Err(GridConfigError::InvalidOrigin(origin));
        }
        if radius.is_normal() && radius > 0. {
            Ok(Self { origin, radius })
        } else {
            Err(GridConfigError::InvalidRadius(radius))
        }
    }

    /// Pixel position of the centre of cell `(0, 0)`.
    pub fn origin(&self) -> PixelPosition {
        self.origin
    }

    /// Distance from a cell centre to each of its corners.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Horizontal distance between the centres of neighbouring cells in a row.
    pub fn cell_width(&self) -> f32 {
        (SQRT_3 * self.radius as f64) as f32
    }

    /// Vertical distance between the centres of neighbouring rows.
    pub fn row_height(&self) -> f32 {
        1.5 * self.radius
    }

    /// True if every cell of a grid with the given dimensions can be placed in `f32`
    /// pixels precisely enough for each centre to resolve back to its own cell.
    pub fn resolves(&self, dim: &GridDimensions) -> bool {
        let radius = self.radius as f64;
        let far_x = (self.origin.x as f64).abs()
            + radius * (SQRT_3 * (dim.columns() as f64 + 0.5) + 1.);
        let far_y = (self.origin.y as f64).abs() + radius * (1.5 * dim.rows() as f64 + 1.);
        let far = far_x.max(far_y);
        far <= radius * PRECISE_EXTENT && far <= f32::MAX as f64
    }

    /// Centre of the cell. Defined for every coordinate; cells far outside a grid that
    /// [`resolves`][HexLayout::resolves] may land on imprecise or infinite pixels.
    pub fn center(&self, coord: OffsetCoordinate) -> PixelPosition {
        let radius = self.radius as f64;
        let col = coord.col as f64 + if coord.odd_row() { 0.5 } else { 0. };
        PixelPosition {
            x: (self.origin.x as f64 + SQRT_3 * radius * col) as f32,
            y: (self.origin.y as f64 + 1.5 * radius * coord.row as f64) as f32,
        }
    }

    /// Fractional `(col, row)` position of the pixel, with whole numbers at the centres
    /// of even rows. The column ignores the odd-row shift: it is the horizontal distance
    /// from the origin in cell widths.
    pub fn fractional_offset(&self, pixel: PixelPosition) -> (f64, f64) {
        let radius = self.radius as f64;
        let px = pixel.x as f64 - self.origin.x as f64;
        let py = pixel.y as f64 - self.origin.y as f64;
        (px / (SQRT_3 * radius), py / (1.5 * radius))
    }

    /// Corners of the cell, starting at -30° and turning by 60° each step.
    pub fn corners(&self, coord: OffsetCoordinate) -> [PixelPosition; 6] {
        let center = self.center(coord);
        let mut corners = [center; 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            let angle = PI / 180. * (60. * i as f64 - 30.);
            corner.x = (center.x as f64 + self.radius as f64 * angle.cos()) as f32;
            corner.y = (center.y as f64 + self.radius as f64 * angle.sin()) as f32;
        }
        corners
    }
}
