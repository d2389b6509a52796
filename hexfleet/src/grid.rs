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
//! The hex coordinate system: conversions between pixels, offset coordinates and cube
//! coordinates, and the outline geometry of the grid.
//!
//! Cells are pointy-topped and odd rows are shoved right by half a cell. Offset
//! coordinates are `(col, row)` with `(0, 0)` at the top left.

use log::trace;

pub use self::{
    coordinate::{CubeCoordinate, OffsetCoordinate, PixelPosition},
    dimensions::GridDimensions,
    errors::GridConfigError,
    layout::HexLayout,
    orientation::{Orientation, ParseOrientationError},
    outline::{HexOutline, Segment},
};

mod coordinate;
mod dimensions;
mod errors;
mod layout;
mod orientation;
mod outline;

/// A fixed-size hex grid placed in pixel space. Immutable once built, so a single grid
/// can be shared by reference between any number of ships.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HexGrid {
    dim: GridDimensions,
    layout: HexLayout,
}

impl HexGrid {
    /// Create a grid with its `(0, 0)` cell centred at `origin`. Panics if `columns` or
    /// `rows` is 0 or too large, if `radius` is not a positive finite number, or if
    /// `origin` is not finite.
    pub fn new(origin: PixelPosition, radius: f32, columns: u32, rows: u32) -> Self {
        match Self::try_new(origin, radius, columns, rows) {
            Ok(grid) => grid,
            Err(err) => panic!("invalid hex grid: {}", err),
        }
    }

    /// Create a grid with its `(0, 0)` cell centred at `origin`, returning an error if
    /// the configuration is invalid. Grids whose far cells would sit too far from the
    /// world origin for `f32` pixels to resolve are rejected with
    /// [`GridConfigError::ExtentTooLarge`].
    pub fn try_new(
        origin: PixelPosition,
        radius: f32,
        columns: u32,
        rows: u32,
    ) -> Result<Self, GridConfigError> {
        let dim = GridDimensions::try_new(columns, rows)?;
        let layout = HexLayout::try_new(origin, radius)?;
        if !layout.resolves(&dim) {
            return Err(GridConfigError::ExtentTooLarge {
                columns,
                rows,
                radius,
            });
        }
        Ok(Self { dim, layout })
    }

    /// Get the column and row extent of the grid.
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dim
    }

    /// Get the pixel placement of the grid.
    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    /// True if the coordinate names a cell in this grid.
    pub fn in_bounds(&self, coord: OffsetCoordinate) -> bool {
        self.dim.in_bounds(coord)
    }

    /// Pixel centre of the cell. Defined for coordinates outside the grid as well.
    pub fn offset_to_pixel(&self, coord: OffsetCoordinate) -> PixelPosition {
        self.layout.center(coord)
    }

    /// The cell in this grid nearest to the given pixel. Pixels off the edge of the
    /// grid resolve to the closest edge cell. Defined for every pixel, including NaN and
    /// infinite ones.
    pub fn pixel_to_offset(&self, pixel: PixelPosition) -> OffsetCoordinate {
        let (col, row) = self.layout.fractional_offset(pixel);
        // Far-off pixels are moved a whole number of lattice periods toward the grid so
        // that rounding stays within i32, which does not change the clamped result.
        let col = fold(col, 1., -2., self.dim.columns() as f64 + 1.);
        let row = fold(row, 2., -2., (self.dim.rows() as f64 / 2.).ceil() * 2.);
        let raw = OffsetCoordinate::from(CubeCoordinate::round(col - row / 2., row));
        let cell = self.dim.clamp(raw);
        if raw != cell {
            trace!("pixel {} resolved to {} outside the grid, clamped to {}", pixel, raw, cell);
        }
        cell
    }

    /// Cube form of an offset coordinate. Exact for every coordinate.
    pub fn offset_to_cube(&self, coord: OffsetCoordinate) -> CubeCoordinate {
        coord.into()
    }

    /// Offset form of a cube coordinate. Inverse of
    /// [`offset_to_cube`][HexGrid::offset_to_cube].
    pub fn cube_to_offset(&self, cube: CubeCoordinate) -> OffsetCoordinate {
        cube.into()
    }

    /// Centre of the cell under the pixel.
    pub fn snap(&self, pixel: PixelPosition) -> PixelPosition {
        self.offset_to_pixel(self.pixel_to_offset(pixel))
    }

    /// Number of single-cell steps between two cells.
    pub fn distance(&self, a: OffsetCoordinate, b: OffsetCoordinate) -> u32 {
        CubeCoordinate::from(a).distance(&b.into())
    }

    /// The cell one step away in the given direction, whether or not it is in the grid.
    /// Wraps around at the `i32` limits.
    pub fn step(&self, coord: OffsetCoordinate, heading: Orientation) -> OffsetCoordinate {
        (CubeCoordinate::from(coord) + heading.cube_step()).into()
    }

    /// Neighbouring cells inside the grid, in clockwise order starting from east.
    pub fn neighbors(
        &self,
        coord: OffsetCoordinate,
    ) -> impl '_ + Iterator<Item = (Orientation, OffsetCoordinate)> {
        Orientation::ALL
            .iter()
            .map(move |&heading| (heading, self.step(coord, heading)))
            .filter(move |&(_, n)| self.in_bounds(n))
    }

    /// Outline of the given cell.
    pub fn cell_outline(&self, coord: OffsetCoordinate) -> HexOutline {
        HexOutline::new(coord, self.layout.corners(coord))
    }

    /// Outlines of every cell in the grid, in row-major order.
    pub fn outline(&self) -> Vec<HexOutline> {
        self.dim
            .iter_coordinates()
            .map(|coord| self.cell_outline(coord))
            .collect()
    }

    /// Every cell edge in the grid as a flat list of segments: six per cell, cells in
    /// row-major order. Edges shared by two cells appear once for each.
    pub fn outline_segments(&self) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.dim.total_size() * 6);
        for coord in self.dim.iter_coordinates() {
            segments.extend(self.cell_outline(coord).segments());
        }
        segments
    }
}

/// Translate `value` by a whole number of `period`s into `[low - period, high + period)`
/// if it lies outside it. `low` and `high` must be multiples of `period`.
fn fold(value: f64, period: f64, low: f64, high: f64) -> f64 {
    let value = value.max(-f64::MAX).min(f64::MAX);
    if value < low - period {
        low - period + value.rem_euclid(period)
    } else if value > high + period {
        high + value.rem_euclid(period)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(columns: u32, rows: u32) -> HexGrid {
        HexGrid::new(PixelPosition::new(0., 0.), 20., columns, rows)
    }

    #[test]
    fn config_errors_propagate() {
        let origin = PixelPosition::default();
        assert_eq!(
            HexGrid::try_new(origin, 10., 0, 3),
            Err(GridConfigError::EmptyGrid {
                columns: 0,
                rows: 3
            })
        );
        assert_eq!(
            HexGrid::try_new(origin, -1., 3, 3),
            Err(GridConfigError::InvalidRadius(-1.))
        );
        let nowhere = PixelPosition::new(f32::NAN, 0.);
        assert!(matches!(
            HexGrid::try_new(nowhere, 10., 3, 3),
            Err(GridConfigError::InvalidOrigin(_))
        ));
    }

    #[test]
    #[should_panic(expected = "invalid hex grid")]
    fn new_panics_on_empty() {
        grid(3, 0);
    }

    #[test]
    fn round_trip_every_cell() {
        let grid = HexGrid::new(PixelPosition::new(-37.5, 12.25), 13., 9, 7);
        for coord in grid.dimensions().iter_coordinates() {
            assert_eq!(grid.pixel_to_offset(grid.offset_to_pixel(coord)), coord);
            assert_eq!(grid.cube_to_offset(grid.offset_to_cube(coord)), coord);
        }
    }

    #[test]
    fn off_grid_pixels_clamp() {
        let grid = grid(5, 5);
        assert_eq!(
            grid.pixel_to_offset(PixelPosition::new(-500., -500.)),
            OffsetCoordinate::new(0, 0)
        );
        assert_eq!(
            grid.pixel_to_offset(PixelPosition::new(5000., 5000.)),
            OffsetCoordinate::new(4, 4)
        );
        let past_east = grid.offset_to_pixel((7, 2).into());
        assert_eq!(grid.pixel_to_offset(past_east), OffsetCoordinate::new(4, 2));
    }

    #[test]
    fn extreme_pixels_clamp() {
        let grid = grid(5, 5);
        let cases = [
            (1e30, 1e30, (4, 4)),
            (-1e30, 1e30, (0, 4)),
            (1e30, -1e30, (4, 0)),
            (f32::MAX, f32::MIN, (4, 0)),
            (f32::INFINITY, f32::INFINITY, (4, 4)),
            (f32::NEG_INFINITY, 60., (0, 2)),
        ];
        for &(x, y, cell) in cases.iter() {
            assert_eq!(
                grid.pixel_to_offset(PixelPosition::new(x, y)),
                OffsetCoordinate::from(cell),
                "{} {}",
                x,
                y
            );
        }
        assert!(grid.in_bounds(grid.pixel_to_offset(PixelPosition::new(f32::NAN, 0.))));

        let small = HexGrid::new(PixelPosition::default(), 1., 3, 3);
        assert_eq!(
            small.pixel_to_offset(PixelPosition::new(3e9, 3e9)),
            OffsetCoordinate::new(2, 2)
        );
    }

    #[test]
    fn far_rows_keep_their_column() {
        let grid = grid(5, 5);
        for &row in [-40, -41, 45, 46, 1_000_001].iter() {
            for col in 0..5 {
                let pixel = grid.offset_to_pixel((col, row).into());
                let folded = grid.pixel_to_offset(pixel);
                let near = grid.dimensions().clamp((col, row).into());
                assert_eq!(folded, near, "{} {}", col, row);
            }
        }
    }

    #[test]
    fn offsets_anywhere_have_pixels() {
        let grid = grid(5, 5);
        let pixel = grid.offset_to_pixel(OffsetCoordinate::new(i32::MIN, 3));
        assert!(pixel.x < 0. && pixel.y > 0.);
        let pixel = grid.offset_to_pixel(OffsetCoordinate::new(i32::MAX, i32::MAX));
        assert!(pixel.x > 0. && pixel.y > 0.);
        let wrapped = grid.step(OffsetCoordinate::new(i32::MAX, 0), Orientation::East);
        assert_eq!(wrapped, OffsetCoordinate::new(i32::MIN, 0));
    }

    #[test]
    fn rejects_grids_beyond_pixel_precision() {
        let origin = PixelPosition::default();
        assert_eq!(
            HexGrid::try_new(origin, 1., 20_000_000, 2),
            Err(GridConfigError::ExtentTooLarge {
                columns: 20_000_000,
                rows: 2,
                radius: 1.
            })
        );
        assert!(HexGrid::try_new(PixelPosition::new(0., 5e8), 1., 2, 2).is_err());
        assert!(HexGrid::try_new(origin, 1., 500_000, 2).is_ok());
    }

    #[test]
    fn far_cells_round_trip() {
        let grid = HexGrid::new(PixelPosition::new(-250., 75.), 1., 500_000, 600_000);
        let last = grid.dimensions();
        for col in (last.last_col() - 200)..=last.last_col() {
            for &row in [0, 1, last.last_row() - 1, last.last_row()].iter() {
                let coord = OffsetCoordinate::new(col, row);
                assert_eq!(grid.pixel_to_offset(grid.offset_to_pixel(coord)), coord);
            }
        }
    }

    #[test]
    fn snap_centres_on_cell() {
        let grid = grid(5, 5);
        let center = grid.offset_to_pixel((2, 3).into());
        let snapped = grid.snap(PixelPosition::new(center.x + 4., center.y + 6.));
        assert_eq!(snapped, center);
    }

    #[test]
    fn corner_neighbors() {
        let grid = grid(5, 5);
        let found: Vec<_> = grid.neighbors((0, 0).into()).collect();
        assert_eq!(
            found,
            vec![
                (Orientation::East, OffsetCoordinate::new(1, 0)),
                (Orientation::SouthEast, OffsetCoordinate::new(0, 1)),
            ]
        );
        assert_eq!(grid.neighbors((2, 2).into()).count(), 6);
        assert_eq!(grid.neighbors((4, 1).into()).count(), 3);
    }

    #[test]
    fn neighbors_are_one_step_away() {
        let grid = grid(6, 6);
        for coord in grid.dimensions().iter_coordinates() {
            for (_, n) in grid.neighbors(coord) {
                assert_eq!(grid.distance(coord, n), 1);
            }
        }
    }

    #[test]
    fn outline_is_row_major() {
        let grid = grid(3, 2);
        let outline = grid.outline();
        let cells: Vec<_> = outline.iter().map(|o| o.cell()).collect();
        assert_eq!(cells, grid.dimensions().iter_coordinates().collect::<Vec<_>>());
        assert_eq!(outline, grid.outline());
    }

    #[test]
    fn outline_segments_close_each_cell() {
        let grid = grid(3, 2);
        let segments = grid.outline_segments();
        assert_eq!(segments.len(), 36);
        for cell in segments.chunks(6) {
            for i in 0..6 {
                assert_eq!(cell[i].end, cell[(i + 1) % 6].start);
            }
        }
        let strip = grid.cell_outline((1, 1).into()).strip();
        assert_eq!(strip[0], strip[6]);
        assert_eq!(&strip[..6], &grid.cell_outline((1, 1).into()).corners()[..]);
    }

    #[test]
    fn neighbouring_cells_share_edges() {
        let grid = grid(3, 3);
        let a = grid.cell_outline((0, 0).into());
        let b = grid.cell_outline((1, 0).into());
        let shared = a
            .corners()
            .iter()
            .filter(|c| {
                b.corners()
                    .iter()
                    .any(|d| (c.x - d.x).abs() < 1e-3 && (c.y - d.y).abs() < 1e-3)
            })
            .count();
        assert_eq!(shared, 2);
    }
}
