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
//! Errors used when configuring a [`HexGrid`][crate::grid::HexGrid].

use thiserror::Error;

use crate::grid::PixelPosition;

/// Reason a grid configuration was rejected.
#[derive(Debug, Error, Copy, Clone, PartialEq)]
pub enum GridConfigError {
    /// The grid had no columns or no rows.
    #[error("grid must have at least one column and row, got {columns}x{rows}")]
    EmptyGrid { columns: u32, rows: u32 },
    /// The grid was too large for its coordinates to be addressed.
    #[error("grid too large: {columns}x{rows} exceeds {max}", max = i32::MAX)]
    TooLarge { columns: u32, rows: u32 },
    /// The cell radius was zero, negative, or not finite.
    #[error("cell radius must be a positive finite number of pixels, got {0}")]
    InvalidRadius(f32),
    /// The origin had a NaN or infinite component.
    #[error("grid origin must be a finite pixel position, got {0}")]
    InvalidOrigin(PixelPosition),
    /// The cells would reach too far from the world origin for `f32` pixels to
    /// distinguish them.
    #[error("{columns}x{rows} cells of radius {radius} are too large to place in pixels")]
    ExtentTooLarge { columns: u32, rows: u32, radius: f32 },
}
