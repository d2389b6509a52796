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
//! Line geometry for drawing the grid.

use crate::grid::{OffsetCoordinate, PixelPosition};

/// A straight line between two pixel positions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub start: PixelPosition,
    pub end: PixelPosition,
}

/// Boundary of a single cell.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HexOutline {
    /// The cell this outline surrounds.
    cell: OffsetCoordinate,
    /// Corners, starting at -30° and turning by 60° each step.
    corners: [PixelPosition; 6],
}

impl HexOutline {
    pub(super) fn new(cell: OffsetCoordinate, corners: [PixelPosition; 6]) -> Self {
        Self { cell, corners }
    }

    /// The cell this outline surrounds.
    pub fn cell(&self) -> OffsetCoordinate {
        self.cell
    }

    /// The six corners of the cell, starting at -30° and turning by 60° each step.
    pub fn corners(&self) -> &[PixelPosition; 6] {
        &self.corners
    }

    /// The six edges of the cell, each starting where the previous one ended.
    pub fn segments(&self) -> impl '_ + Iterator<Item = Segment> {
        let corners = &self.corners;
        (0..6).map(move |i| Segment {
            start: corners[i],
            end: corners[(i + 1) % 6],
        })
    }

    /// Closed line strip: the six corners followed by the first corner again.
    pub fn strip(&self) -> [PixelPosition; 7] {
        let mut strip = [self.corners[0]; 7];
        strip[..6].copy_from_slice(&self.corners);
        strip
    }
}
