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
//! Forward movement rules for each heading.
//!
//! Each heading has a column delta per row parity, a row delta, and a set of edge
//! guards which block the move outright. Rows alternate between unshifted (even) and
//! shoved right by half a cell (odd), so diagonal moves change column only on one
//! parity.

use crate::grid::{GridDimensions, OffsetCoordinate, Orientation};

/// One end of an axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Edge {
    /// Column or row 0.
    First,
    /// The last column or row.
    Last,
}

/// Which rows a column guard applies to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Rows {
    Any,
    Even,
    Odd,
}

/// Movement rule for a single heading.
#[derive(Debug, Copy, Clone)]
struct Step {
    /// Column delta on even rows and odd rows respectively.
    dcol: [i32; 2],
    drow: i32,
    /// Blocked when the ship is on this row edge.
    row_guard: Option<Edge>,
    /// Blocked when the ship is on this column edge and on a matching row.
    col_guard: Option<(Edge, Rows)>,
}

/// Rules indexed by [`Orientation::index`].
const STEPS: [Step; 6] = [
    // East
    Step {
        dcol: [1, 1],
        drow: 0,
        row_guard: None,
        col_guard: Some((Edge::Last, Rows::Any)),
    },
    // SouthEast
    Step {
        dcol: [0, 1],
        drow: 1,
        row_guard: Some(Edge::Last),
        col_guard: Some((Edge::Last, Rows::Even)),
    },
    // SouthWest
    Step {
        dcol: [-1, 0],
        drow: 1,
        row_guard: Some(Edge::Last),
        col_guard: Some((Edge::First, Rows::Odd)),
    },
    // West
    Step {
        dcol: [-1, -1],
        drow: 0,
        row_guard: None,
        col_guard: Some((Edge::First, Rows::Any)),
    },
    // NorthWest
    Step {
        dcol: [-1, 0],
        drow: -1,
        row_guard: Some(Edge::First),
        col_guard: Some((Edge::First, Rows::Odd)),
    },
    // NorthEast
    Step {
        dcol: [0, 1],
        drow: -1,
        row_guard: Some(Edge::First),
        col_guard: Some((Edge::Last, Rows::Even)),
    },
];

impl Step {
    fn for_heading(heading: Orientation) -> &'static Step {
        &STEPS[heading.index()]
    }

    fn guarded(&self, pos: OffsetCoordinate, dim: &GridDimensions) -> bool {
        let on_edge = |edge: Edge, value: i32, last: i32| match edge {
            Edge::First => value == 0,
            Edge::Last => value == last,
        };
        let row_blocked = self
            .row_guard
            .map_or(false, |edge| on_edge(edge, pos.row, dim.last_row()));
        let col_blocked = self.col_guard.map_or(false, |(edge, rows)| {
            let parity_matches = match rows {
                Rows::Any => true,
                Rows::Even => !pos.odd_row(),
                Rows::Odd => pos.odd_row(),
            };
            parity_matches && on_edge(edge, pos.col, dim.last_col())
        });
        row_blocked || col_blocked
    }

    fn apply(&self, pos: OffsetCoordinate) -> OffsetCoordinate {
        OffsetCoordinate {
            col: pos.col + self.dcol[pos.odd_row() as usize],
            row: pos.row + self.drow,
        }
    }
}

/// Cell reached by moving one step from `pos` along `heading`. If an edge guard blocks
/// the move or the step would leave the grid, the unreachable cell is returned as the
/// error.
pub(crate) fn forward_target(
    heading: Orientation,
    pos: OffsetCoordinate,
    dim: &GridDimensions,
) -> Result<OffsetCoordinate, OffsetCoordinate> {
    let step = Step::for_heading(heading);
    let target = step.apply(pos);
    if step.guarded(pos, dim) || !dim.in_bounds(target) {
        Err(target)
    } else {
        Ok(target)
    }
}
