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
//! Errors returned by [`ShipNavigator`][crate::ships::ShipNavigator] operations.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{grid::OffsetCoordinate, ships::NavState};

/// Reason why a ship could not move.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotMoveReason {
    /// The requested cell is outside the grid.
    #[error("the target cell is outside the grid")]
    InvalidCoordinate,
    /// Moving along the current heading would leave the grid.
    #[error("the edge of the grid blocks that move")]
    BlockedByBoundary,
    /// The ship is standing down and may not change position.
    #[error("the ship is not on turn")]
    NotOnTurn,
}

/// Error returned when a move is rejected. The ship's state is left as it was.
#[derive(Error, Copy, Clone, Eq, PartialEq)]
#[error(
    "could not move ship at {} heading {} to {target}: {reason}",
    .state.position,
    .state.heading
)]
pub struct MoveError {
    #[source]
    reason: CannotMoveReason,
    /// State of the ship, unchanged by the failed move.
    state: NavState,
    /// The cell the ship tried to reach.
    target: OffsetCoordinate,
}

impl Debug for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl MoveError {
    pub(super) fn new(reason: CannotMoveReason, state: NavState, target: OffsetCoordinate) -> Self {
        Self {
            reason,
            state,
            target,
        }
    }

    /// Get the reason the move was rejected.
    pub fn reason(&self) -> CannotMoveReason {
        self.reason
    }

    /// Get the ship's state, which the failed move did not change.
    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Get the cell the move tried to reach. For a blocked forward or backward move this
    /// is where the ship would have ended up without the edge guard.
    pub fn target(&self) -> OffsetCoordinate {
        self.target
    }
}
