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
//! Per-ship navigation state and the operations that change it.

use enumflags2::BitFlags;
use log::debug;

use crate::{
    grid::{HexGrid, OffsetCoordinate, Orientation, PixelPosition},
    ships::{movement, CannotMoveReason, MoveError},
};

/// Position and heading of a ship on the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NavState {
    /// Cell the ship occupies.
    pub position: OffsetCoordinate,
    /// Direction the ship faces, which is also the direction of a forward move.
    pub heading: Orientation,
}

impl NavState {
    /// Construct a [`NavState`] at `position` facing `heading`.
    pub fn new(position: OffsetCoordinate, heading: Orientation) -> Self {
        Self { position, heading }
    }
}

/// Moves and turns a single ship, keeping it inside the grid it was created on.
///
/// Every operation either succeeds completely or returns an error and leaves the state
/// untouched.
#[derive(Debug, Clone)]
pub struct ShipNavigator<'g> {
    /// Grid the ship moves on.
    grid: &'g HexGrid,

    /// Current position and heading.
    state: NavState,

    /// Whether the ship may change position. Turning is always allowed.
    on_turn: bool,
}

impl<'g> ShipNavigator<'g> {
    /// Put a ship into play at the given state. Fails with
    /// [`CannotMoveReason::InvalidCoordinate`] if the position is outside the grid.
    pub fn new(grid: &'g HexGrid, state: NavState) -> Result<Self, MoveError> {
        if !grid.in_bounds(state.position) {
            return Err(MoveError::new(
                CannotMoveReason::InvalidCoordinate,
                state,
                state.position,
            ));
        }
        Ok(Self {
            grid,
            state,
            on_turn: true,
        })
    }

    /// Get the grid the ship moves on.
    pub fn grid(&self) -> &'g HexGrid {
        self.grid
    }

    /// Get the current position and heading.
    pub fn state(&self) -> NavState {
        self.state
    }

    /// Get the cell the ship occupies.
    pub fn position(&self) -> OffsetCoordinate {
        self.state.position
    }

    /// Get the direction the ship faces.
    pub fn heading(&self) -> Orientation {
        self.state.heading
    }

    /// Pixel centre of the ship's cell.
    pub fn pixel_position(&self) -> PixelPosition {
        self.grid.offset_to_pixel(self.state.position)
    }

    /// Sprite rotation for the ship's heading.
    pub fn rotation_degrees(&self) -> f32 {
        self.state.heading.degrees()
    }

    /// True if the ship may currently change position.
    pub fn on_turn(&self) -> bool {
        self.on_turn
    }

    /// Allow the ship to change position.
    pub fn take_turn(&mut self) {
        self.on_turn = true;
    }

    /// Forbid position changes until [`take_turn`][Self::take_turn] is called.
    pub fn stand_down(&mut self) {
        self.on_turn = false;
    }

    /// Turn 60° to the right.
    pub fn rotate_right(&mut self) -> Orientation {
        self.state.heading = self.state.heading.clockwise();
        debug!("turned right to {}", self.state.heading);
        self.state.heading
    }

    /// Turn 60° to the left.
    pub fn rotate_left(&mut self) -> Orientation {
        self.state.heading = self.state.heading.counter_clockwise();
        debug!("turned left to {}", self.state.heading);
        self.state.heading
    }

    /// Jump to any cell in the grid.
    pub fn move_to(&mut self, target: OffsetCoordinate) -> Result<OffsetCoordinate, MoveError> {
        self.check_turn(target)?;
        if !self.grid.in_bounds(target) {
            debug!("rejected move from {} to {}: outside grid", self.state.position, target);
            return Err(MoveError::new(
                CannotMoveReason::InvalidCoordinate,
                self.state,
                target,
            ));
        }
        Ok(self.relocate(target))
    }

    /// Advance one cell along the current heading.
    pub fn move_forward(&mut self) -> Result<OffsetCoordinate, MoveError> {
        self.advance(self.state.heading)
    }

    /// Back up one cell, opposite the current heading, without turning.
    pub fn move_backward(&mut self) -> Result<OffsetCoordinate, MoveError> {
        self.advance(self.state.heading.reversed())
    }

    /// Headings along which a forward move from the current cell is not blocked.
    pub fn open_headings(&self) -> BitFlags<Orientation> {
        let dim = self.grid.dimensions();
        let mut open = BitFlags::empty();
        for &heading in Orientation::ALL {
            if movement::forward_target(heading, self.state.position, dim).is_ok() {
                open.insert(heading);
            }
        }
        open
    }

    fn advance(&mut self, direction: Orientation) -> Result<OffsetCoordinate, MoveError> {
        let dim = self.grid.dimensions();
        match movement::forward_target(direction, self.state.position, dim) {
            Ok(target) => {
                self.check_turn(target)?;
                Ok(self.relocate(target))
            }
            Err(target) => {
                self.check_turn(target)?;
                debug!(
                    "blocked moving {} from {}: grid edge",
                    direction, self.state.position
                );
                Err(MoveError::new(
                    CannotMoveReason::BlockedByBoundary,
                    self.state,
                    target,
                ))
            }
        }
    }

    fn check_turn(&self, target: OffsetCoordinate) -> Result<(), MoveError> {
        if self.on_turn {
            Ok(())
        } else {
            debug!("rejected move to {}: not on turn", target);
            Err(MoveError::new(CannotMoveReason::NotOnTurn, self.state, target))
        }
    }

    fn relocate(&mut self, target: OffsetCoordinate) -> OffsetCoordinate {
        debug!("moved from {} to {}", self.state.position, target);
        self.state.position = target;
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_5x5() -> HexGrid {
        HexGrid::new(PixelPosition::new(0., 0.), 20., 5, 5)
    }

    fn ship(grid: &HexGrid, col: i32, row: i32, heading: Orientation) -> ShipNavigator {
        ShipNavigator::new(grid, NavState::new((col, row).into(), heading)).unwrap()
    }

    #[test]
    fn start_outside_grid_is_rejected() {
        let grid = grid_5x5();
        let err = ShipNavigator::new(&grid, NavState::new((5, 0).into(), Orientation::East))
            .unwrap_err();
        assert_eq!(err.reason(), CannotMoveReason::InvalidCoordinate);
        assert_eq!(err.target(), OffsetCoordinate::new(5, 0));
    }

    #[test]
    fn rotation_ring_closes() {
        let grid = grid_5x5();
        for &start in Orientation::ALL {
            let mut nav = ship(&grid, 2, 2, start);
            for _ in 0..6 {
                nav.rotate_right();
            }
            assert_eq!(nav.heading(), start);
            for _ in 0..6 {
                nav.rotate_left();
            }
            assert_eq!(nav.heading(), start);
        }
    }

    #[test]
    fn rotation_returns_new_heading() {
        let grid = grid_5x5();
        let mut nav = ship(&grid, 0, 0, Orientation::East);
        assert_eq!(nav.rotate_left(), Orientation::NorthEast);
        assert_eq!(nav.rotate_right(), Orientation::East);
        assert_eq!(nav.rotate_right(), Orientation::SouthEast);
        assert_eq!(nav.rotation_degrees(), 60.);
    }

    #[test]
    fn blocked_at_east_edge() {
        let grid = grid_5x5();
        let mut nav = ship(&grid, 4, 0, Orientation::East);
        let before = nav.state();
        let err = nav.move_forward().unwrap_err();
        assert_eq!(err.reason(), CannotMoveReason::BlockedByBoundary);
        assert_eq!(*err.state(), before);
        assert_eq!(nav.state(), before);
    }

    #[test]
    fn north_east_depends_on_row_parity() {
        let grid = grid_5x5();
        let mut odd = ship(&grid, 2, 1, Orientation::NorthEast);
        assert_eq!(odd.move_forward().unwrap(), OffsetCoordinate::new(3, 0));
        let mut even = ship(&grid, 2, 2, Orientation::NorthEast);
        assert_eq!(even.move_forward().unwrap(), OffsetCoordinate::new(2, 1));
        assert_eq!(even.position(), OffsetCoordinate::new(2, 1));
    }

    #[test]
    fn move_to_off_grid_is_invalid() {
        let grid = grid_5x5();
        let mut nav = ship(&grid, 1, 1, Orientation::West);
        let before = nav.state();
        let err = nav.move_to((-1, 0).into()).unwrap_err();
        assert_eq!(err.reason(), CannotMoveReason::InvalidCoordinate);
        assert_eq!(err.target(), OffsetCoordinate::new(-1, 0));
        assert_eq!(nav.state(), before);
        assert!(nav.move_to((5, 4).into()).is_err());
        assert_eq!(nav.move_to((4, 4).into()).unwrap(), OffsetCoordinate::new(4, 4));
        assert_eq!(nav.heading(), Orientation::West);
    }

    #[test]
    fn scenario_from_origin() {
        let grid = grid_5x5();
        let mut nav = ship(&grid, 0, 0, Orientation::East);
        nav.move_forward().unwrap();
        nav.move_forward().unwrap();
        nav.rotate_right();
        nav.move_forward().unwrap();
        assert_eq!(
            nav.state(),
            NavState::new((2, 1).into(), Orientation::SouthEast)
        );
    }

    #[test]
    fn backward_keeps_heading() {
        let grid = grid_5x5();
        let mut nav = ship(&grid, 2, 2, Orientation::NorthEast);
        assert_eq!(nav.move_backward().unwrap(), OffsetCoordinate::new(1, 3));
        assert_eq!(nav.heading(), Orientation::NorthEast);
        assert_eq!(nav.move_forward().unwrap(), OffsetCoordinate::new(2, 2));
    }

    #[test]
    fn backward_blocked_at_west_edge() {
        let grid = grid_5x5();
        let mut nav = ship(&grid, 0, 2, Orientation::East);
        let err = nav.move_backward().unwrap_err();
        assert_eq!(err.reason(), CannotMoveReason::BlockedByBoundary);
        assert_eq!(err.target(), OffsetCoordinate::new(-1, 2));
        assert_eq!(nav.position(), OffsetCoordinate::new(0, 2));
    }

    #[test]
    fn standing_down_blocks_movement_but_not_turning() {
        let grid = grid_5x5();
        let mut nav = ship(&grid, 2, 2, Orientation::East);
        nav.stand_down();
        assert!(!nav.on_turn());
        let before = nav.state();
        for result in vec![nav.move_forward(), nav.move_backward(), nav.move_to((0, 0).into())] {
            assert_eq!(result.unwrap_err().reason(), CannotMoveReason::NotOnTurn);
        }
        assert_eq!(nav.state(), before);
        nav.rotate_right();
        assert_eq!(nav.heading(), Orientation::SouthEast);
        nav.take_turn();
        assert_eq!(nav.move_forward().unwrap(), OffsetCoordinate::new(2, 3));
    }

    #[test]
    fn open_headings_at_corner() {
        let grid = grid_5x5();
        let nav = ship(&grid, 0, 0, Orientation::East);
        let open = nav.open_headings();
        assert!(open.contains(Orientation::East));
        assert!(open.contains(Orientation::SouthEast));
        assert_eq!(open.bits().count_ones(), 2);
        let middle = ship(&grid, 2, 2, Orientation::East);
        assert_eq!(middle.open_headings(), BitFlags::all());
    }

    #[test]
    fn pixel_position_follows_ship() {
        let grid = grid_5x5();
        let mut nav = ship(&grid, 0, 0, Orientation::East);
        nav.move_forward().unwrap();
        assert_eq!(nav.pixel_position(), grid.offset_to_pixel((1, 0).into()));
    }
}
