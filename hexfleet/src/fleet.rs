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
//! Ships in play on a shared grid.

use std::{
    borrow::Borrow,
    collections::HashMap,
    fmt::{self, Debug},
    hash::Hash,
};

use log::debug;
use thiserror::Error;

use crate::{
    grid::{HexGrid, OffsetCoordinate, PixelPosition},
    ships::{MoveError, NavState, ShipId, ShipNavigator},
};

/// Error returned when trying to add a ship with an ID that is already in play.
#[derive(Error)]
#[error("ship with id {id:?} already exists")]
pub struct AddShipError<I: Debug> {
    /// ID of the ship that was attempted to be added.
    id: I,
    /// The starting state of the ship that was not added.
    state: NavState,
}

impl<I: Debug> AddShipError<I> {
    /// The id that was added.
    pub fn id(&self) -> &I {
        &self.id
    }

    /// The starting state that was rejected.
    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Extract the ID and state from this error.
    pub fn into_inner(self) -> (I, NavState) {
        (self.id, self.state)
    }
}

impl<I: Debug> Debug for AddShipError<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Reason a ship could not enter play.
#[derive(Debug, Error)]
pub enum FleetError<I: Debug> {
    #[error(transparent)]
    Duplicate(#[from] AddShipError<I>),
    #[error(transparent)]
    Placement(#[from] MoveError),
}

/// Collection of ships in play. Every ship owns its own navigation state; the grid is
/// shared read-only between them.
#[derive(Debug)]
pub struct Fleet<'g, I: ShipId> {
    grid: &'g HexGrid,
    ships: HashMap<I, ShipNavigator<'g>>,
}

impl<'g, I: ShipId> Fleet<'g, I> {
    /// Create an empty fleet on the given grid.
    pub fn new(grid: &'g HexGrid) -> Self {
        Self {
            grid,
            ships: HashMap::new(),
        }
    }

    /// Get the grid shared by every ship in the fleet.
    pub fn grid(&self) -> &'g HexGrid {
        self.grid
    }

    /// Number of ships in play.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// True if no ships are in play.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Put a new ship into play.
    pub fn add_ship(
        &mut self,
        id: I,
        state: NavState,
    ) -> Result<&mut ShipNavigator<'g>, FleetError<I>> {
        if self.ships.contains_key(&id) {
            return Err(AddShipError { id, state }.into());
        }
        let nav = ShipNavigator::new(self.grid, state)?;
        debug!(
            "ship {:?} entered play at {} heading {}",
            id, state.position, state.heading
        );
        Ok(self.ships.entry(id).or_insert(nav))
    }

    /// Take a ship out of play, returning its final state.
    pub fn remove_ship<Q: ?Sized>(&mut self, id: &Q) -> Option<NavState>
    where
        I: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.ships.remove(id).map(|nav| nav.state())
    }

    /// Get the navigator of the ship with the given id, if it is in play.
    pub fn get<Q: ?Sized>(&self, id: &Q) -> Option<&ShipNavigator<'g>>
    where
        I: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.ships.get(id)
    }

    /// Get the navigator of the ship with the given id mutably, if it is in play.
    pub fn get_mut<Q: ?Sized>(&mut self, id: &Q) -> Option<&mut ShipNavigator<'g>>
    where
        I: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.ships.get_mut(id)
    }

    /// Get an iterator over all ships in play, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&I, &ShipNavigator<'g>)> {
        self.ships.iter()
    }

    /// Ships occupying the given cell.
    pub fn ships_at(&self, coord: OffsetCoordinate) -> impl Iterator<Item = &I> {
        self.ships
            .iter()
            .filter(move |(_, nav)| nav.position() == coord)
            .map(|(id, _)| id)
    }

    /// Ships occupying the cell under the given pixel.
    pub fn ships_at_pixel(&self, pixel: PixelPosition) -> impl Iterator<Item = &I> {
        self.ships_at(self.grid.pixel_to_offset(pixel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ships::CannotMoveReason, Orientation};

    fn grid() -> HexGrid {
        HexGrid::new(PixelPosition::new(0., 0.), 20., 5, 5)
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let grid = grid();
        let mut fleet = Fleet::new(&grid);
        let start = NavState::new((0, 0).into(), Orientation::East);
        fleet.add_ship("scout", start).unwrap();
        match fleet.add_ship("scout", NavState::new((1, 1).into(), Orientation::West)) {
            Err(FleetError::Duplicate(err)) => {
                assert_eq!(*err.id(), "scout");
                assert_eq!(err.state().position, OffsetCoordinate::new(1, 1));
            }
            other => panic!("expected duplicate error, got {:?}", other.map(|n| n.state())),
        }
        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet.get("scout").unwrap().state(), start);
    }

    #[test]
    fn off_grid_start_is_rejected() {
        let grid = grid();
        let mut fleet: Fleet<&str> = Fleet::new(&grid);
        match fleet.add_ship("lost", NavState::new((9, 9).into(), Orientation::East)) {
            Err(FleetError::Placement(err)) => {
                assert_eq!(err.reason(), CannotMoveReason::InvalidCoordinate)
            }
            other => panic!("expected placement error, got {:?}", other.map(|n| n.state())),
        }
        assert!(fleet.is_empty());
    }

    #[test]
    fn ships_move_independently() {
        let grid = grid();
        let mut fleet = Fleet::new(&grid);
        fleet
            .add_ship(1, NavState::new((0, 0).into(), Orientation::East))
            .unwrap();
        fleet
            .add_ship(2, NavState::new((0, 0).into(), Orientation::SouthEast))
            .unwrap();
        fleet.get_mut(&1).unwrap().move_forward().unwrap();
        fleet.get_mut(&2).unwrap().rotate_left();
        assert_eq!(
            fleet.get(&1).unwrap().state(),
            NavState::new((1, 0).into(), Orientation::East)
        );
        assert_eq!(
            fleet.get(&2).unwrap().state(),
            NavState::new((0, 0).into(), Orientation::East)
        );
    }

    #[test]
    fn select_by_cell_and_pixel() {
        let grid = grid();
        let mut fleet = Fleet::new(&grid);
        fleet
            .add_ship('a', NavState::new((3, 2).into(), Orientation::East))
            .unwrap();
        fleet
            .add_ship('b', NavState::new((1, 1).into(), Orientation::East))
            .unwrap();
        assert_eq!(fleet.ships_at((3, 2).into()).collect::<Vec<_>>(), vec![&'a']);
        assert_eq!(fleet.ships_at((0, 0).into()).count(), 0);
        let click = grid.offset_to_pixel((1, 1).into());
        let click = PixelPosition::new(click.x - 3., click.y + 2.);
        assert_eq!(fleet.ships_at_pixel(click).collect::<Vec<_>>(), vec![&'b']);
    }

    #[test]
    fn removed_ships_leave_play() {
        let grid = grid();
        let mut fleet = Fleet::new(&grid);
        fleet
            .add_ship(String::from("vanguard"), NavState::new((2, 2).into(), Orientation::West))
            .unwrap()
            .move_forward()
            .unwrap();
        assert_eq!(
            fleet.remove_ship("vanguard"),
            Some(NavState::new((1, 2).into(), Orientation::West))
        );
        assert!(fleet.get("vanguard").is_none());
        assert_eq!(fleet.remove_ship("vanguard"), None);
    }
}
