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
//! Hex-grid coordinates and ship navigation for a turn-based starship combat game.
//!
//! [`grid`] holds the coordinate system: conversion between pixel space, offset
//! coordinates and cube coordinates, plus the outline geometry of the grid.
//!
//! [`ships`] holds the per-ship navigation state machine, which moves and rotates a
//! ship while keeping it inside a [`HexGrid`].
//!
//! [`fleet`] groups several navigators that share a single grid.

pub mod fleet;
pub mod grid;
pub mod ships;

pub use crate::{
    fleet::Fleet,
    grid::{CubeCoordinate, HexGrid, OffsetCoordinate, PixelPosition},
    ships::{NavState, Orientation, ShipNavigator},
};
