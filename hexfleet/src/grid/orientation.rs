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
//! The six compass headings of a pointy-topped hex grid.
use std::{fmt, str::FromStr};

use enumflags2::BitFlags;
use thiserror::Error;

use crate::grid::CubeCoordinate;

/// Heading of a ship. Listed in clockwise order starting from east; turning right steps
/// forward through the list and turning left steps back, wrapping at either end.
///
/// Discriminants are single bits so that sets of headings can be held in a
/// [`BitFlags<Orientation>`].
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Orientation {
    East = 0b00_0001,
    SouthEast = 0b00_0010,
    SouthWest = 0b00_0100,
    West = 0b00_1000,
    NorthWest = 0b01_0000,
    NorthEast = 0b10_0000,
}

impl Orientation {
    /// All headings in clockwise order, so that `ALL[h.index()] == h`.
    pub const ALL: &'static [Orientation; 6] = &[
        Orientation::East,
        Orientation::SouthEast,
        Orientation::SouthWest,
        Orientation::West,
        Orientation::NorthWest,
        Orientation::NorthEast,
    ];

    /// Position of this heading in the clockwise ring.
    pub fn index(self) -> usize {
        match self {
            Orientation::East => 0,
            Orientation::SouthEast => 1,
            Orientation::SouthWest => 2,
            Orientation::West => 3,
            Orientation::NorthWest => 4,
            Orientation::NorthEast => 5,
        }
    }

    /// Heading at the given ring position, wrapping modulo 6.
    pub fn from_index(idx: usize) -> Self {
        Self::ALL[idx % 6]
    }

    /// Heading after turning 60° to the right.
    pub fn clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Heading after turning 60° to the left.
    pub fn counter_clockwise(self) -> Self {
        Self::from_index(self.index() + 5)
    }

    /// The opposite heading.
    pub fn reversed(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Rotation to draw a sprite facing this way, in degrees clockwise from east.
    pub fn degrees(self) -> f32 {
        60. * self.index() as f32
    }

    /// Offset to the neighbouring cell in this direction.
    pub fn cube_step(self) -> CubeCoordinate {
        match self {
            Orientation::East => CubeCoordinate::new(1, 0),
            Orientation::SouthEast => CubeCoordinate::new(0, 1),
            Orientation::SouthWest => CubeCoordinate::new(-1, 1),
            Orientation::West => CubeCoordinate::new(-1, 0),
            Orientation::NorthWest => CubeCoordinate::new(0, -1),
            Orientation::NorthEast => CubeCoordinate::new(1, -1),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Orientation::East => "east",
            Orientation::SouthEast => "southeast",
            Orientation::SouthWest => "southwest",
            Orientation::West => "west",
            Orientation::NorthWest => "northwest",
            Orientation::NorthEast => "northeast",
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::East
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when text does not name a heading.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown heading {0:?}, expected one of e, se, sw, w, nw, ne")]
pub struct ParseOrientationError(String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "e" | "east" => Ok(Orientation::East),
            "se" | "southeast" => Ok(Orientation::SouthEast),
            "sw" | "southwest" => Ok(Orientation::SouthWest),
            "w" | "west" => Ok(Orientation::West),
            "nw" | "northwest" => Ok(Orientation::NorthWest),
            "ne" | "northeast" => Ok(Orientation::NorthEast),
            _ => Err(ParseOrientationError(s.to_owned())),
        }
    }
}

#[cfg(feature = "rng_gen")]
impl rand::distributions::Distribution<Orientation> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        Orientation::from_index(rng.gen_range(0, 6))
    }
}
