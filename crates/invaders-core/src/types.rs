//! Playfield coordinates and the 2D vector embedded in every entity.

use serde::{Deserialize, Serialize};

use crate::error::RangeError;

/// Playfield coordinate scalar.
///
/// The default (narrow) profile stores coordinates in a single byte to
/// keep entity records small; the `wide-coords` feature widens them to
/// a machine word for playfields larger than `-128..=127`.
#[cfg(not(feature = "wide-coords"))]
pub type Coord = i8;

/// Playfield coordinate scalar (wide profile).
#[cfg(feature = "wide-coords")]
pub type Coord = i32;

/// Checked conversion into the active coordinate width.
fn coord(value: i64) -> Result<Coord, RangeError> {
    Coord::try_from(value).map_err(|_| RangeError::Coordinate(value))
}

/// 2D integer position or displacement.
///
/// Plain `Copy` value, always embedded in a parent entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vector {
    pub x: Coord,
    pub y: Coord,
}

impl Vector {
    /// The origin.
    pub const ZERO: Vector = Vector { x: 0, y: 0 };

    /// Builds a vector, rejecting coordinates the active profile cannot
    /// represent. Only the narrow profile can actually fail here.
    pub fn new(x: i32, y: i32) -> Result<Self, RangeError> {
        Ok(Self {
            x: coord(i64::from(x))?,
            y: coord(i64::from(y))?,
        })
    }

    /// This vector displaced by `(dx, dy)`, with the same range contract
    /// as [`Vector::new`]. The tick loop integrates positions through
    /// this instead of raw field writes, so overflow surfaces as a
    /// `RangeError` rather than a silent truncation.
    pub fn translated(self, dx: i32, dy: i32) -> Result<Self, RangeError> {
        Ok(Self {
            x: coord(i64::from(self.x) + i64::from(dx))?,
            y: coord(i64::from(self.y) + i64::from(dy))?,
        })
    }
}
