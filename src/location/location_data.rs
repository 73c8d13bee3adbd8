//! Location data structures - plain values, freely copied
//!
//! Camera-relative space: the camera looks down +Z, +Y points down and +X
//! completes a right-handed system. All lengths share one unit with the
//! occupancy map extents and the pixel scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location relative to the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Location {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

/// The same physical point as a [`Location`], described by its distance from
/// the camera and two angles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarLocation {
    /// Distance from the camera
    pub depth: f64,

    /// Angle from the +Z axis (radians, 0..=PI)
    pub inclination: f64,

    /// Angle in the X/Y plane measured from +X (radians, -PI..=PI)
    pub rotation: f64,
}

/// Pixel displacement from the centre of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: i64,
    pub y: i64,
}

impl Offset {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Absolute pixel position within an image, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinates {
    pub x: u32,
    pub y: u32,
}

impl Coordinates {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}
