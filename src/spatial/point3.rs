//! 3D point representation

use std::fmt;
use std::ops::Sub;

/// A position in the game world
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Origin point (0, 0, 0)
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new 3D point
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Calculate the Euclidean distance to another point
    pub fn distance(&self, other: &Point3) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Calculate the squared distance (avoids sqrt)
    pub fn distance_squared(&self, other: &Point3) -> f64 {
        let (dx, dy, dz) = *self - *other;
        dx * dx + dy * dy + dz * dz
    }
}

impl Sub for Point3 {
    type Output = (f64, f64, f64);

    fn sub(self, rhs: Self) -> Self::Output {
        (self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}, {:?}, {:?}", self.x, self.y, self.z)
    }
}
