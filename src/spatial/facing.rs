//! Horizontal entity facing as reported by the host world

/// The four horizontal directions an entity can face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardinalFacing {
    South,
    West,
    North,
    East,
}

impl CardinalFacing {
    /// Yaw rotation in degrees, with south at zero and increasing clockwise
    pub fn as_rotation(self) -> f64 {
        match self {
            CardinalFacing::South => 0.0,
            CardinalFacing::West => 90.0,
            CardinalFacing::North => 180.0,
            CardinalFacing::East => 270.0,
        }
    }

    /// Facing in radians, ready for [`super::relative_angle`]
    pub fn to_radians(self) -> f64 {
        self.as_rotation().to_radians()
    }

    /// Nearest cardinal direction for a yaw in degrees
    pub fn from_yaw(yaw: f64) -> Self {
        let quadrant = ((yaw / 90.0).round() as i64).rem_euclid(4);
        match quadrant {
            0 => CardinalFacing::South,
            1 => CardinalFacing::West,
            2 => CardinalFacing::North,
            _ => CardinalFacing::East,
        }
    }
}
