//! Spatial math for positional voice channels
//!
//! Bearings are measured in the horizontal plane spanned by X and Y of the
//! voice-chat API's positions, in radians. A relative angle is negative when
//! the source is to the listener's left and positive when it is to the right.

mod facing;
mod point3;

use std::f64::consts::PI;

pub use facing::CardinalFacing;
pub use point3::Point3;

/// Restrict `value` to `[min, max]`.
///
/// The upper bound is applied last, so it wins when `min > max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    max.min(min.max(value))
}

/// Euclidean distance between two points
pub fn distance(a: Point3, b: Point3) -> f64 {
    a.distance(&b)
}

/// Signed angle between `facing` and the bearing from `from` to `to`,
/// wrapped into `(-π, π]`.
///
/// When `from == to` the bearing is `atan2(0, 0) = 0`, so the result is the
/// wrapped `-facing`.
pub fn relative_angle(facing: f64, from: Point3, to: Point3) -> f64 {
    let delta_x = to.x - from.x;
    let delta_y = to.y - from.y;
    let bearing = delta_y.atan2(delta_x);
    wrap_angle(bearing - facing)
}

fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.sin().atan2(angle.cos());
    // atan2 yields -π for a negative-zero sine
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}
