//! Pure landmark geometry. Visibility gating happens upstream; these
//! functions return a finite degree value for any finite coordinates.

use crate::pose::Landmark;

/// Interior angle at vertex `b` formed by the rays toward `a` and `c`,
/// in degrees, normalized into `[0, 180]`.
///
/// Elbow range of motion uses `a = shoulder, b = elbow, c = wrist`.
pub fn joint_angle(a: &Landmark, b: &Landmark, c: &Landmark) -> f64 {
    let to_c = (c.y - b.y).atan2(c.x - b.x);
    let to_a = (a.y - b.y).atan2(a.x - b.x);

    let mut degrees = (to_c - to_a).to_degrees().abs();
    if degrees > 180.0 {
        degrees = 360.0 - degrees;
    }
    degrees
}

/// Absolute deviation of the `a`→`b` line from horizontal, in degrees,
/// normalized into `[0, 90]` so the result is independent of point order.
///
/// Trunk tilt uses the two shoulders; a level torso reads near 0.
pub fn line_tilt(a: &Landmark, b: &Landmark) -> f64 {
    let mut degrees = (b.y - a.y).atan2(b.x - a.x).to_degrees().abs();
    if degrees > 90.0 {
        degrees = 180.0 - degrees;
    }
    degrees
}
