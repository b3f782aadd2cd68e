//! Ecliptic-longitude to screen-angle projection and polar placement.
//!
//! A wheel chart is a rotation and reflection of raw ecliptic longitude,
//! not an identity mapping: the ascendant sits at the left (180 deg screen),
//! the midheaven at the top (90), the descendant at the right (0), the imum
//! coeli at the bottom (270). Every plotted feature goes through the same
//! projection so the whole wheel stays mutually consistent under rotation.

use radix_math::normalize_360;

/// Screen angle the ascendant is anchored to: 180 deg, the 9 o'clock
/// position. Substitute a different anchor via
/// [`screen_angle_from_anchor`] for alternate chart conventions.
pub const ASCENDANT_ANCHOR_DEG: f64 = 180.0;

/// Project an ecliptic longitude to a screen angle in [0, 360) with the
/// ascendant fixed at [`ASCENDANT_ANCHOR_DEG`].
pub fn screen_angle(longitude_deg: f64, ascendant_deg: f64) -> f64 {
    screen_angle_from_anchor(longitude_deg, ascendant_deg, ASCENDANT_ANCHOR_DEG)
}

/// Project an ecliptic longitude to a screen angle with the ascendant fixed
/// at an arbitrary anchor angle.
pub fn screen_angle_from_anchor(longitude_deg: f64, ascendant_deg: f64, anchor_deg: f64) -> f64 {
    normalize_360(anchor_deg - (longitude_deg - ascendant_deg))
}

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Convert a screen angle and radius to screen x/y around a center.
///
/// Screen y grows downward, so the y term is subtracted: this keeps the
/// wheel counter-clockwise with 90 deg at the top instead of mirrored.
pub fn polar_point(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point {
        x: center.x + radius * rad.cos(),
        y: center.y - radius * rad.sin(),
    }
}
