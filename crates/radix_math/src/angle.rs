//! Angle normalization and forward arcs on the 360-degree circle.

/// Normalize an angle to [0, 360) degrees.
///
/// Two angles that differ by an exact multiple of 360 normalize to the same
/// value. Non-finite input propagates unchanged (NaN in, NaN out); callers
/// that must not see NaN reject it before normalizing.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Forward arc from `a` to `b` in degrees (always positive, 0..360).
pub fn arc_forward(a: f64, b: f64) -> f64 {
    normalize_360(b - a)
}
