//! Renderer-agnostic scene graph for a radix wheel.
//!
//! Every angle in these types is a screen angle (post-projection), never a
//! raw ecliptic longitude; a renderer can draw the wheel without knowing
//! any astrological convention. All types are immutable value objects.

use radix_chart::{Planet, Sign};

use crate::projection::Point;

/// The three concentric ring radii of the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingRadii {
    /// Outer boundary of the zodiac band.
    pub outer: f64,
    /// Inner boundary of the zodiac band.
    pub inner: f64,
    /// Boundary of the house ring.
    pub house: f64,
}

/// One 30-degree zodiac segment: boundary tick plus label anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZodiacSegment {
    /// The sign occupying this segment.
    pub sign: Sign,
    /// Screen angle of the segment start boundary.
    pub boundary_angle_deg: f64,
    /// Boundary tick endpoint on the outer ring.
    pub boundary_outer: Point,
    /// Boundary tick endpoint on the inner ring.
    pub boundary_inner: Point,
    /// Screen angle of the segment midpoint.
    pub label_angle_deg: f64,
    /// Label anchor at mid-band radius on the segment midpoint.
    pub label_anchor: Point,
}

/// One house cusp boundary line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuspLine {
    /// House number, 1-12.
    pub house: u8,
    /// Screen angle of the cusp.
    pub angle_deg: f64,
    /// Line endpoint on the zodiac-inner ring.
    pub from: Point,
    /// Line endpoint on the house ring.
    pub to: Point,
}

/// A named chart angle (ASC or MC) placed outside the outer ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleMarker {
    /// Display label ("ASC" or "MC").
    pub label: &'static str,
    /// Screen angle of the marker.
    pub angle_deg: f64,
    /// Label anchor just outside the outer ring.
    pub anchor: Point,
}

/// One plotted planet: marker dot plus outward-offset label anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetMark {
    /// Which body this mark plots.
    pub planet: Planet,
    /// Apparent backward motion, carried through from the sample.
    pub retrograde: bool,
    /// Screen angle of the mark.
    pub angle_deg: f64,
    /// Marker position at the planet plot radius.
    pub position: Point,
    /// Label anchor offset outward from the marker.
    pub label_anchor: Point,
}

/// A fully positioned wheel diagram.
///
/// The fixed-size arrays carry the structural invariants: always 12 zodiac
/// segments and 12 cusp lines; `planets` has one entry per input sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGraph {
    /// Canvas width in screen units.
    pub width: f64,
    /// Canvas height in screen units.
    pub height: f64,
    /// Wheel center.
    pub center: Point,
    /// The three ring radii.
    pub radii: RingRadii,
    /// Radius of a planet marker dot.
    pub marker_radius: f64,
    /// The 12 zodiac segments in ecliptic order (index 0 = Aries).
    pub segments: [ZodiacSegment; 12],
    /// The 12 house cusp lines (index 0 = house 1).
    pub cusp_lines: [CuspLine; 12],
    /// Ascendant marker.
    pub ascendant: AngleMarker,
    /// Midheaven marker.
    pub midheaven: AngleMarker,
    /// One mark per input planet sample, in input order.
    pub planets: Vec<PlanetMark>,
}
