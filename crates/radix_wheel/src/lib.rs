//! Screen projection and wheel layout for radix charts.
//!
//! This crate turns ecliptic longitudes into a fully positioned,
//! renderer-agnostic [`SceneGraph`]: ring radii, zodiac segment boundaries,
//! house cusp lines, ascendant/midheaven markers, and planet marks. All
//! functions are pure; concurrency needs no coordination.

pub mod layout;
pub mod projection;
pub mod scene;

pub use layout::{Canvas, build_scene};
pub use projection::{
    ASCENDANT_ANCHOR_DEG, Point, polar_point, screen_angle, screen_angle_from_anchor,
};
pub use scene::{AngleMarker, CuspLine, PlanetMark, RingRadii, SceneGraph, ZodiacSegment};
