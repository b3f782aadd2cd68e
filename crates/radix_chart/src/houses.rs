//! House cusp sets and the house membership classifier.
//!
//! A chart divides the ecliptic into 12 houses bounded by cusps. The cusps
//! arrive from an external house-system computation; this module only
//! validates them and classifies longitudes against them. Intervals are
//! half-open and lower-inclusive: a planet exactly on a cusp belongs to the
//! house that starts there.

use radix_math::normalize_360;

use crate::error::ChartError;

/// An ordered set of exactly 12 house cusp longitudes.
///
/// Index 0..11 holds the cusps of houses 1..12 in house order (ascending by
/// house number, not necessarily ascending numerically due to wraparound).
/// Entries are normalized to [0, 360) on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuspSet([f64; 12]);

impl CuspSet {
    /// Build a cusp set from a slice of longitudes in degrees.
    ///
    /// Any length other than 12 is a contract violation, never silently
    /// padded or truncated. Non-finite entries are rejected.
    pub fn from_slice(cusps: &[f64]) -> Result<Self, ChartError> {
        if cusps.len() != 12 {
            return Err(ChartError::InvalidCuspSet(cusps.len()));
        }
        let mut deg = [0.0; 12];
        for (i, &c) in cusps.iter().enumerate() {
            if !c.is_finite() {
                return Err(ChartError::DegenerateInput("cusp longitude must be finite"));
            }
            deg[i] = normalize_360(c);
        }
        Ok(Self(deg))
    }

    /// The 12 cusp longitudes in house order, normalized to [0, 360).
    pub const fn degrees(&self) -> &[f64; 12] {
        &self.0
    }
}

/// House cusps plus the chart's reference angles.
///
/// The ascendant equals cusp 1 by convention but is carried separately
/// because callers may supply it independently; it is never back-filled
/// from the cusp set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Houses {
    /// The 12 house cusps.
    pub cusps: CuspSet,
    /// Ecliptic longitude of the ascendant in degrees, [0, 360).
    pub ascendant_deg: f64,
    /// Ecliptic longitude of the midheaven in degrees, [0, 360).
    pub mc_deg: f64,
}

impl Houses {
    /// Build a validated house reference from a cusp set and raw angles.
    pub fn new(cusps: CuspSet, ascendant_deg: f64, mc_deg: f64) -> Result<Self, ChartError> {
        if !ascendant_deg.is_finite() {
            return Err(ChartError::DegenerateInput("ascendant must be finite"));
        }
        if !mc_deg.is_finite() {
            return Err(ChartError::DegenerateInput("midheaven must be finite"));
        }
        Ok(Self {
            cusps,
            ascendant_deg: normalize_360(ascendant_deg),
            mc_deg: normalize_360(mc_deg),
        })
    }

    /// Convenience: validate cusps and angles from raw degrees in one step.
    pub fn from_degrees(cusps: &[f64], ascendant_deg: f64, mc_deg: f64) -> Result<Self, ChartError> {
        Self::new(CuspSet::from_slice(cusps)?, ascendant_deg, mc_deg)
    }
}

/// House number (1..12) containing a longitude.
///
/// All values are rebased relative to cusp 1 so the scan runs on a single
/// unwrapped axis: house `i+1` is the first interval with
/// `start <= p < end` (lower-inclusive), and house 12 catches the final
/// wraparound segment.
pub fn house_of(longitude_deg: f64, cusps: &CuspSet) -> Result<u8, ChartError> {
    if !longitude_deg.is_finite() {
        return Err(ChartError::DegenerateInput("longitude must be finite"));
    }
    let deg = cusps.degrees();
    let base = deg[0];
    let p = normalize_360(longitude_deg - base);
    for i in 0..11 {
        let start = normalize_360(deg[i] - base);
        let mut end = normalize_360(deg[i + 1] - base);
        if end <= start {
            end += 360.0;
        }
        if start <= p && p < end {
            return Ok((i as u8) + 1);
        }
    }
    Ok(12)
}
