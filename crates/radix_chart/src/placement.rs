//! Per-planet placement summaries: sign + house for each sample.

use crate::error::ChartError;
use crate::houses::{Houses, house_of};
use crate::planet::{Planet, PlanetSample};
use crate::zodiac::{SignPosition, sign_position};

/// One planet fully placed on a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Which body this placement describes.
    pub planet: Planet,
    /// Zodiac sign and degree within it.
    pub sign: SignPosition,
    /// House number, 1-12.
    pub house: u8,
    /// Apparent backward motion, as supplied in the sample.
    pub retrograde: bool,
}

/// Place every sample into its sign and house.
///
/// Output order matches input order. The first degenerate sample aborts the
/// whole placement; no partial output.
pub fn place(samples: &[PlanetSample], houses: &Houses) -> Result<Vec<Placement>, ChartError> {
    let mut placements = Vec::with_capacity(samples.len());
    for sample in samples {
        let house = house_of(sample.longitude_deg, &houses.cusps)?;
        placements.push(Placement {
            planet: sample.planet,
            sign: sign_position(sample.longitude_deg),
            house,
            retrograde: sample.retrograde,
        });
    }
    Ok(placements)
}
