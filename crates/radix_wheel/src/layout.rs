//! Wheel layout: compose projection and classification into a scene graph.

use radix_chart::{ALL_SIGNS, ChartError, Houses, PlanetSample};

use crate::projection::{Point, polar_point, screen_angle};
use crate::scene::{AngleMarker, CuspLine, PlanetMark, RingRadii, SceneGraph, ZodiacSegment};

/// Outer zodiac ring radius as a fraction of the canvas base (min dimension).
const OUTER_RADIUS_FRAC: f64 = 0.42;
/// Zodiac band thickness: the classic 30 px at an 800 px canvas.
const ZODIAC_BAND_FRAC: f64 = 30.0 / 800.0;
/// House band thickness: 25 px at an 800 px canvas.
const HOUSE_BAND_FRAC: f64 = 25.0 / 800.0;
/// ASC/MC labels sit this far outside the outer ring (18 px at 800 px).
const ANGLE_LABEL_OFFSET_FRAC: f64 = 18.0 / 800.0;
/// Planet labels sit this far outside the plot radius (14 px at 800 px).
const PLANET_LABEL_OFFSET_FRAC: f64 = 14.0 / 800.0;
/// Planet marker dot radius (3 px at 800 px).
const MARKER_RADIUS_FRAC: f64 = 3.0 / 800.0;

/// Target canvas for a wheel layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    width: f64,
    height: f64,
}

impl Canvas {
    /// A canvas of the given size. Dimensions must be finite and positive.
    pub fn new(width: f64, height: f64) -> Result<Self, ChartError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(ChartError::DegenerateInput("canvas size must be finite"));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::DegenerateInput("canvas size must be positive"));
        }
        Ok(Self { width, height })
    }

    /// Canvas width in screen units.
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height in screen units.
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// The base scale every radius derives from: min(width, height).
    pub fn base(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Wheel center.
    pub const fn center(&self) -> Point {
        Point {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }
}

/// Build the full wheel scene graph for a set of planet samples.
///
/// Pure function of its inputs: every call produces a fresh scene, and the
/// same inputs always produce the same scene. The returned graph always
/// holds 12 zodiac segments, 12 cusp lines, and one planet mark per sample.
pub fn build_scene(
    samples: &[PlanetSample],
    houses: &Houses,
    canvas: Canvas,
) -> Result<SceneGraph, ChartError> {
    for sample in samples {
        if !sample.longitude_deg.is_finite() {
            return Err(ChartError::DegenerateInput("planet longitude must be finite"));
        }
    }
    if !houses.ascendant_deg.is_finite() {
        return Err(ChartError::DegenerateInput("ascendant must be finite"));
    }
    if !houses.mc_deg.is_finite() {
        return Err(ChartError::DegenerateInput("midheaven must be finite"));
    }

    let base = canvas.base();
    let center = canvas.center();
    let outer = base * OUTER_RADIUS_FRAC;
    let inner = outer - base * ZODIAC_BAND_FRAC;
    let house = inner - base * HOUSE_BAND_FRAC;
    let radii = RingRadii { outer, inner, house };
    let plot_radius = (inner + house) / 2.0;
    let asc = houses.ascendant_deg;

    let segments: [ZodiacSegment; 12] = std::array::from_fn(|k| {
        let boundary_angle = screen_angle((k as f64) * 30.0, asc);
        let label_angle = screen_angle((k as f64) * 30.0 + 15.0, asc);
        ZodiacSegment {
            sign: ALL_SIGNS[k],
            boundary_angle_deg: boundary_angle,
            boundary_outer: polar_point(center, outer, boundary_angle),
            boundary_inner: polar_point(center, inner, boundary_angle),
            label_angle_deg: label_angle,
            label_anchor: polar_point(center, (outer + inner) / 2.0, label_angle),
        }
    });

    let cusps = houses.cusps.degrees();
    let cusp_lines: [CuspLine; 12] = std::array::from_fn(|i| {
        let angle = screen_angle(cusps[i], asc);
        CuspLine {
            house: (i as u8) + 1,
            angle_deg: angle,
            from: polar_point(center, inner, angle),
            to: polar_point(center, house, angle),
        }
    });

    let marker_radius_px = outer + base * ANGLE_LABEL_OFFSET_FRAC;
    let ascendant = angle_marker("ASC", asc, asc, center, marker_radius_px);
    let midheaven = angle_marker("MC", houses.mc_deg, asc, center, marker_radius_px);

    let planets = samples
        .iter()
        .map(|sample| {
            let angle = screen_angle(sample.longitude_deg, asc);
            PlanetMark {
                planet: sample.planet,
                retrograde: sample.retrograde,
                angle_deg: angle,
                position: polar_point(center, plot_radius, angle),
                label_anchor: polar_point(
                    center,
                    plot_radius + base * PLANET_LABEL_OFFSET_FRAC,
                    angle,
                ),
            }
        })
        .collect();

    Ok(SceneGraph {
        width: canvas.width(),
        height: canvas.height(),
        center,
        radii,
        marker_radius: base * MARKER_RADIUS_FRAC,
        segments,
        cusp_lines,
        ascendant,
        midheaven,
        planets,
    })
}

fn angle_marker(
    label: &'static str,
    longitude_deg: f64,
    asc_deg: f64,
    center: Point,
    radius: f64,
) -> AngleMarker {
    let angle = screen_angle(longitude_deg, asc_deg);
    AngleMarker {
        label,
        angle_deg: angle,
        anchor: polar_point(center, radius, angle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radix_chart::Planet;

    fn even_houses() -> Houses {
        let deg: Vec<f64> = (0..12).map(|i| (i as f64) * 30.0).collect();
        Houses::from_degrees(&deg, 0.0, 90.0).expect("valid houses")
    }

    #[test]
    fn canvas_rejects_nan() {
        assert!(matches!(
            Canvas::new(f64::NAN, 800.0),
            Err(ChartError::DegenerateInput(_))
        ));
        assert!(matches!(
            Canvas::new(800.0, f64::INFINITY),
            Err(ChartError::DegenerateInput(_))
        ));
    }

    #[test]
    fn canvas_rejects_non_positive() {
        assert!(Canvas::new(0.0, 800.0).is_err());
        assert!(Canvas::new(800.0, -1.0).is_err());
    }

    #[test]
    fn canvas_base_is_min_dimension() {
        let c = Canvas::new(800.0, 600.0).expect("valid canvas");
        assert!((c.base() - 600.0).abs() < 1e-12);
        assert!((c.center().x - 400.0).abs() < 1e-12);
        assert!((c.center().y - 300.0).abs() < 1e-12);
    }

    #[test]
    fn ring_radii_ordering() {
        let canvas = Canvas::new(800.0, 800.0).expect("valid canvas");
        let scene = build_scene(&[], &even_houses(), canvas).expect("scene");
        assert!(scene.radii.outer > scene.radii.inner);
        assert!(scene.radii.inner > scene.radii.house);
        assert!(scene.radii.house > 0.0);
    }

    #[test]
    fn ring_radii_classic_800() {
        // At the classic 800 px canvas the bands are exactly 30 and 25 px.
        let canvas = Canvas::new(800.0, 800.0).expect("valid canvas");
        let scene = build_scene(&[], &even_houses(), canvas).expect("scene");
        assert!((scene.radii.outer - 336.0).abs() < 1e-9);
        assert!((scene.radii.outer - scene.radii.inner - 30.0).abs() < 1e-9);
        assert!((scene.radii.inner - scene.radii.house - 25.0).abs() < 1e-9);
    }

    #[test]
    fn scene_counts() {
        let samples = [
            PlanetSample::new(Planet::Sun, 5.0, false),
            PlanetSample::new(Planet::Moon, 200.0, false),
        ];
        let canvas = Canvas::new(640.0, 480.0).expect("valid canvas");
        let scene = build_scene(&samples, &even_houses(), canvas).expect("scene");
        assert_eq!(scene.segments.len(), 12);
        assert_eq!(scene.cusp_lines.len(), 12);
        assert_eq!(scene.planets.len(), samples.len());
    }

    #[test]
    fn ascendant_marker_on_left() {
        let canvas = Canvas::new(800.0, 800.0).expect("valid canvas");
        let scene = build_scene(&[], &even_houses(), canvas).expect("scene");
        assert!((scene.ascendant.angle_deg - 180.0).abs() < 1e-10);
        assert!(
            scene.ascendant.anchor.x < scene.center.x,
            "ASC label must sit left of center"
        );
    }

    #[test]
    fn midheaven_marker_on_top() {
        let canvas = Canvas::new(800.0, 800.0).expect("valid canvas");
        let scene = build_scene(&[], &even_houses(), canvas).expect("scene");
        assert!((scene.midheaven.angle_deg - 90.0).abs() < 1e-10);
        assert!(
            scene.midheaven.anchor.y < scene.center.y,
            "MC label must sit above center"
        );
    }

    #[test]
    fn cusp_lines_span_inner_to_house_ring() {
        let canvas = Canvas::new(800.0, 800.0).expect("valid canvas");
        let scene = build_scene(&[], &even_houses(), canvas).expect("scene");
        let c = scene.center;
        for line in &scene.cusp_lines {
            let from_r = ((line.from.x - c.x).powi(2) + (line.from.y - c.y).powi(2)).sqrt();
            let to_r = ((line.to.x - c.x).powi(2) + (line.to.y - c.y).powi(2)).sqrt();
            assert!((from_r - scene.radii.inner).abs() < 1e-9);
            assert!((to_r - scene.radii.house).abs() < 1e-9);
        }
    }

    #[test]
    fn planet_marks_at_plot_radius() {
        let samples = [PlanetSample::new(Planet::Venus, 77.7, false)];
        let canvas = Canvas::new(800.0, 800.0).expect("valid canvas");
        let scene = build_scene(&samples, &even_houses(), canvas).expect("scene");
        let c = scene.center;
        let mark = &scene.planets[0];
        let r = ((mark.position.x - c.x).powi(2) + (mark.position.y - c.y).powi(2)).sqrt();
        let expected = (scene.radii.inner + scene.radii.house) / 2.0;
        assert!((r - expected).abs() < 1e-9);
    }

    #[test]
    fn scene_rejects_degenerate_planet() {
        let samples = [PlanetSample::new(Planet::Sun, f64::NAN, false)];
        let canvas = Canvas::new(800.0, 800.0).expect("valid canvas");
        assert!(matches!(
            build_scene(&samples, &even_houses(), canvas),
            Err(ChartError::DegenerateInput(_))
        ));
    }

    #[test]
    fn segment_boundaries_rotate_with_ascendant() {
        let canvas = Canvas::new(800.0, 800.0).expect("valid canvas");
        let deg: Vec<f64> = (0..12).map(|i| 40.0 + (i as f64) * 30.0).collect();
        let houses = Houses::from_degrees(&deg, 40.0, 130.0).expect("valid houses");
        let scene = build_scene(&[], &houses, canvas).expect("scene");
        // Aries starts at ecliptic 0; with asc 40 it lands at screen 220.
        assert!((scene.segments[0].boundary_angle_deg - 220.0).abs() < 1e-10);
        // Segment midpoints sit 15 deg past the boundary on the wheel.
        for seg in &scene.segments {
            let diff = radix_math::arc_forward(seg.label_angle_deg, seg.boundary_angle_deg);
            assert!((diff - 15.0).abs() < 1e-9);
        }
    }
}
