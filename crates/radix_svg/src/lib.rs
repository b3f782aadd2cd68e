//! SVG text writer for wheel scene graphs.
//!
//! Emits a self-contained SVG document from a [`SceneGraph`]. The writer is
//! pure string assembly: no I/O, no external renderer. Geometry is consumed
//! as-is; every angle in the scene is already a screen angle, so this module
//! knows nothing about astrological conventions.

use radix_wheel::SceneGraph;

/// Inline stylesheet for the wheel document.
const STYLE: &str = concat!(
    "text{font-family: system-ui, \"Noto Sans\", \"Segoe UI\", Arial, sans-serif; ",
    "font-size:12px; dominant-baseline:middle; text-anchor:middle;}",
    ".small{font-size:10px} .label{font-size:14px;font-weight:600}",
    ".tick{stroke:#999;stroke-width:1} .ring{stroke:#000;stroke-width:2;fill:none}",
    ".house{stroke:#555;stroke-width:1.2} .planet{stroke:#111;fill:#111}"
);

/// Rendering options for the SVG writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgOptions {
    /// Use Unicode glyphs for signs and planets; fall back to short names
    /// when false.
    pub use_glyphs: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { use_glyphs: true }
    }
}

/// Render a scene graph as an SVG document.
pub fn render(scene: &SceneGraph, options: &SvgOptions) -> String {
    let mut svg: Vec<String> = vec![
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" \
             viewBox=\"0 0 {:.0} {:.0}\">",
            scene.width, scene.height, scene.width, scene.height
        ),
        "<defs>".to_string(),
        format!("<style><![CDATA[{STYLE}]]></style>"),
        "</defs>".to_string(),
    ];

    let c = scene.center;
    for r in [scene.radii.outer, scene.radii.inner, scene.radii.house] {
        svg.push(format!(
            "<circle class=\"ring\" cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\"/>",
            c.x, c.y, r
        ));
    }

    for seg in &scene.segments {
        let label = if options.use_glyphs {
            seg.sign.glyph().to_string()
        } else {
            seg.sign.abbreviation().to_string()
        };
        svg.push(format!(
            "<text class=\"label\" x=\"{:.1}\" y=\"{:.1}\">{label}</text>",
            seg.label_anchor.x, seg.label_anchor.y
        ));
        svg.push(format!(
            "<line class=\"tick\" x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\"/>",
            seg.boundary_outer.x, seg.boundary_outer.y, seg.boundary_inner.x, seg.boundary_inner.y
        ));
    }

    for line in &scene.cusp_lines {
        svg.push(format!(
            "<line class=\"house\" x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\"/>",
            line.from.x, line.from.y, line.to.x, line.to.y
        ));
    }

    for marker in [&scene.ascendant, &scene.midheaven] {
        svg.push(format!(
            "<text class=\"label\" x=\"{:.1}\" y=\"{:.1}\">{}</text>",
            marker.anchor.x, marker.anchor.y, marker.label
        ));
    }

    for mark in &scene.planets {
        let label = if options.use_glyphs {
            mark.planet.glyph().to_string()
        } else {
            mark.planet.abbreviation().to_string()
        };
        svg.push(format!(
            "<circle class=\"planet\" cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\"/>",
            mark.position.x, mark.position.y, scene.marker_radius
        ));
        svg.push(format!(
            "<text class=\"small\" x=\"{:.1}\" y=\"{:.1}\">{label}</text>",
            mark.label_anchor.x, mark.label_anchor.y
        ));
    }

    svg.push("</svg>".to_string());
    svg.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use radix_chart::{Houses, Planet, PlanetSample};
    use radix_wheel::{Canvas, build_scene};

    fn test_scene(samples: &[PlanetSample]) -> SceneGraph {
        let deg: Vec<f64> = (0..12).map(|i| 350.0 + (i as f64) * 30.0).collect();
        let houses = Houses::from_degrees(&deg, 350.0, 80.0).expect("valid houses");
        let canvas = Canvas::new(800.0, 800.0).expect("valid canvas");
        build_scene(samples, &houses, canvas).expect("scene")
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn document_shape() {
        let svg = render(&test_scene(&[]), &SvgOptions::default());
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("viewBox=\"0 0 800 800\""));
        assert!(svg.contains("<style><![CDATA["));
    }

    #[test]
    fn three_rings() {
        let svg = render(&test_scene(&[]), &SvgOptions::default());
        assert_eq!(count(&svg, "class=\"ring\""), 3);
    }

    #[test]
    fn twelve_ticks_and_twelve_house_lines() {
        let svg = render(&test_scene(&[]), &SvgOptions::default());
        assert_eq!(count(&svg, "class=\"tick\""), 12);
        assert_eq!(count(&svg, "class=\"house\""), 12);
    }

    #[test]
    fn one_dot_and_label_per_planet() {
        let samples = [
            PlanetSample::new(Planet::Sun, 5.0, false),
            PlanetSample::new(Planet::Moon, 200.0, false),
            PlanetSample::new(Planet::Mars, 90.0, true),
        ];
        let svg = render(&test_scene(&samples), &SvgOptions::default());
        assert_eq!(count(&svg, "class=\"planet\""), 3);
        assert_eq!(count(&svg, "class=\"small\""), 3);
    }

    #[test]
    fn asc_and_mc_labels_present() {
        let svg = render(&test_scene(&[]), &SvgOptions::default());
        assert!(svg.contains(">ASC</text>"));
        assert!(svg.contains(">MC</text>"));
    }

    #[test]
    fn glyph_switch() {
        let samples = [PlanetSample::new(Planet::Sun, 5.0, false)];
        let scene = test_scene(&samples);

        let with_glyphs = render(&scene, &SvgOptions { use_glyphs: true });
        assert!(with_glyphs.contains('\u{2609}'), "sun glyph expected");
        assert!(with_glyphs.contains('\u{2648}'), "Aries glyph expected");

        let without = render(&scene, &SvgOptions { use_glyphs: false });
        assert!(without.contains(">Su</text>"));
        assert!(without.contains(">Ari</text>"));
        assert!(!without.contains('\u{2609}'));
    }

    #[test]
    fn coordinates_are_one_decimal() {
        let svg = render(&test_scene(&[]), &SvgOptions::default());
        // Every ring circle carries one-decimal coordinates.
        assert!(svg.contains("cx=\"400.0\" cy=\"400.0\""));
    }
}
