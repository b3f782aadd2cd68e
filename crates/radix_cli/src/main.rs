use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use radix_chart::{CuspSet, Houses, Planet, PlanetSample, house_of, place, sign_position};
use radix_svg::{SvgOptions, render};
use radix_wheel::{Canvas, build_scene, screen_angle};
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "radix", about = "Radix wheel geometry CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// House number for a longitude against 12 cusps
    House {
        /// Ecliptic longitude in degrees
        lon: f64,
        /// The 12 house cusp longitudes in degrees, comma separated
        #[arg(long, value_delimiter = ',')]
        cusps: Vec<f64>,
    },
    /// Zodiac sign and degree within sign for a longitude
    Sign {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// Screen angle for a longitude given the ascendant
    ScreenAngle {
        /// Ecliptic longitude in degrees
        lon: f64,
        /// Ascendant longitude in degrees
        #[arg(long)]
        asc: f64,
    },
    /// Per-planet placements from a chart JSON file
    Placements {
        /// Chart JSON file (positions + houses)
        #[arg(long)]
        input: PathBuf,
    },
    /// Render a chart JSON file as an SVG wheel
    Svg {
        /// Chart JSON file (positions + houses)
        #[arg(long)]
        input: PathBuf,
        /// Canvas width in pixels
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        /// Canvas height in pixels
        #[arg(long, default_value_t = 800.0)]
        height: f64,
        /// Use short names instead of Unicode glyphs
        #[arg(long)]
        no_glyphs: bool,
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Chart input mirroring the upstream provider payload.
#[derive(Deserialize)]
struct ChartInput {
    positions: Vec<PositionInput>,
    houses: HousesInput,
}

#[derive(Deserialize)]
struct PositionInput {
    planet: String,
    longitude: f64,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    speed_long: Option<f64>,
    retrograde: bool,
}

#[derive(Deserialize)]
struct HousesInput {
    cusps: Vec<f64>,
    ascendant: f64,
    mc: f64,
}

fn require_chart(path: &Path) -> (Vec<PlanetSample>, Houses) {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Cannot read {}: {e}", path.display());
            process::exit(1);
        }
    };
    let input: ChartInput = match serde_json::from_str(&text) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Invalid chart JSON: {e}");
            process::exit(1);
        }
    };

    let mut samples = Vec::with_capacity(input.positions.len());
    for pos in &input.positions {
        let planet = match Planet::from_name(&pos.planet) {
            Some(p) => p,
            None => {
                eprintln!("Unknown planet: {}", pos.planet);
                process::exit(1);
            }
        };
        samples.push(PlanetSample {
            planet,
            longitude_deg: pos.longitude,
            latitude_deg: pos.latitude,
            speed_deg_per_day: pos.speed_long,
            retrograde: pos.retrograde,
        });
    }

    let houses = match Houses::from_degrees(&input.houses.cusps, input.houses.ascendant, input.houses.mc)
    {
        Ok(h) => h,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    (samples, houses)
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::House { lon, cusps } => {
            let cusps = match CuspSet::from_slice(&cusps) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(1);
                }
            };
            match house_of(lon, &cusps) {
                Ok(h) => println!("House {h}"),
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(1);
                }
            }
        }

        Commands::Sign { lon } => {
            let p = sign_position(lon);
            let dms = p.dms;
            println!(
                "{} (index {}) - {} deg {} min {:.1} sec ({:.4} deg in sign)",
                p.sign.name(),
                p.sign_index,
                dms.degrees,
                dms.minutes,
                dms.seconds,
                p.degree_in_sign
            );
        }

        Commands::ScreenAngle { lon, asc } => {
            println!("{:.4} deg", screen_angle(lon, asc));
        }

        Commands::Placements { input } => {
            let (samples, houses) = require_chart(&input);
            let placements = match place(&samples, &houses) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(1);
                }
            };
            println!("{:<12} {:<12} {:>7} {:>6}", "Planet", "Sign", "Degree", "House");
            for pl in &placements {
                println!(
                    "{:<12} {:<12} {:>6.2}\u{b0} {:>6} {}",
                    pl.planet.display_name(),
                    pl.sign.sign.name(),
                    pl.sign.degree_in_sign,
                    pl.house,
                    if pl.retrograde { "R" } else { "" }
                );
            }
            println!(
                "ASC: {:.2}\u{b0}  MC: {:.2}\u{b0}",
                houses.ascendant_deg, houses.mc_deg
            );
        }

        Commands::Svg {
            input,
            width,
            height,
            no_glyphs,
            out,
        } => {
            let (samples, houses) = require_chart(&input);
            let canvas = match Canvas::new(width, height) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(1);
                }
            };
            let scene = match build_scene(&samples, &houses, canvas) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(1);
                }
            };
            let svg = render(
                &scene,
                &SvgOptions {
                    use_glyphs: !no_glyphs,
                },
            );
            match out {
                Some(path) => {
                    if let Err(e) = std::fs::write(&path, svg) {
                        eprintln!("Cannot write {}: {e}", path.display());
                        process::exit(1);
                    }
                }
                None => println!("{svg}"),
            }
        }
    }
}
