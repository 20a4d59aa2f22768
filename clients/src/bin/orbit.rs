//! `orbit` — Periodic orbits of the circle map x ↦ σx (mod 1).
//!
//! **Subcommands:**
//! - `analyze` — the orbit of one point, given as digits or as a fraction
//! - `set` — the aggregate rotational test over several points
//! - `orbits` — every orbit of a rotation type
//! - `sets` — every orbit set of a rotation type
//!
//! **Usage:**
//! ```text
//! orbit analyze 0012 --sigma 3
//! orbit analyze --fraction 1/7 --sigma 2
//! orbit set 01 02 --sigma 3
//! orbit orbits --sigma 4 --rotation 2/5
//! orbit sets --sigma 4 --rotation 1/3 --strategy wiggle --json
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rotation_orbits::api::{build_orbit, build_orbit_from_fraction, build_orbit_set};
use rotation_orbits::{
    generate_orbit_sets_with, generate_orbits_by_attributes, maximal_orbit_sets,
    EnumerationStrategy, Orbit, OrbitSet, OrbitSetSummary, OrbitSummary, RotationNumber,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Analyze periodic orbits of x ↦ σx (mod 1).
#[derive(Parser)]
#[command(name = "orbit", about = "Rotational analysis of periodic orbits of x -> sigma*x mod 1")]
struct Args {
    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the orbit of one point.
    Analyze {
        /// Base-σ digits (0-9, a-z).
        #[arg(required_unless_present = "fraction", conflicts_with = "fraction")]
        point: Option<String>,

        /// The point as a fraction `n/d` instead of digits.
        #[arg(long)]
        fraction: Option<String>,

        /// Alphabet size (default: smallest that fits the digits).
        #[arg(long)]
        sigma: Option<u32>,
    },

    /// Test the union of several orbits.
    Set {
        /// Base-σ digits of one point per orbit.
        #[arg(required = true)]
        points: Vec<String>,

        /// Alphabet size (default: smallest that fits every point).
        #[arg(long)]
        sigma: Option<u32>,
    },

    /// Generate every orbit of a rotation type.
    Orbits {
        /// Alphabet size.
        #[arg(long)]
        sigma: u32,

        /// Rotation number `p/q`.
        #[arg(long)]
        rotation: RotationNumber,
    },

    /// Enumerate every orbit set of a rotation type.
    Sets {
        /// Alphabet size.
        #[arg(long)]
        sigma: u32,

        /// Rotation number `p/q`.
        #[arg(long)]
        rotation: RotationNumber,

        /// Enumeration algorithm (`preimage` or `wiggle`).
        #[arg(long, default_value_t = EnumerationStrategy::default())]
        strategy: EnumerationStrategy,

        /// Only the maximal sets, streamed.
        #[arg(long)]
        maximal: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Analyze {
            point,
            fraction,
            sigma,
        } => {
            let orbit = match (point, fraction) {
                (Some(digits), _) => build_orbit(&digits, sigma)
                    .with_context(|| format!("Failed to build the orbit of {digits}"))?,
                (None, Some(text)) => {
                    let Some(sigma) = sigma else {
                        bail!("--sigma is required with --fraction");
                    };
                    build_orbit_from_fraction(&text, sigma)
                        .with_context(|| format!("Failed to build the orbit of {text}"))?
                }
                (None, None) => bail!("give a point or --fraction"),
            };
            print_orbits(std::slice::from_ref(&orbit), args.json)?;
        }
        Command::Set { points, sigma } => {
            let set = build_orbit_set(&points, sigma).context("Failed to build the orbit set")?;
            print_sets(std::slice::from_ref(&set), args.json)?;
        }
        Command::Orbits { sigma, rotation } => {
            let orbits = generate_orbits_by_attributes(sigma, rotation)
                .with_context(|| format!("Failed to generate orbits of type {rotation}"))?;
            info!(count = orbits.len(), "generated orbits");
            print_orbits(&orbits, args.json)?;
        }
        Command::Sets {
            sigma,
            rotation,
            strategy,
            maximal,
        } => {
            let sets = if maximal {
                maximal_orbit_sets(sigma, rotation)?.collect::<Result<Vec<_>, _>>()?
            } else {
                generate_orbit_sets_with(sigma, rotation, strategy)?
            };
            info!(count = sets.len(), %strategy, "enumerated orbit sets");
            print_sets(&sets, args.json)?;
        }
    }

    Ok(())
}

fn print_orbits(orbits: &[Orbit], json: bool) -> Result<()> {
    if json {
        let summaries: Vec<OrbitSummary> = orbits.iter().map(OrbitSummary::from).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }
    for orbit in orbits {
        let fractions: Vec<String> = orbit.fractions().iter().map(ToString::to_string).collect();
        println!(
            "{:<12} sigma={} period={} rotational={} rotation={}  [{}]",
            orbit.point().to_string(),
            orbit.sigma(),
            orbit.period(),
            orbit.is_rotational(),
            rotation_text(orbit.rotational_number()),
            fractions.join(", ")
        );
    }
    Ok(())
}

fn print_sets(sets: &[OrbitSet], json: bool) -> Result<()> {
    if json {
        let summaries: Vec<OrbitSetSummary> = sets.iter().map(OrbitSetSummary::from).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }
    let mut cardinality = 0;
    for set in sets {
        if set.cardinality() != cardinality {
            cardinality = set.cardinality();
            println!("# {cardinality} orbit(s)");
        }
        println!(
            "{}  rotational={} rotation={}",
            set,
            set.is_rotational(),
            rotation_text(set.rotational_number())
        );
    }
    Ok(())
}

fn rotation_text(rotation: Option<RotationNumber>) -> String {
    rotation.map_or_else(|| "-".to_owned(), |r| r.to_string())
}
