//! `orbit-conformance` — Cross-checks the rotation-orbits engine against a
//! brute-force oracle.
//!
//! Runs the complete conformance suite across:
//! - Known orbits and unions
//! - The rotational predicate (single cycles, same-period and mixed-period unions)
//! - Orbit generation
//! - Orbit-set enumeration (both strategies)
//!
//! **Usage:**
//! ```text
//! orbit-conformance [--max-sigma <n>] [--max-period <n>] [--max-union <n>] [--json]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::Result;
use clap::Parser;
use rotation_orbits_conformance::{run_all, Grid};
use tracing_subscriber::EnvFilter;

/// Run the rotation-orbits conformance suite.
#[derive(Parser)]
#[command(
    name = "orbit-conformance",
    about = "Cross-check the orbit engine against a brute-force oracle"
)]
struct Args {
    /// Largest alphabet size checked.
    #[arg(long, default_value_t = Grid::default().max_sigma)]
    max_sigma: u32,

    /// Largest period checked.
    #[arg(long, default_value_t = Grid::default().max_period)]
    max_period: u64,

    /// Largest union checked against the oracle.
    #[arg(long, default_value_t = Grid::default().max_union)]
    max_union: usize,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let grid = Grid {
        max_sigma: args.max_sigma,
        max_period: args.max_period,
        max_union: args.max_union,
    };

    let report = run_all(&grid)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("rotation-orbits Conformance Report");
        println!("==================================");
        println!("Grid: sigma <= {}, period <= {}, union <= {}", grid.max_sigma, grid.max_period, grid.max_union);
        println!();
        for result in &report.results {
            println!("{result}");
        }
        println!();
        println!(
            "Summary: {} passed, {} warnings, {} failed",
            report.results.len() - report.failure_count() - report.warning_count(),
            report.warning_count(),
            report.failure_count()
        );
    }

    if !report.all_passed() {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", report.failure_count());
        process::exit(1);
    }

    if !args.json {
        println!("Conformance PASSED.");
    }
    Ok(())
}
