//! `toroidal-sim`: command-line host for the toroidal simulation core.
//!
//! **Usage:**
//! ```text
//! toroidal-sim cauchy [--n <N>] [--location <X>] [--scale <S>] [--seed <SEED>]
//! toroidal-sim pi --n <N> [--seed <SEED>]
//! toroidal-sim simulate --config <FILE>
//! toroidal-sim simulate --nr <NR> --nc <NC> [--steps <K>] [--labels <L>] [--seed <SEED>]
//! ```
//!
//! Every subcommand prints a single JSON object on stdout and exits non-zero
//! on invalid arguments.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use toroidal_sim_core::{sampling, HostRng, SimulationConfig};

/// Drive the samplers and the universe simulation from the shell.
#[derive(Parser)]
#[command(
    name = "toroidal-sim",
    about = "Random samplers and toroidal universe simulation"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw Cauchy samples
    Cauchy {
        /// Number of draws; omit for a single draw at --location/--scale
        #[arg(long, allow_negative_numbers = true)]
        n: Option<f64>,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        location: f64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        scale: f64,
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
    /// Estimate π by rejection sampling
    Pi {
        #[arg(long, allow_negative_numbers = true)]
        n: f64,
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
    /// Run a universe and print its final grid
    Simulate {
        /// JSON run configuration; overrides the inline flags
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, default_value_t = 10)]
        nr: usize,
        #[arg(long, default_value_t = 10)]
        nc: usize,
        #[arg(long, default_value_t = 1000)]
        steps: u64,
        #[arg(long, default_value_t = 2)]
        labels: u32,
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let output = match args.command {
        Command::Cauchy {
            n,
            location,
            scale,
            seed,
        } => {
            let mut host = HostRng::new(seed);
            let mut scope = host.acquire();
            match n {
                Some(n) => {
                    let n = sampling::count_from_host(n)?;
                    let draws = sampling::sample_cauchy_batch(&mut scope, n)?;
                    json!({ "n": n, "draws": draws })
                }
                None => {
                    let draw = sampling::sample_cauchy(&mut scope, location, scale);
                    json!({ "location": location, "scale": scale, "draw": draw })
                }
            }
        }
        Command::Pi { n, seed } => {
            let n = sampling::count_from_host(n)?;
            let mut host = HostRng::new(seed);
            let estimate = sampling::estimate_pi(&mut host.acquire(), n)?;
            json!({ "n": n, "estimate": estimate })
        }
        Command::Simulate {
            config,
            nr,
            nc,
            steps,
            labels,
            seed,
        } => {
            let config = match config {
                Some(path) => {
                    let text = fs::read_to_string(&path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    SimulationConfig::from_json(&text)
                        .with_context(|| format!("loading {}", path.display()))?
                }
                None => SimulationConfig {
                    rng_seed: seed,
                    nr,
                    nc,
                    cells: None,
                    num_labels: labels,
                    steps,
                },
            };
            let run = config.run()?;
            serde_json::to_value(&run)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
