//! Conquest -- a console territory-conquest simulator.
//!
//! Builds the starting roster, prints it with the player missions, runs the
//! scripted attacks and prints the resulting map. Logs go to stderr and are
//! controlled with `RUST_LOG`.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use conquest::board::{Roster, MISSIONS};
use conquest::engine::{AttemptReport, Simulator, SCRIPTED_ATTACKS};
use conquest::report::{render_json, render_text, RunReport};
use conquest::resolve::{Dice, DiceSource, ScriptedDice};

/// Report format written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Conquest - dice-resolved territory conquest
#[derive(Parser, Debug)]
#[command(name = "conquest")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed for the dice (default: random, reported in the output)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Force die values instead of rolling, e.g. "6,1,2,5"
    #[arg(short, long, conflicts_with = "seed")]
    dice: Option<String>,

    /// Output format: text or json
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("conquest=warn")),
        )
        .init();

    let args = Args::parse();

    let initial = match Roster::initial() {
        Ok(r) => r,
        Err(e) => {
            error!("failed to set up territories: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let (seed, (attempts, final_roster)) = match &args.dice {
        Some(script) => {
            let dice = match ScriptedDice::parse(script) {
                Ok(d) => d,
                Err(e) => {
                    error!("invalid --dice: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            info!(script = %script, "using forced dice");
            (None, run(initial.clone(), dice))
        }
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            info!(seed, "using random dice");
            (Some(seed), run(initial.clone(), Dice::seeded(seed)))
        }
    };

    let report = RunReport {
        seed,
        initial,
        missions: MISSIONS.to_vec(),
        attempts,
        final_roster,
    };

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => match render_json(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("failed to encode report: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

/// Runs the scripted attacks against a fresh simulator.
fn run<D: DiceSource>(roster: Roster, dice: D) -> (Vec<AttemptReport>, Roster) {
    let mut sim = Simulator::new(roster, dice);
    let attempts = sim.run(&SCRIPTED_ATTACKS);
    (attempts, sim.into_roster())
}
