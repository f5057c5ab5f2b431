//! NIMSTICKS CLI - stick-marking Nim competitions
//!
//! Pits two strategies against each other for a number of rounds and
//! reports the final score. Player types: random, heuristic, smart,
//! human (the legacy integer tags 1-4 are accepted too).

use clap::Parser;

mod competition;
mod console;

#[derive(Parser)]
#[command(name = "nimsticks")]
#[command(about = "Stick-marking Nim competition runner")]
struct Cli {
    #[command(flatten)]
    args: competition::CompetitionArgs,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    competition::run(cli.args)
}
