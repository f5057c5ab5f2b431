//! Competition command - repeated rounds between two strategies
//!
//! Alternates turns, re-asks the active strategy on rejected moves and
//! tallies wins. The player who marks the last stick loses the round.

use anyhow::Result;
use clap::Args;

use nimsticks_core::{Board, MoveStatus, Strategy, StrategyKind};

use crate::console::ConsoleInput;

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct CompetitionArgs {
    /// First player: random, heuristic, smart or human
    pub player1: StrategyKind,

    /// Second player
    pub player2: StrategyKind,

    /// Number of rounds to play
    pub rounds: u32,

    /// Seed for reproducible random players
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Player seat in a round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Seat {
    One,
    Two,
}

impl Seat {
    fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    fn number(self) -> u8 {
        match self {
            Seat::One => 1,
            Seat::Two => 2,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Result of a single round
#[derive(Clone, Copy, Debug)]
struct RoundRecord {
    round_number: u32,
    winner: Seat,
    moves: u32,
}

/// Aggregated competition results
#[derive(Clone, Debug)]
struct CompetitionResults {
    rounds: Vec<RoundRecord>,
    player1_wins: u32,
    player2_wins: u32,
}

// ============================================================================
// ORCHESTRATION
// ============================================================================

/// Run the competition command
pub fn run(args: CompetitionArgs) -> Result<()> {
    let mut player1 = build_strategy(args.player1, args.seed);
    // Offset the second seat's seed so two random players don't mirror.
    let mut player2 = build_strategy(args.player2, args.seed.map(|s| s.wrapping_add(1)));

    // Turn prompts and move echoes only matter with a human at the table.
    let chatty = args.player1 == StrategyKind::Human || args.player2 == StrategyKind::Human;

    println!(
        "Starting a Nim competition of {} rounds between a {} player and a {} player.",
        args.rounds, args.player1, args.player2
    );

    let results = play_competition(&mut player1, &mut player2, args.rounds, chatty);

    report_results(&results, &args);

    Ok(())
}

// ============================================================================
// ROUND LOOP
// ============================================================================

/// Play all rounds and tally the wins
fn play_competition(
    player1: &mut Strategy,
    player2: &mut Strategy,
    rounds: u32,
    chatty: bool,
) -> CompetitionResults {
    let mut records = Vec::with_capacity(rounds as usize);

    for round_number in 1..=rounds {
        let (winner, moves) = play_round(player1, player2, chatty);
        tracing::debug!("round {}: player {} won after {} moves", round_number, winner, moves);
        records.push(RoundRecord {
            round_number,
            winner,
            moves,
        });
    }

    compute_results(records)
}

/// Play a single round on a fresh board; returns the winner and move count
fn play_round(player1: &mut Strategy, player2: &mut Strategy, chatty: bool) -> (Seat, u32) {
    let mut board = Board::new();
    let mut active = Seat::One;
    let mut moves = 0;

    if chatty {
        println!("Welcome to the sticks game!");
    }

    while board.unmarked_count() > 0 {
        let strategy = match active {
            Seat::One => &mut *player1,
            Seat::Two => &mut *player2,
        };
        take_turn(&mut board, strategy, active, chatty);
        moves += 1;
        active = active.other();
    }

    // The seat that marked the last stick loses, so the winner is whoever
    // is due to move on the empty board.
    let winner = active;
    if chatty {
        println!("Player {} won!", winner);
    }
    (winner, moves)
}

/// One turn: ask the strategy until the board accepts a move
fn take_turn(board: &mut Board, strategy: &mut Strategy, seat: Seat, chatty: bool) {
    if chatty {
        println!("Player {}, it is now your turn!", seat);
    }

    let mut mv = strategy.produce(board);
    while board.apply_move(&mv) == MoveStatus::Rejected {
        if chatty {
            println!("Invalid move. Enter another:");
        }
        mv = strategy.produce(board);
    }

    if chatty {
        println!("Player {} made the move: {}", seat, mv);
    }
}

fn compute_results(records: Vec<RoundRecord>) -> CompetitionResults {
    let player1_wins = records.iter().filter(|r| r.winner == Seat::One).count() as u32;
    let player2_wins = records.iter().filter(|r| r.winner == Seat::Two).count() as u32;
    CompetitionResults {
        rounds: records,
        player1_wins,
        player2_wins,
    }
}

// ============================================================================
// REPORTING
// ============================================================================

fn report_results(results: &CompetitionResults, args: &CompetitionArgs) {
    if args.json {
        print_json_results(results, args);
    } else {
        println!(
            "The results are {}:{}",
            results.player1_wins, results.player2_wins
        );
    }
}

fn print_json_results(results: &CompetitionResults, args: &CompetitionArgs) {
    #[derive(serde::Serialize)]
    struct JsonRound {
        round: u32,
        winner: u8,
        moves: u32,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        player1: String,
        player2: String,
        rounds_played: u32,
        player1_wins: u32,
        player2_wins: u32,
        rounds: Vec<JsonRound>,
    }

    let output = JsonOutput {
        player1: args.player1.to_string(),
        player2: args.player2.to_string(),
        rounds_played: results.rounds.len() as u32,
        player1_wins: results.player1_wins,
        player2_wins: results.player2_wins,
        rounds: results
            .rounds
            .iter()
            .map(|r| JsonRound {
                round: r.round_number,
                winner: r.winner.number(),
                moves: r.moves,
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

// ============================================================================
// STRATEGY CONSTRUCTION
// ============================================================================

/// Build a strategy for one seat; the human variant reads the console
fn build_strategy(kind: StrategyKind, seed: Option<u64>) -> Strategy {
    match kind {
        StrategyKind::Random => match seed {
            Some(seed) => Strategy::random_seeded(seed),
            None => Strategy::random(),
        },
        StrategyKind::Heuristic => Strategy::heuristic(),
        StrategyKind::Smart => Strategy::smart(),
        StrategyKind::Human => Strategy::human(Box::new(ConsoleInput::new())),
    }
}

// ============================================================================
// TESTS
// ============================================================================
