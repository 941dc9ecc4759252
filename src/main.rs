use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_core::RngCore;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gradus::{
    error::{GeneratorError, Result},
    generator::{
        parser::{puzzle_text, solution_text},
        pool::{load_one_piece_records, Pool},
        ranges::{difficulty_ranges, LEVEL_COUNT},
        search::{DifficultySearch, MIN_LEVEL_FOR_ONE_PIECE_PUZZLE},
        solver::ExternalSolver,
        stats::render_stats_table,
    },
};

/// Generate puzzles with varying levels of difficulty.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the solver executable
    #[arg(long, default_value = "./solver")]
    solver: PathBuf,

    /// Directory containing solution fragment files
    #[arg(long, default_value = "solutions")]
    solutions_dir: PathBuf,

    /// Flat file of single-piece boards used by the highest levels
    #[arg(long, default_value = "1p1s_combinations")]
    one_piece_file: PathBuf,

    /// Puzzle level (1-20); prompted for interactively when omitted
    #[arg(long)]
    level: Option<u32>,

    /// Seed for the sampling RNG; omit for a different run every time
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many sampling attempts instead of searching forever
    #[arg(long)]
    max_attempts: Option<u64>,

    /// Print the accepted solver report as JSON and skip the interactive
    /// display
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {}", err.inner());
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(true)` when a puzzle was accepted, `Ok(false)` for the
/// defined no-puzzle outcome (exhausted candidates or spent attempt
/// budget).
fn run(args: Args) -> Result<bool> {
    ExternalSolver::validate(&args.solver)?;
    let mut pool = Pool::load(&args.solutions_dir)?;

    let level = match args.level {
        Some(level) if (1..=LEVEL_COUNT as u32).contains(&level) => level,
        Some(level) => {
            return Err(GeneratorError::LevelOutOfRange(level, LEVEL_COUNT as u32).into())
        }
        None => prompt_level()?,
    };

    let ranges = difficulty_ranges(LEVEL_COUNT);
    let (low, high) = ranges[level as usize - 1].rounded();

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let mut search = DifficultySearch::new(ExternalSolver::new(&args.solver), low, high);
    if let Some(cap) = args.max_attempts {
        search = search.with_max_attempts(cap);
    }

    let outcome = if level >= MIN_LEVEL_FOR_ONE_PIECE_PUZZLE {
        let records = load_one_piece_records(&args.one_piece_file)?;
        search.run_single_pieces(records, rng.as_mut())
    } else {
        search.run_combinations(&mut pool, level, rng.as_mut())
    };
    let (report, stats) = outcome?;

    info!("search finished after {} attempts", stats.attempts);
    println!("{}", render_stats_table(&stats));

    let Some(report) = report else {
        println!("No puzzle found for level {level}.");
        return Ok(false);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(true);
    }

    match puzzle_text(&report.raw) {
        Some(puzzle) => {
            println!("Found puzzle!");
            println!("{puzzle}");
        }
        None => println!("Error: No puzzle found."),
    }

    print!("Press Enter to display solution...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    match solution_text(&report.raw) {
        Some(solution) => {
            println!("Solution:");
            println!("{solution}");
        }
        None => println!("Error: No solution found."),
    }

    Ok(true)
}

/// Asks for a level on stdin until the answer parses and is in range.
fn prompt_level() -> Result<u32> {
    let stdin = io::stdin();
    loop {
        print!("Enter level (1-{LEVEL_COUNT}): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: nothing more will arrive, so give up on the prompt.
            return Err(GeneratorError::LevelOutOfRange(0, LEVEL_COUNT as u32).into());
        }

        match line.trim().parse::<u32>() {
            Ok(level) if (1..=LEVEL_COUNT as u32).contains(&level) => return Ok(level),
            Ok(_) => println!("Please enter a level between 1 and {LEVEL_COUNT}."),
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}
