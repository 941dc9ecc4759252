//! Turns raw solver text output into structured reports.
//!
//! The solver's stdout is a loose text contract; every pattern the rest of
//! the system depends on is isolated here so a format change in the solver
//! touches exactly one module.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Error, GeneratorError, Result};

static SOLUTION_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Found (\d+) solution").unwrap());
static MOVE_COUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"using (\d+) moves").unwrap());
static SOLUTION_TEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)solution:(.*)").unwrap());
static PUZZLE_TEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)X\n?(.*?)S").unwrap());

/// What one solver invocation reported.
#[derive(Debug, Clone, Serialize)]
pub struct SolverReport {
    /// Number of solutions the solver found before it stopped counting.
    pub solutions: u32,
    /// Move count of the sample solution; present whenever `solutions >= 1`
    /// in well-formed output.
    pub moves: Option<u32>,
    /// The raw stdout, kept for the display step.
    pub raw: String,
}

impl SolverReport {
    /// The move count, which the output contract guarantees whenever at
    /// least one solution exists. Callers must not ask for it when
    /// `solutions == 0`.
    pub fn require_moves(&self) -> Result<u32> {
        self.moves
            .ok_or_else(|| unexpected(&self.raw, "").into())
    }
}

fn unexpected(stdout: &str, stderr: &str) -> GeneratorError {
    GeneratorError::UnexpectedOutput {
        stdout: stdout.to_owned(),
        stderr: stderr.to_owned(),
    }
}

/// Parses the solver's stdout into a [`SolverReport`].
///
/// The solution-count marker is the one part of the contract that must
/// always be present; its absence means the program on the other side did
/// not behave like the solver, and the run cannot continue. A present
/// solution count with a missing move count is the same fault.
pub fn parse_report(stdout: &str, stderr: &str) -> Result<SolverReport> {
    let captures = SOLUTION_COUNT
        .captures(stdout)
        .ok_or_else(|| Error::from(unexpected(stdout, stderr)))?;
    let solutions: u32 = captures[1]
        .parse()
        .map_err(|_| Error::from(unexpected(stdout, stderr)))?;

    let moves = match MOVE_COUNT.captures(stdout) {
        Some(captures) => Some(
            captures[1]
                .parse::<u32>()
                .map_err(|_| Error::from(unexpected(stdout, stderr)))?,
        ),
        None => None,
    };

    if solutions >= 1 && moves.is_none() {
        return Err(unexpected(stdout, stderr).into());
    }

    Ok(SolverReport {
        solutions,
        moves,
        raw: stdout.to_owned(),
    })
}

/// Everything after the literal `solution:` marker, if present.
pub fn solution_text(raw: &str) -> Option<&str> {
    SOLUTION_TEXT
        .captures(raw)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// The board rendering between the first `X` marker and the next `S`
/// marker, if present. Tolerates multi-line content between the markers.
pub fn puzzle_text(raw: &str) -> Option<&str> {
    PUZZLE_TEXT
        .captures(raw)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}
