//! The adaptive search loop that steers sampling toward a target
//! difficulty window.
//!
//! Each iteration samples a candidate board, hands it to the solver, and
//! evaluates the report: out-of-window move counts nudge the selection
//! size for the next draw, zero-solution and non-unique results are
//! retried with the selection size unchanged, and an in-window unique
//! result terminates the search.

use rand::seq::SliceRandom;
use rand_core::RngCore;
use tracing::info;

use crate::{
    error::{GeneratorError, Result},
    generator::{
        parser::SolverReport,
        pool::Pool,
        sampler::board_combinations,
        solver::BoardSolver,
    },
};

/// Starting piece count before the per-level discount is applied.
pub const INIT_PIECE_COUNT: f64 = 9.0;
/// Clamp bounds for the selection size as it drifts during the search.
pub const MIN_PIECES_TO_SELECT: f64 = 2.3;
pub const MAX_PIECES_TO_SELECT: f64 = 11.0;
/// Levels at or above this threshold search the flat one-piece candidate
/// list instead of combining pool pieces.
pub const MIN_LEVEL_FOR_ONE_PIECE_PUZZLE: u32 = 17;

/// How far one difficulty miss nudges the selection size.
const ADJUST_STEP: f64 = 0.1;

/// Starting selection size for a level. Higher levels start from fewer
/// pieces: a sparser board leaves more room to move, which pushes the
/// solution length up.
pub fn initial_piece_count(level: u32) -> f64 {
    INIT_PIECE_COUNT - f64::from(level) / 3.0
}

/// One difficulty-feedback step. A result under the window shrinks the
/// selection size, one over the window grows it, and the result is always
/// clamped to `[MIN_PIECES_TO_SELECT, MAX_PIECES_TO_SELECT]`. In-window
/// move counts leave the size untouched.
pub fn adjust_selection(moves: u32, low: u32, high: u32, mut pieces: f64) -> f64 {
    if moves < low {
        pieces -= ADJUST_STEP;
    } else if moves > high {
        pieces += ADJUST_STEP;
    }
    pieces.clamp(MIN_PIECES_TO_SELECT, MAX_PIECES_TO_SELECT)
}

/// Counters for every verdict the loop can reach, accumulated across one
/// search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Sampling iterations, including draws that produced no candidate.
    pub attempts: u64,
    pub no_solution: u64,
    pub too_easy: u64,
    pub too_hard: u64,
    pub not_unique: u64,
    /// Draws where no sequence was long enough for the selection size.
    pub empty_samples: u64,
}

/// Searches for a board whose solver-measured difficulty lands inside a
/// target move-count window and whose solution is unique.
///
/// The window bounds are whole move counts; rounding the real-valued
/// [`DifficultyWindow`](crate::generator::ranges::DifficultyWindow) is the
/// caller's job. The selection size is loop-local state: it lives for one
/// `run_*` call and never leaks between runs.
pub struct DifficultySearch<S> {
    solver: S,
    low: u32,
    high: u32,
    max_attempts: Option<u64>,
}

impl<S: BoardSolver> DifficultySearch<S> {
    pub fn new(solver: S, low: u32, high: u32) -> Self {
        Self {
            solver,
            low,
            high,
            max_attempts: None,
        }
    }

    /// Caps the number of sampling attempts. Without a cap the combination
    /// search runs until it accepts a board, which the caller opts into.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    fn budget_spent(&self, stats: &SearchStats) -> bool {
        self.max_attempts
            .is_some_and(|cap| stats.attempts >= cap)
    }

    /// The multi-piece variant, used for levels below
    /// [`MIN_LEVEL_FOR_ONE_PIECE_PUZZLE`].
    ///
    /// Returns the accepted report, or `None` when the attempt budget ran
    /// out first, together with the outcome counters.
    pub fn run_combinations(
        &mut self,
        pool: &mut Pool,
        level: u32,
        rng: &mut dyn RngCore,
    ) -> Result<(Option<SolverReport>, SearchStats)> {
        info!(
            "generating puzzle for level {level} with difficulty range {}-{}",
            self.low, self.high
        );
        let mut pieces = initial_piece_count(level);
        let mut stats = SearchStats::default();

        loop {
            if self.budget_spent(&stats) {
                info!("attempt budget spent without an accepted board");
                return Ok((None, stats));
            }
            stats.attempts += 1;

            info!("use {} pieces...", pieces.round());
            pool.shuffle(rng);
            let combinations = board_combinations(pool.sequences(), pieces);
            let Some(combination) = combinations.first() else {
                stats.empty_samples += 1;
                if pieces <= MIN_PIECES_TO_SELECT {
                    // Already at the floor; shrinking further is impossible,
                    // so the pool can never satisfy this search.
                    return Err(GeneratorError::PoolExhausted.into());
                }
                pieces = (pieces - ADJUST_STEP).clamp(MIN_PIECES_TO_SELECT, MAX_PIECES_TO_SELECT);
                continue;
            };

            let report = self.solver.solve(&combination.board())?;
            if report.solutions == 0 {
                info!("no solution found...");
                stats.no_solution += 1;
                continue;
            }

            let moves = report.require_moves()?;
            info!("using {moves} moves...");

            if moves < self.low {
                info!("making puzzle harder...");
                stats.too_easy += 1;
            } else if moves > self.high {
                info!("making puzzle easier...");
                stats.too_hard += 1;
            } else if report.solutions == 1 {
                return Ok((Some(report), stats));
            } else {
                info!("no unique solution, trying again...");
                stats.not_unique += 1;
                continue;
            }

            pieces = adjust_selection(moves, self.low, self.high, pieces);
        }
    }

    /// The one-piece variant, used for the highest levels.
    ///
    /// Walks a pre-shuffled flat candidate list once, accepting the first
    /// in-window unique record. There is no difficulty feedback here: the
    /// candidate pool is fixed, so there is no sampling parameter to
    /// steer. Exhausting the list is an explicit no-puzzle outcome.
    pub fn run_single_pieces(
        &mut self,
        mut records: Vec<String>,
        rng: &mut dyn RngCore,
    ) -> Result<(Option<SolverReport>, SearchStats)> {
        info!(
            "generating a one-piece puzzle with difficulty range {}-{}",
            self.low, self.high
        );
        let mut stats = SearchStats::default();
        records.shuffle(rng);

        for record in &records {
            if self.budget_spent(&stats) {
                info!("attempt budget spent without an accepted board");
                return Ok((None, stats));
            }
            stats.attempts += 1;

            let report = self.solver.solve(record)?;
            if report.solutions == 0 {
                info!("no solution found");
                stats.no_solution += 1;
                continue;
            }

            let moves = report.require_moves()?;
            info!("using {moves} moves");

            if (self.low..=self.high).contains(&moves) && report.solutions == 1 {
                return Ok((Some(report), stats));
            }

            info!("puzzle does not meet criteria, trying again...");
            if moves < self.low {
                stats.too_easy += 1;
            } else if moves > self.high {
                stats.too_hard += 1;
            } else {
                stats.not_unique += 1;
            }
        }

        Ok((None, stats))
    }
}
