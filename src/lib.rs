//! Gradus calibrates puzzle difficulty by steering a black-box solver.
//!
//! Given a pool of pre-solved puzzle fragments and a difficulty level, the
//! crate searches for a combination of pieces that forms a puzzle whose
//! solver-measured move count lands inside the level's target window and
//! whose solution is unique. The solver itself is an external program;
//! gradus only orchestrates the calibration around it.
//!
//! # Core Concepts
//!
//! - **[`difficulty_ranges`]**: derives the per-level move-count windows
//!   from a monotonic recurrence.
//! - **[`BoardSolver`]**: the seam to the black-box solver. The bundled
//!   [`ExternalSolver`] runs the solver binary on a scratch board file;
//!   tests substitute scripted implementations.
//! - **[`DifficultySearch`]**: the adaptive loop. It samples candidate
//!   boards, evaluates the solver's reports, and nudges its selection size
//!   until a board is accepted.
//!
//! # Example: driving the search with an in-process solver
//!
//! ```
//! use gradus::error::Result;
//! use gradus::generator::parser::SolverReport;
//! use gradus::generator::search::DifficultySearch;
//! use gradus::generator::solver::BoardSolver;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // A scripted stand-in for the external solver binary.
//! struct FixedSolver;
//!
//! impl BoardSolver for FixedSolver {
//!     fn solve(&mut self, board: &str) -> Result<SolverReport> {
//!         Ok(SolverReport {
//!             solutions: 1,
//!             moves: Some(12),
//!             raw: format!("Found 1 solutions using 12 moves.\n{board}"),
//!         })
//!     }
//! }
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(0);
//! let mut search = DifficultySearch::new(FixedSolver, 7, 20);
//! let records = vec!["piece-record".to_owned()];
//! let (report, stats) = search.run_single_pieces(records, &mut rng)?;
//!
//! let report = report.expect("the only record is acceptable");
//! assert_eq!(report.moves, Some(12));
//! assert_eq!(stats.attempts, 1);
//! # Ok::<(), gradus::error::Error>(())
//! ```
//!
//! [`difficulty_ranges`]: generator::ranges::difficulty_ranges
//! [`BoardSolver`]: generator::solver::BoardSolver
//! [`ExternalSolver`]: generator::solver::ExternalSolver
//! [`DifficultySearch`]: generator::search::DifficultySearch

pub mod error;
pub mod generator;
