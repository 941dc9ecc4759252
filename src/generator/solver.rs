//! The seam between the search loop and the black-box solver binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::{
    error::{GeneratorError, Result},
    generator::parser::{parse_report, SolverReport},
};

/// Evaluates candidate boards.
///
/// The search loop only ever sees structured reports; everything about how
/// a board becomes one (scratch files, child processes, output parsing)
/// stays behind this trait, so tests can drive the loop with scripted
/// results.
pub trait BoardSolver {
    /// Evaluates one board and reports what the solver found.
    fn solve(&mut self, board: &str) -> Result<SolverReport>;
}

impl<T: BoardSolver + ?Sized> BoardSolver for &mut T {
    fn solve(&mut self, board: &str) -> Result<SolverReport> {
        (**self).solve(board)
    }
}

/// Runs the external solver executable on a scratch board file.
///
/// Each invocation writes the board text to the scratch file and runs
/// `solver <file>`, blocking until the child exits. A non-zero exit is
/// fatal: the contract says the solver exits zero both for solved and for
/// proven-unsolvable boards, so anything else is not a search outcome.
pub struct ExternalSolver {
    solver_path: PathBuf,
    input_file: PathBuf,
}

impl ExternalSolver {
    pub fn new(solver_path: impl Into<PathBuf>) -> Self {
        Self {
            solver_path: solver_path.into(),
            input_file: PathBuf::from("board.tmp"),
        }
    }

    /// Overrides the scratch file location (the default is `board.tmp` in
    /// the working directory).
    pub fn with_input_file(mut self, input_file: impl Into<PathBuf>) -> Self {
        self.input_file = input_file.into();
        self
    }

    /// Checks the executable exists before any search starts.
    pub fn validate(path: &Path) -> Result<()> {
        if path.is_file() {
            Ok(())
        } else {
            Err(GeneratorError::SolverNotFound(path.to_path_buf()).into())
        }
    }
}

impl BoardSolver for ExternalSolver {
    fn solve(&mut self, board: &str) -> Result<SolverReport> {
        fs::write(&self.input_file, board)?;

        debug!(
            "running {} {}",
            self.solver_path.display(),
            self.input_file.display()
        );
        let output = Command::new(&self.solver_path)
            .arg(&self.input_file)
            .output()?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(GeneratorError::SolverFailed {
                status: output.status,
                stderr,
            }
            .into());
        }

        parse_report(&stdout, &stderr)
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn validate_rejects_a_missing_executable() {
        let err = ExternalSolver::validate(Path::new("/no/such/solver")).unwrap_err();
        assert!(matches!(err.inner(), GeneratorError::SolverNotFound(_)));
    }

    #[cfg(unix)]
    fn fake_solver(tag: &str, script_body: &str) -> (PathBuf, PathBuf) {
        use std::os::unix::fs::PermissionsExt;

        let dir = env::temp_dir().join(format!("gradus_solver_test_{}_{tag}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let script = dir.join("solver.sh");
        fs::write(&script, format!("#!/bin/sh\n{script_body}\n")).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        (script, dir.join("board.tmp"))
    }

    #[cfg(unix)]
    #[test]
    fn end_to_end_parse_of_a_well_behaved_solver() {
        let (script, input_file) =
            fake_solver("ok", "echo 'Found 1 solutions using 12 moves.'");
        let mut solver = ExternalSolver::new(&script).with_input_file(&input_file);

        let report = solver.solve("p1\np2").unwrap();
        assert_eq!(report.solutions, 1);
        assert_eq!(report.moves, Some(12));

        // The board reached the scratch file verbatim.
        assert_eq!(fs::read_to_string(&input_file).unwrap(), "p1\np2");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_fatal() {
        let (script, input_file) = fake_solver("fail", "echo 'boom' >&2\nexit 3");
        let mut solver = ExternalSolver::new(&script).with_input_file(&input_file);

        let err = solver.solve("p1").unwrap_err();
        match err.inner() {
            GeneratorError::SolverFailed { stderr, .. } => {
                assert!(stderr.contains("boom"));
            }
            other => panic!("expected SolverFailed, got {other:?}"),
        }
    }
}
