use std::backtrace::Backtrace;
use std::path::PathBuf;
use std::process::ExitStatus;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The faults a calibration run can hit.
///
/// Configuration faults are detected before (or, for [`PoolExhausted`],
/// during) the search and abort the run without retry. Output faults signal
/// a contract violation by the external solver, not an unlucky sample, and
/// are likewise never retried. "Zero solutions found" is a normal search
/// outcome, not an error.
///
/// [`PoolExhausted`]: GeneratorError::PoolExhausted
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("solver executable '{0}' not found")]
    SolverNotFound(PathBuf),

    #[error("directory '{0}' does not exist or is not a directory")]
    InvalidSolutionsDir(PathBuf),

    #[error("one-piece candidate file '{0}' not found")]
    CandidateFileNotFound(PathBuf),

    #[error("level {0} is out of range (expected 1-{1})")]
    LevelOutOfRange(u32, u32),

    #[error("no piece sequence is long enough even at the minimum selection size")]
    PoolExhausted,

    #[error("solver exited with {status}: {stderr}")]
    SolverFailed { status: ExitStatus, stderr: String },

    #[error("unexpected solver output:\n{stdout}\nsolver error output:\n{stderr}")]
    UnexpectedOutput { stdout: String, stderr: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{inner}")]
    Inner {
        inner: Box<GeneratorError>,
        backtrace: Box<Backtrace>,
    },
}

impl Error {
    /// The underlying fault, without the captured backtrace.
    pub fn inner(&self) -> &GeneratorError {
        match self {
            Error::Inner { inner, .. } => inner,
        }
    }
}

impl From<GeneratorError> for Error {
    fn from(inner: GeneratorError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        GeneratorError::from(err).into()
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        GeneratorError::from(err).into()
    }
}
