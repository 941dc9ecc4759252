//! Eager loading of the fragment pool and the one-piece candidate list.

use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;
use rand_core::RngCore;
use tracing::debug;

use crate::{
    error::{GeneratorError, Result},
    generator::sampler::PieceSequence,
};

/// The fragment pool: one ordered piece sequence per discovered file.
/// Loaded once at startup; after that only the sequence order changes.
#[derive(Debug, Clone, Default)]
pub struct Pool {
    sequences: Vec<PieceSequence>,
}

impl Pool {
    /// Loads every file in `dir` as one piece sequence, line order
    /// preserved. Files are read in sorted name order so seeded runs see
    /// the same pool.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(GeneratorError::InvalidSolutionsDir(dir.to_path_buf()).into());
        }

        let mut paths: Vec<_> = fs::read_dir(dir)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let mut sequences = Vec::with_capacity(paths.len());
        for path in &paths {
            let content = fs::read_to_string(path)?;
            sequences.push(content.lines().map(str::to_owned).collect());
        }

        debug!("loaded {} piece sequences from {}", sequences.len(), dir.display());
        Ok(Self { sequences })
    }

    /// Builds a pool directly from sequences, bypassing the filesystem.
    pub fn from_sequences(sequences: Vec<PieceSequence>) -> Self {
        Self { sequences }
    }

    pub fn sequences(&self) -> &[PieceSequence] {
        &self.sequences
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Reorders the sequences in place. The sampler's enumeration is
    /// order-dependent, so a shuffle before each draw is what randomizes
    /// the chosen candidate.
    pub fn shuffle(&mut self, rng: &mut dyn RngCore) {
        self.sequences.shuffle(rng);
    }
}

/// Loads the flat one-piece candidate file, one board record per line.
pub fn load_one_piece_records(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(GeneratorError::CandidateFileNotFound(path.to_path_buf()).into());
    }
    let content = fs::read_to_string(path)?;
    let records: Vec<String> = content.lines().map(str::to_owned).collect();
    debug!("loaded {} one-piece candidates from {}", records.len(), path.display());
    Ok(records)
}
