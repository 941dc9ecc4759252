//! Enumerates candidate boards by combining pieces within a sequence.

use itertools::Itertools;

/// One fragment file's pieces, in file order. The order is derived from the
/// solution the fragments came from, which is why combinations are only
/// ever drawn within a single sequence.
pub type PieceSequence = Vec<String>;

/// A candidate board: a fixed count of pieces chosen from one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pieces: Vec<String>,
}

impl Combination {
    /// The newline-joined text handed to the solver.
    pub fn board(&self) -> String {
        self.pieces.join("\n")
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

/// Every combination of `selection_size.round()` pieces drawn from each
/// sequence long enough to provide that many. Shorter sequences contribute
/// nothing; when no sequence qualifies the result is empty and the caller
/// must handle that case.
///
/// The enumeration is order-dependent: callers shuffle the sequence order
/// first and consume the first combination, which makes the chosen
/// candidate effectively uniform-random per call. The full enumeration is
/// recomputed per draw, which is acceptable for the small pools this tool
/// calibrates against.
pub fn board_combinations(sequences: &[PieceSequence], selection_size: f64) -> Vec<Combination> {
    let count = selection_size.round() as usize;

    let mut selected = Vec::new();
    for sequence in sequences {
        if sequence.len() >= count {
            selected.extend(
                sequence
                    .iter()
                    .cloned()
                    .combinations(count)
                    .map(|pieces| Combination { pieces }),
            );
        }
    }
    selected
}
