//! Derives the per-level difficulty windows from a monotonic recurrence.

/// Number of levels the generator supports.
pub const LEVEL_COUNT: usize = 20;

/// The move-count window a puzzle must land in for one level.
///
/// Bounds are kept as reals; rounding to whole move counts happens only at
/// the call site via [`rounded`], so the recurrence never accumulates
/// rounding error across levels.
///
/// [`rounded`]: DifficultyWindow::rounded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyWindow {
    pub low: f64,
    pub high: f64,
}

impl DifficultyWindow {
    /// Integer bounds for the search loop.
    pub fn rounded(&self) -> (u32, u32) {
        (self.low.round() as u32, self.high.round() as u32)
    }
}

/// Produces one window per level, 1-indexed by position.
///
/// Level 1 spans from a fixed base of 7.0 moves. Every subsequent level's
/// low bound is the previous level's high bound, and each high bound grows
/// by `low / 2.2` on top of the running high. Both bounds strictly increase
/// with level, so the windows form a monotonic difficulty ramp.
pub fn difficulty_ranges(levels: usize) -> Vec<DifficultyWindow> {
    const BASE_LOW: f64 = 7.0;
    const BASE_HIGH: f64 = 20.0;

    let mut ranges = Vec::with_capacity(levels);
    let mut base_high = BASE_HIGH;

    for i in 0..levels {
        let low = if i == 0 { BASE_LOW } else { base_high };
        let high = base_high + low / 2.2;
        ranges.push(DifficultyWindow { low, high });
        base_high = high;
    }

    ranges
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn first_window_matches_the_base_values() {
        let ranges = difficulty_ranges(LEVEL_COUNT);
        assert_eq!(ranges.len(), LEVEL_COUNT);
        assert_eq!(ranges[0].low, 7.0);
        assert_eq!(ranges[0].high, 20.0 + 7.0 / 2.2);
    }

    #[test]
    fn each_low_is_the_previous_high() {
        let ranges = difficulty_ranges(LEVEL_COUNT);
        for pair in ranges.windows(2) {
            assert_eq!(pair[1].low, pair[0].high);
        }
    }

    #[test]
    fn bounds_strictly_increase_with_level() {
        let ranges = difficulty_ranges(LEVEL_COUNT);
        for pair in ranges.windows(2) {
            assert!(pair[1].low > pair[0].low);
            assert!(pair[1].high > pair[0].high);
        }
    }

    #[test]
    fn rounding_happens_only_at_the_boundary() {
        let window = DifficultyWindow {
            low: 7.4,
            high: 20.6,
        };
        assert_eq!(window.rounded(), (7, 21));
    }

    proptest! {
        #[test]
        fn windows_chain_for_any_level_count(levels in 1usize..64) {
            let ranges = difficulty_ranges(levels);
            prop_assert_eq!(ranges.len(), levels);
            for window in &ranges {
                prop_assert!(window.low < window.high);
            }
            for pair in ranges.windows(2) {
                prop_assert_eq!(pair[1].low, pair[0].high);
                prop_assert!(pair[1].high > pair[0].high);
            }
        }
    }
}
