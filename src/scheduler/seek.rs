//! Seek-cost accounting.
//!
//! Turns a head path into per-move costs and a total.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Step cost | `|to - from|` for consecutive positions |
//! | Total seek | Sum of step costs |
//! | Average seek | Total / number of moves |
//! | Longest seek | Largest single step cost |
//! | Reversals | Direction changes between non-zero moves |

use serde::{Deserialize, Serialize};

use crate::models::{SeekStep, Track};

/// Per-step breakdown and total of a head path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekReport {
    /// One entry per move, in order. Length is `path.len() - 1`.
    pub steps: Vec<SeekStep>,
    /// Sum of all step costs.
    pub total: u64,
}

impl SeekReport {
    /// Number of moves.
    pub fn move_count(&self) -> usize {
        self.steps.len()
    }

    /// Mean cost per move; 0.0 for a path with no moves.
    pub fn average_seek(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            self.total as f64 / self.steps.len() as f64
        }
    }

    /// Largest single move.
    pub fn longest_seek(&self) -> u64 {
        self.steps.iter().map(|s| s.cost).max().unwrap_or(0)
    }

    /// Number of times the head changes direction. Zero-length moves are skipped.
    pub fn reversals(&self) -> usize {
        let mut last: Option<bool> = None;
        let mut count = 0;
        for step in self.steps.iter().filter(|s| s.cost > 0) {
            let ascending = step.is_ascending();
            if last.is_some_and(|prev| prev != ascending) {
                count += 1;
            }
            last = Some(ascending);
        }
        count
    }
}

/// Stateless seek-cost calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeekCostCalculator;

impl SeekCostCalculator {
    /// Computes the step breakdown and total for `path`.
    ///
    /// Paths of length 0 or 1 produce no steps and a total of 0. Track
    /// bounds are not checked here. The total saturates at `u64::MAX`;
    /// use [`SeekCostCalculator::try_compute`] to detect that.
    pub fn compute(path: &[Track]) -> SeekReport {
        let steps = Self::steps(path);
        let total = steps
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(s.cost));
        SeekReport { steps, total }
    }

    /// Like [`SeekCostCalculator::compute`], but `None` if the total
    /// does not fit in a `u64`.
    pub fn try_compute(path: &[Track]) -> Option<SeekReport> {
        let steps = Self::steps(path);
        let total = steps
            .iter()
            .try_fold(0u64, |acc, s| acc.checked_add(s.cost))?;
        Some(SeekReport { steps, total })
    }

    // a single step always fits: |i64 - i64| <= u64::MAX
    fn steps(path: &[Track]) -> Vec<SeekStep> {
        path.windows(2)
            .map(|pair| SeekStep::between(pair[0], pair[1]))
            .collect()
    }
}

/// Shorthand for [`SeekCostCalculator::compute`].
pub fn compute_seek(path: &[Track]) -> SeekReport {
    SeekCostCalculator::compute(path)
}
