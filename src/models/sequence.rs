//! Service sequence and seek steps.
//!
//! A service sequence is every position the head physically occupies,
//! in visitation order. It always starts at the head. Boundary touches
//! (track 0, track bound) and head revisits are part of the path and
//! are charged like any other move.

use serde::{Deserialize, Serialize};

use super::Track;

/// Ordered head path produced by a scheduling policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceSequence(Vec<Track>);

impl ServiceSequence {
    /// Wraps a policy's output path.
    pub fn new(positions: Vec<Track>) -> Self {
        Self(positions)
    }

    /// Starting head position. `None` only for an empty path.
    pub fn head(&self) -> Option<Track> {
        self.0.first().copied()
    }

    /// Last position the head reaches.
    pub fn last(&self) -> Option<Track> {
        self.0.last().copied()
    }

    /// Visited positions in order.
    pub fn positions(&self) -> &[Track] {
        &self.0
    }

    /// Number of positions (including the head).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of head moves (`len - 1`, saturating).
    pub fn move_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Whether `track` is visited anywhere along the path.
    pub fn visits(&self, track: Track) -> bool {
        self.0.contains(&track)
    }

    /// Consumes the sequence.
    pub fn into_vec(self) -> Vec<Track> {
        self.0
    }
}

impl From<Vec<Track>> for ServiceSequence {
    fn from(positions: Vec<Track>) -> Self {
        Self(positions)
    }
}

/// One head move between consecutive positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekStep {
    /// Position before the move.
    pub from: Track,
    /// Position after the move.
    pub to: Track,
    /// Distance travelled, `|to - from|`.
    pub cost: u64,
}

impl SeekStep {
    /// Creates a step and computes its cost.
    pub fn between(from: Track, to: Track) -> Self {
        Self {
            from,
            to,
            cost: from.abs_diff(to),
        }
    }

    /// Whether the move goes toward higher tracks.
    #[inline]
    pub fn is_ascending(&self) -> bool {
        self.to > self.from
    }
}
