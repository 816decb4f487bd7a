//! Seeded random request workloads.
//!
//! Useful for demonstrations and for comparing policies on something
//! other than the textbook example. The same seed always yields the same
//! workload.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::models::Track;
use crate::policies::LOWEST_TRACK;

/// Generates uniformly distributed track requests.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    rng: SmallRng,
    track_bound: Track,
}

impl WorkloadGenerator {
    /// Creates a generator over `[0, track_bound]` with a fixed seed.
    ///
    /// A negative bound is treated as 0.
    pub fn new(track_bound: Track, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            track_bound: track_bound.max(LOWEST_TRACK),
        }
    }

    /// Draws `count` requests. Duplicates may occur.
    pub fn requests(&mut self, count: usize) -> Vec<Track> {
        (0..count)
            .map(|_| self.rng.random_range(LOWEST_TRACK..=self.track_bound))
            .collect()
    }

    /// Draws one head position.
    pub fn head(&mut self) -> Track {
        self.rng.random_range(LOWEST_TRACK..=self.track_bound)
    }
}
