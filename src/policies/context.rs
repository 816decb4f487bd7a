//! Sweep context passed to scheduling policies.

use crate::models::{Direction, SimulationRequest, Track, DEFAULT_TRACK_BOUND};

/// Lowest addressable track.
pub const LOWEST_TRACK: Track = 0;

/// Head state and disk geometry a policy orders requests against.
///
/// FCFS and SSTF read only `head`; LOOK and C-LOOK add `direction`;
/// SCAN and C-SCAN also use `track_bound` for the boundary touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepContext {
    /// Starting head position.
    pub head: Track,
    /// Initial sweep direction.
    pub direction: Direction,
    /// Maximum addressable track (inclusive).
    pub track_bound: Track,
}

impl SweepContext {
    /// Creates a context at the given head, sweeping higher on the default geometry.
    pub fn at_head(head: Track) -> Self {
        Self {
            head,
            direction: Direction::default(),
            track_bound: DEFAULT_TRACK_BOUND,
        }
    }

    /// Sets the sweep direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the track bound.
    pub fn with_track_bound(mut self, track_bound: Track) -> Self {
        self.track_bound = track_bound;
        self
    }

    /// Boundary the head reaches when sweeping in `direction`.
    pub fn boundary(&self, direction: Direction) -> Track {
        match direction {
            Direction::Lower => LOWEST_TRACK,
            Direction::Higher => self.track_bound,
        }
    }
}

impl From<&SimulationRequest> for SweepContext {
    fn from(request: &SimulationRequest) -> Self {
        Self {
            head: request.head,
            direction: request.direction,
            track_bound: request.track_bound,
        }
    }
}
