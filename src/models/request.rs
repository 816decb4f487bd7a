//! Simulation request (the full parameter set for one run).

use serde::{Deserialize, Serialize};

use super::{Direction, Track};
use crate::policies::PolicyKind;

/// Default starting head position.
pub const DEFAULT_HEAD: Track = 50;
/// Default maximum addressable track.
pub const DEFAULT_TRACK_BOUND: Track = 199;

/// Everything a simulation run needs, passed by value into the driver.
///
/// Policies never look anything up globally; whatever they use comes
/// from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationRequest {
    /// Pending track requests in arrival order. Duplicates are kept.
    pub requests: Vec<Track>,
    /// Starting head position.
    pub head: Track,
    /// Initial sweep direction.
    pub direction: Direction,
    /// Maximum addressable track (inclusive).
    pub track_bound: Track,
    /// Scheduling policy to run.
    pub policy: PolicyKind,
}

impl Default for SimulationRequest {
    fn default() -> Self {
        Self {
            requests: Vec::new(),
            head: DEFAULT_HEAD,
            direction: Direction::default(),
            track_bound: DEFAULT_TRACK_BOUND,
            policy: PolicyKind::default(),
        }
    }
}

impl SimulationRequest {
    /// Creates a request with the given tracks and default parameters.
    pub fn new(requests: Vec<Track>) -> Self {
        Self {
            requests,
            ..Default::default()
        }
    }

    /// Sets the starting head position.
    pub fn with_head(mut self, head: Track) -> Self {
        self.head = head;
        self
    }

    /// Sets the initial sweep direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the maximum addressable track.
    pub fn with_track_bound(mut self, track_bound: Track) -> Self {
        self.track_bound = track_bound;
        self
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    /// Whether the head position itself is among the requests.
    pub fn includes_head(&self) -> bool {
        self.requests.contains(&self.head)
    }

    /// Number of requests that are not the head position.
    pub fn pending_count(&self) -> usize {
        self.requests.iter().filter(|&&t| t != self.head).count()
    }
}
