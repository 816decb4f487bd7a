//! Track positions and sweep direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DiskSchedError;

/// A track index on the disk surface.
///
/// Track 0 is the innermost boundary; the upper boundary is the
/// configured track bound. Signed so that head movement can be computed
/// as a plain difference.
pub type Track = i64;

/// Direction the head sweeps first.
///
/// Only the SCAN/LOOK family looks at this; FCFS and SSTF ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward track 0.
    Lower,
    /// Toward the track bound.
    #[default]
    Higher,
}

impl Direction {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Lower => "lower",
            Direction::Higher => "higher",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DiskSchedError;

    /// Accepts `lower`/`left`/`down` and `higher`/`right`/`up`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" | "left" | "down" => Ok(Direction::Lower),
            "higher" | "right" | "up" => Ok(Direction::Higher),
            _ => Err(DiskSchedError::unknown_direction(s)),
        }
    }
}
