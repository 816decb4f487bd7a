//! Disk scheduling domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Track` | A position on the disk surface |
//! | `Direction` | Initial sweep direction (SCAN/LOOK family) |
//! | `ServiceSequence` | Head path in visitation order, head first |
//! | `SeekStep` | One move between consecutive path positions |
//! | `SimulationRequest` | All parameters for a single run |

mod request;
mod sequence;
mod track;

pub use request::{SimulationRequest, DEFAULT_HEAD, DEFAULT_TRACK_BOUND};
pub use sequence::{SeekStep, ServiceSequence};
pub use track::{Direction, Track};
