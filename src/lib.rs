//! Disk-head scheduling simulator.
//!
//! Given a starting head position, pending track requests, and a policy,
//! computes the order in which the head visits tracks and the total head
//! movement ("seek") that order costs. Six classic policies are provided
//! for side-by-side comparison: FCFS, SSTF, SCAN, C-SCAN, LOOK, C-LOOK.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Track`, `Direction`, `ServiceSequence`,
//!   `SeekStep`, `SimulationRequest`
//! - **`policies`**: The six ordering policies behind `SchedulingPolicy`
//! - **`scheduler`**: Seek-cost calculator and the simulation driver
//! - **`validation`**: Request checks and head normalization
//! - **`input`**: Typed parsing of operator input and request files
//! - **`report`**: Solution arithmetic, ASCII timeline, JSON output
//! - **`workload`**: Seeded random request generation
//!
//! # Quick Start
//!
//! ```
//! use disk_sched::models::{Direction, SimulationRequest};
//! use disk_sched::policies::PolicyKind;
//! use disk_sched::scheduler::Simulator;
//!
//! let request = SimulationRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67])
//!     .with_head(53)
//!     .with_direction(Direction::Higher)
//!     .with_track_bound(199)
//!     .with_policy(PolicyKind::Sstf);
//!
//! let result = Simulator::new().run(&request).unwrap();
//! assert_eq!(result.total_seek(), 236);
//! ```
//!
//! # Path Conventions
//!
//! Reported totals follow this crate's head-path model, not the textbook
//! figures: SCAN and LOOK list the head again between sweeps, and C-SCAN
//! services the post-wrap side in a direction that depends on the
//! initial direction. See [`policies::rules`].
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11
//! - Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling Policies"

pub mod error;
pub mod input;
pub mod models;
pub mod policies;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{DiskSchedError, Result};
