//! Simulation driver and seek-cost accounting.
//!
//! `Simulator` validates a request, runs one policy (or all six), and
//! charges the resulting head path with `SeekCostCalculator`.

mod seek;
mod simulator;

pub use seek::{compute_seek, SeekCostCalculator, SeekReport};
pub use simulator::{Comparison, SimulationResult, Simulator};
