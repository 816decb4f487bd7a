//! Presentation of simulation results.
//!
//! Everything here reads results and never feeds back into a policy.
//!
//! - **`solution`**: the seek arithmetic, step by step
//! - **`timeline`**: ASCII chart of the head path
//! - JSON rendering of results and comparisons

mod solution;
mod timeline;

pub use solution::{solution_text, Solution};
pub use timeline::Timeline;

use serde::Serialize;

use crate::error::Result;
use crate::scheduler::{Comparison, SimulationResult};

/// Pretty-printed JSON for any serializable result.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Timeline for a simulation result, over its (normalized) requests.
pub fn timeline_for(result: &SimulationResult) -> Timeline {
    Timeline::new(
        result.sequence.positions(),
        &result.request.requests,
        result.request.track_bound,
    )
}

/// One line per policy: rank, name, total seek, and path.
pub fn comparison_table(comparison: &Comparison) -> String {
    let name_width = comparison
        .results
        .iter()
        .map(|r| r.policy.name().len())
        .max()
        .unwrap_or(0);

    comparison
        .results
        .iter()
        .enumerate()
        .map(|(rank, r)| {
            let path = r
                .sequence
                .positions()
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(" -> ");
            format!(
                "{:>2}. {:<name_width$}  {:>6}  {}",
                rank + 1,
                r.policy.name(),
                r.total_seek(),
                path
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Direction, SimulationRequest};
    use crate::policies::PolicyKind;
    use crate::scheduler::Simulator;

    fn request() -> SimulationRequest {
        SimulationRequest::new(vec![2, 8])
            .with_head(5)
            .with_direction(Direction::Higher)
            .with_track_bound(10)
    }

    #[test]
    fn test_to_json_roundtrips_result() {
        let result = Simulator::new()
            .run(&request().with_policy(PolicyKind::Look))
            .unwrap();
        let json = to_json(&result).unwrap();
        let back: SimulationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_timeline_for_uses_bound() {
        let result = Simulator::new()
            .run(&request().with_policy(PolicyKind::Scan))
            .unwrap();
        assert_eq!(timeline_for(&result).columns(), &[0, 2, 5, 8, 10]);
    }

    #[test]
    fn test_comparison_table() {
        let cmp = Simulator::new().compare(&request()).unwrap();
        let table = comparison_table(&cmp);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        // FCFS and SSTF both cost 9 here; FCFS keeps first place
        assert!(lines[0].starts_with(" 1. FCFS"));
        assert!(lines[0].ends_with("5 -> 2 -> 8"));
    }
}
