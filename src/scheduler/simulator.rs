//! Simulation driver.
//!
//! # Algorithm
//!
//! 1. Validate the request (permissive or strict).
//! 2. Add the head to the request list if missing.
//! 3. Run the selected policy to get the head path.
//! 4. Charge the path with the seek-cost calculator.
//!
//! [`Simulator::compare`] repeats steps 3 and 4 for every policy on the same
//! normalized request and ranks the results by total seek.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::seek::{SeekCostCalculator, SeekReport};
use crate::error::{DiskSchedError, Result};
use crate::models::{ServiceSequence, SimulationRequest};
use crate::policies::{PolicyKind, SweepContext, LOWEST_TRACK};
use crate::validation::{normalize_requests, validate_request, validate_request_strict};

/// Outcome of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Policy that produced this result.
    pub policy: PolicyKind,
    /// The request as simulated (head included in `requests`).
    pub request: SimulationRequest,
    /// Head path, starting at the head.
    pub sequence: ServiceSequence,
    /// Per-move costs and total seek.
    pub seek: SeekReport,
}

impl SimulationResult {
    /// Total head movement.
    pub fn total_seek(&self) -> u64 {
        self.seek.total
    }
}

/// Results for all policies on one request, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Ranked by total seek; equal totals keep canonical policy order.
    pub results: Vec<SimulationResult>,
}

impl Comparison {
    /// Lowest-seek result.
    pub fn best(&self) -> Option<&SimulationResult> {
        self.results.first()
    }

    /// Highest-seek result.
    pub fn worst(&self) -> Option<&SimulationResult> {
        self.results.last()
    }

    /// Result for a specific policy.
    pub fn get(&self, policy: PolicyKind) -> Option<&SimulationResult> {
        self.results.iter().find(|r| r.policy == policy)
    }

    /// `(policy, total seek)` pairs in rank order.
    pub fn ranking(&self) -> Vec<(PolicyKind, u64)> {
        self.results
            .iter()
            .map(|r| (r.policy, r.total_seek()))
            .collect()
    }
}

/// Runs policies against simulation requests.
///
/// # Example
///
/// ```
/// use disk_sched::models::{Direction, SimulationRequest};
/// use disk_sched::policies::PolicyKind;
/// use disk_sched::scheduler::Simulator;
///
/// let request = SimulationRequest::new(vec![2, 8])
///     .with_head(5)
///     .with_direction(Direction::Higher)
///     .with_track_bound(10)
///     .with_policy(PolicyKind::Scan);
///
/// let result = Simulator::new().run(&request).unwrap();
/// assert_eq!(result.sequence.positions(), &[5, 8, 10, 5, 2]);
/// assert_eq!(result.total_seek(), 13);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    strict: bool,
}

impl Simulator {
    /// Creates a permissive simulator.
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// Rejects heads and requests outside `[0, track_bound]` when enabled.
    pub fn with_strict_bounds(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Runs the request's policy.
    #[instrument(level = "debug", skip(self, request), fields(policy = %request.policy))]
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationResult> {
        let normalized = self.prepare(request)?;
        let result = Self::execute(&normalized, request.policy)?;
        info!(
            policy = %result.policy,
            moves = result.seek.move_count(),
            total_seek = result.seek.total,
            "simulation complete"
        );
        Ok(result)
    }

    /// Runs all six policies on the same request.
    pub fn compare(&self, request: &SimulationRequest) -> Result<Comparison> {
        let normalized = self.prepare(request)?;
        let mut results: Vec<SimulationResult> = PolicyKind::ALL
            .into_iter()
            .map(|kind| Self::execute(&normalized, kind))
            .collect::<Result<_>>()?;
        // stable: ties keep canonical order
        results.sort_by_key(|r| r.seek.total);

        if let Some(best) = results.first() {
            info!(best = %best.policy, total_seek = best.seek.total, "comparison complete");
        }
        Ok(Comparison { results })
    }

    fn prepare(&self, request: &SimulationRequest) -> Result<SimulationRequest> {
        let checked = if self.strict {
            validate_request_strict(request)
        } else {
            validate_request(request)
        };
        checked.map_err(DiskSchedError::Validation)?;

        if !self.strict {
            let bound = request.track_bound;
            let out_of_range = std::iter::once(request.head)
                .chain(request.requests.iter().copied())
                .filter(|t| !(LOWEST_TRACK..=bound).contains(t))
                .count();
            if out_of_range > 0 {
                warn!(out_of_range, bound, "tracks outside 0..=bound passed through");
            }
        }

        debug!(pending = request.pending_count(), "request accepted");
        let mut normalized = request.clone();
        if !request.includes_head() {
            debug!(head = request.head, "head added to request list");
            normalized.requests = normalize_requests(normalized.requests, normalized.head);
        }
        Ok(normalized)
    }

    fn execute(request: &SimulationRequest, policy: PolicyKind) -> Result<SimulationResult> {
        let context = SweepContext::from(request);
        let path = policy.policy().order(&request.requests, &context);
        debug!(policy = %policy, ?path, "policy ordered requests");

        let seek = SeekCostCalculator::try_compute(&path).ok_or_else(|| {
            DiskSchedError::SeekOverflow {
                policy: policy.name().to_string(),
            }
        })?;
        Ok(SimulationResult {
            policy,
            request: SimulationRequest {
                policy,
                ..request.clone()
            },
            sequence: ServiceSequence::new(path),
            seek,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Direction, Track};
    use crate::validation::ValidationErrorKind;

    fn textbook(policy: PolicyKind, direction: Direction) -> SimulationRequest {
        SimulationRequest::new(vec![98, 183, 37, 122, 14, 124, 65, 67])
            .with_head(53)
            .with_track_bound(199)
            .with_direction(direction)
            .with_policy(policy)
    }

    #[test]
    fn test_run_fcfs() {
        let req = SimulationRequest::new(vec![5, 2, 8])
            .with_head(2)
            .with_policy(PolicyKind::Fcfs);
        let result = Simulator::new().run(&req).unwrap();
        assert_eq!(result.sequence.positions(), &[2, 5, 8]);
        assert_eq!(result.total_seek(), 6);
    }

    #[test]
    fn test_run_sstf() {
        let req = SimulationRequest::new(vec![2, 8])
            .with_head(5)
            .with_policy(PolicyKind::Sstf);
        let result = Simulator::new().run(&req).unwrap();
        assert_eq!(result.sequence.positions(), &[5, 2, 8]);
        assert_eq!(result.total_seek(), 9);
    }

    #[test]
    fn test_run_clook() {
        let req = SimulationRequest::new(vec![2, 8])
            .with_head(5)
            .with_direction(Direction::Higher)
            .with_policy(PolicyKind::CLook);
        let result = Simulator::new().run(&req).unwrap();
        assert_eq!(result.sequence.positions(), &[5, 8, 2, 5]);
        assert_eq!(result.total_seek(), 12);
    }

    #[test]
    fn test_head_is_normalized_into_requests() {
        let req = SimulationRequest::new(vec![2, 8]).with_head(5);
        let result = Simulator::new().run(&req).unwrap();
        assert_eq!(result.request.requests, vec![2, 8, 5]);
        assert_eq!(result.sequence.head(), Some(5));
    }

    #[test]
    fn test_only_head_for_every_policy() {
        for kind in PolicyKind::ALL {
            let req = SimulationRequest::new(vec![5])
                .with_head(5)
                .with_track_bound(10)
                .with_policy(kind);
            let result = Simulator::new().run(&req).unwrap();
            assert_eq!(result.sequence.positions(), &[5], "{kind}");
            assert_eq!(result.total_seek(), 0, "{kind}");
        }
    }

    #[test]
    fn test_run_rejects_invalid() {
        let req = SimulationRequest::new(Vec::new()).with_track_bound(0);
        match Simulator::new().run(&req) {
            Err(DiskSchedError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_rejects_out_of_range() {
        let req = SimulationRequest::new(vec![250]).with_head(5).with_track_bound(199);
        assert!(Simulator::new().run(&req).is_ok());
        match Simulator::new().with_strict_bounds(true).run(&req) {
            Err(DiskSchedError::Validation(errors)) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::RequestOutOfRange)
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_permissive_propagates_out_of_range() {
        let req = SimulationRequest::new(vec![250])
            .with_head(5)
            .with_track_bound(199)
            .with_policy(PolicyKind::Fcfs);
        let result = Simulator::new().run(&req).unwrap();
        assert_eq!(result.sequence.positions(), &[5, 250]);
    }

    #[test]
    fn test_extreme_tracks_report_overflow() {
        let req = SimulationRequest::new(vec![Track::MIN, Track::MAX, Track::MIN])
            .with_head(0)
            .with_policy(PolicyKind::Fcfs);
        match Simulator::new().run(&req) {
            Err(DiskSchedError::SeekOverflow { policy }) => assert_eq!(policy, "FCFS"),
            other => panic!("expected seek overflow, got {other:?}"),
        }
        assert!(matches!(
            Simulator::new().compare(&req),
            Err(DiskSchedError::SeekOverflow { .. })
        ));
    }

    #[test]
    fn test_extreme_tracks_within_u64() {
        let req = SimulationRequest::new(vec![Track::MIN, Track::MAX])
            .with_head(Track::MIN)
            .with_policy(PolicyKind::Fcfs);
        let result = Simulator::new().run(&req).unwrap();
        assert_eq!(result.total_seek(), u64::MAX);
    }

    #[test]
    fn test_textbook_totals() {
        let sim = Simulator::new();
        let total = |p, d| sim.run(&textbook(p, d)).unwrap().total_seek();
        assert_eq!(total(PolicyKind::Fcfs, Direction::Higher), 640);
        assert_eq!(total(PolicyKind::Sstf, Direction::Higher), 236);
        // 53→37→14→0 (53) →53 (53) →183 (130)
        assert_eq!(total(PolicyKind::Scan, Direction::Lower), 236);
        // 53→183 (130) →199 (16) →0 (199) →14→37 (37) →53 (16)
        assert_eq!(total(PolicyKind::CScan, Direction::Higher), 398);
        // 53→183 (130) →53 (130) →14 (39)
        assert_eq!(total(PolicyKind::Look, Direction::Higher), 299);
        // 53→183 (130) →14 (169) →37 (23) →53 (16)
        assert_eq!(total(PolicyKind::CLook, Direction::Higher), 338);
    }

    #[test]
    fn test_compare_ranks_by_total() {
        let cmp = Simulator::new()
            .compare(&textbook(PolicyKind::Fcfs, Direction::Higher))
            .unwrap();
        assert_eq!(cmp.results.len(), 6);
        let totals: Vec<u64> = cmp.ranking().iter().map(|&(_, t)| t).collect();
        assert!(totals.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(cmp.worst().unwrap().policy, PolicyKind::Fcfs);
        assert_eq!(cmp.get(PolicyKind::Sstf).unwrap().total_seek(), 236);
        for r in &cmp.results {
            assert_eq!(r.request.policy, r.policy);
        }
    }

    #[test]
    fn test_compare_ties_keep_canonical_order() {
        let req = SimulationRequest::new(vec![5]).with_head(5);
        let cmp = Simulator::new().compare(&req).unwrap();
        let order: Vec<PolicyKind> = cmp.results.iter().map(|r| r.policy).collect();
        assert_eq!(order, PolicyKind::ALL.to_vec());
        assert_eq!(cmp.best().unwrap().policy, PolicyKind::Fcfs);
    }

    #[test]
    fn test_result_serializes() {
        let req = SimulationRequest::new(vec![2, 8]).with_head(5);
        let result = Simulator::new().run(&req).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["policy"], "fcfs");
        assert_eq!(json["sequence"], serde_json::json!([5, 2, 8]));
        assert_eq!(json["seek"]["total"], 9);
    }
}
