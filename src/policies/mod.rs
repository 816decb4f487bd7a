//! Disk scheduling policies.
//!
//! Six classic policies behind one trait. Each is a pure function of the
//! pending requests and a [`SweepContext`]: no state survives a call, so
//! the same inputs always give the same path and concurrent use needs no
//! locking.
//!
//! # Usage
//!
//! ```
//! use disk_sched::models::Direction;
//! use disk_sched::policies::{self, PolicyKind, SchedulingPolicy, SweepContext};
//!
//! let ctx = SweepContext::at_head(5)
//!     .with_direction(Direction::Higher)
//!     .with_track_bound(10);
//! assert_eq!(PolicyKind::Scan.policy().order(&[2, 8], &ctx), vec![5, 8, 10, 5, 2]);
//! assert_eq!(policies::order_clook(&[2, 8], 5, Direction::Higher), vec![5, 8, 2, 5]);
//! ```

mod context;
mod partition;
pub mod rules;

pub use context::{SweepContext, LOWEST_TRACK};
pub use partition::Partition;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::error::DiskSchedError;
use crate::models::{Direction, Track};

/// An ordering policy for pending disk requests.
///
/// # Path Convention
/// The returned path starts at `context.head` and lists every position
/// the head occupies, including boundary touches and head revisits.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Short name (e.g., "SSTF", "C-LOOK").
    fn name(&self) -> &'static str;

    /// Orders `requests` into the head path.
    fn order(&self, requests: &[Track], context: &SweepContext) -> Vec<Track>;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Whether `context.direction` affects the result.
    fn uses_direction(&self) -> bool {
        true
    }

    /// Whether `context.track_bound` affects the result.
    fn uses_track_bound(&self) -> bool {
        false
    }
}

/// Selector for one of the six built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// First-Come, First-Served.
    #[default]
    Fcfs,
    /// Shortest Seek Time First.
    Sstf,
    /// SCAN (elevator).
    Scan,
    /// Circular SCAN.
    #[serde(alias = "c-scan")]
    CScan,
    /// LOOK.
    Look,
    /// Circular LOOK.
    #[serde(alias = "c-look")]
    CLook,
}

impl PolicyKind {
    /// All policies in canonical order.
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::Fcfs,
        PolicyKind::Sstf,
        PolicyKind::Scan,
        PolicyKind::CScan,
        PolicyKind::Look,
        PolicyKind::CLook,
    ];

    /// The policy implementation.
    pub fn policy(self) -> &'static dyn SchedulingPolicy {
        match self {
            PolicyKind::Fcfs => &rules::Fcfs,
            PolicyKind::Sstf => &rules::Sstf,
            PolicyKind::Scan => &rules::Scan,
            PolicyKind::CScan => &rules::CScan,
            PolicyKind::Look => &rules::Look,
            PolicyKind::CLook => &rules::CLook,
        }
    }

    /// Display name (e.g., "C-SCAN").
    pub fn name(self) -> &'static str {
        self.policy().name()
    }

    /// Request parameters this policy does not look at ("direction", "track bound").
    pub fn ignored_parameters(self) -> Vec<&'static str> {
        let policy = self.policy();
        let mut ignored = Vec::new();
        if !policy.uses_direction() {
            ignored.push("direction");
        }
        if !policy.uses_track_bound() {
            ignored.push("track bound");
        }
        ignored
    }

    /// Lowercase identifier accepted by [`FromStr`].
    pub fn key(self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "fcfs",
            PolicyKind::Sstf => "sstf",
            PolicyKind::Scan => "scan",
            PolicyKind::CScan => "cscan",
            PolicyKind::Look => "look",
            PolicyKind::CLook => "clook",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = DiskSchedError;

    /// Case-insensitive; `-` and `_` are ignored, so "C-SCAN" and "c_scan" both work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| DiskSchedError::unknown_policy(s))
    }
}

/// FCFS path for `requests` starting at `head`.
pub fn order_fcfs(requests: &[Track], head: Track) -> Vec<Track> {
    rules::Fcfs.order(requests, &SweepContext::at_head(head))
}

/// SSTF path for `requests` starting at `head`.
pub fn order_sstf(requests: &[Track], head: Track) -> Vec<Track> {
    rules::Sstf.order(requests, &SweepContext::at_head(head))
}

/// SCAN path, touching track 0 or `track_bound` after the first sweep.
pub fn order_scan(
    requests: &[Track],
    head: Track,
    direction: Direction,
    track_bound: Track,
) -> Vec<Track> {
    let ctx = SweepContext::at_head(head)
        .with_direction(direction)
        .with_track_bound(track_bound);
    rules::Scan.order(requests, &ctx)
}

/// C-SCAN path, wrapping between track 0 and `track_bound`.
pub fn order_cscan(
    requests: &[Track],
    head: Track,
    direction: Direction,
    track_bound: Track,
) -> Vec<Track> {
    let ctx = SweepContext::at_head(head)
        .with_direction(direction)
        .with_track_bound(track_bound);
    rules::CScan.order(requests, &ctx)
}

/// LOOK path.
pub fn order_look(requests: &[Track], head: Track, direction: Direction) -> Vec<Track> {
    rules::Look.order(requests, &SweepContext::at_head(head).with_direction(direction))
}

/// C-LOOK path.
pub fn order_clook(requests: &[Track], head: Track, direction: Direction) -> Vec<Track> {
    rules::CLook.order(requests, &SweepContext::at_head(head).with_direction(direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn random_requests(rng: &mut SmallRng, n: usize, bound: Track) -> Vec<Track> {
        (0..n).map(|_| rng.random_range(0..=bound)).collect()
    }

    #[test]
    fn test_parse_policy_names() {
        assert_eq!("fcfs".parse::<PolicyKind>().unwrap(), PolicyKind::Fcfs);
        assert_eq!("SSTF".parse::<PolicyKind>().unwrap(), PolicyKind::Sstf);
        assert_eq!("C-SCAN".parse::<PolicyKind>().unwrap(), PolicyKind::CScan);
        assert_eq!("c_look".parse::<PolicyKind>().unwrap(), PolicyKind::CLook);
        assert_eq!(" look ".parse::<PolicyKind>().unwrap(), PolicyKind::Look);
    }

    #[test]
    fn test_parse_unknown_policy() {
        let err = "fifo".parse::<PolicyKind>().unwrap_err();
        assert!(matches!(err, DiskSchedError::UnknownPolicy { ref name } if name == "fifo"));
    }

    #[test]
    fn test_kind_names_match_policies() {
        let names: Vec<&str> = PolicyKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, vec!["FCFS", "SSTF", "SCAN", "C-SCAN", "LOOK", "C-LOOK"]);
        assert_eq!(PolicyKind::CScan.to_string(), "C-SCAN");
    }

    #[test]
    fn test_ignored_parameters() {
        assert_eq!(
            PolicyKind::Fcfs.ignored_parameters(),
            vec!["direction", "track bound"]
        );
        assert_eq!(
            PolicyKind::Sstf.ignored_parameters(),
            vec!["direction", "track bound"]
        );
        assert!(PolicyKind::Scan.ignored_parameters().is_empty());
        assert!(PolicyKind::CScan.ignored_parameters().is_empty());
        assert_eq!(PolicyKind::Look.ignored_parameters(), vec!["track bound"]);
        assert_eq!(PolicyKind::CLook.ignored_parameters(), vec!["track bound"]);
    }

    #[test]
    fn test_serde_aliases() {
        let k: PolicyKind = serde_json::from_str("\"c-look\"").unwrap();
        assert_eq!(k, PolicyKind::CLook);
        assert_eq!(serde_json::to_string(&PolicyKind::CScan).unwrap(), "\"cscan\"");
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(order_fcfs(&[5, 2, 8], 2), vec![2, 5, 8]);
        assert_eq!(order_sstf(&[2, 8], 5), vec![5, 2, 8]);
        assert_eq!(order_scan(&[2, 8], 5, Direction::Higher, 10), vec![5, 8, 10, 5, 2]);
        assert_eq!(order_cscan(&[2, 8], 5, Direction::Higher, 10), vec![5, 8, 10, 0, 2, 5]);
        assert_eq!(order_look(&[2, 8], 5, Direction::Lower), vec![5, 2, 5, 8]);
        assert_eq!(order_clook(&[2, 8], 5, Direction::Higher), vec![5, 8, 2, 5]);
    }

    #[test]
    fn test_random_head_first_and_coverage() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let bound: Track = rng.random_range(1..=300);
            let head: Track = rng.random_range(0..=bound);
            let n = rng.random_range(0..20);
            let requests = random_requests(&mut rng, n, bound);
            let direction = if rng.random_bool(0.5) {
                Direction::Lower
            } else {
                Direction::Higher
            };
            let ctx = SweepContext::at_head(head)
                .with_direction(direction)
                .with_track_bound(bound);

            for kind in PolicyKind::ALL {
                let seq = kind.policy().order(&requests, &ctx);
                assert_eq!(seq[0], head, "{kind}");
                for &r in &requests {
                    assert!(seq.contains(&r), "{kind} missed {r}");
                }
                // no hidden state between calls
                assert_eq!(seq, kind.policy().order(&requests, &ctx), "{kind}");
            }
        }
    }

    #[test]
    fn test_sstf_length_excluding_head() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..100 {
            let head: Track = rng.random_range(0..=199);
            let requests = random_requests(&mut rng, 15, 199);
            let pending = requests.iter().filter(|&&t| t != head).count();
            assert_eq!(order_sstf(&requests, head).len(), pending + 1);
        }
    }
}
