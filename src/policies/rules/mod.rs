//! Built-in disk scheduling policies.
//!
//! # Families
//!
//! - **Arrival-order**: FCFS
//! - **Greedy**: SSTF
//! - **Sweep to boundary**: SCAN, C-SCAN
//! - **Sweep to last request**: LOOK, C-LOOK
//!
//! # Path Convention
//! Every policy returns the full head path starting at the head. If no
//! request differs from the head, the path is just `[head]`.
//!
//! SCAN and LOOK list the head again between the two sweeps, and C-SCAN
//! and C-LOOK close the path at the head. These revisits are charged as
//! ordinary moves by the seek calculator, so totals are larger than the
//! textbook figures.
//!
//! # References
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

use super::{Partition, SchedulingPolicy, SweepContext};
use crate::models::{Direction, Track};

// ======================== Arrival-order ========================

/// First-Come, First-Served.
///
/// Services requests in input order. Requests equal to the head are
/// dropped; every other duplicate is kept where it appears.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn order(&self, requests: &[Track], context: &SweepContext) -> Vec<Track> {
        let head = context.head;
        std::iter::once(head)
            .chain(requests.iter().copied().filter(|&t| t != head))
            .collect()
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }

    fn uses_direction(&self) -> bool {
        false
    }
}

// ======================== Greedy ========================

/// Shortest Seek Time First.
///
/// Repeatedly moves to the nearest unserviced request. Ties go to the
/// request that appears first among those remaining, not to the lower
/// track.
///
/// Greedy, not globally optimal.
#[derive(Debug, Clone, Copy)]
pub struct Sstf;

impl SchedulingPolicy for Sstf {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn order(&self, requests: &[Track], context: &SweepContext) -> Vec<Track> {
        let mut current = context.head;
        let mut remaining: Vec<Track> = requests
            .iter()
            .copied()
            .filter(|&t| t != current)
            .collect();

        let mut sequence = Vec::with_capacity(remaining.len() + 1);
        sequence.push(current);

        // min_by_key keeps the first of equal minima
        while let Some(idx) = remaining
            .iter()
            .enumerate()
            .min_by_key(|&(_, &t)| current.abs_diff(t))
            .map(|(idx, _)| idx)
        {
            current = remaining.remove(idx);
            sequence.push(current);
        }

        sequence
    }

    fn description(&self) -> &'static str {
        "Shortest Seek Time First"
    }

    fn uses_direction(&self) -> bool {
        false
    }
}

// ======================== Sweep to boundary ========================

/// SCAN (elevator).
///
/// Sweeps the chosen side, touches the boundary if that side had any
/// requests, returns to the head, then sweeps the other side.
///
/// The return to the head is listed explicitly, so the reported seek
/// includes the move back over already-serviced tracks.
#[derive(Debug, Clone, Copy)]
pub struct Scan;

impl SchedulingPolicy for Scan {
    fn name(&self) -> &'static str {
        "SCAN"
    }

    fn order(&self, requests: &[Track], context: &SweepContext) -> Vec<Track> {
        let head = context.head;
        let partition = Partition::split(requests, head);
        if partition.is_empty() {
            return vec![head];
        }

        let mut sequence = Vec::with_capacity(partition.len() + 3);
        sequence.push(head);

        match context.direction {
            Direction::Lower => {
                sequence.extend(partition.left_descending());
                if !partition.left.is_empty() {
                    sequence.push(context.boundary(Direction::Lower));
                }
                sequence.push(head);
                sequence.extend(partition.right_ascending());
            }
            Direction::Higher => {
                sequence.extend(partition.right_ascending());
                if !partition.right.is_empty() {
                    sequence.push(context.boundary(Direction::Higher));
                }
                sequence.push(head);
                sequence.extend(partition.left_descending());
            }
        }

        sequence
    }

    fn description(&self) -> &'static str {
        "SCAN (Elevator)"
    }

    fn uses_track_bound(&self) -> bool {
        true
    }
}

/// Circular SCAN.
///
/// Sweeps the chosen side to the boundary, jumps to the opposite
/// boundary, services the other side, and stops at the head.
///
/// After the wrap, a lower-first run services the right set in
/// descending order while a higher-first run services the left set in
/// ascending order. Both directions therefore travel back toward the
/// head after the wrap. This asymmetry fixes the reported totals and
/// must not be made symmetric.
#[derive(Debug, Clone, Copy)]
pub struct CScan;

impl SchedulingPolicy for CScan {
    fn name(&self) -> &'static str {
        "C-SCAN"
    }

    fn order(&self, requests: &[Track], context: &SweepContext) -> Vec<Track> {
        let head = context.head;
        let partition = Partition::split(requests, head);
        if partition.is_empty() {
            return vec![head];
        }

        let mut sequence = Vec::with_capacity(partition.len() + 4);
        sequence.push(head);

        match context.direction {
            Direction::Lower => {
                sequence.extend(partition.left_descending());
                if !partition.left.is_empty() {
                    sequence.push(context.boundary(Direction::Lower));
                }
                sequence.push(context.boundary(Direction::Higher));
                sequence.extend(partition.right.iter().rev().copied());
            }
            Direction::Higher => {
                sequence.extend(partition.right_ascending());
                if !partition.right.is_empty() {
                    sequence.push(context.boundary(Direction::Higher));
                }
                sequence.push(context.boundary(Direction::Lower));
                sequence.extend(partition.left.iter().copied());
            }
        }
        sequence.push(head);

        sequence
    }

    fn description(&self) -> &'static str {
        "Circular SCAN"
    }

    fn uses_track_bound(&self) -> bool {
        true
    }
}

// ======================== Sweep to last request ========================

/// LOOK.
///
/// Like SCAN but reverses at the last pending request instead of the
/// boundary. The head is listed again between the two sweeps.
#[derive(Debug, Clone, Copy)]
pub struct Look;

impl SchedulingPolicy for Look {
    fn name(&self) -> &'static str {
        "LOOK"
    }

    fn order(&self, requests: &[Track], context: &SweepContext) -> Vec<Track> {
        let head = context.head;
        let partition = Partition::split(requests, head);
        if partition.is_empty() {
            return vec![head];
        }

        let mut sequence = Vec::with_capacity(partition.len() + 2);
        sequence.push(head);

        match context.direction {
            Direction::Lower => {
                sequence.extend(partition.left_descending());
                sequence.push(head);
                sequence.extend(partition.right_ascending());
            }
            Direction::Higher => {
                sequence.extend(partition.right_ascending());
                sequence.push(head);
                sequence.extend(partition.left_descending());
            }
        }

        sequence
    }

    fn description(&self) -> &'static str {
        "LOOK"
    }
}

/// Circular LOOK.
///
/// Sweeps the chosen side to its farthest request, jumps to the farthest
/// request on the other side, sweeps back toward the head and stops
/// there. Never touches track 0 or the track bound.
///
/// If the other side is empty there is no jump and no closing head.
#[derive(Debug, Clone, Copy)]
pub struct CLook;

impl SchedulingPolicy for CLook {
    fn name(&self) -> &'static str {
        "C-LOOK"
    }

    fn order(&self, requests: &[Track], context: &SweepContext) -> Vec<Track> {
        let head = context.head;
        let partition = Partition::split(requests, head);

        let mut sequence = Vec::with_capacity(partition.len() + 2);
        sequence.push(head);

        match context.direction {
            Direction::Lower => {
                sequence.extend(partition.left_descending());
                if !partition.right.is_empty() {
                    // farthest right first, then back down toward the head
                    sequence.extend(partition.right.iter().rev().copied());
                    sequence.push(head);
                }
            }
            Direction::Higher => {
                sequence.extend(partition.right_ascending());
                if !partition.left.is_empty() {
                    sequence.extend(partition.left.iter().copied());
                    sequence.push(head);
                }
            }
        }

        sequence
    }

    fn description(&self) -> &'static str {
        "Circular LOOK"
    }
}
