//! Left/right split of pending requests around the head.

use crate::models::Track;

/// Requests strictly below and strictly above the head, each ascending.
///
/// Requests equal to the head are dropped: the head's own position
/// already services them. Duplicates on either side are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Requests below the head, ascending.
    pub left: Vec<Track>,
    /// Requests above the head, ascending.
    pub right: Vec<Track>,
}

impl Partition {
    /// Splits `requests` around `head`.
    pub fn split(requests: &[Track], head: Track) -> Self {
        let mut left: Vec<Track> = requests.iter().copied().filter(|&t| t < head).collect();
        let mut right: Vec<Track> = requests.iter().copied().filter(|&t| t > head).collect();
        left.sort_unstable();
        right.sort_unstable();
        Self { left, right }
    }

    /// Whether nothing besides the head is pending.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Total pending requests on both sides.
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Left set, nearest to the head first.
    pub fn left_descending(&self) -> impl Iterator<Item = Track> + '_ {
        self.left.iter().rev().copied()
    }

    /// Right set, nearest to the head first.
    pub fn right_ascending(&self) -> impl Iterator<Item = Track> + '_ {
        self.right.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sorts_and_drops_head() {
        let p = Partition::split(&[98, 183, 37, 122, 14, 53, 124, 65, 67], 53);
        assert_eq!(p.left, vec![14, 37]);
        assert_eq!(p.right, vec![65, 67, 98, 122, 124, 183]);
        assert_eq!(p.len(), 8);
    }

    #[test]
    fn test_split_keeps_duplicates() {
        let p = Partition::split(&[8, 2, 8, 2], 5);
        assert_eq!(p.left, vec![2, 2]);
        assert_eq!(p.right, vec![8, 8]);
    }

    #[test]
    fn test_only_head_is_empty() {
        let p = Partition::split(&[5, 5], 5);
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
    }

    #[test]
    fn test_directional_iterators() {
        let p = Partition::split(&[1, 3, 7, 9], 5);
        assert_eq!(p.left_descending().collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(p.right_ascending().collect::<Vec<_>>(), vec![7, 9]);
    }
}
