//! Window-ranking helpers
//!
//! Top-N queries use a strict total order (explicit sort with an
//! ascending-id secondary key, then truncate). Per-group top-N uses
//! standard competition ranking: tied entries share a rank and the next
//! distinct value's rank reflects the skipped positions (1, 1, 3).

/// Ranks for an already-sorted slice (best first)
///
/// `same` decides whether two adjacent entries are tied.
pub fn competition_ranks<T>(sorted: &[T], same: impl Fn(&T, &T) -> bool) -> Vec<u32> {
    let mut ranks = Vec::with_capacity(sorted.len());
    for (idx, entry) in sorted.iter().enumerate() {
        if idx > 0 && same(&sorted[idx - 1], entry) {
            let prev = ranks[idx - 1];
            ranks.push(prev);
        } else {
            ranks.push(idx as u32 + 1);
        }
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_share_rank_and_gaps_follow() {
        let counts = [9, 9, 7, 7, 7, 3];
        let ranks = competition_ranks(&counts, |a, b| a == b);
        assert_eq!(ranks, vec![1, 1, 3, 3, 3, 6]);
    }

    #[test]
    fn test_no_ties_is_sequential() {
        let counts = [5, 4, 1];
        let ranks = competition_ranks(&counts, |a, b| a == b);
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty() {
        let counts: [i64; 0] = [];
        assert!(competition_ranks(&counts, |a, b| a == b).is_empty());
    }
}
