//! Camp-building puzzle - hit a target headcount with three tier counters.

use crate::constants::{BASE_POPULATION, CAMP_TIER_COUNT, DEFAULT_CAMP_TARGET, TIER_FACTOR};
use crate::hierarchy::UnitScheme;

/// Headcount of one unit in counter slot `slot` (0 = smallest tier).
pub fn tier_weight(slot: usize) -> i64 {
    BASE_POPULATION * TIER_FACTOR.pow(slot as u32)
}

/// Counter state plus the target. Counts never go below zero; the target is
/// whatever the input parsed to, including negative values - those simply
/// fall through the suggestion chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampPuzzle {
    pub target: i64,
    counts: [i64; CAMP_TIER_COUNT],
}

impl Default for CampPuzzle {
    fn default() -> Self {
        Self { target: DEFAULT_CAMP_TARGET, counts: [0; CAMP_TIER_COUNT] }
    }
}

impl CampPuzzle {
    pub fn count(&self, slot: usize) -> i64 {
        self.counts.get(slot).copied().unwrap_or(0)
    }

    /// Increment or decrement one counter, floor-clamped at zero.
    pub fn adjust(&mut self, slot: usize, delta: i64) {
        if let Some(count) = self.counts.get_mut(slot) {
            *count = count.saturating_add(delta).max(0);
        }
    }

    /// Zeroes the counters. The target is left alone.
    pub fn reset(&mut self) {
        self.counts = [0; CAMP_TIER_COUNT];
    }

    pub fn people(&self) -> i64 {
        self.counts
            .iter()
            .enumerate()
            .fold(0i64, |acc, (slot, count)| {
                acc.saturating_add(count.saturating_mul(tier_weight(slot)))
            })
    }

    pub fn diff(&self) -> i64 {
        self.people().saturating_sub(self.target)
    }

    /// Fixed-priority decision table; first matching rule wins.
    pub fn suggestion(&self) -> Suggestion {
        let diff = self.diff();
        if diff == 0 {
            return Suggestion::ExactMatch;
        }
        if diff > 0 {
            if diff >= tier_weight(2) && self.counts[2] > 0 {
                return Suggestion::DropLarge;
            }
            if diff >= tier_weight(1) && self.counts[1] > 0 {
                return Suggestion::DropMid;
            }
            if self.counts[0] > 0 {
                return Suggestion::DropSmall;
            }
            return Suggestion::DropAny;
        }
        let need = diff.saturating_neg();
        if need >= tier_weight(2) {
            Suggestion::AddLarge
        } else if need >= tier_weight(1) {
            Suggestion::AddMid
        } else {
            Suggestion::AddSmall
        }
    }
}

/// Outcome of the suggestion table, formatted against the active scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    ExactMatch,
    DropLarge,
    DropMid,
    DropSmall,
    DropAny,
    AddLarge,
    AddMid,
    AddSmall,
}

impl Suggestion {
    pub fn message(&self, scheme: &UnitScheme) -> String {
        let name = |slot: usize| scheme.tiers.get(slot).copied().unwrap_or("?");
        match self {
            Suggestion::ExactMatch => "Just right! The structure works.".to_string(),
            Suggestion::DropLarge => format!("Too many! Try removing one {}.", name(2)),
            Suggestion::DropMid => format!("Too many! Try removing one {}.", name(1)),
            Suggestion::DropSmall => format!("Too many! Remove some {}.", name(0)),
            Suggestion::DropAny => "Too many! Try lowering each counter.".to_string(),
            Suggestion::AddLarge => format!("Not enough! Add one {}.", name(2)),
            Suggestion::AddMid => format!("Not enough! Add one {}.", name(1)),
            Suggestion::AddSmall => format!("Not enough! Add a few more {}.", name(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::PLA;
    use rstest::rstest;

    fn puzzle(target: i64, large: i64, mid: i64, small: i64) -> CampPuzzle {
        let mut p = CampPuzzle { target, ..CampPuzzle::default() };
        p.adjust(2, large);
        p.adjust(1, mid);
        p.adjust(0, small);
        p
    }

    #[test]
    fn weights_are_ten_thirty_ninety() {
        assert_eq!([tier_weight(0), tier_weight(1), tier_weight(2)], [10, 30, 90]);
    }

    #[test]
    fn empty_camp_against_large_target_wants_a_large_unit() {
        let p = puzzle(1000, 0, 0, 0);
        assert_eq!(p.people(), 0);
        assert_eq!(p.diff(), -1000);
        assert_eq!(p.suggestion(), Suggestion::AddLarge);
    }

    #[test]
    fn one_large_unit_hits_ninety_exactly() {
        let p = puzzle(90, 1, 0, 0);
        assert_eq!(p.people(), 90);
        assert_eq!(p.diff(), 0);
        assert_eq!(p.suggestion(), Suggestion::ExactMatch);
    }

    #[rstest]
    // Surplus rules walk down the tiers, skipping empty counters.
    #[case(10, 2, 0, 0, Suggestion::DropLarge)] // diff 170 >= 90, large available
    #[case(60, 1, 0, 0, Suggestion::DropAny)] // diff 30 < 90: large rule skipped, mid and small empty
    #[case(10, 0, 2, 0, Suggestion::DropMid)] // diff 50 >= 30, mid available
    #[case(5, 0, 0, 1, Suggestion::DropSmall)] // diff 5, only small units placed
    // Deficit rules only look at the gap size.
    #[case(200, 1, 0, 0, Suggestion::AddLarge)] // need 110
    #[case(130, 1, 0, 0, Suggestion::AddMid)] // need 40
    #[case(100, 1, 0, 0, Suggestion::AddSmall)] // need 10
    fn suggestion_priority_order(
        #[case] target: i64,
        #[case] large: i64,
        #[case] mid: i64,
        #[case] small: i64,
        #[case] expected: Suggestion,
    ) {
        assert_eq!(puzzle(target, large, mid, small).suggestion(), expected);
    }

    #[test]
    fn surplus_with_no_counters_falls_back_to_generic() {
        // Only reachable with a negative target: nothing placed, still "too many".
        let p = puzzle(-5, 0, 0, 0);
        assert_eq!(p.diff(), 5);
        assert_eq!(p.suggestion(), Suggestion::DropAny);
    }

    #[test]
    fn negative_target_with_counters_reports_surplus() {
        let p = puzzle(-100, 1, 0, 0);
        assert_eq!(p.diff(), 190);
        assert_eq!(p.suggestion(), Suggestion::DropLarge);
    }

    #[test]
    fn decrement_floors_at_zero() {
        let mut p = CampPuzzle::default();
        p.adjust(0, -1);
        assert_eq!(p.count(0), 0);
        p.adjust(0, 1);
        p.adjust(0, -1);
        p.adjust(0, -1);
        assert_eq!(p.count(0), 0);
    }

    #[test]
    fn reset_zeroes_counters_and_keeps_target() {
        let mut p = puzzle(500, 3, 2, 1);
        p.reset();
        assert_eq!([p.count(0), p.count(1), p.count(2)], [0, 0, 0]);
        assert_eq!(p.target, 500);
        assert_eq!(p.people(), 0);
    }

    #[test]
    fn out_of_range_slot_is_ignored() {
        let mut p = CampPuzzle::default();
        p.adjust(7, 5);
        assert_eq!(p.people(), 0);
        assert_eq!(p.count(7), 0);
    }

    #[test]
    fn messages_name_the_scheme_tiers() {
        assert_eq!(Suggestion::DropLarge.message(&PLA), "Too many! Try removing one 团.");
        assert_eq!(Suggestion::AddSmall.message(&PLA), "Not enough! Add a few more 排.");
    }
}
