//! Sorted inclusive-range lookup shared by the direction and width tables.

/// A static table of sorted, non-overlapping inclusive codepoint ranges.
///
/// Sortedness and disjointness are preconditions fixed at compile time, not
/// enforced at lookup (the tests assert them once per table).
#[derive(Debug, Clone, Copy)]
pub(crate) struct RangeTable {
    ranges: &'static [(u32, u32)],
}

impl RangeTable {
    pub(crate) const fn new(ranges: &'static [(u32, u32)]) -> Self {
        Self { ranges }
    }

    /// Binary search for `codepoint`, with a fast reject outside the
    /// table's envelope.
    pub(crate) fn contains(self, codepoint: u32) -> bool {
        let (Some(&(first_low, _)), Some(&(_, last_high))) =
            (self.ranges.first(), self.ranges.last())
        else {
            return false;
        };
        if codepoint < first_low || codepoint > last_high {
            return false;
        }

        let mut min = 0usize;
        let mut max = self.ranges.len() - 1;
        while min <= max {
            let mid = min + (max - min) / 2;
            let (low, high) = self.ranges[mid];
            if codepoint > high {
                min = mid + 1;
            } else if codepoint < low {
                let Some(next_max) = mid.checked_sub(1) else {
                    return false;
                };
                max = next_max;
            } else {
                return true;
            }
        }
        false
    }

    /// Precondition check used by table tests.
    #[cfg(test)]
    pub(crate) fn is_sorted_disjoint(self) -> bool {
        self.ranges.iter().all(|&(low, high)| low <= high)
            && self
                .ranges
                .windows(2)
                .all(|pair| pair[0].1 < pair[1].0)
    }
}

#[cfg(test)]
mod tests {
    use super::RangeTable;

    static TABLE: RangeTable = RangeTable::new(&[(5, 9), (12, 12), (20, 30)]);

    #[test]
    fn precondition_holds() {
        assert!(TABLE.is_sorted_disjoint());
        assert!(!RangeTable::new(&[(5, 9), (9, 12)]).is_sorted_disjoint());
    }

    #[test]
    fn fast_reject_outside_envelope() {
        assert!(!TABLE.contains(4));
        assert!(!TABLE.contains(31));
        assert!(!TABLE.contains(0));
        assert!(!TABLE.contains(u32::MAX));
    }

    #[test]
    fn finds_members_and_boundaries() {
        for codepoint in [5, 7, 9, 12, 20, 25, 30] {
            assert!(TABLE.contains(codepoint), "expected {codepoint} in table");
        }
    }

    #[test]
    fn misses_gaps_between_ranges() {
        for codepoint in [10, 11, 13, 19] {
            assert!(!TABLE.contains(codepoint), "expected {codepoint} outside");
        }
    }

    #[test]
    fn empty_table_contains_nothing() {
        assert!(!RangeTable::new(&[]).contains(0));
    }
}
