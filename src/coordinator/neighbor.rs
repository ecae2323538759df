//! Adjacent-tab highlighting for tab bars.
//!
//! Tabs next to the selected one share a rounded-corner decoration with it.
//! The tab at `k - 1` gets `right_adjacent` (its right neighbor is selected)
//! and the tab at `k + 1` gets `left_adjacent`. An option never holds more
//! than one of `selected`, `left_adjacent`, `right_adjacent`.

use crate::option::BarOption;

use super::commit::Commit;

/// Maintains the neighbor flags of a tab bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborHighlightPropagator;

impl NeighborHighlightPropagator {
    /// The left and right neighbors of `index` in a row of `len` options.
    pub fn neighbors(len: usize, index: usize) -> (Option<usize>, Option<usize>) {
        let left = index.checked_sub(1);
        let right = (index + 1 < len).then_some(index + 1);
        (left, right)
    }

    /// Set the neighbor flags for a freshly built bar with `selected` chosen.
    pub fn initialize(options: &mut [BarOption], selected: usize) {
        let mut scratch = Commit::new();
        Self::apply(options, selected, &mut scratch);
    }

    /// Move the neighbor flags from `previous` to `next`.
    ///
    /// Selection flags must already be updated. Every option whose flags may
    /// have changed is marked in `commit`.
    pub fn propagate(
        options: &mut [BarOption],
        previous: Option<usize>,
        next: usize,
        commit: &mut Commit,
    ) {
        if let Some(prev) = previous {
            let (left, right) = Self::neighbors(options.len(), prev);
            if let Some(l) = left {
                options[l].set_right_adjacent(false);
                commit.mark(l);
            }
            if let Some(r) = right {
                options[r].set_left_adjacent(false);
                commit.mark(r);
            }
        }
        Self::apply(options, next, commit);
    }

    fn apply(options: &mut [BarOption], selected: usize, commit: &mut Commit) {
        let (left, right) = Self::neighbors(options.len(), selected);
        if let Some(l) = left {
            options[l].set_right_adjacent(true);
            commit.mark(l);
        }
        if let Some(r) = right {
            options[r].set_left_adjacent(true);
            commit.mark(r);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(n: usize, selected: usize) -> Vec<BarOption> {
        let mut options: Vec<BarOption> = (0..n).map(|i| BarOption::new(format!("t{i}"))).collect();
        options[selected].set_selected(true);
        NeighborHighlightPropagator::initialize(&mut options, selected);
        options
    }

    fn select(options: &mut [BarOption], previous: usize, next: usize) -> Commit {
        let mut commit = Commit::new();
        options[previous].set_selected(false);
        options[next].set_selected(true);
        NeighborHighlightPropagator::propagate(options, Some(previous), next, &mut commit);
        commit
    }

    fn flags(o: &BarOption) -> (bool, bool, bool) {
        (o.is_left_adjacent(), o.is_selected(), o.is_right_adjacent())
    }

    fn assert_exclusive(options: &[BarOption]) {
        for o in options {
            let set = [o.is_selected(), o.is_left_adjacent(), o.is_right_adjacent()]
                .iter()
                .filter(|b| **b)
                .count();
            assert!(set <= 1, "option {} holds {set} flags", o.index());
        }
    }

    #[test]
    fn neighbors_at_edges() {
        assert_eq!(NeighborHighlightPropagator::neighbors(4, 0), (None, Some(1)));
        assert_eq!(NeighborHighlightPropagator::neighbors(4, 3), (Some(2), None));
        assert_eq!(NeighborHighlightPropagator::neighbors(4, 1), (Some(0), Some(2)));
        assert_eq!(NeighborHighlightPropagator::neighbors(1, 0), (None, None));
    }

    #[test]
    fn initialize_flags_both_neighbors() {
        let options = tabs(4, 1);
        assert_eq!(flags(&options[0]), (false, false, true));
        assert_eq!(flags(&options[1]), (false, true, false));
        assert_eq!(flags(&options[2]), (true, false, false));
        assert_eq!(flags(&options[3]), (false, false, false));
    }

    #[test]
    fn propagate_moves_flags_to_new_neighbors() {
        let mut options = tabs(4, 1);
        let commit = select(&mut options, 1, 3);
        assert_eq!(flags(&options[0]), (false, false, false));
        assert_eq!(flags(&options[1]), (false, false, false));
        assert_eq!(flags(&options[2]), (false, false, true));
        assert_eq!(flags(&options[3]), (false, true, false));
        assert_eq!(commit.dirty().collect::<Vec<_>>(), vec![0, 2]);
        assert_exclusive(&options);
    }

    #[test]
    fn propagate_to_direct_neighbor() {
        let mut options = tabs(3, 0);
        select(&mut options, 0, 1);
        assert_eq!(flags(&options[0]), (false, false, true));
        assert_eq!(flags(&options[1]), (false, true, false));
        assert_eq!(flags(&options[2]), (true, false, false));
        assert_exclusive(&options);
    }

    #[test]
    fn single_tab_has_no_neighbors() {
        let mut options = tabs(1, 0);
        let mut commit = Commit::new();
        NeighborHighlightPropagator::propagate(&mut options, Some(0), 0, &mut commit);
        assert!(commit.is_empty());
        assert_eq!(flags(&options[0]), (false, true, false));
    }

    #[test]
    fn exclusivity_holds_across_a_walk() {
        let mut options = tabs(5, 2);
        let mut current = 2;
        for next in [4, 0, 1, 3, 2, 0, 4] {
            select(&mut options, current, next);
            current = next;
            assert_exclusive(&options);
            assert_eq!(options.iter().filter(|o| o.is_selected()).count(), 1);
        }
    }
}
