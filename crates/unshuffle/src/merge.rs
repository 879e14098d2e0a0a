use std::cmp::Ordering;

use crate::link::Link;
use crate::pile::{NONE, Run, reinsert};

enum Step<N> {
    /// The smallest remaining node, cut from its run.
    Node(Box<N>),
    /// The rest of the last live run.
    Rest(Box<N>),
}

/// Merges at least two runs, leftmost at index 0, into one ascending chain.
///
/// The first live run always holds the smallest top. After each extraction its
/// new top is checked against the next run only; when it is larger, the run is
/// moved right by [`reinsert`]. Once a single run remains it is attached as a
/// whole.
pub(crate) fn merge<N, L, F>(runs: &mut [Run<N>], cmp: &mut F) -> Box<N>
where
    L: Link<N>,
    F: FnMut(&N, &N) -> Ordering,
{
    debug_assert!(runs.len() >= 2);

    let mut first = 0;
    let mut head = match step::<N, L, F>(runs, &mut first, cmp) {
        Step::Node(node) => node,
        Step::Rest(rest) => return rest,
    };
    let mut tail: &mut N = &mut head;
    loop {
        match step::<N, L, F>(runs, &mut first, cmp) {
            Step::Node(node) => tail = &mut **L::next_mut(tail).insert(node),
            Step::Rest(rest) => {
                *L::next_mut(tail) = Some(rest);
                return head;
            }
        }
    }
}

/// Takes the top of run `first`, then restores the ascending order of the
/// live runs, moving `first` along when its run empties or is reinserted.
fn step<N, L, F>(runs: &mut [Run<N>], first: &mut usize, cmp: &mut F) -> Step<N>
where
    L: Link<N>,
    F: FnMut(&N, &N) -> Ordering,
{
    let current = *first;
    let second = runs[current].right;
    let mut node = runs[current].take_top();
    if second == NONE {
        return Step::Rest(node);
    }

    let Some(next) = L::next_mut(&mut node).take() else {
        *first = second;
        runs[second].left = NONE;
        return Step::Node(node);
    };

    let in_order = cmp(&*next, runs[second].top()) != Ordering::Greater;
    runs[current].top = Some(next);
    if !in_order {
        runs[second].left = NONE;
        reinsert(runs, current, second, cmp);
        *first = second;
    }
    Step::Node(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{self, Node};
    use crate::distribute::distribute;
    use crate::link::Next;
    use crate::pile::{Pile, Side};

    fn by_value(a: &Node<u32>, b: &Node<u32>) -> Ordering {
        a.value.cmp(&b.value)
    }

    fn sealed_runs(values: &[u32]) -> Vec<Run<Node<u32>>> {
        let mut piles = Vec::new();
        let head = chain::from_values(values.iter().copied()).unwrap();
        distribute::<_, Next, _, _>(chain::detach(head), &mut piles, Side::Bottom, &mut by_value);
        assert!(piles.len() >= 2, "input {values:?} is a single run");
        piles.into_iter().map(Pile::into_run::<Next>).collect()
    }

    fn merge_values(values: &[u32]) -> Vec<u32> {
        let mut runs = sealed_runs(values);
        let head = merge::<_, Next, _>(&mut runs, &mut by_value);
        assert!(runs.iter().all(|run| run.top.is_none()));
        chain::iter(&*head).map(|n| n.value).collect()
    }

    #[test]
    fn two_runs() {
        assert_eq!(merge_values(&[1, 10, 2, 20, 3, 30]), vec![1, 2, 3, 10, 20, 30]);
        assert_eq!(merge_values(&[4, 1, 3, 2]), vec![1, 2, 3, 4]);
    }

    #[test]
    fn reinsertion_moves_past_several_runs() {
        let values = [1, 10, 2, 8, 3, 6, 11, 7];
        assert_eq!(merge_values(&values), vec![1, 2, 3, 6, 7, 8, 10, 11]);
    }

    #[test]
    fn exhausted_runs_are_dropped_from_the_front() {
        // Second pile is a single node that empties immediately.
        assert_eq!(merge_values(&[2, 5, 1, 3]), vec![1, 2, 3, 5]);
    }

    #[test]
    fn many_duplicates() {
        let values = [3, 1, 3, 1, 2, 2, 3, 1, 0, 3];
        let mut expected = values.to_vec();
        expected.sort_unstable();
        assert_eq!(merge_values(&values), expected);
    }

    #[test]
    fn leftover_run_stays_linked() {
        let mut runs = sealed_runs(&[1, 50, 2, 51, 52, 53, 54]);
        let head = merge::<_, Next, _>(&mut runs, &mut by_value);
        assert_eq!(chain::len(&*head), 7);
        assert!(chain::is_sorted_by::<_, Next, _>(&*head, by_value));
    }

    #[test]
    fn head_is_the_first_extracted_node() {
        let mut runs = sealed_runs(&[4, 1, 3, 2]);
        let tops: Vec<u32> = runs.iter().map(|run| run.top().value).collect();
        assert_eq!(tops, vec![1, 2]);
        let smallest: *const Node<u32> = runs[0].top();

        let head = merge::<_, Next, _>(&mut runs, &mut by_value);
        assert_eq!(&*head as *const Node<u32>, smallest);
        assert_eq!(chain::iter(&*head).map(|n| n.value).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}
