use std::cmp::Ordering;

use crate::link::Link;
use crate::pile::{NONE, Pile, Side};

/// Splits `nodes` into ascending runs, left to right in `piles`.
///
/// Pile 0 is always the leftmost pile and the rightmost pile is always the
/// last one pushed. Across piles, tops ascend and bottoms descend from left to
/// right, which is what lets [`find_pile`] walk in one direction only.
///
/// Returns the number of nodes consumed.
pub(crate) fn distribute<N, L, F, I>(
    mut nodes: I,
    piles: &mut Vec<Pile<N>>,
    mut side: Side,
    cmp: &mut F,
) -> usize
where
    L: Link<N>,
    F: FnMut(&N, &N) -> Ordering,
    I: Iterator<Item = Box<N>>,
{
    piles.clear();
    let Some(seed) = nodes.next() else {
        return 0;
    };
    piles.push(Pile::seed::<L>(seed, NONE));

    let mut consumed = 1;
    let mut current = 0;
    for node in nodes {
        consumed += 1;

        if let Some(found) = find_pile(piles, current, side, &*node, cmp) {
            piles[found].push::<L>(side, node);
            current = found;
            continue;
        }

        // Only a within-range miss on the rightmost pile gets here.
        let rightmost = piles.len() - 1;
        side = side.flip();
        if let Some(found) = find_pile(piles, rightmost, side, &*node, cmp) {
            piles[found].push::<L>(side, node);
            current = found;
            continue;
        }

        let index = piles.len();
        piles[rightmost].right = index;
        piles.push(Pile::seed::<L>(node, rightmost));
        current = index;
    }
    consumed
}

/// Finds the pile whose `side` end can take `node`, starting at `start`.
///
/// Beyond the end: walk left, landing on the leftmost pile still beyond (or
/// one with an equal end). Within the range: walk right to the first pile that
/// is not. `None` when the walk right runs off the rightmost pile.
fn find_pile<N, F>(
    piles: &[Pile<N>],
    start: usize,
    side: Side,
    node: &N,
    cmp: &mut F,
) -> Option<usize>
where
    F: FnMut(&N, &N) -> Ordering,
{
    let beyond = side.beyond();
    let mut pile = start;

    let ord = cmp(node, piles[pile].side(side));
    if ord == Ordering::Equal {
        return Some(pile);
    }

    if ord == beyond {
        loop {
            let left = piles[pile].left;
            if left == NONE {
                return Some(pile);
            }
            let ord = cmp(node, piles[left].side(side));
            if ord == Ordering::Equal {
                return Some(left);
            }
            if ord != beyond {
                return Some(pile);
            }
            pile = left;
        }
    }

    loop {
        let right = piles[pile].right;
        if right == NONE {
            return None;
        }
        let ord = cmp(node, piles[right].side(side));
        if ord == Ordering::Equal || ord == beyond {
            return Some(right);
        }
        pile = right;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::chain::{self, Node};
    use crate::link::Next;

    fn by_value(a: &Node<u32>, b: &Node<u32>) -> Ordering {
        a.value.cmp(&b.value)
    }

    fn runs(piles: &[Pile<Node<u32>>]) -> Vec<Vec<u32>> {
        let mut out = Vec::new();
        let mut cur = 0;
        while cur != NONE {
            out.push(piles[cur].nodes::<Next>().iter().map(|n| n.value).collect());
            cur = piles[cur].right;
        }
        out
    }

    fn distribute_values(values: &[u32], side: Side) -> (usize, Vec<Pile<Node<u32>>>) {
        let mut piles = Vec::new();
        let head = chain::from_values(values.iter().copied()).unwrap();
        let consumed = distribute::<_, Next, _, _>(
            chain::detach(head),
            &mut piles,
            side,
            &mut by_value,
        );
        (consumed, piles)
    }

    #[test]
    fn empty_input_creates_no_piles() {
        let mut piles: Vec<Pile<Node<u32>>> = Vec::new();
        let consumed =
            distribute::<_, Next, _, _>(std::iter::empty(), &mut piles, Side::Bottom, &mut by_value);
        assert_eq!(consumed, 0);
        assert!(piles.is_empty());
    }

    #[test]
    fn ascending_input_is_one_pile() {
        for side in [Side::Top, Side::Bottom] {
            let (consumed, piles) = distribute_values(&[1, 2, 3], side);
            assert_eq!(consumed, 3);
            assert_eq!(piles.len(), 1);
            assert_eq!(piles[0].top().value, 1);
            assert_eq!(piles[0].bottom().value, 3);
            assert_eq!(runs(&piles), vec![vec![1, 2, 3]]);
        }
    }

    #[test]
    fn descending_input_is_one_pile() {
        let (_, piles) = distribute_values(&[9, 7, 5, 3, 1], Side::Bottom);
        assert_eq!(runs(&piles), vec![vec![1, 3, 5, 7, 9]]);
    }

    #[test]
    fn two_interleaved_runs_make_two_piles() {
        let (consumed, piles) = distribute_values(&[1, 10, 2, 20, 3, 30], Side::Bottom);
        assert_eq!(consumed, 6);
        assert_eq!(runs(&piles), vec![vec![1, 10, 20, 30], vec![2, 3]]);
    }

    #[test]
    fn small_shuffle() {
        let (_, piles) = distribute_values(&[5, 3, 8, 1], Side::Bottom);
        assert_eq!(runs(&piles), vec![vec![1, 3, 5, 8]]);

        let (_, piles) = distribute_values(&[4, 1, 3, 2], Side::Bottom);
        assert_eq!(runs(&piles), vec![vec![1, 4], vec![2, 3]]);
    }

    #[test]
    fn walk_right_compares_each_pile() {
        // Piles [1,10] [2,8] [3,6]; the last touched is the leftmost bottom.
        // 7 is below 11 and below 8 but above 6, so it lands on the third pile.
        let (_, piles) = distribute_values(&[1, 10, 2, 8, 3, 6, 11, 7], Side::Bottom);
        assert_eq!(
            runs(&piles),
            vec![vec![1, 10, 11], vec![2, 8], vec![3, 6, 7]]
        );
    }

    fn check_invariants(piles: &[Pile<Node<u32>>]) {
        let mut cur = 0;
        let mut prev = NONE;
        while cur != NONE {
            let pile = &piles[cur];
            assert_eq!(pile.left, prev);
            let run: Vec<u32> = pile.nodes::<Next>().iter().map(|n| n.value).collect();
            assert!(run.windows(2).all(|w| w[0] <= w[1]), "run {run:?}");
            assert_eq!(run.first().copied(), Some(pile.top().value));
            assert_eq!(run.last().copied(), Some(pile.bottom().value));
            if prev != NONE {
                assert!(piles[prev].top().value < pile.top().value);
                assert!(piles[prev].bottom().value > pile.bottom().value);
            }
            prev = cur;
            cur = pile.right;
        }
    }

    #[test]
    fn random_inputs_keep_pile_order() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 10, 100, 1000] {
            for side in [Side::Top, Side::Bottom] {
                let values: Vec<u32> = (0..size).map(|_| rng.random_range(0..64)).collect();
                let (consumed, piles) = distribute_values(&values, side);
                assert_eq!(consumed, size);
                check_invariants(&piles);

                let total: usize = runs(&piles).iter().map(Vec::len).sum();
                assert_eq!(total, size);
            }
        }
    }
}
