//! In-place sorting of singly-linked chains by run distribution and merging.
//!
//! Nodes are first dealt onto ascending piles, reusing the nodes' own successor
//! slots, then piles are merged by repeatedly taking the smallest top. Inputs
//! that are already one ascending (or descending) run skip the merge entirely.

pub mod chain;
mod distribute;
mod error;
mod link;
mod merge;
mod pile;

use std::cmp::Ordering;

pub use chain::Node;
pub use error::{Error, SortResult};
pub use link::{Keyed, Link, Linked, Next, default_cmp};
pub use pile::Side;

use pile::{Pile, Run};

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    /// Side of the first pile the distributor compares against.
    pub initial_side: Side,
    /// Piles reserved up front by a fresh [`SortContext`].
    pub pile_capacity_hint: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    initial_side: Side::Bottom,
    pile_capacity_hint: 16,
};

/// Reusable pile storage.
///
/// Pile and run descriptors are the only allocations a sort makes; keeping a
/// context around lets repeated sorts of the same node type reuse them. The
/// context owns no nodes between sorts and is `Send` whenever `N` is.
pub struct SortContext<N> {
    piles: Vec<Pile<N>>,
    runs: Vec<Run<N>>,
    last_pile_count: usize,
}

impl<N> Default for SortContext<N> {
    fn default() -> Self {
        Self::with_capacity(TUNED_PARAMS.pile_capacity_hint)
    }
}

impl<N> SortContext<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(piles: usize) -> Self {
        Self {
            piles: Vec::with_capacity(piles),
            runs: Vec::with_capacity(piles),
            last_pile_count: 0,
        }
    }

    /// Number of piles the most recent sort distributed into.
    ///
    /// `1` means the chain was a single run and no merge was needed.
    pub fn last_pile_count(&self) -> usize {
        self.last_pile_count
    }

    pub fn sort(&mut self, head: Box<N>) -> Box<N>
    where
        N: Linked + Keyed,
    {
        self.sort_by_link::<Next, _>(head, default_cmp)
    }

    pub fn sort_by<F>(&mut self, head: Box<N>, cmp: F) -> Box<N>
    where
        N: Linked,
        F: FnMut(&N, &N) -> Ordering,
    {
        self.sort_by_link::<Next, F>(head, cmp)
    }

    /// Sorts the chain threaded through `L`, returning the new head.
    ///
    /// Only the `L` slots are written. Nodes compared equal by `cmp` have no
    /// guaranteed relative order.
    pub fn sort_by_link<L, F>(&mut self, head: Box<N>, mut cmp: F) -> Box<N>
    where
        L: Link<N>,
        F: FnMut(&N, &N) -> Ordering,
    {
        let len = distribute::distribute::<N, L, F, _>(
            chain::detach_by::<N, L>(head),
            &mut self.piles,
            TUNED_PARAMS.initial_side,
            &mut cmp,
        );
        self.last_pile_count = self.piles.len();
        log::trace!("distributed {len} nodes into {} piles", self.piles.len());

        self.runs.clear();
        self.runs.extend(self.piles.drain(..).map(Pile::into_run::<L>));

        let head = if let [only] = self.runs.as_mut_slice() {
            log::debug!("chain of {len} nodes is a single run, skipping merge");
            only.take_top()
        } else {
            let head = merge::merge::<N, L, F>(&mut self.runs, &mut cmp);
            log::debug!("merged {} piles of {len} nodes", self.last_pile_count);
            head
        };
        self.runs.clear();
        head
    }
}

/// Sorts a chain linked through `next`, ascending by [`Keyed::key`].
pub fn sort<N: Linked + Keyed>(head: Box<N>) -> Box<N> {
    sort_by_link::<N, Next, _>(head, default_cmp)
}

pub fn sort_by<N, F>(head: Box<N>, cmp: F) -> Box<N>
where
    N: Linked,
    F: FnMut(&N, &N) -> Ordering,
{
    sort_by_link::<N, Next, F>(head, cmp)
}

pub fn sort_by_key<N, K, F>(head: Box<N>, mut f: F) -> Box<N>
where
    N: Linked,
    K: Ord,
    F: FnMut(&N) -> K,
{
    sort_by_link::<N, Next, _>(head, |a, b| f(a).cmp(&f(b)))
}

/// Sorts a chain linked through the slot `L` selects.
pub fn sort_by_link<N, L, F>(head: Box<N>, cmp: F) -> Box<N>
where
    L: Link<N>,
    F: FnMut(&N, &N) -> Ordering,
{
    SortContext::new().sort_by_link::<L, F>(head, cmp)
}

/// Like [`sort`], rejecting an empty chain.
pub fn try_sort<N: Linked + Keyed>(head: Option<Box<N>>) -> SortResult<Box<N>> {
    try_sort_by_link::<N, Next, _>(head, default_cmp)
}

pub fn try_sort_by<N, F>(head: Option<Box<N>>, cmp: F) -> SortResult<Box<N>>
where
    N: Linked,
    F: FnMut(&N, &N) -> Ordering,
{
    try_sort_by_link::<N, Next, F>(head, cmp)
}

pub fn try_sort_by_link<N, L, F>(head: Option<Box<N>>, cmp: F) -> SortResult<Box<N>>
where
    L: Link<N>,
    F: FnMut(&N, &N) -> Ordering,
{
    let head = head.ok_or(Error::EmptyChain)?;
    Ok(sort_by_link::<N, L, F>(head, cmp))
}
