use std::cmp::Ordering;

use crate::chain;
use crate::link::Link;

pub(crate) const NONE: usize = usize::MAX;

/// End of a pile the distributor compares against.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// The run's minimum.
    Top,
    /// The run's maximum.
    Bottom,
}

impl Side {
    #[inline(always)]
    pub fn flip(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }

    /// Comparison result that places a node outside this end of a run.
    #[inline(always)]
    pub(crate) fn beyond(self) -> Ordering {
        match self {
            Self::Top => Ordering::Less,
            Self::Bottom => Ordering::Greater,
        }
    }
}

/// One ascending run under construction.
///
/// The run is kept as three owned pieces so that both ends stay reachable
/// without aliasing a node: `low` holds the nodes pushed on the top end
/// (minimum first), `high` the nodes pushed on the bottom end (maximum first),
/// and `seed` the node the pile started with, which sits between them.
pub(crate) struct Pile<N> {
    low: Option<Box<N>>,
    seed: Box<N>,
    high: Option<Box<N>>,
    pub left: usize,
    pub right: usize,
}

impl<N> Pile<N> {
    pub fn seed<L: Link<N>>(mut node: Box<N>, left: usize) -> Self {
        *L::next_mut(&mut node) = None;
        Self {
            low: None,
            seed: node,
            high: None,
            left,
            right: NONE,
        }
    }

    #[inline(always)]
    pub fn top(&self) -> &N {
        self.low.as_deref().unwrap_or(&*self.seed)
    }

    #[inline(always)]
    pub fn bottom(&self) -> &N {
        self.high.as_deref().unwrap_or(&*self.seed)
    }

    #[inline(always)]
    pub fn side(&self, side: Side) -> &N {
        match side {
            Side::Top => self.top(),
            Side::Bottom => self.bottom(),
        }
    }

    #[inline(always)]
    pub fn push_top<L: Link<N>>(&mut self, mut node: Box<N>) {
        *L::next_mut(&mut node) = self.low.take();
        self.low = Some(node);
    }

    #[inline(always)]
    pub fn push_bottom<L: Link<N>>(&mut self, mut node: Box<N>) {
        *L::next_mut(&mut node) = self.high.take();
        self.high = Some(node);
    }

    #[inline(always)]
    pub fn push<L: Link<N>>(&mut self, side: Side, node: Box<N>) {
        match side {
            Side::Top => self.push_top::<L>(node),
            Side::Bottom => self.push_bottom::<L>(node),
        }
    }

    /// Joins the pieces into one ascending chain, minimum first.
    pub fn into_chain<L: Link<N>>(self) -> Box<N> {
        let Self { low, mut seed, high, .. } = self;
        *L::next_mut(&mut seed) = chain::reverse_by::<N, L>(high);

        let mut head = seed;
        let mut below = chain::reverse_by::<N, L>(low);
        while let Some(mut node) = below {
            below = L::next_mut(&mut node).replace(head);
            head = node;
        }
        head
    }

    pub fn into_run<L: Link<N>>(self) -> Run<N> {
        let (left, right) = (self.left, self.right);
        Run {
            top: Some(self.into_chain::<L>()),
            left,
            right,
        }
    }

    /// Nodes of the run in ascending order, without joining the pieces.
    #[cfg(test)]
    pub fn nodes<L: Link<N>>(&self) -> Vec<&N> {
        let mut out: Vec<&N> = self
            .low
            .as_deref()
            .map(|low| chain::iter_by::<N, L>(low).collect())
            .unwrap_or_default();
        out.push(&*self.seed);
        if let Some(high) = self.high.as_deref() {
            let start = out.len();
            out.extend(chain::iter_by::<N, L>(high));
            out[start..].reverse();
        }
        out
    }
}

/// A sealed pile: one ascending chain, consumed from its top by the merger.
pub(crate) struct Run<N> {
    pub top: Option<Box<N>>,
    pub left: usize,
    pub right: usize,
}

impl<N> Run<N> {
    #[inline(always)]
    pub fn top(&self) -> &N {
        match self.top.as_deref() {
            Some(node) => node,
            None => unreachable!("exhausted run is still linked"),
        }
    }

    #[inline(always)]
    pub fn take_top(&mut self) -> Box<N> {
        match self.top.take() {
            Some(node) => node,
            None => unreachable!("exhausted run is still linked"),
        }
    }
}

/// Relinks the detached run `run` somewhere right of `start`.
///
/// Scans rightward from `start` and places `run` before the first run whose
/// top is not smaller, or at the end. `start` itself is not compared; the
/// caller already knows it belongs before `run`.
pub(crate) fn reinsert<N, F>(runs: &mut [Run<N>], run: usize, start: usize, cmp: &mut F)
where
    F: FnMut(&N, &N) -> Ordering,
{
    let mut last = start;
    loop {
        let right = runs[last].right;
        if right == NONE {
            runs[last].right = run;
            runs[run].left = last;
            runs[run].right = NONE;
            return;
        }
        if cmp(runs[run].top(), runs[right].top()) != Ordering::Greater {
            runs[last].right = run;
            runs[right].left = run;
            runs[run].left = last;
            runs[run].right = right;
            return;
        }
        last = right;
    }
}
