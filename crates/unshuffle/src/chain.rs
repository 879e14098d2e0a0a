//! The conventional chain record and helpers for walking chains.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ptr;

use crate::link::{Keyed, Link, Linked, Next};

/// A chain node keyed on `value`, linked through `next`.
///
/// Dropping a node tears down its tail in a loop rather than recursively. That
/// `Drop` impl means a node cannot be destructured by move; take it apart with
/// [`Node::into_parts`] instead.
pub struct Node<T> {
    pub value: T,
    pub next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Splits the node into its value and the rest of the chain.
    pub fn into_parts(self) -> (T, Option<Box<Node<T>>>) {
        let mut this = ManuallyDrop::new(self);
        let next = this.next.take();
        // SAFETY: `this` is never dropped, so `value` is moved out exactly once.
        let value = unsafe { ptr::read(&this.value) };
        (value, next)
    }

    pub fn into_value(self) -> T {
        self.into_parts().0
    }
}

impl<T> Linked for Node<T> {
    #[inline(always)]
    fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }

    #[inline(always)]
    fn next_mut(&mut self) -> &mut Option<Box<Self>> {
        &mut self.next
    }
}

impl<T: Ord> Keyed for Node<T> {
    type Key = T;

    #[inline(always)]
    fn key(&self) -> &T {
        &self.value
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        // Unlink before dropping so long chains do not recurse.
        let mut cur = self.next.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(iter(self).map(|n| &n.value)).finish()
    }
}

/// Builds a chain holding `values` in iteration order.
pub fn from_values<T, I>(values: I) -> Option<Box<Node<T>>>
where
    I: IntoIterator<Item = T>,
{
    let mut head = None;
    let mut tail = &mut head;
    for value in values {
        tail = &mut tail.insert(Box::new(Node::new(value))).next;
    }
    head
}

pub fn iter<N: Linked>(head: &N) -> Iter<'_, N, Next> {
    iter_by::<N, Next>(head)
}

pub fn iter_by<N, L: Link<N>>(head: &N) -> Iter<'_, N, L> {
    Iter {
        cur: Some(head),
        _link: PhantomData,
    }
}

/// Borrowing walk over a chain, following `L`.
pub struct Iter<'a, N, L> {
    cur: Option<&'a N>,
    _link: PhantomData<L>,
}

impl<'a, N, L: Link<N>> Iterator for Iter<'a, N, L> {
    type Item = &'a N;

    #[inline]
    fn next(&mut self) -> Option<&'a N> {
        let node = self.cur?;
        self.cur = L::next(node);
        Some(node)
    }
}

impl<N, L: Link<N>> FusedIterator for Iter<'_, N, L> {}

pub fn detach<N: Linked>(head: Box<N>) -> Detach<N, Next> {
    detach_by::<N, Next>(head)
}

/// Consumes a chain, yielding each node with its successor slot cleared.
///
/// Single pass: a node is unlinked from the rest of the chain before it is
/// handed out, so the caller may relink it freely.
pub fn detach_by<N, L: Link<N>>(head: Box<N>) -> Detach<N, L> {
    Detach {
        cur: Some(head),
        _link: PhantomData,
    }
}

pub struct Detach<N, L> {
    cur: Option<Box<N>>,
    _link: PhantomData<L>,
}

impl<N, L: Link<N>> Iterator for Detach<N, L> {
    type Item = Box<N>;

    #[inline]
    fn next(&mut self) -> Option<Box<N>> {
        let mut node = self.cur.take()?;
        self.cur = L::next_mut(&mut node).take();
        Some(node)
    }
}

impl<N, L: Link<N>> FusedIterator for Detach<N, L> {}

pub fn reverse<N: Linked>(head: Option<Box<N>>) -> Option<Box<N>> {
    reverse_by::<N, Next>(head)
}

/// Reverses a chain by relinking its `L` slots, returning the new head.
pub fn reverse_by<N, L: Link<N>>(head: Option<Box<N>>) -> Option<Box<N>> {
    let mut reversed = None;
    let mut cur = head;
    while let Some(mut node) = cur {
        cur = core::mem::replace(L::next_mut(&mut node), reversed);
        reversed = Some(node);
    }
    reversed
}

pub fn len<N: Linked>(head: &N) -> usize {
    iter(head).count()
}

/// Whether every adjacent pair `(a, b)` satisfies `cmp(a, b) != Greater`.
pub fn is_sorted_by<N, L, F>(head: &N, mut cmp: F) -> bool
where
    L: Link<N>,
    F: FnMut(&N, &N) -> Ordering,
{
    let mut prev = head;
    for node in iter_by::<N, L>(head).skip(1) {
        if cmp(prev, node) == Ordering::Greater {
            return false;
        }
        prev = node;
    }
    true
}
