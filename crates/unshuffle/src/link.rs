//! Successor-slot accessors.
//!
//! The sort never inspects a record beyond its successor slot and whatever the
//! comparator reads. A [`Link`] binds "which field is the successor" at compile
//! time, so the same record type can be threaded through more than one field.

use std::cmp::Ordering;

/// Accessor for the successor slot of `N`.
///
/// Implementors are usually zero-sized marker types; see [`Next`] and
/// [`link_field!`](crate::link_field).
pub trait Link<N> {
    fn next(node: &N) -> Option<&N>;
    fn next_mut(node: &mut N) -> &mut Option<Box<N>>;
}

/// A record with a conventional `next` successor slot.
pub trait Linked: Sized {
    fn next(&self) -> Option<&Self>;
    fn next_mut(&mut self) -> &mut Option<Box<Self>>;
}

/// The default link: whatever [`Linked`] exposes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Next;

impl<N: Linked> Link<N> for Next {
    #[inline(always)]
    fn next(node: &N) -> Option<&N> {
        node.next()
    }

    #[inline(always)]
    fn next_mut(node: &mut N) -> &mut Option<Box<N>> {
        node.next_mut()
    }
}

/// A record with a conventional sort key.
pub trait Keyed {
    type Key: Ord + ?Sized;

    fn key(&self) -> &Self::Key;
}

/// Ascending order on [`Keyed::key`].
#[inline]
pub fn default_cmp<N: Keyed>(a: &N, b: &N) -> Ordering {
    a.key().cmp(b.key())
}

/// Declares a zero-sized [`Link`] accessor for a named `Option<Box<_>>` field.
///
/// ```ignore
/// struct Job { id: u32, next: Option<Box<Job>>, deferred: Option<Box<Job>> }
/// unshuffle::link_field!(pub Deferred: Job => deferred);
/// ```
#[macro_export]
macro_rules! link_field {
    ($vis:vis $name:ident : $node:ty => $field:ident) => {
        #[derive(Clone, Copy, Debug, Default)]
        $vis struct $name;

        impl $crate::Link<$node> for $name {
            #[inline(always)]
            fn next(node: &$node) -> ::core::option::Option<&$node> {
                node.$field.as_deref()
            }

            #[inline(always)]
            fn next_mut(
                node: &mut $node,
            ) -> &mut ::core::option::Option<::std::boxed::Box<$node>> {
                &mut node.$field
            }
        }
    };
}
