//! Free functions that return ready-to-nest [`BoxedNode`]s.
//!
//! Trees are written as nested calls, with each function boxing the node it
//! builds:
//!
//! ```rust
//! use behavior_tree::{AlwaysFailure, AlwaysSuccess, BoxedNode, inverter, selector, sequence};
//!
//! let tree: BoxedNode<()> = selector(vec![
//!     sequence(vec![Box::new(AlwaysFailure), Box::new(AlwaysSuccess)]),
//!     inverter(Box::new(AlwaysFailure)),
//! ]);
//! ```

use crate::{AlwaysSucceed, BoxedNode, Inverter, Leaf, NodeState, Selector, Sequence};

/// Boxed [`Sequence`] over `children`, ticked left to right.
#[inline]
pub fn sequence<C: 'static>(children: Vec<BoxedNode<C>>) -> BoxedNode<C> {
    Box::new(Sequence::new(children))
}

/// Boxed [`Selector`] over `children`, highest priority first.
#[inline]
pub fn selector<C: 'static>(children: Vec<BoxedNode<C>>) -> BoxedNode<C> {
    Box::new(Selector::new(children))
}

/// Boxed [`Inverter`] around `child`.
#[inline]
pub fn inverter<C: 'static>(child: BoxedNode<C>) -> BoxedNode<C> {
    Box::new(Inverter::new(child))
}

/// Boxed [`AlwaysSucceed`] around `child`; marks an optional step.
#[inline]
pub fn always_succeed<C: 'static>(child: BoxedNode<C>) -> BoxedNode<C> {
    Box::new(AlwaysSucceed::new(child))
}

/// Boxed [`Leaf`] that reports as `name` and runs `action` on every tick.
#[inline]
pub fn leaf<C: 'static, F>(name: &'static str, action: F) -> BoxedNode<C>
where
    F: FnMut(&mut C) -> NodeState + Send + 'static,
{
    Box::new(Leaf::new(name, action))
}
