//! Generic leaf nodes.
//!
//! Domain leaves normally implement [`Node`] directly. The nodes here cover
//! the cases that need no type of their own: fixed results for wiring and
//! tests, and closures for inline conditions and actions.

use crate::{Node, NodeState, Shape};

/// Always returns `Success`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysSuccess;

impl<C> Node<C> for AlwaysSuccess {
    #[inline]
    fn tick(&mut self, _ctx: &mut C) -> NodeState {
        NodeState::Success
    }

    fn into_shape(self: Box<Self>) -> Shape<C> {
        Shape::Leaf(self)
    }
}

/// Always returns `Failure`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFailure;

impl<C> Node<C> for AlwaysFailure {
    #[inline]
    fn tick(&mut self, _ctx: &mut C) -> NodeState {
        NodeState::Failure
    }

    fn into_shape(self: Box<Self>) -> Shape<C> {
        Shape::Leaf(self)
    }
}

/// Always returns `Running`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysRunning;

impl<C> Node<C> for AlwaysRunning {
    #[inline]
    fn tick(&mut self, _ctx: &mut C) -> NodeState {
        NodeState::Running
    }

    fn into_shape(self: Box<Self>) -> Shape<C> {
        Shape::Leaf(self)
    }
}

/// A leaf backed by a closure.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Leaf, Node, NodeState};
///
/// let mut is_even = Leaf::new("IsEven", |n: &mut u32| {
///     if *n % 2 == 0 { NodeState::Success } else { NodeState::Failure }
/// });
///
/// assert_eq!(is_even.tick(&mut 4), NodeState::Success);
/// assert_eq!(Node::<u32>::name(&is_even), "IsEven");
/// ```
pub struct Leaf<F> {
    name: &'static str,
    action: F,
}

impl<F> Leaf<F> {
    /// Creates a leaf that calls `action` exactly once per tick.
    pub fn new(name: &'static str, action: F) -> Self {
        Self { name, action }
    }
}

impl<C, F> Node<C> for Leaf<F>
where
    F: FnMut(&mut C) -> NodeState + Send + 'static,
{
    fn tick(&mut self, ctx: &mut C) -> NodeState {
        (self.action)(ctx)
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn into_shape(self: Box<Self>) -> Shape<C> {
        Shape::Leaf(self)
    }
}
