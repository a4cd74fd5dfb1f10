//! Decorator behavior nodes.
//!
//! Decorators wrap a single child node and modify its result.
//! This module provides [`Inverter`] (NOT logic) and [`AlwaysSucceed`] (error suppression).

use crate::{BoxedNode, Node, NodeState, Shape};

/// Inverts the result of its child.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - If the child returns `Running`, the inverter returns `Running`
/// - Anything else (`None`) becomes `Failure`
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<C> {
    child: BoxedNode<C>,
}

impl<C: 'static> Inverter<C> {
    /// Creates a new inverter that wraps the given child.
    pub fn new(child: BoxedNode<C>) -> Self {
        Self { child }
    }

    fn rebuild(child: BoxedNode<C>) -> BoxedNode<C> {
        Box::new(Self::new(child))
    }
}

impl<C: 'static> Node<C> for Inverter<C> {
    fn tick(&mut self, ctx: &mut C) -> NodeState {
        self.child.tick(ctx).invert()
    }

    fn release(self: Box<Self>) {
        self.child.release();
    }

    fn into_shape(self: Box<Self>) -> Shape<C> {
        Shape::Decorator {
            child: self.child,
            rebuild: Self::rebuild,
        }
    }
}

/// Returns `Success` once its child has finished, whatever the outcome.
///
/// # Semantics
///
/// - If the child returns `Running`, returns `Running`
/// - Otherwise (`Success`, `Failure` or `None`), **returns `Success`**
///
/// This is useful for:
/// - Optional behaviors that shouldn't cause a sequence to fail
/// - Error suppression in non-critical paths
pub struct AlwaysSucceed<C> {
    child: BoxedNode<C>,
}

impl<C: 'static> AlwaysSucceed<C> {
    /// Creates a new always-succeed wrapper around the given child.
    pub fn new(child: BoxedNode<C>) -> Self {
        Self { child }
    }

    fn rebuild(child: BoxedNode<C>) -> BoxedNode<C> {
        Box::new(Self::new(child))
    }
}

impl<C: 'static> Node<C> for AlwaysSucceed<C> {
    fn tick(&mut self, ctx: &mut C) -> NodeState {
        match self.child.tick(ctx) {
            NodeState::Running => NodeState::Running,
            _ => NodeState::Success,
        }
    }

    fn release(self: Box<Self>) {
        self.child.release();
    }

    fn into_shape(self: Box<Self>) -> Shape<C> {
        Shape::Decorator {
            child: self.child,
            rebuild: Self::rebuild,
        }
    }
}
