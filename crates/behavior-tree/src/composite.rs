//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child nodes.
//! This module provides the two control-flow building blocks: [`Sequence`]
//! (all must succeed) and [`Selector`] (priority fallback).

use crate::{BoxedNode, Composite, Node, NodeState, Shape};

/// Executes children in order until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns anything other than `Success` (`Failure`, `Running`
///   or `None`), the sequence **stops immediately** and returns that state
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// An empty sequence succeeds. Nothing is remembered between ticks: every
/// tick starts again from the first child, so a child that returned
/// `Running` must track its own progress.
pub struct Sequence<C> {
    children: Vec<BoxedNode<C>>,
}

impl<C: 'static> Sequence<C> {
    /// Creates a new sequence with the given children.
    pub fn new(children: Vec<BoxedNode<C>>) -> Self {
        Self { children }
    }
}

impl<C: 'static> Node<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C) -> NodeState {
        for child in &mut self.children {
            match child.tick(ctx) {
                NodeState::Success => continue, // Move to next child
                other => return other,          // Short-circuit
            }
        }
        NodeState::Success
    }

    fn release(self: Box<Self>) {
        release_all(self.children);
    }

    fn into_shape(self: Box<Self>) -> Shape<C> {
        Shape::composite(self)
    }
}

impl<C: 'static> Composite<C> for Sequence<C> {
    fn children(&self) -> &[BoxedNode<C>] {
        &self.children
    }

    fn into_children(self: Box<Self>) -> Vec<BoxedNode<C>> {
        self.children
    }

    fn rebuild(children: Vec<BoxedNode<C>>) -> BoxedNode<C> {
        Box::new(Self::new(children))
    }
}

/// Executes children in priority order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success` or `Running`, the selector **stops
///   immediately** and returns that state
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// An empty selector fails. `None` is not a failure, so it is returned
/// unchanged like `Success` and `Running`.
pub struct Selector<C> {
    children: Vec<BoxedNode<C>>,
}

impl<C: 'static> Selector<C> {
    /// Creates a new selector with the given children.
    pub fn new(children: Vec<BoxedNode<C>>) -> Self {
        Self { children }
    }
}

impl<C: 'static> Node<C> for Selector<C> {
    fn tick(&mut self, ctx: &mut C) -> NodeState {
        for child in &mut self.children {
            match child.tick(ctx) {
                NodeState::Failure => continue, // Try next child
                other => return other,          // Short-circuit
            }
        }
        NodeState::Failure
    }

    fn release(self: Box<Self>) {
        release_all(self.children);
    }

    fn into_shape(self: Box<Self>) -> Shape<C> {
        Shape::composite(self)
    }
}

impl<C: 'static> Composite<C> for Selector<C> {
    fn children(&self) -> &[BoxedNode<C>] {
        &self.children
    }

    fn into_children(self: Box<Self>) -> Vec<BoxedNode<C>> {
        self.children
    }

    fn rebuild(children: Vec<BoxedNode<C>>) -> BoxedNode<C> {
        Box::new(Self::new(children))
    }
}

/// Releases every child in order. Each child is consumed exactly once.
fn release_all<C>(children: Vec<BoxedNode<C>>) {
    for child in children {
        child.release();
    }
}
