//! Core node traits.
//!
//! This module defines the [`Node`] trait, the fundamental abstraction for
//! every behavior tree node, and the [`Composite`] capability exposed by
//! nodes that own children. The traits are generic over a context type `C`
//! that the driver passes to every tick, giving leaves access to the agent
//! they act on.

use crate::NodeState;

/// Owned, dynamically dispatched node.
pub type BoxedNode<C> = Box<dyn Node<C>>;

/// A behavior tree node that can be ticked against a context.
pub trait Node<C>: Send {
    /// Executes one step of this node's logic.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context. Leaves read and modify the
    ///   agent through it; composites only forward it to their children.
    ///
    /// # Returns
    ///
    /// Exactly one [`NodeState`]. Ticking never fails and never blocks.
    fn tick(&mut self, ctx: &mut C) -> NodeState;

    /// Releases this node and, for composites, every child exactly once.
    ///
    /// Consuming the box makes a second release of the same node impossible.
    /// Safe to call on a node that was never ticked.
    fn release(self: Box<Self>) {
        tracing::trace!(node = self.name(), "released");
    }

    /// Diagnostic label used in log lines.
    ///
    /// Defaults to the concrete type's name without module path or generic
    /// arguments (`Sequence`, `IsHealthLow`, ...).
    fn name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Breaks this node into its structural [`Shape`].
    ///
    /// Leaves return `Shape::Leaf(self)`. Implementors of [`Composite`]
    /// return [`Shape::composite`], decorators return [`Shape::Decorator`].
    /// There is no default: every node states its shape, so tree rewrites
    /// such as [`TreeLogger`](crate::TreeLogger) reach every depth.
    fn into_shape(self: Box<Self>) -> Shape<C>;
}

/// A node that owns an ordered, fixed list of children.
///
/// The list is established at construction and only exposed read-only.
/// Handing the children back out and building a new node over them is part
/// of the contract, so a composite can always be reassembled around
/// instrumented children.
pub trait Composite<C>: Node<C> {
    /// Children in evaluation order.
    fn children(&self) -> &[BoxedNode<C>];

    /// Gives up ownership of the children, in evaluation order.
    fn into_children(self: Box<Self>) -> Vec<BoxedNode<C>>;

    /// Builds a node of the same kind over `children`.
    fn rebuild(children: Vec<BoxedNode<C>>) -> BoxedNode<C>
    where
        Self: Sized;
}

/// Structural view of a node, consumed when a tree is rebuilt.
///
/// `rebuild` constructs a fresh node of the same kind over (possibly
/// replaced) children, so trees can be transformed without mutable child
/// lists.
pub enum Shape<C> {
    /// A node whose children, if any, are not rebuilt.
    Leaf(BoxedNode<C>),

    /// A node wrapping exactly one child.
    Decorator {
        child: BoxedNode<C>,
        rebuild: fn(BoxedNode<C>) -> BoxedNode<C>,
    },

    /// A node owning an ordered list of children.
    Composite {
        children: Vec<BoxedNode<C>>,
        rebuild: fn(Vec<BoxedNode<C>>) -> BoxedNode<C>,
    },
}

impl<C> Shape<C> {
    /// Composite shape of `node`, using its [`Composite::rebuild`].
    pub fn composite<T: Composite<C>>(node: Box<T>) -> Self {
        Shape::Composite {
            children: <T as Composite<C>>::into_children(node),
            rebuild: <T as Composite<C>>::rebuild,
        }
    }
}

/// Strips module path and generic arguments from a type name.
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
