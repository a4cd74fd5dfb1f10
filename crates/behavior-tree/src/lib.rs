//! Tick-driven behavior tree engine.
//!
//! A driver ticks the root once per step; composites tick their children
//! synchronously, depth-first and left-to-right, and fold the results into a
//! single [`NodeState`]. Nothing blocks: multi-step work is reported as
//! `Running` and resumed on a later tick.
//!
//! - **Single owner**: every node except the root belongs to exactly one parent
//! - **Explicit release**: [`Node::release`] consumes the node and its subtree
//! - **Context-passing**: leaves reach their agent through the `&mut C` given to each tick
//! - **Transparent logging**: [`TreeLogger`] instruments a tree without changing its results
//!
//! # Architecture
//!
//! - [`Node`]: Core trait for all nodes, [`Composite`] for nodes with children
//! - [`NodeState`]: None, Success, Failure or Running
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Inverter`], [`AlwaysSucceed`]
//! - Logging: [`LoggingDecorator`], [`TreeLogger`], [`LoggerSettings`]

pub mod builder;
pub mod composite;
pub mod decorator;
pub mod error;
pub mod leaf;
pub mod logging;
pub mod node;
pub mod state;

// Re-export core types for ergonomic API
pub use builder::{always_succeed, inverter, leaf, selector, sequence};
pub use composite::{Selector, Sequence};
pub use decorator::{AlwaysSucceed, Inverter};
pub use error::SettingsError;
pub use leaf::{AlwaysFailure, AlwaysRunning, AlwaysSuccess, Leaf};
pub use logging::{
    LogSink, LoggerSettings, LoggerSettingsBuilder, LoggingDecorator, TreeLogger, tracing_sink,
};
pub use node::{BoxedNode, Composite, Node, Shape};
pub use state::NodeState;
