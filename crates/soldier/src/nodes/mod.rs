//! Soldier-specific behavior tree nodes.
//!
//! This module contains concrete implementations of behavior tree nodes
//! that act on [`AgentContext`](crate::AgentContext). Nodes are divided into:
//!
//! - `conditions`: Nodes that check the soldier (return Success/Failure)
//! - `actions`: Nodes that change the soldier, some over several ticks

pub mod actions;
pub mod conditions;

pub use actions::*;
pub use conditions::*;
