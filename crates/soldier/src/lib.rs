//! Demo agent for the behavior tree engine.
//!
//! A soldier with health, ammo and cover, the condition and action leaves
//! that act on it, ready-made trees, and the glue that drives a tree once
//! per simulated frame.
//!
//! Modules are organized by responsibility:
//! - [`agent`] holds the soldier state and the per-tick [`AgentContext`]
//! - [`nodes`] provides soldier-specific conditions and actions
//! - [`presets`] composes them into complete trees
//! - [`driver`] ticks a root at a fixed step and owns its release
//! - [`scenario`] scripts battlefield events for deterministic runs
//! - [`config`], [`dirs`] and [`error`] support the `soldier` binary
pub mod agent;
pub mod config;
pub mod dirs;
pub mod driver;
pub mod error;
pub mod nodes;
pub mod presets;
pub mod scenario;

pub use agent::{AgentContext, Soldier};
pub use config::{SoldierConfig, TreeLogConfig};
pub use driver::Driver;
pub use error::{Result, SoldierError};
pub use presets::SoldierTree;
pub use scenario::{Event, Scenario, Summary};
