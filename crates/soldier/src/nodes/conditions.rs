//! Condition nodes for soldier behavior trees.
//!
//! Condition nodes check the soldier and return Success or Failure.
//! They never modify state and never return Running.

use behavior_tree::{Node, NodeState, Shape};

use crate::AgentContext;

#[inline]
fn check(condition: bool) -> NodeState {
    if condition {
        NodeState::Success
    } else {
        NodeState::Failure
    }
}

/// Checks if the soldier's health is below a threshold.
///
/// # Example
///
/// ```rust,ignore
/// // Take cover if health is below 30%
/// Sequence::new(vec![
///     Box::new(IsHealthLow { threshold: 0.3 }),
///     Box::new(TakeCover::new(Duration::from_millis(500))),
/// ])
/// ```
pub struct IsHealthLow {
    /// Health ratio threshold (0.0 to 1.0).
    ///
    /// Returns Success if `health / max_health < threshold`.
    pub threshold: f32,
}

impl Node<AgentContext> for IsHealthLow {
    fn tick(&mut self, ctx: &mut AgentContext) -> NodeState {
        check(ctx.soldier.health_ratio() < self.threshold)
    }

    fn into_shape(self: Box<Self>) -> Shape<AgentContext> {
        Shape::Leaf(self)
    }
}

/// Checks if at least one round is loaded.
pub struct HasAmmo;

impl Node<AgentContext> for HasAmmo {
    fn tick(&mut self, ctx: &mut AgentContext) -> NodeState {
        check(ctx.soldier.ammo > 0)
    }

    fn into_shape(self: Box<Self>) -> Shape<AgentContext> {
        Shape::Leaf(self)
    }
}

/// Checks if the soldier is behind cover.
pub struct IsInCover;

impl Node<AgentContext> for IsInCover {
    fn tick(&mut self, ctx: &mut AgentContext) -> NodeState {
        check(ctx.soldier.in_cover)
    }

    fn into_shape(self: Box<Self>) -> Shape<AgentContext> {
        Shape::Leaf(self)
    }
}

/// Checks if an enemy is in line of sight.
pub struct IsEnemyVisible;

impl Node<AgentContext> for IsEnemyVisible {
    fn tick(&mut self, ctx: &mut AgentContext) -> NodeState {
        check(ctx.soldier.enemy_visible)
    }

    fn into_shape(self: Box<Self>) -> Shape<AgentContext> {
        Shape::Leaf(self)
    }
}
