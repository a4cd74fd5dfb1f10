//! Action nodes for soldier behavior trees.
//!
//! Action nodes change the soldier. Instant actions finish within the tick
//! they are called in; timed actions return Running and accumulate the
//! context's `delta` until their duration has passed.

use std::time::Duration;

use behavior_tree::{Node, NodeState, Shape};

use crate::AgentContext;

/// Time accumulated towards a fixed duration.
#[derive(Debug, Clone, Copy)]
struct Progress {
    duration: Duration,
    elapsed: Duration,
}

impl Progress {
    fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Adds `delta`; returns `true` and resets once the duration is reached.
    fn advance(&mut self, delta: Duration) -> bool {
        self.elapsed += delta;
        if self.elapsed >= self.duration {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }
}

/// Moves into cover over `duration`.
///
/// Succeeds immediately if already in cover.
pub struct TakeCover {
    progress: Progress,
}

impl TakeCover {
    /// Reaches cover after `duration` of accumulated ticks.
    pub fn new(duration: Duration) -> Self {
        Self {
            progress: Progress::new(duration),
        }
    }
}

impl Node<AgentContext> for TakeCover {
    fn tick(&mut self, ctx: &mut AgentContext) -> NodeState {
        if ctx.soldier.in_cover {
            return NodeState::Success;
        }

        if self.progress.advance(ctx.delta) {
            ctx.soldier.in_cover = true;
            tracing::debug!(frame = ctx.frame, "soldier reached cover");
            NodeState::Success
        } else {
            NodeState::Running
        }
    }

    fn into_shape(self: Box<Self>) -> Shape<AgentContext> {
        Shape::Leaf(self)
    }
}

/// Steps out of cover.
pub struct LeaveCover;

impl Node<AgentContext> for LeaveCover {
    fn tick(&mut self, ctx: &mut AgentContext) -> NodeState {
        ctx.soldier.in_cover = false;
        NodeState::Success
    }

    fn into_shape(self: Box<Self>) -> Shape<AgentContext> {
        Shape::Leaf(self)
    }
}

/// Refills the magazine over `duration`.
///
/// Fails if the magazine is already full.
pub struct Reload {
    progress: Progress,
}

impl Reload {
    /// Fills the magazine after `duration` of accumulated ticks.
    pub fn new(duration: Duration) -> Self {
        Self {
            progress: Progress::new(duration),
        }
    }
}

impl Node<AgentContext> for Reload {
    fn tick(&mut self, ctx: &mut AgentContext) -> NodeState {
        if ctx.soldier.is_magazine_full() {
            return NodeState::Failure;
        }

        if self.progress.advance(ctx.delta) {
            ctx.soldier.ammo = ctx.soldier.magazine_size;
            tracing::debug!(frame = ctx.frame, ammo = ctx.soldier.ammo, "reloaded");
            NodeState::Success
        } else {
            NodeState::Running
        }
    }

    fn into_shape(self: Box<Self>) -> Shape<AgentContext> {
        Shape::Leaf(self)
    }
}

/// Fires one round at a visible enemy.
///
/// Fails without ammo or without a target.
pub struct Shoot;

impl Node<AgentContext> for Shoot {
    fn tick(&mut self, ctx: &mut AgentContext) -> NodeState {
        let soldier = &mut ctx.soldier;
        if !soldier.enemy_visible || soldier.ammo == 0 {
            return NodeState::Failure;
        }

        soldier.ammo -= 1;
        soldier.shots_fired += 1;
        NodeState::Success
    }

    fn into_shape(self: Box<Self>) -> Shape<AgentContext> {
        Shape::Leaf(self)
    }
}

/// Recovers health while in cover.
///
/// Fails outside cover; runs until health is full.
pub struct Heal {
    /// Health restored per second of simulated time.
    pub per_second: f32,
}

impl Node<AgentContext> for Heal {
    fn tick(&mut self, ctx: &mut AgentContext) -> NodeState {
        if !ctx.soldier.in_cover {
            return NodeState::Failure;
        }

        ctx.soldier.heal(self.per_second * ctx.delta.as_secs_f32());
        if ctx.soldier.health >= ctx.soldier.max_health {
            NodeState::Success
        } else {
            NodeState::Running
        }
    }

    fn into_shape(self: Box<Self>) -> Shape<AgentContext> {
        Shape::Leaf(self)
    }
}

/// Does nothing, successfully.
pub struct Idle;

impl Node<AgentContext> for Idle {
    fn tick(&mut self, _ctx: &mut AgentContext) -> NodeState {
        NodeState::Success
    }

    fn into_shape(self: Box<Self>) -> Shape<AgentContext> {
        Shape::Leaf(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Soldier;

    const STEP: Duration = Duration::from_millis(100);

    fn ctx(soldier: Soldier) -> AgentContext {
        AgentContext {
            delta: STEP,
            ..AgentContext::new(soldier)
        }
    }

    #[test]
    fn take_cover_runs_until_duration_elapses() {
        let mut node = TakeCover::new(Duration::from_millis(300));
        let mut ctx = ctx(Soldier::default());

        assert_eq!(node.tick(&mut ctx), NodeState::Running);
        assert_eq!(node.tick(&mut ctx), NodeState::Running);
        assert!(!ctx.soldier.in_cover);
        assert_eq!(node.tick(&mut ctx), NodeState::Success);
        assert!(ctx.soldier.in_cover);

        // Already in cover: no further progress needed.
        assert_eq!(node.tick(&mut ctx), NodeState::Success);
    }

    #[test]
    fn reload_refills_after_duration() {
        let mut node = Reload::new(Duration::from_millis(200));
        let mut ctx = ctx(Soldier::default().with_ammo(0));

        assert_eq!(node.tick(&mut ctx), NodeState::Running);
        assert_eq!(ctx.soldier.ammo, 0);
        assert_eq!(node.tick(&mut ctx), NodeState::Success);
        assert_eq!(ctx.soldier.ammo, ctx.soldier.magazine_size);
    }

    #[test]
    fn reload_fails_on_full_magazine() {
        let mut node = Reload::new(Duration::from_millis(200));
        assert_eq!(node.tick(&mut ctx(Soldier::default())), NodeState::Failure);
    }

    #[test]
    fn reload_timer_restarts_after_completion() {
        let mut node = Reload::new(Duration::from_millis(200));
        let mut ctx = ctx(Soldier::default().with_ammo(0));
        node.tick(&mut ctx);
        node.tick(&mut ctx);

        ctx.soldier.ammo = 0;
        assert_eq!(node.tick(&mut ctx), NodeState::Running);
    }

    #[test]
    fn shoot_spends_ammo_on_visible_enemy() {
        let mut ctx = ctx(Soldier {
            enemy_visible: true,
            ..Soldier::default().with_ammo(1)
        });

        assert_eq!(Shoot.tick(&mut ctx), NodeState::Success);
        assert_eq!(ctx.soldier.ammo, 0);
        assert_eq!(ctx.soldier.shots_fired, 1);
        assert_eq!(Shoot.tick(&mut ctx), NodeState::Failure);
    }

    #[test]
    fn shoot_needs_a_target() {
        let mut ctx = ctx(Soldier::default());
        assert_eq!(Shoot.tick(&mut ctx), NodeState::Failure);
        assert_eq!(ctx.soldier.ammo, 6);
    }

    #[test]
    fn heal_only_in_cover() {
        let mut node = Heal { per_second: 50.0 };
        let mut ctx = ctx(Soldier::default().with_health(90.0));
        assert_eq!(node.tick(&mut ctx), NodeState::Failure);

        ctx.soldier.in_cover = true;
        assert_eq!(node.tick(&mut ctx), NodeState::Running);
        assert!(ctx.soldier.health > 90.0);
        assert_eq!(node.tick(&mut ctx), NodeState::Success);
        assert_eq!(ctx.soldier.health, ctx.soldier.max_health);
    }

    #[test]
    fn leave_cover_clears_flag() {
        let mut ctx = ctx(Soldier {
            in_cover: true,
            ..Soldier::default()
        });
        assert_eq!(LeaveCover.tick(&mut ctx), NodeState::Success);
        assert!(!ctx.soldier.in_cover);
    }
}
