//! Complete behavior trees for soldier archetypes.
//!
//! Presets are composed from small subtrees, highest priority first:
//!
//! ```text
//! soldier()
//!   └─ Selector
//!       ├─ survive()   Sequence: IsHealthLow, Selector[IsInCover, TakeCover], Heal
//!       ├─ fight()     Sequence: IsEnemyVisible, Selector[HasAmmo, Reload], Shoot
//!       ├─ regroup()   Sequence: Inverter[IsEnemyVisible], IsInCover,
//!       │                        AlwaysSucceed[Reload], LeaveCover
//!       └─ Idle
//! ```

use std::time::Duration;

use behavior_tree::{BoxedNode, always_succeed, inverter, selector, sequence};

use crate::AgentContext;
use crate::nodes::{
    HasAmmo, Heal, Idle, IsEnemyVisible, IsHealthLow, IsInCover, LeaveCover, Reload, Shoot,
    TakeCover,
};

/// Type alias for soldier behavior trees.
pub type SoldierTree = BoxedNode<AgentContext>;

/// Time needed to reach cover.
pub const TAKE_COVER_TIME: Duration = Duration::from_millis(500);

/// Time needed to refill the magazine.
pub const RELOAD_TIME: Duration = Duration::from_secs(1);

/// Health recovered per second while healing in cover.
pub const HEAL_PER_SECOND: f32 = 20.0;

/// Default rifleman.
///
/// # Arguments
///
/// * `flee_threshold` - Health ratio (0.0-1.0) below which the soldier
///   breaks off to take cover and heal.
pub fn soldier(flee_threshold: f32) -> SoldierTree {
    selector(vec![
        survive(flee_threshold),
        fight(),
        regroup(),
        Box::new(Idle),
    ])
}

/// Holds position and shoots, never retreats.
pub fn sentry() -> SoldierTree {
    selector(vec![fight(), Box::new(Idle)])
}

/// Get into cover and heal while health is low.
pub fn survive(flee_threshold: f32) -> SoldierTree {
    sequence(vec![
        Box::new(IsHealthLow {
            threshold: flee_threshold,
        }),
        selector(vec![
            Box::new(IsInCover),
            Box::new(TakeCover::new(TAKE_COVER_TIME)),
        ]),
        Box::new(Heal {
            per_second: HEAL_PER_SECOND,
        }),
    ])
}

/// Shoot at a visible enemy, reloading first if the magazine is empty.
pub fn fight() -> SoldierTree {
    sequence(vec![
        Box::new(IsEnemyVisible),
        selector(vec![Box::new(HasAmmo), Box::new(Reload::new(RELOAD_TIME))]),
        Box::new(Shoot),
    ])
}

/// Leave cover once no enemy is in sight.
///
/// A partly empty magazine is topped up first; a full one skips the reload.
pub fn regroup() -> SoldierTree {
    sequence(vec![
        inverter(Box::new(IsEnemyVisible)),
        Box::new(IsInCover),
        always_succeed(Box::new(Reload::new(RELOAD_TIME))),
        Box::new(LeaveCover),
    ])
}

#[cfg(test)]
mod tests {
    use behavior_tree::NodeState;

    use super::*;
    use crate::Soldier;

    fn ctx(soldier: Soldier) -> AgentContext {
        AgentContext {
            delta: Duration::from_millis(100),
            ..AgentContext::new(soldier)
        }
    }

    #[test]
    fn idle_when_nothing_happens() {
        let mut tree = soldier(0.3);
        let mut ctx = ctx(Soldier::default());
        assert_eq!(tree.tick(&mut ctx), NodeState::Success);
        assert_eq!(ctx.soldier, Soldier::default());
    }

    #[test]
    fn shoots_visible_enemy() {
        let mut tree = soldier(0.3);
        let mut ctx = ctx(Soldier {
            enemy_visible: true,
            ..Soldier::default()
        });

        assert_eq!(tree.tick(&mut ctx), NodeState::Success);
        assert_eq!(ctx.soldier.shots_fired, 1);
        assert_eq!(ctx.soldier.ammo, 5);
    }

    #[test]
    fn low_health_takes_priority_over_fighting() {
        let mut tree = soldier(0.3);
        let mut ctx = ctx(Soldier {
            enemy_visible: true,
            ..Soldier::default().with_health(10.0)
        });

        assert_eq!(tree.tick(&mut ctx), NodeState::Running);
        assert_eq!(ctx.soldier.shots_fired, 0);
    }

    #[test]
    fn regroup_leaves_cover_without_enemy() {
        let mut tree = regroup();
        let mut ctx = ctx(Soldier {
            in_cover: true,
            ..Soldier::default()
        });

        assert_eq!(tree.tick(&mut ctx), NodeState::Success);
        assert!(!ctx.soldier.in_cover);

        // Not in cover any more: the sequence stops at IsInCover.
        assert_eq!(tree.tick(&mut ctx), NodeState::Failure);
    }

    #[test]
    fn regroup_reloads_before_leaving_cover() {
        let mut tree = regroup();
        let mut ctx = ctx(Soldier {
            in_cover: true,
            ..Soldier::default().with_ammo(2)
        });

        for _ in 0..9 {
            assert_eq!(tree.tick(&mut ctx), NodeState::Running);
            assert!(ctx.soldier.in_cover);
        }

        assert_eq!(tree.tick(&mut ctx), NodeState::Success);
        assert_eq!(ctx.soldier.ammo, 6);
        assert!(!ctx.soldier.in_cover);
    }

    #[test]
    fn sentry_never_takes_cover() {
        let mut tree = sentry();
        let mut ctx = ctx(Soldier::default().with_health(1.0));
        assert_eq!(tree.tick(&mut ctx), NodeState::Success);
        assert!(!ctx.soldier.in_cover);
    }
}
