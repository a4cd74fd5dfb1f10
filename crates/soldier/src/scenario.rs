//! Scripted battlefield events for driving a soldier deterministically.

use std::time::Duration;

use behavior_tree::NodeState;

use crate::{AgentContext, Driver, Soldier};

/// Something that happens to the soldier at the start of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    EnemySpotted,
    EnemyLost,
    /// Incoming fire; halved in cover.
    Hit { damage: f32 },
}

impl Event {
    fn apply(self, soldier: &mut Soldier) {
        match self {
            Event::EnemySpotted => soldier.enemy_visible = true,
            Event::EnemyLost => soldier.enemy_visible = false,
            Event::Hit { damage } => soldier.take_damage(damage),
        }
    }
}

/// Frame-indexed event script.
#[derive(Debug, Clone, Default)]
pub struct Scenario {
    events: Vec<(u64, Event)>,
}

/// Outcome of [`Scenario::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub frames: u64,
    pub final_state: NodeState,
    pub running_frames: u64,
    pub soldier: Soldier,
}

impl Scenario {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `event` for the start of `frame`.
    pub fn at(mut self, frame: u64, event: Event) -> Self {
        self.events.push((frame, event));
        self
    }

    /// A short firefight: the enemy appears, lands two heavy hits, then
    /// withdraws.
    pub fn skirmish() -> Self {
        Self::new()
            .at(2, Event::EnemySpotted)
            .at(12, Event::Hit { damage: 45.0 })
            .at(14, Event::Hit { damage: 35.0 })
            .at(40, Event::EnemyLost)
    }

    /// Applies every event scheduled for `frame`; returns how many fired.
    pub fn apply(&self, frame: u64, soldier: &mut Soldier) -> usize {
        let mut fired = 0;
        for &(_, event) in self.events.iter().filter(|(at, _)| *at == frame) {
            tracing::debug!(frame, ?event, "scenario event");
            event.apply(soldier);
            fired += 1;
        }
        fired
    }

    /// Runs `frames` ticks of `delta` each, applying events before every tick.
    ///
    /// Stops early if the soldier dies.
    pub fn run(
        &self,
        driver: &mut Driver,
        ctx: &mut AgentContext,
        frames: u64,
        delta: Duration,
    ) -> Summary {
        let mut final_state = NodeState::None;
        let mut running_frames = 0;
        let mut played = 0;

        for _ in 0..frames {
            self.apply(driver.ticks(), &mut ctx.soldier);
            if !ctx.soldier.is_alive() {
                tracing::info!(frame = driver.ticks(), "soldier is down");
                break;
            }

            final_state = driver.tick(ctx, delta);
            played += 1;
            if final_state.is_running() {
                running_frames += 1;
            }
        }

        Summary {
            frames: played,
            final_state,
            running_frames,
            soldier: ctx.soldier.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_only_events_for_the_frame() {
        let scenario = Scenario::new()
            .at(1, Event::EnemySpotted)
            .at(1, Event::Hit { damage: 10.0 })
            .at(3, Event::EnemyLost);
        let mut soldier = Soldier::default();

        assert_eq!(scenario.apply(0, &mut soldier), 0);
        assert_eq!(scenario.apply(1, &mut soldier), 2);
        assert!(soldier.enemy_visible);
        assert_eq!(soldier.health, 90.0);

        assert_eq!(scenario.apply(3, &mut soldier), 1);
        assert!(!soldier.enemy_visible);
    }

    #[test]
    fn run_stops_when_soldier_dies() {
        let scenario = Scenario::new().at(3, Event::Hit { damage: 1000.0 });
        let mut driver = Driver::new(Box::new(crate::nodes::Idle));
        let mut ctx = AgentContext::new(Soldier::default());

        let summary = scenario.run(&mut driver, &mut ctx, 10, Duration::from_millis(100));

        assert_eq!(summary.frames, 3);
        assert_eq!(summary.final_state, NodeState::Success);
        assert!(!summary.soldier.is_alive());
    }
}
