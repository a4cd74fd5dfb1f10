use std::sync::{Arc, Mutex};
use std::time::Duration;

use behavior_tree::{LoggerSettings, NodeState, TreeLogger};
use soldier::{AgentContext, Driver, Event, Scenario, Soldier, presets};

const STEP: Duration = Duration::from_millis(100);

fn run_frames(
    driver: &mut Driver,
    ctx: &mut AgentContext,
    scenario: &Scenario,
    frames: u64,
) -> Vec<NodeState> {
    (0..frames)
        .map(|_| {
            scenario.apply(driver.ticks(), &mut ctx.soldier);
            driver.tick(ctx, STEP)
        })
        .collect()
}

#[test]
fn spots_enemy_empties_magazine_then_reloads() {
    let mut driver = Driver::new(presets::soldier(0.3));
    let mut ctx = AgentContext::new(Soldier::default());
    let scenario = Scenario::new().at(2, Event::EnemySpotted);

    let states = run_frames(&mut driver, &mut ctx, &scenario, 9);

    // Two idle frames, six shots, then the first reload tick.
    assert!(states[..8].iter().all(|s| s.is_success()));
    assert_eq!(states[8], NodeState::Running);
    assert_eq!(ctx.soldier.shots_fired, 6);
    assert_eq!(ctx.soldier.ammo, 0);

    // Reload takes ten ticks in total; the tenth also fires.
    let states = run_frames(&mut driver, &mut ctx, &scenario, 9);
    assert_eq!(&states[..8], &[NodeState::Running; 8]);
    assert_eq!(states[8], NodeState::Success);
    assert_eq!(ctx.soldier.ammo, 5);
    assert_eq!(ctx.soldier.shots_fired, 7);
}

#[test]
fn heavy_hits_send_soldier_into_cover() {
    let mut driver = Driver::new(presets::soldier(0.3));
    let mut ctx = AgentContext::new(Soldier::default());

    let states = run_frames(&mut driver, &mut ctx, &Scenario::skirmish(), 18);
    assert_eq!(ctx.soldier.health, 20.0);
    assert!(!ctx.soldier.in_cover, "cover takes five ticks from frame 14");
    assert_eq!(states[17], NodeState::Running);

    let states = run_frames(&mut driver, &mut ctx, &Scenario::skirmish(), 1);
    assert!(ctx.soldier.in_cover);
    assert_eq!(states[0], NodeState::Running);
    assert!(ctx.soldier.health > 20.0, "healing starts on arrival");
}

#[test]
fn skirmish_ends_out_of_cover_and_alive() {
    let mut driver = Driver::new(presets::soldier(0.3));
    let mut ctx = AgentContext::new(Soldier::default());

    let summary = Scenario::skirmish().run(&mut driver, &mut ctx, 60, STEP);

    assert_eq!(summary.frames, 60);
    assert_eq!(summary.final_state, NodeState::Success);
    assert!(summary.running_frames > 0);
    assert!(summary.soldier.is_alive());
    assert!(!summary.soldier.in_cover);
    assert!(!summary.soldier.enemy_visible);
    assert!(summary.soldier.shots_fired >= 6);
    assert!(summary.soldier.health >= 20.0);
    assert_eq!(summary.soldier.ammo, 6, "magazine topped up before leaving cover");

    driver.release();
}

#[test]
fn tree_logging_does_not_change_the_outcome() {
    let lines = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&lines);
    let settings = LoggerSettings::builder()
        .prefix("[soldier] ")
        .sink(move |line: &str| sink.lock().unwrap().push(line.to_owned()))
        .build()
        .unwrap();

    let mut plain = Driver::new(presets::soldier(0.3));
    let mut logged = Driver::new(TreeLogger::new(settings).wrap(presets::soldier(0.3)));
    let mut plain_ctx = AgentContext::new(Soldier::default());
    let mut logged_ctx = AgentContext::new(Soldier::default());

    let expected = Scenario::skirmish().run(&mut plain, &mut plain_ctx, 60, STEP);
    let actual = Scenario::skirmish().run(&mut logged, &mut logged_ctx, 60, STEP);
    assert_eq!(actual, expected);

    let lines = lines.lock().unwrap();
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|l| l.starts_with("[soldier] ")));
    assert!(lines.iter().any(|l| l.contains("TakeCover#") && l.ends_with("Running")));
    assert!(lines.iter().any(|l| l.contains("Reload#") && l.ends_with("Success")));

    plain.release();
    logged.release();
}

#[test]
fn sentry_holds_position_under_fire() {
    let mut driver = Driver::new(presets::sentry());
    let mut ctx = AgentContext::new(Soldier::default());
    let scenario = Scenario::new()
        .at(0, Event::EnemySpotted)
        .at(1, Event::Hit { damage: 90.0 });

    run_frames(&mut driver, &mut ctx, &scenario, 5);

    assert!(!ctx.soldier.in_cover);
    assert_eq!(ctx.soldier.shots_fired, 5);
}
