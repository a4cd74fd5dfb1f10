//! Simulated soldier entry point.
use anyhow::Result;
use behavior_tree::TreeLogger;
use soldier::{AgentContext, Driver, Scenario, Soldier, SoldierConfig, dirs, presets};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = SoldierConfig::from_env()?;
    let _guard = setup_logging(&config)?;

    let mut root = presets::soldier(config.flee_threshold);
    if let Some(settings) = config.logger_settings()? {
        root = TreeLogger::new(settings).wrap(root);
    }

    let mut driver = Driver::new(root);
    let mut ctx = AgentContext::new(Soldier::default());
    let summary = Scenario::skirmish().run(&mut driver, &mut ctx, config.max_ticks, config.delta());

    tracing::info!(
        frames = summary.frames,
        running_frames = summary.running_frames,
        final_state = %summary.final_state,
        "simulation finished"
    );
    println!(
        "frames: {}  health: {:.0}/{:.0}  ammo: {}/{}  shots fired: {}  in cover: {}",
        summary.frames,
        summary.soldier.health,
        summary.soldier.max_health,
        summary.soldier.ammo,
        summary.soldier.magazine_size,
        summary.soldier.shots_fired,
        summary.soldier.in_cover,
    );

    driver.release();
    Ok(())
}

/// Setup logging to stderr and, if enabled, to a log file.
///
/// The returned guard flushes the file writer when dropped.
fn setup_logging(config: &SoldierConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard, log_dir) = if config.log_to_file {
        let dir = dirs::prepare_log_dir(&dirs::log_dir(config.log_dir.as_deref()))?;
        let file_appender = tracing_appender::rolling::never(&dir, "soldier.log");
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_file)
            .with_ansi(false);
        (Some(layer), Some(guard), Some(dir))
    } else {
        (None, None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}/soldier.log", dir.display());
    }

    Ok(guard)
}
