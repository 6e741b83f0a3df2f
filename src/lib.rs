//! Gesture-driven rock-paper-scissors engine for a five-finger robotic hand.
//!
//! A hand-pose estimator feeds us 21 normalized landmarks per frame; we read
//! them into a discrete gesture, and a PCA9685-style PWM driver poses the
//! robot's fingers back. Everything hardware-shaped (camera, estimator, PWM
//! chip, keyboard) sits behind a port trait so the core runs against fakes.

pub mod console;
pub mod hand;
pub mod motion;
pub mod play;
pub mod vision;

/// PWM duty-cycle value commanding an actuator's position. 0 de-energizes.
pub type Duty = u16;
/// Physical output channel index on the PWM driver.
pub type Channel = usize;

/// Random instance generation for testing and simulation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SERVO SAFETY LIMITS
// Defaults keeping motors off their mechanical stops. Per-finger overrides
// live in hand::Calibration; no code path may emit outside the finger's range.
// ============================================================================
/// Lowest duty any servo is driven to by default.
pub const SAFE_MIN: Duty = 3000;
/// Highest duty any servo is driven to by default.
pub const SAFE_MAX: Duty = 9000;

// ============================================================================
// CLASSIFIER GEOMETRY
// Normalized image units. Relative distances only, so hand scale cancels out.
// ============================================================================
/// Thumb counts as open iff thumb-tip to pinky-base distance strictly exceeds this.
pub const THUMB_SPAN: f32 = 0.2;
/// Slack added to the wrist-to-base distance before a fingertip counts as open.
/// Damps jitter flicker when a finger is nearly straight.
pub const CURL_MARGIN: f32 = 0.02;

// ============================================================================
// GAME PACING
// ============================================================================
/// Countdown length before both moves lock at the showdown.
pub const COUNTDOWN: std::time::Duration = std::time::Duration::from_secs(3);
/// How long the result banner holds before the next round begins.
pub const RESULT_HOLD: std::time::Duration = std::time::Duration::from_secs(3);
/// Pause between the scissors flair (all fingers open) and the final pose.
pub const FLAIR_HOLD: std::time::Duration = std::time::Duration::from_millis(200);

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
