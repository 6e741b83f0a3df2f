//! Robot control panel.
//!
//! Runs the gesture/game engine against console stand-ins: a logging PWM
//! driver, a canned landmark feed, and stdin commands. Type a panel key and
//! press enter: x game, m mimic, t test, space relax, r/p/s moves, 1-5
//! finger toggles, q quit.

use clap::Parser;
use roboshambo::console::Board;
use roboshambo::console::Driver;
use roboshambo::console::Keyboard;
use roboshambo::console::Studio;
use roboshambo::hand::Calibration;
use roboshambo::hand::Hand;
use roboshambo::play::Control;
use roboshambo::play::Engine;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// seed for the robot's move selection, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
    /// JSON calibration table overriding the built-in servo ranges
    #[arg(long)]
    calibration: Option<std::path::PathBuf>,
    /// frames to run before the canned feed is exhausted
    #[arg(long, default_value_t = 9000)]
    frames: usize,
}

fn main() -> anyhow::Result<()> {
    roboshambo::log();
    let args = Args::parse();
    let calibration = match args.calibration {
        Some(ref path) => Calibration::load(path)?,
        None => Calibration::default(),
    };
    let control = match args.seed {
        Some(seed) => Control::seeded(seed),
        None => Control::new(),
    };
    let hand = Hand::new(Driver, calibration);
    Engine::new(
        hand,
        control,
        Studio::reel(args.frames),
        Keyboard::listen(),
        Board::default(),
    )
    .run();
    Ok(())
}
