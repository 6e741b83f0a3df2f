use super::outcome::Outcome;
use super::score::Score;
use crate::COUNTDOWN;
use crate::RESULT_HOLD;
use crate::hand::Hand;
use crate::hand::Pwm;
use crate::motion::Routine;
use crate::vision::Gesture;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Instant;

/// where the round loop currently sits. the timer is meaningful only in
/// Countdown and Result; Showdown is instantaneous, resolved synchronously
/// the moment it is entered.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Countdown,
    Showdown,
    Result,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Countdown => write!(f, "countdown"),
            Self::Showdown => write!(f, "showdown"),
            Self::Result => write!(f, "result"),
        }
    }
}

/// the round state machine: countdown, lock both moves at the showdown,
/// hold the result banner, repeat. sole owner and mutator of the stage,
/// locked gestures, outcome, and score. time is injected per tick so tests
/// fast-forward instead of sleeping; randomness is a seedable rng so game
/// flow is reproducible.
#[derive(Debug)]
pub struct Game {
    stage: Stage,
    since: Instant,
    user: Gesture,
    robot: Gesture,
    outcome: Option<Outcome>,
    score: Score,
    rng: SmallRng,
}

impl Game {
    pub fn new() -> Self {
        Self::seeded(rand::rng().random())
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            stage: Stage::Idle,
            since: Instant::now(),
            user: Gesture::Unknown,
            robot: Gesture::Unknown,
            outcome: None,
            score: Score::default(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// entering game mode: wipe the score and arm a fresh countdown
    pub fn start(&mut self, now: Instant) {
        self.score = Score::default();
        self.countdown(now);
    }

    /// advance the machine one frame. `seen` is the most recently
    /// classified gesture; it is only consulted at the showdown.
    pub fn tick<P: Pwm>(&mut self, now: Instant, seen: Gesture, hand: &mut Hand<P>) {
        match self.stage {
            Stage::Idle => (),
            Stage::Countdown if now.duration_since(self.since) >= COUNTDOWN => {
                self.showdown(now, seen, hand)
            }
            Stage::Countdown => (),
            Stage::Showdown => unreachable!("showdown resolves synchronously"),
            Stage::Result if now.duration_since(self.since) > RESULT_HOLD => self.countdown(now),
            Stage::Result => (),
        }
    }

    fn countdown(&mut self, now: Instant) {
        self.stage = Stage::Countdown;
        self.since = now;
    }

    /// both moves lock at once: the user's latest classified gesture
    /// (untrackable input is ruled a rock, the documented penalty), the
    /// robot's drawn uniformly at random and performed on the spot.
    fn showdown<P: Pwm>(&mut self, now: Instant, seen: Gesture, hand: &mut Hand<P>) {
        self.stage = Stage::Showdown;
        self.user = match seen {
            Gesture::Unknown => Gesture::Rock,
            seen => seen,
        };
        self.robot = Gesture::draw(&mut self.rng);
        Routine::from(self.robot).perform(hand);
        let outcome = Outcome::from((self.user, self.robot));
        self.score.absorb(outcome);
        self.outcome = Some(outcome);
        log::info!(
            "round {}: {} vs {} -> {}",
            self.score.rounds,
            self.user,
            self.robot,
            outcome
        );
        self.stage = Stage::Result;
        self.since = now;
    }

    /// whole seconds left on the countdown clock, for the display layer.
    /// meaningful only while the stage is Countdown.
    pub fn remaining(&self, now: Instant) -> u64 {
        COUNTDOWN
            .as_secs()
            .saturating_sub(now.duration_since(self.since).as_secs())
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn locked(&self) -> (Gesture, Gesture) {
        (self.user, self.robot)
    }
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
    pub fn score(&self) -> Score {
        self.score
    }
}
