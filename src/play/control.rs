use super::command::Command;
use super::game::Game;
use super::mode::Mode;
use super::view::View;
use crate::hand::Hand;
use crate::hand::Pwm;
use crate::motion::Routine;
use crate::vision::Gesture;
use std::time::Instant;

/// the top-level mode selector. owns the mode and the game machine, routes
/// each tick's gesture to whichever consumer the mode names, and applies
/// operator commands. the status label mirrors the panel's robot readout.
pub struct Control {
    mode: Mode,
    game: Game,
    label: String,
}

impl Control {
    pub fn new() -> Self {
        Self::with(Game::new())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with(Game::seeded(seed))
    }

    fn with(game: Game) -> Self {
        Self {
            mode: Mode::Test,
            game,
            label: String::from("relaxed"),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// apply one operator command. returns false only for quit. mode
    /// switches never touch actuator state, except relax which loosens the
    /// hand and drops back to test mode, exactly as the panel's spacebar
    /// is wired. manual moves and toggles work in test mode only.
    pub fn apply<P: Pwm>(&mut self, command: Command, now: Instant, hand: &mut Hand<P>) -> bool {
        match command {
            Command::Quit => return false,
            Command::Relax => {
                self.mode = Mode::Test;
                hand.relax();
                self.label = String::from("loose");
            }
            Command::Test => {
                self.mode = Mode::Test;
                self.label = String::from("manual");
            }
            Command::Mimic => {
                self.mode = Mode::Mimic;
                self.label = String::from("watching");
            }
            Command::Game => {
                self.mode = Mode::Game;
                self.game.start(now);
                self.label = String::from("game on");
            }
            Command::Rock if self.mode == Mode::Test => self.perform(Gesture::Rock, hand),
            Command::Paper if self.mode == Mode::Test => self.perform(Gesture::Paper, hand),
            Command::Scissors if self.mode == Mode::Test => self.perform(Gesture::Scissors, hand),
            Command::Toggle(finger) if self.mode == Mode::Test => hand.toggle(finger),
            // move and toggle keys outside test mode fall through
            Command::Rock | Command::Paper | Command::Scissors | Command::Toggle(_) => (),
        }
        true
    }

    /// per-tick dispatch of the latest classified gesture. test ignores it;
    /// mimic mirrors anything playable and holds pose on unknown; game
    /// consults it only inside the showdown.
    pub fn tick<P: Pwm>(&mut self, now: Instant, seen: Gesture, hand: &mut Hand<P>) {
        match self.mode {
            Mode::Test => (),
            Mode::Mimic => match seen {
                Gesture::Unknown => (),
                seen => self.perform(seen, hand),
            },
            Mode::Game => {
                let played = self.game.score().rounds;
                self.game.tick(now, seen, hand);
                if self.game.score().rounds > played {
                    self.label = self.game.locked().1.to_string();
                }
            }
        }
    }

    pub fn view(&self, now: Instant, seen: Gesture) -> View {
        let (user, robot) = self.game.locked();
        View {
            mode: self.mode,
            label: self.label.clone(),
            seen,
            stage: self.game.stage(),
            remaining: self.game.remaining(now),
            user,
            robot,
            outcome: self.game.outcome(),
            score: self.game.score(),
        }
    }

    fn perform<P: Pwm>(&mut self, gesture: Gesture, hand: &mut Hand<P>) {
        Routine::from(gesture).perform(hand);
        self.label = gesture.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Calibration;
    use crate::hand::Finger;
    use crate::hand::Pose;
    use crate::play::game::Stage;
    use crate::{Channel, Duty};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct Tape(Rc<RefCell<Vec<(Channel, Duty)>>>);
    impl Pwm for Tape {
        fn set_duty(&mut self, channel: Channel, duty: Duty) -> anyhow::Result<()> {
            self.0.borrow_mut().push((channel, duty));
            Ok(())
        }
    }

    fn rig() -> (Tape, Hand<Tape>, Control) {
        let tape = Tape::default();
        let hand = Hand::new(tape.clone(), Calibration::default());
        (tape, hand, Control::seeded(0))
    }

    #[test]
    fn test_mode_ignores_gestures() {
        let (tape, mut hand, mut control) = rig();
        let before = tape.0.borrow().len();
        control.tick(Instant::now(), Gesture::Paper, &mut hand);
        assert!(tape.0.borrow().len() == before);
    }

    #[test]
    fn mimic_mirrors_playable_gestures() {
        let (_, mut hand, mut control) = rig();
        let now = Instant::now();
        assert!(control.apply(Command::Mimic, now, &mut hand));
        control.tick(now, Gesture::Paper, &mut hand);
        for finger in Finger::all() {
            assert!(hand.pose(*finger) == Pose::Open);
        }
    }

    #[test]
    fn mimic_holds_pose_on_unknown() {
        let (_, mut hand, mut control) = rig();
        let now = Instant::now();
        control.apply(Command::Mimic, now, &mut hand);
        control.tick(now, Gesture::Rock, &mut hand);
        control.tick(now, Gesture::Unknown, &mut hand);
        for finger in Finger::all() {
            assert!(hand.pose(*finger) == Pose::Closed);
        }
    }

    #[test]
    fn entering_game_resets_and_arms() {
        let (_, mut hand, mut control) = rig();
        let base = Instant::now();
        control.apply(Command::Game, base, &mut hand);
        control.tick(base + crate::COUNTDOWN, Gesture::Rock, &mut hand);
        let played = control.view(base, Gesture::Unknown).score.rounds;
        assert!(played == 1);
        control.apply(Command::Game, base, &mut hand);
        let view = control.view(base, Gesture::Unknown);
        assert!(view.score.rounds == 0);
        assert!(view.stage == Stage::Countdown);
    }

    #[test]
    fn manual_moves_only_in_test_mode() {
        let (_, mut hand, mut control) = rig();
        let now = Instant::now();
        control.apply(Command::Mimic, now, &mut hand);
        control.apply(Command::Rock, now, &mut hand);
        for finger in Finger::all() {
            assert!(hand.pose(*finger) == Pose::Relax);
        }
        control.apply(Command::Test, now, &mut hand);
        control.apply(Command::Rock, now, &mut hand);
        for finger in Finger::all() {
            assert!(hand.pose(*finger) == Pose::Closed);
        }
    }

    #[test]
    fn relax_is_available_in_any_mode() {
        let (_, mut hand, mut control) = rig();
        let now = Instant::now();
        control.apply(Command::Mimic, now, &mut hand);
        control.tick(now, Gesture::Rock, &mut hand);
        control.apply(Command::Relax, now, &mut hand);
        assert!(control.mode() == Mode::Test);
        for finger in Finger::all() {
            assert!(hand.pose(*finger) == Pose::Relax);
        }
    }

    #[test]
    fn quit_returns_false() {
        let (_, mut hand, mut control) = rig();
        assert!(!control.apply(Command::Quit, Instant::now(), &mut hand));
    }

    #[test]
    fn game_ignores_gestures_outside_showdown() {
        let (_, mut hand, mut control) = rig();
        let base = Instant::now();
        control.apply(Command::Game, base, &mut hand);
        // mid-countdown gestures move nothing and lock nothing
        control.tick(base + Duration::from_secs(1), Gesture::Paper, &mut hand);
        let view = control.view(base + Duration::from_secs(1), Gesture::Paper);
        assert!(view.user == Gesture::Unknown);
        for finger in Finger::all() {
            assert!(hand.pose(*finger) == Pose::Relax);
        }
    }

    #[test]
    fn label_tracks_robot_move_after_showdown() {
        let (_, mut hand, mut control) = rig();
        let base = Instant::now();
        control.apply(Command::Game, base, &mut hand);
        assert!(control.view(base, Gesture::Unknown).label == "game on");
        control.tick(base + crate::COUNTDOWN, Gesture::Rock, &mut hand);
        let view = control.view(base + crate::COUNTDOWN, Gesture::Rock);
        assert!(view.label == view.robot.to_string());
    }
}
