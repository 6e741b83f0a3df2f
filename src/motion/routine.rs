use super::phase::Phase;
use crate::FLAIR_HOLD;
use crate::hand::Finger;
use crate::hand::Hand;
use crate::hand::Pose;
use crate::hand::Pwm;
use crate::vision::Gesture;

/// the move executor: a fixed phase sequence realizing a gesture on the
/// hand. rock and paper are a single batch; scissors opens flat first (the
/// flair, so the pose reads visually) and forms the blades after a short
/// hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine(Vec<Phase>);

impl From<Gesture> for Routine {
    fn from(gesture: Gesture) -> Self {
        match gesture {
            Gesture::Rock => Self(vec![Phase::uniform(Pose::Closed)]),
            Gesture::Paper => Self(vec![Phase::uniform(Pose::Open)]),
            Gesture::Scissors => Self(vec![
                Phase::uniform(Pose::Open).held(FLAIR_HOLD),
                Phase::new([
                    (Finger::Pinky, Pose::Closed),
                    (Finger::Ring, Pose::Open),
                    (Finger::Middle, Pose::Open),
                    (Finger::Index, Pose::Closed),
                    (Finger::Thumb, Pose::Closed),
                ]),
            ]),
            // untrackable input holds the last pose
            Gesture::Unknown => Self(vec![]),
        }
    }
}

impl Routine {
    pub fn phases(&self) -> &[Phase] {
        &self.0
    }

    /// issue every phase to the hand, blocking through the holds.
    /// synchronous and single-threaded, so a routine always runs to
    /// completion; commands arriving mid-hold are polled next iteration.
    pub fn perform<P: Pwm>(&self, hand: &mut Hand<P>) {
        for phase in self.phases() {
            for (finger, pose) in phase.poses() {
                hand.set(*finger, *pose);
            }
            if let Some(hold) = phase.hold() {
                std::thread::sleep(hold);
            }
        }
    }
}
