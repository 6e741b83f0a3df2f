use crate::hand::Finger;
use crate::hand::Pose;
use std::time::Duration;

/// one batch of simultaneous finger commands, optionally held on the hand
/// for a fixed pause before the next batch. phases are plain data so a test
/// can assert on the command batches without waiting out the holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    poses: [(Finger, Pose); 5],
    hold: Option<Duration>,
}

impl Phase {
    pub fn new(poses: [(Finger, Pose); 5]) -> Self {
        Self { poses, hold: None }
    }

    /// every finger commanded to the same pose
    pub fn uniform(pose: Pose) -> Self {
        Self::new([
            (Finger::Pinky, pose),
            (Finger::Ring, pose),
            (Finger::Middle, pose),
            (Finger::Index, pose),
            (Finger::Thumb, pose),
        ])
    }

    pub fn held(mut self, hold: Duration) -> Self {
        self.hold = Some(hold);
        self
    }

    pub fn poses(&self) -> &[(Finger, Pose)] {
        &self.poses
    }

    pub fn hold(&self) -> Option<Duration> {
        self.hold
    }
}
