use crate::Arbitrary;
use crate::vision::Gesture;
use crate::vision::LANDMARKS;
use crate::vision::Landmark;
use crate::vision::Skeleton;
use crate::vision::Tracker;
use std::time::Duration;

/// canned landmark feed for driving the engine without a camera: a hand
/// that strikes a fresh random pose every second or so, with a simulated
/// acquisition latency standing in for the capture device's frame gating.
pub struct Studio {
    skeleton: Skeleton,
    remaining: usize,
    period: Duration,
}

impl Studio {
    /// a feed of `frames` frames at roughly camera rate
    pub fn reel(frames: usize) -> Self {
        Self {
            skeleton: Skeleton::showing(Gesture::Rock),
            remaining: frames,
            period: Duration::from_millis(33),
        }
    }

    /// hold each pose for about a second at 30 fps
    const POSE_HOLD: usize = 30;
}

impl Tracker for Studio {
    fn capture(&mut self) -> Option<Vec<Landmark>> {
        if self.remaining == 0 {
            return None;
        }
        if self.remaining % Self::POSE_HOLD == 0 {
            self.skeleton = Skeleton::random();
        }
        self.remaining -= 1;
        std::thread::sleep(self.period);
        Some((0..LANDMARKS).map(|i| self.skeleton[i]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reel_runs_dry() {
        let mut studio = Studio {
            skeleton: Skeleton::showing(Gesture::Paper),
            remaining: 3,
            period: Duration::ZERO,
        };
        assert!(studio.capture().is_some());
        assert!(studio.capture().is_some());
        assert!(studio.capture().is_some());
        assert!(studio.capture().is_none());
    }

    #[test]
    fn frames_are_full_detections() {
        let mut studio = Studio {
            skeleton: Skeleton::showing(Gesture::Scissors),
            remaining: 1,
            period: Duration::ZERO,
        };
        assert!(studio.capture().unwrap().len() == LANDMARKS);
    }
}
