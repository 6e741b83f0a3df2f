use super::gesture::Gesture;
use super::landmark::*;
use super::skeleton::Skeleton;
use crate::CURL_MARGIN;
use crate::THUMB_SPAN;

/// geometric gesture classification. pure and stateless: identical
/// landmarks always resolve to the same symbol. the estimator already
/// normalizes coordinates, so relative distances are scale-invariant and
/// three canonical poses don't warrant a learned model.
impl Skeleton {
    /// the thumb can't extend away from the wrist like the others, so its
    /// openness reads off the gap between thumb tip and pinky base.
    /// strictly greater: a span of exactly the threshold stays closed.
    fn thumb(&self) -> bool {
        self[THUMB_TIP].dist(&self[PINKY_BASE]) > THUMB_SPAN
    }

    /// a finger is open iff its tip sits further from the wrist than its
    /// base does, beyond the jitter margin.
    fn open(&self, tip: usize, base: usize) -> bool {
        let wrist = self[WRIST];
        wrist.dist(&self[tip]) > wrist.dist(&self[base]) + CURL_MARGIN
    }

    /// resolve the pose into a symbol: fist is rock, flat hand is paper,
    /// middle+ring alone is scissors, anything else is unknown.
    pub fn gesture(&self) -> Gesture {
        let thumb = self.thumb();
        let index = self.open(INDEX_TIP, INDEX_BASE);
        let middle = self.open(MIDDLE_TIP, MIDDLE_BASE);
        let ring = self.open(RING_TIP, RING_BASE);
        let pinky = self.open(PINKY_TIP, PINKY_BASE);
        let count = [thumb, index, middle, ring, pinky]
            .iter()
            .filter(|open| **open)
            .count();
        match count {
            0 => Gesture::Rock,
            5 => Gesture::Paper,
            2 if middle && ring => Gesture::Scissors,
            _ => Gesture::Unknown,
        }
    }
}
