use super::gesture::Gesture;
use super::landmark::*;
use crate::Arbitrary;

/// a validated full set of 21 hand landmarks. partial detections are
/// rejected at construction so classification can never index out of range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skeleton([Landmark; LANDMARKS]);

impl Skeleton {
    /// synthesize a canonical landmark set showing a gesture, for feeds
    /// and tests that run without a camera. Unknown renders as a single
    /// raised index finger, which the classifier cannot resolve.
    pub fn showing(gesture: Gesture) -> Self {
        match gesture {
            Gesture::Rock => Self::posed(false, false, false, false, false),
            Gesture::Paper => Self::posed(true, true, true, true, true),
            Gesture::Scissors => Self::posed(false, false, true, true, false),
            Gesture::Unknown => Self::posed(false, true, false, false, false),
        }
    }

    /// place each finger of a synthetic hand open or curled. the wrist sits
    /// at the bottom of the frame, bases a third up, open tips well past
    /// their base distance and curled tips well inside it.
    pub fn posed(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> Self {
        let mut landmarks = [Landmark::default(); LANDMARKS];
        landmarks[WRIST] = Landmark::from((0.5, 1.0));
        for base in [INDEX_BASE, MIDDLE_BASE, RING_BASE, PINKY_BASE] {
            landmarks[base] = Landmark::from((0.5, 0.7));
        }
        for (tip, open) in [
            (INDEX_TIP, index),
            (MIDDLE_TIP, middle),
            (RING_TIP, ring),
            (PINKY_TIP, pinky),
        ] {
            landmarks[tip] = Landmark::from((0.5, if open { 0.4 } else { 0.8 }));
        }
        landmarks[THUMB_TIP] = Landmark::from((if thumb { 0.8 } else { 0.55 }, 0.7));
        Self(landmarks)
    }
}

impl From<[Landmark; LANDMARKS]> for Skeleton {
    fn from(landmarks: [Landmark; LANDMARKS]) -> Self {
        Self(landmarks)
    }
}

impl TryFrom<&[Landmark]> for Skeleton {
    type Error = &'static str;
    fn try_from(landmarks: &[Landmark]) -> Result<Self, Self::Error> {
        landmarks
            .try_into()
            .map(Self)
            .map_err(|_| "partial detection")
    }
}

impl std::ops::Index<usize> for Skeleton {
    type Output = Landmark;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Arbitrary for Skeleton {
    fn random() -> Self {
        Self::showing(Gesture::random())
    }
}
