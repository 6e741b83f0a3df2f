use super::finger::Finger;
use super::pose::Pose;
use crate::Channel;
use crate::Duty;
use serde::Deserialize;
use serde::Serialize;

/// one finger's servo calibration: its output channel, the duty range that
/// keeps it off the mechanical stops, and its linkage direction. reversed
/// fingers swap which end of the range means open. getting a range wrong
/// stalls the servo against its limit and it buzzes audibly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub channel: Channel,
    pub min: Duty,
    pub max: Duty,
    pub reversed: bool,
}

impl Range {
    /// translate a commanded pose into a duty value. Relax de-energizes the
    /// servo regardless of calibration; Open and Closed land exactly on the
    /// calibrated endpoints, so the emitted duty never leaves [min, max].
    pub const fn duty(&self, pose: Pose) -> Duty {
        match (pose, self.reversed) {
            (Pose::Relax, _) => 0,
            (Pose::Open, true) => self.max,
            (Pose::Open, false) => self.min,
            (Pose::Closed, true) => self.min,
            (Pose::Closed, false) => self.max,
        }
    }
}

/// the full five-finger calibration table, indexed by Finger.
/// fixed configuration: set once at startup, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calibration([Range; 5]);

impl Calibration {
    pub fn range(&self, finger: Finger) -> &Range {
        &self.0[finger as usize]
    }

    /// read a calibration table from a JSON file, for hands wired
    /// differently than the reference build.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        let calibration = serde_json::from_reader(file)?;
        Ok(calibration)
    }
}

/// the reference build: pinky and ring have reversed linkages, ring and
/// middle tolerate a narrower band, index bottoms out early.
impl Default for Calibration {
    fn default() -> Self {
        use crate::SAFE_MAX;
        use crate::SAFE_MIN;
        Self([
            Range {
                channel: 4,
                min: SAFE_MIN,
                max: SAFE_MAX,
                reversed: true,
            },
            Range {
                channel: 3,
                min: 4500,
                max: 7500,
                reversed: true,
            },
            Range {
                channel: 1,
                min: 4500,
                max: 7500,
                reversed: false,
            },
            Range {
                channel: 0,
                min: 4500,
                max: SAFE_MAX,
                reversed: false,
            },
            Range {
                channel: 2,
                min: SAFE_MIN,
                max: SAFE_MAX,
                reversed: false,
            },
        ])
    }
}
