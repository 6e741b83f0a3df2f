/// the five logical fingers of the robot hand.
/// discriminants index the pose table and the calibration table;
/// the physical PWM channel each finger lands on is calibration, not identity.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Finger {
    Pinky = 0,
    Ring = 1,
    Middle = 2,
    Index = 3,
    Thumb = 4,
}

impl Finger {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Pinky,
            Self::Ring,
            Self::Middle,
            Self::Index,
            Self::Thumb,
        ]
    }
}

impl From<u8> for Finger {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::Pinky,
            1 => Self::Ring,
            2 => Self::Middle,
            3 => Self::Index,
            4 => Self::Thumb,
            _ => panic!("no sixth finger"),
        }
    }
}
impl From<Finger> for u8 {
    fn from(finger: Finger) -> u8 {
        finger as u8
    }
}

impl std::fmt::Display for Finger {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pinky => write!(f, "pinky"),
            Self::Ring => write!(f, "ring"),
            Self::Middle => write!(f, "middle"),
            Self::Index => write!(f, "index"),
            Self::Thumb => write!(f, "thumb"),
        }
    }
}

impl crate::Arbitrary for Finger {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..5) as u8)
    }
}
