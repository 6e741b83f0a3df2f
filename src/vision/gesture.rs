/// the discrete symbol the classifier resolves a hand into. Unknown is a
/// first-class outcome (an untrackable or non-canonical pose), not an error.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    #[default]
    Unknown,
}

impl Gesture {
    /// the three playable symbols; Unknown is never played
    pub const fn all() -> &'static [Self] {
        &[Self::Rock, Self::Paper, Self::Scissors]
    }

    /// uniform draw over the playable symbols, from an injected rng so
    /// game flow stays deterministic under a fixed seed
    pub fn draw(rng: &mut impl rand::Rng) -> Self {
        match rng.random_range(0..3) {
            0 => Self::Rock,
            1 => Self::Paper,
            _ => Self::Scissors,
        }
    }

    /// the fixed beats-table: rock beats scissors, paper beats rock,
    /// scissors beats paper
    pub const fn beats(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors)
                | (Self::Paper, Self::Rock)
                | (Self::Scissors, Self::Paper)
        )
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl TryFrom<&str> for Gesture {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            _ => Err("unrecognized gesture"),
        }
    }
}

impl crate::Arbitrary for Gesture {
    fn random() -> Self {
        Self::draw(&mut rand::rng())
    }
}
