/// which consumer acts on the incoming gesture stream. changed only by
/// explicit operator command, never by time or classifier output.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Mode {
    /// moves and finger toggles on explicit command only
    #[default]
    Test,
    /// mirror every classified gesture immediately
    Mimic,
    /// gestures feed the round state machine
    Game,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Test => write!(f, "test"),
            Self::Mimic => write!(f, "mimic"),
            Self::Game => write!(f, "game"),
        }
    }
}
