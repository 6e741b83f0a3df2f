use super::outcome::Outcome;

/// running tally for the current game session. rounds counts everything
/// played including ties; it gates nothing, it's bookkeeping for display.
/// wiped whenever game mode is (re-)entered, never persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub human: u32,
    pub robot: u32,
    pub rounds: u32,
}

impl Score {
    pub fn absorb(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Human => self.human += 1,
            Outcome::Robot => self.robot += 1,
            Outcome::Tie => (),
        }
        self.rounds += 1;
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "you {} - {} robot", self.human, self.robot)
    }
}
