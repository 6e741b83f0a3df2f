use crate::hand::Finger;

/// discrete operator commands, one per keystroke of the control panel:
/// mode switches, manual move triggers, per-finger toggles, quit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Command {
    Test,
    Mimic,
    Game,
    Relax,
    Rock,
    Paper,
    Scissors,
    Toggle(Finger),
    Quit,
}

impl TryFrom<char> for Command {
    type Error = &'static str;
    fn try_from(key: char) -> Result<Self, Self::Error> {
        match key {
            't' => Ok(Self::Test),
            'm' => Ok(Self::Mimic),
            'x' => Ok(Self::Game),
            ' ' => Ok(Self::Relax),
            'r' => Ok(Self::Rock),
            'p' => Ok(Self::Paper),
            's' => Ok(Self::Scissors),
            'q' => Ok(Self::Quit),
            '1'..='5' => Ok(Self::Toggle(Finger::from(key as u8 - b'1'))),
            _ => Err("unmapped key"),
        }
    }
}

/// port over the input device feeding operator commands. polled once per
/// loop iteration; non-blocking.
pub trait Input {
    fn poll(&mut self) -> Option<Command>;
}
