use super::game::Stage;
use super::mode::Mode;
use super::outcome::Outcome;
use super::score::Score;
use crate::vision::Gesture;

/// everything the display layer needs for one frame: mode, the robot's
/// status label, the freshly detected gesture, and the game snapshot.
/// layout is the renderer's problem; this is just the state to drive it.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub mode: Mode,
    pub label: String,
    pub seen: Gesture,
    pub stage: Stage,
    /// countdown seconds left; meaningful only while stage is Countdown
    pub remaining: u64,
    pub user: Gesture,
    pub robot: Gesture,
    pub outcome: Option<Outcome>,
    pub score: Score,
}

/// port over the excluded rendering layer. consumes one view per loop
/// iteration; failures are logged upstream and never stop the loop.
pub trait Render {
    fn render(&mut self, view: &View) -> anyhow::Result<()>;
}
