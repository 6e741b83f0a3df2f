use crate::play::Mode;
use crate::play::Outcome;
use crate::play::Render;
use crate::play::Stage;
use crate::play::View;
use colored::Colorize;

/// terminal scoreboard standing in for the control-panel overlay:
/// a mode/status bar, the detected gesture or the live score, the
/// countdown digits, and the colored outcome banner. prints only when the
/// line changes so a 30 fps loop doesn't flood the terminal.
#[derive(Debug, Default)]
pub struct Board {
    last: String,
}

impl Board {
    fn line(view: &View) -> String {
        let bar = format!(
            "[{}] robot {}",
            view.mode.to_string().yellow(),
            view.label.green()
        );
        match (view.mode, view.stage) {
            (Mode::Game, Stage::Countdown) => {
                format!("{}  {}  round in {}", bar, view.score, view.remaining)
            }
            (Mode::Game, Stage::Result) => {
                let banner = match view.outcome {
                    Some(outcome @ Outcome::Human) => outcome.to_string().green(),
                    Some(outcome @ Outcome::Robot) => outcome.to_string().red(),
                    _ => String::from("tie").yellow(),
                };
                format!(
                    "{}  you {} vs robot {}  {}  {}",
                    bar, view.user, view.robot, banner, view.score
                )
            }
            (Mode::Game, _) => format!("{}  {}", bar, view.score),
            _ => format!("{}  detected {}", bar, view.seen),
        }
    }
}

impl Render for Board {
    fn render(&mut self, view: &View) -> anyhow::Result<()> {
        let line = Self::line(view);
        if line != self.last {
            println!("{}", line);
            self.last = line;
        }
        Ok(())
    }
}
