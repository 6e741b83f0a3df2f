use super::command::Input;
use super::control::Control;
use super::view::Render;
use crate::hand::Hand;
use crate::hand::Pwm;
use crate::vision::Skeleton;
use crate::vision::Tracker;
use std::time::Instant;

/// the cooperative frame loop gluing the external collaborators to the
/// core. single-threaded: one iteration per captured frame, gated by the
/// tracker's acquisition latency. exactly one mutable owner per piece of
/// state, so there is nothing to lock.
pub struct Engine<P, T, I, R>
where
    P: Pwm,
    T: Tracker,
    I: Input,
    R: Render,
{
    hand: Hand<P>,
    control: Control,
    tracker: T,
    input: I,
    render: R,
}

impl<P, T, I, R> Engine<P, T, I, R>
where
    P: Pwm,
    T: Tracker,
    I: Input,
    R: Render,
{
    pub fn new(hand: Hand<P>, control: Control, tracker: T, input: I, render: R) -> Self {
        Self {
            hand,
            control,
            tracker,
            input,
            render,
        }
    }

    /// run until the operator quits or the frame source is exhausted.
    /// the hand's drop loosens every motor on the way out, whichever
    /// state the loop died in.
    pub fn run(mut self) {
        log::info!("robot online");
        while let Some(landmarks) = self.tracker.capture() {
            let now = Instant::now();
            let seen = Skeleton::try_from(landmarks.as_slice())
                .map(|skeleton| skeleton.gesture())
                .unwrap_or_default();
            self.control.tick(now, seen, &mut self.hand);
            let view = self.control.view(now, seen);
            let _ = self
                .render
                .render(&view)
                .inspect_err(|e| log::warn!("render failed: {}", e));
            if let Some(command) = self.input.poll() {
                log::debug!("command {:?}", command);
                if !self.control.apply(command, now, &mut self.hand) {
                    break;
                }
            }
        }
        log::info!("shutting down");
    }
}
