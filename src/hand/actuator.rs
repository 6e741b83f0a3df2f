use super::calibration::Calibration;
use super::finger::Finger;
use super::pose::Pose;
use super::pwm::Pwm;
use crate::Channel;
use crate::Duty;

/// the actuator model: sole owner of "what did we last command each finger
/// to do". every set() updates the pose table and issues exactly one duty
/// command downstream. construction and drop both force all fingers to
/// Relax, so the motors are de-energized at the edges of the process no
/// matter which state the control loop died in.
pub struct Hand<P: Pwm> {
    pwm: P,
    calibration: Calibration,
    poses: [Pose; 5],
}

impl<P: Pwm> Hand<P> {
    pub fn new(pwm: P, calibration: Calibration) -> Self {
        let mut hand = Self {
            pwm,
            calibration,
            poses: [Pose::Relax; 5],
        };
        hand.relax(); // silent start
        hand
    }

    pub fn pose(&self, finger: Finger) -> Pose {
        self.poses[finger as usize]
    }

    pub fn set(&mut self, finger: Finger, pose: Pose) {
        self.poses[finger as usize] = pose;
        let range = *self.calibration.range(finger);
        self.send(range.channel, range.duty(pose));
    }

    pub fn toggle(&mut self, finger: Finger) {
        self.set(finger, self.pose(finger).toggled());
    }

    /// cuts power to all motors unconditionally
    pub fn relax(&mut self) {
        for finger in Finger::all() {
            self.set(*finger, Pose::Relax);
        }
    }

    /// a bus fault is a hardware problem outside our control; the command
    /// stream never verifies success, so log it and keep the loop alive.
    fn send(&mut self, channel: Channel, duty: Duty) {
        log::debug!("finger channel {} <- duty {}", channel, duty);
        let _ = self
            .pwm
            .set_duty(channel, duty)
            .inspect_err(|e| log::error!("pwm channel {} unreachable: {}", channel, e));
    }
}

impl<P: Pwm> Drop for Hand<P> {
    fn drop(&mut self) {
        log::info!("loosening motors");
        self.relax();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// records every (channel, duty) write so tests can replay the stream
    #[derive(Clone, Default)]
    struct Tape(Rc<RefCell<Vec<(Channel, Duty)>>>);

    impl Tape {
        fn writes(&self) -> Vec<(Channel, Duty)> {
            self.0.borrow().clone()
        }
    }
    impl Pwm for Tape {
        fn set_duty(&mut self, channel: Channel, duty: Duty) -> anyhow::Result<()> {
            self.0.borrow_mut().push((channel, duty));
            Ok(())
        }
    }

    /// always faults, standing in for a dead I2C bus
    struct Severed;
    impl Pwm for Severed {
        fn set_duty(&mut self, _: Channel, _: Duty) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("bus fault"))
        }
    }

    #[test]
    fn starts_relaxed() {
        let tape = Tape::default();
        let hand = Hand::new(tape.clone(), Calibration::default());
        for finger in Finger::all() {
            assert!(hand.pose(*finger) == Pose::Relax);
        }
        // one zero write per finger at startup
        assert!(tape.writes().len() == 5);
        assert!(tape.writes().iter().all(|(_, duty)| *duty == 0));
    }

    #[test]
    fn set_emits_exactly_one_command() {
        let tape = Tape::default();
        let mut hand = Hand::new(tape.clone(), Calibration::default());
        let before = tape.writes().len();
        hand.set(Finger::Index, Pose::Open);
        assert!(tape.writes().len() == before + 1);
        assert!(hand.pose(Finger::Index) == Pose::Open);
    }

    #[test]
    fn duty_never_leaves_calibrated_range() {
        let tape = Tape::default();
        let calibration = Calibration::default();
        let mut hand = Hand::new(tape.clone(), calibration.clone());
        for finger in Finger::all() {
            for pose in [Pose::Open, Pose::Closed, Pose::Relax] {
                hand.set(*finger, pose);
            }
        }
        for finger in Finger::all() {
            let range = calibration.range(*finger);
            for (_, duty) in tape
                .writes()
                .iter()
                .filter(|(channel, _)| *channel == range.channel)
                .filter(|(_, duty)| *duty != 0)
            {
                assert!(*duty >= range.min);
                assert!(*duty <= range.max);
            }
        }
    }

    #[test]
    fn toggle_alternates_from_relax() {
        let tape = Tape::default();
        let mut hand = Hand::new(tape, Calibration::default());
        let finger = Finger::random();
        hand.toggle(finger);
        assert!(hand.pose(finger) == Pose::Open);
        hand.toggle(finger);
        assert!(hand.pose(finger) == Pose::Closed);
        hand.toggle(finger);
        assert!(hand.pose(finger) == Pose::Open);
    }

    #[test]
    fn drop_relaxes_every_finger() {
        let tape = Tape::default();
        {
            let mut hand = Hand::new(tape.clone(), Calibration::default());
            hand.set(Finger::Thumb, Pose::Closed);
            hand.set(Finger::Index, Pose::Open);
        }
        // the last five writes are the relax-on-drop sweep
        let writes = tape.writes();
        let tail = &writes[writes.len() - 5..];
        assert!(tail.iter().all(|(_, duty)| *duty == 0));
        let mut channels = tail.iter().map(|(channel, _)| *channel).collect::<Vec<_>>();
        channels.sort();
        channels.dedup();
        assert!(channels.len() == 5);
    }

    #[test]
    fn bus_fault_does_not_panic() {
        let mut hand = Hand::new(Severed, Calibration::default());
        hand.set(Finger::Middle, Pose::Open);
        assert!(hand.pose(Finger::Middle) == Pose::Open);
    }
}
