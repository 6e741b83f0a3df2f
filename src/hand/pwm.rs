use crate::Channel;
use crate::Duty;

/// capability interface over the PWM driver chip. the real implementation
/// wraps a PCA9685 on the I2C bus; tests and the console rig substitute
/// fakes. commands are fire-and-forget, there is no acknowledgment path
/// back from the hardware.
pub trait Pwm {
    fn set_duty(&mut self, channel: Channel, duty: Duty) -> anyhow::Result<()>;
}
