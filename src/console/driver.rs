use crate::Channel;
use crate::Duty;
use crate::hand::Pwm;

/// stand-in for the PCA9685 when running without hardware. every duty
/// write lands in the debug log instead of on the I2C bus.
#[derive(Debug, Default)]
pub struct Driver;

impl Pwm for Driver {
    fn set_duty(&mut self, channel: Channel, duty: Duty) -> anyhow::Result<()> {
        log::debug!("pca9685 ch{} duty {}", channel, duty);
        Ok(())
    }
}
