pub mod actuator;
pub use actuator::*;

pub mod calibration;
pub use calibration::*;

pub mod finger;
pub use finger::*;

pub mod pose;
pub use pose::*;

pub mod pwm;
pub use pwm::*;
