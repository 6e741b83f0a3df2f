pub mod classifier;
pub use classifier::*;

pub mod gesture;
pub use gesture::*;

pub mod landmark;
pub use landmark::*;

pub mod skeleton;
pub use skeleton::*;

pub mod tracker;
pub use tracker::*;
