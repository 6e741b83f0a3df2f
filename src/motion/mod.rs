pub mod phase;
pub use phase::*;

pub mod routine;
pub use routine::*;
