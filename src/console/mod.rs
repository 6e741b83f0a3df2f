pub mod board;
pub use board::*;

pub mod driver;
pub use driver::*;

pub mod keyboard;
pub use keyboard::*;

pub mod studio;
pub use studio::*;
