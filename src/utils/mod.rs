// Utils compartidos

pub mod constants;
pub mod greet;

pub use constants::*;
pub use greet::*;
