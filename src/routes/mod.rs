pub mod gate;
pub mod views;

pub use gate::*;
