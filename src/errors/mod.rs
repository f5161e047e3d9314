mod decode;
mod gate;

pub use decode::*;
pub use gate::*;
