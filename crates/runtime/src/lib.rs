pub mod frame;
pub mod rotation;

pub use frame::*;
pub use rotation::*;
