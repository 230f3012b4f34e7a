pub mod segment;
pub mod trim;

pub use segment::*;
pub use trim::*;
