pub mod aggregate;
pub mod duration;

pub use aggregate::aggregate;
pub use duration::compute;
