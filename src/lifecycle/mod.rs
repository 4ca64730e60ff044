//! Starting, wiring and stopping the café actor, plus tracing setup.

pub mod cafe_system;
pub mod tracing;

pub use cafe_system::*;
pub use tracing::*;
