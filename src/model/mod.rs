//! Pure data structures shared by the queue, the actor and the HTTP layer.

pub mod menu;
pub mod order;
pub mod timestamp;

pub use menu::*;
pub use order::*;
pub use timestamp::{format_timestamp, Timestamp};
