//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They hold no state of their own.

pub mod earth;
pub mod explosion;
pub mod flight;
pub mod impact;
pub mod snapshot;
