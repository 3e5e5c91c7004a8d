//! IMPACTOR host.
//!
//! Runs the simulation engine on a frame-loop thread, shares the latest
//! snapshot with callers, and provides the headless runner behind the
//! `impactor` binary.

pub mod config;
pub mod control;
pub mod error;
pub mod frame_loop;
pub mod headless;
pub mod state;

pub use error::AppError;
pub use impactor_core as core;
