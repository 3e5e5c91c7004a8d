//! Core types and definitions for the IMPACTOR simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, snapshot views, events, and constants.
//! It has no dependency on any runtime, network or rendering framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
