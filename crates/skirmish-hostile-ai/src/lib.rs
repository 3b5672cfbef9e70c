//! Hostile ship AI for SKIRMISH.
//!
//! Implements the enemy behavior state machine and class-driven
//! ship profiles.

pub mod fsm;
pub mod profiles;

pub use skirmish_core as core;

#[cfg(test)]
mod tests;
