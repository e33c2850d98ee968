//! Terminal bubble shooter.
//!
//! The deterministic game core lives in [`core`]; [`term`] projects it onto
//! a character framebuffer and flushes it with crossterm; [`input`] maps key
//! events to game actions.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
