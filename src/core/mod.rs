//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O, and is deterministic: the RNG is
//! explicit state, so a seed fully determines a game.
//!
//! - [`grid`]: 10x10 bubble field with offset-hex adjacency
//! - [`connect`]: flood-fill match and floating-bubble searches
//! - [`shot`]: trajectory simulation from launch angle to landing cell
//! - [`game_state`]: the shot/pop/fall turn machine
//! - [`rng`]: seeded LCG used for all color draws
//! - [`scoring`]: pop/fall point rules
//! - [`snapshot`]: plain-data state view for renderers

pub mod connect;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod scoring;
pub mod shot;
pub mod snapshot;

// Re-export commonly used types
pub use connect::{find_connected, find_floating};
pub use game_state::{GameState, LastTurnEvent};
pub use grid::Grid;
pub use rng::SimpleRng;
pub use shot::resolve_shot;
pub use snapshot::GameSnapshot;
