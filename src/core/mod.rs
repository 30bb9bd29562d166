//! Core engine types: coordinates, tile types, RNG, configuration, errors.
//!
//! These are the leaf building blocks shared by the board, the path finder
//! and the session. None of them know about game rules.

pub mod cell;
pub mod config;
pub mod error;
pub mod rng;

pub use cell::{Cell, Direction, TileType};
pub use config::GameConfig;
pub use error::ConfigError;
pub use rng::{TileRng, TileRngState};
