//! Core engine types: colors, pieces, RNG, throwing sticks.
//!
//! This module contains the fundamental value types the rules are built
//! from. Everything here is board-agnostic: positions are plain tile
//! numbers, and all movement semantics live in the `board` module.

pub mod color;
pub mod piece;
pub mod rng;
pub mod sticks;

pub use color::{ColorMap, PlayerColor};
pub use piece::{ExitRequirement, PieceRef, PieceState, Tile};
pub use rng::GameRng;
pub use sticks::{StickThrow, STICK_COUNT};
