//! # senet-engine
//!
//! A rules engine for Senet, the ancient Egyptian race-and-capture board
//! game: 30 tiles in a serpentine path, seven pieces a side, throwing
//! sticks for chance, and a handful of special houses that decide the
//! endgame.
//!
//! ## Design Principles
//!
//! 1. **Moves Are Values**: Move generation builds immutable `Move`
//!    descriptions without touching the board; `Board::apply_move` is
//!    the only mutation path and validates every move against the
//!    current position first.
//!
//! 2. **Deterministic Chance**: All randomness flows through a seeded
//!    `GameRng` owned by the game. A seed fully reproduces a match.
//!
//! 3. **Rules Below, Turns Above**: The `board` module knows every rule
//!    but nothing about turn order; `game` sequences turns, keeps the
//!    history, and carries the greedy opponent.
//!
//! ## Modules
//!
//! - `core`: Colors, piece identities and state, RNG, throwing sticks
//! - `board`: Board state, layout, move legality, move application
//! - `game`: Turn orchestration, move history, greedy opponent
//!
//! ## Quick Start
//!
//! ```
//! use senet_engine::game::{choose_ai_move, SenetGame};
//!
//! let mut game = SenetGame::new(42);
//!
//! // Play a few turns of a greedy self-play game.
//! for _ in 0..10 {
//!     let ctx = game.roll_turn();
//!     match choose_ai_move(&ctx.moves) {
//!         Some(mv) => {
//!             let mv = mv.clone();
//!             game.apply_move(&mv).unwrap();
//!         }
//!         None => game.skip_turn(),
//!     }
//!     if game.winner().is_some() {
//!         break;
//!     }
//! }
//! ```

pub mod board;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ColorMap, ExitRequirement, GameRng, PieceRef, PieceState, PlayerColor, StickThrow, Tile,
};

pub use crate::board::{ApplyMoveError, Board, Move, MoveList, MoveStatus};

pub use crate::game::{choose_ai_move, MoveRecord, SenetGame, TurnContext};
