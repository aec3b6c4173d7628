//! Game orchestration: turns, throws, and the running record of play.
//!
//! `SenetGame` owns the board, the RNG, and whose turn it is. It is the
//! layer a UI or driver talks to: throw the sticks, list the legal
//! moves, apply the chosen one (or skip when there is none), and watch
//! for a winner. The board below it stays a pure rules machine with no
//! notion of turn order.

pub mod ai;

pub use ai::choose_ai_move;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{ApplyMoveError, Board, Move, MoveList};
use crate::core::color::PlayerColor;
use crate::core::rng::GameRng;
use crate::core::sticks::StickThrow;

/// A throw together with the moves it allows the side to play.
#[derive(Clone, Debug)]
pub struct TurnContext {
    pub roll: StickThrow,
    pub moves: MoveList,
}

/// One applied move in a game's history.
///
/// `turn` is the 0-based turn counter at the moment the move was played.
/// Skipped turns advance the counter without leaving a record, so
/// consecutive records may have non-consecutive turn numbers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub color: PlayerColor,
    pub action: Move,
    pub turn: u32,
}

/// A full game of Senet: board, turn order, and chance.
///
/// ## Usage
///
/// ```
/// use senet_engine::game::{choose_ai_move, SenetGame};
///
/// let mut game = SenetGame::new(42);
/// let ctx = game.roll_turn();
///
/// if let Some(mv) = choose_ai_move(&ctx.moves) {
///     let mv = mv.clone();
///     game.apply_move(&mv).unwrap();
/// } else {
///     game.skip_turn();
/// }
/// ```
#[derive(Clone, Debug)]
pub struct SenetGame {
    board: Board,
    turn: PlayerColor,
    rng: GameRng,
    last_move: Option<Move>,
    turn_count: u32,
    history: Vector<MoveRecord>,
}

impl SenetGame {
    /// Start a game with a fixed seed. Light moves first.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Start a game seeded from OS entropy.
    ///
    /// The drawn seed is retrievable via [`seed`], so the game can
    /// still be replayed.
    ///
    /// [`seed`]: SenetGame::seed
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    fn with_rng(rng: GameRng) -> Self {
        Self {
            board: Board::new(),
            turn: PlayerColor::Light,
            rng,
            last_move: None,
            turn_count: 0,
            history: Vector::new(),
        }
    }

    // === Turn flow ===

    /// Throw the sticks for the current turn.
    pub fn roll(&mut self) -> StickThrow {
        StickThrow::random(&mut self.rng)
    }

    /// Legal moves for the side to play with the given roll value.
    #[must_use]
    pub fn legal_moves(&self, roll: u8) -> MoveList {
        self.board.legal_moves(self.turn, roll)
    }

    /// Throw the sticks and enumerate the resulting moves in one step.
    pub fn roll_turn(&mut self) -> TurnContext {
        let roll = self.roll();
        let moves = self.legal_moves(roll.value);
        TurnContext { roll, moves }
    }

    /// Play a move for the side to move, then pass the turn.
    ///
    /// The move is recorded in the history with the current turn number.
    ///
    /// # Errors
    ///
    /// Propagates [`ApplyMoveError`] when the move no longer matches the
    /// board; the turn does not pass in that case.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), ApplyMoveError> {
        self.board.apply_move(mv)?;

        self.last_move = Some(mv.clone());
        self.history.push_back(MoveRecord {
            color: self.turn,
            action: mv.clone(),
            turn: self.turn_count,
        });
        self.turn_count += 1;
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// Pass the turn without moving.
    ///
    /// This is the normal response to a throw with no legal moves; it
    /// clears `last_move` and leaves no history record.
    pub fn skip_turn(&mut self) {
        self.last_move = None;
        self.turn_count += 1;
        self.turn = self.turn.opponent();
    }

    /// The side that has borne off all seven pieces, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerColor> {
        self.board.winner()
    }

    // === Accessors ===

    /// The board. Mutation goes through [`apply_move`] only.
    ///
    /// [`apply_move`]: SenetGame::apply_move
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[must_use]
    pub fn turn(&self) -> PlayerColor {
        self.turn
    }

    /// Completed turns, skips included.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// The most recent action: `Some` after a move, `None` after a skip
    /// or at the start.
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    /// Every applied move, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The seed the game's throws are drawn from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
