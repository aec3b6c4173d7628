//! Move values: what a single legal action looks like.
//!
//! A `Move` is an immutable description produced by move generation and
//! consumed exactly once by `Board::apply_move`. It names the piece, where
//! it stands, where it goes (or that it leaves the board), any opposing
//! piece it displaces, and a human-readable note for logs and UIs.
//!
//! Moves are plain values: building one never touches the board, and a
//! move kept across later applications simply becomes stale and is
//! rejected when applied.

use crate::core::piece::{PieceRef, Tile};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// How a move changes a piece's relationship to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveStatus {
    /// Ordinary travel along the path, possibly capturing.
    Normal,
    /// The piece leaves the board permanently.
    Exit,
    /// The piece is knocked back to the rebirth area.
    Rebirth,
}

/// One legal action for one piece.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub piece: PieceRef,
    pub start: Option<Tile>,
    pub end: Option<Tile>,
    pub capture: Option<PieceRef>,
    pub status: MoveStatus,
    pub note: String,
}

/// A side's candidate moves for one roll: at most one per piece, stored
/// inline.
pub type MoveList = SmallVec<[Move; 7]>;

impl Move {
    /// Create an ordinary move from `start` to `end`.
    #[must_use]
    pub fn normal(
        piece: PieceRef,
        start: Tile,
        end: Tile,
        capture: Option<PieceRef>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            piece,
            start: Some(start),
            end: Some(end),
            capture,
            status: MoveStatus::Normal,
            note: note.into(),
        }
    }

    /// Create a move that takes the piece off the board.
    #[must_use]
    pub fn exit(piece: PieceRef, start: Tile, note: impl Into<String>) -> Self {
        Self {
            piece,
            start: Some(start),
            end: None,
            capture: None,
            status: MoveStatus::Exit,
            note: note.into(),
        }
    }

    /// Create a knock-back to `rebirth_tile`.
    ///
    /// Rebirth targets are chosen among unoccupied tiles, so a rebirth
    /// move never captures.
    #[must_use]
    pub fn rebirth(piece: PieceRef, start: Tile, rebirth_tile: Tile, note: impl Into<String>) -> Self {
        Self {
            piece,
            start: Some(start),
            end: Some(rebirth_tile),
            capture: None,
            status: MoveStatus::Rebirth,
            note: note.into(),
        }
    }

    /// Whether this move takes the piece off the board.
    #[must_use]
    pub fn is_exit(&self) -> bool {
        self.status == MoveStatus::Exit
    }

    /// Whether this move is a knock-back to the rebirth area.
    #[must_use]
    pub fn is_rebirth(&self) -> bool {
        self.status == MoveStatus::Rebirth
    }

    /// Whether this move displaces an opposing piece.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.piece)?;
        match self.start {
            Some(tile) => write!(f, "{}", tile)?,
            None => write!(f, "-")?,
        }
        match (self.status, self.end) {
            (MoveStatus::Exit, _) => write!(f, " -> exit")?,
            (MoveStatus::Rebirth, Some(end)) => write!(f, " -> {} (rebirth)", end)?,
            (_, Some(end)) => write!(f, " -> {}", end)?,
            (_, None) => write!(f, " -> -")?,
        }
        if let Some(captured) = self.capture {
            write!(f, " (captures {})", captured)?;
        }
        Ok(())
    }
}
