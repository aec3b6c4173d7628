//! Piece identity and per-piece state.
//!
//! ## PieceRef
//!
//! Stable handle for one of a side's seven pieces. Copyable, hashable,
//! and safe to hold across turns: a `PieceRef` never changes meaning,
//! only the state stored against it does.
//!
//! ## PieceState
//!
//! Everything the rules need to know about a single piece: where it is,
//! whether it has left the board, whether it has visited the House of
//! Happiness, and which exit roll (if any) its current tile demands.

use crate::core::color::PlayerColor;
use serde::{Deserialize, Serialize};

/// A board tile, numbered 1 through 30 along the serpentine path.
pub type Tile = u8;

/// Stable identifier for a single piece.
///
/// `index` is 0-based within the owning side. Display renders the
/// conventional compact label: `L1`..`L7` for Light, `D1`..`D7` for Dark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceRef {
    pub color: PlayerColor,
    pub index: u8,
}

impl PieceRef {
    /// Create a piece reference.
    #[must_use]
    pub const fn new(color: PlayerColor, index: u8) -> Self {
        Self { color, index }
    }
}

impl std::fmt::Display for PieceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let initial = match self.color {
            PlayerColor::Light => 'L',
            PlayerColor::Dark => 'D',
        };
        write!(f, "{}{}", initial, self.index + 1)
    }
}

/// The roll a piece must throw to leave the board from its current tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExitRequirement {
    /// Only this exact value releases the piece.
    Exact(u8),
    /// Any roll releases the piece.
    Any,
}

impl ExitRequirement {
    /// Whether `roll` satisfies this requirement.
    #[must_use]
    pub fn is_met_by(self, roll: u8) -> bool {
        match self {
            Self::Exact(required) => roll == required,
            Self::Any => true,
        }
    }
}

/// Mutable state of a single piece.
///
/// Invariant: `finished` is true exactly when `position` is `None`. A
/// captured piece is returned to the board immediately, so there is no
/// "off board but not finished" state.
///
/// Owned exclusively by the board; the board hands out shared references
/// and routes every mutation through move application.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceState {
    pub piece: PieceRef,
    pub position: Option<Tile>,
    pub finished: bool,
    pub visited_happiness: bool,
    pub exit_requirement: Option<ExitRequirement>,
}

impl PieceState {
    /// Create an unfinished piece standing on `tile`.
    ///
    /// The happiness flag and exit requirement start cleared; board setup
    /// derives both from the tile when seeding the opening layout.
    #[must_use]
    pub fn on_tile(piece: PieceRef, tile: Tile) -> Self {
        Self {
            piece,
            position: Some(tile),
            finished: false,
            visited_happiness: false,
            exit_requirement: None,
        }
    }

    /// Whether the piece is still in play (on the board, not finished).
    #[must_use]
    pub fn is_on_board(&self) -> bool {
        self.position.is_some()
    }
}
