//! Board state, move generation, and move application.
//!
//! The `Board` owns all piece state behind a pair of indexes:
//! - per-color piece vectors, indexed by `PieceRef::index`
//! - a tile-occupancy map for O(1) "who stands here" lookups
//!
//! The two indexes are kept in bijection: every on-board piece is the
//! occupant of exactly its own position. `apply_move` is the only
//! mutation path; everything else is a read query, and move values are
//! built without touching the board at all.

pub mod apply;
pub mod invariants;
pub mod layout;
pub mod legality;
pub mod moves;

pub use apply::ApplyMoveError;
pub use invariants::{check_invariants, InvariantViolation};
pub use moves::{Move, MoveList, MoveStatus};

use rustc_hash::FxHashMap;

use crate::core::color::{ColorMap, PlayerColor};
use crate::core::piece::{PieceRef, PieceState, Tile};
use layout::{
    exit_requirement_for, starting_color, HOUSE_HAPPINESS, PIECES_PER_PLAYER, STARTING_TILE_COUNT,
};

/// In-memory board with move validation.
///
/// ## Usage
///
/// ```
/// use senet_engine::board::Board;
/// use senet_engine::core::PlayerColor;
///
/// let board = Board::new();
/// let moves = board.legal_moves(PlayerColor::Light, 2);
///
/// // Tile 13 holds Light's most advanced starting piece.
/// assert!(moves.iter().any(|m| m.start == Some(13)));
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    /// Piece state per color, indexed by `PieceRef::index`.
    pieces: ColorMap<Vec<PieceState>>,

    /// Occupancy index: tile -> the piece standing on it.
    occupants: FxHashMap<Tile, PieceRef>,
}

impl Board {
    /// Create a board in the opening position.
    ///
    /// The first 14 tiles are seeded with alternating pieces, Light on
    /// tile 1. Pieces are numbered per color in tile order, so `L1`
    /// stands on tile 1 and `D7` on tile 14.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self {
            pieces: ColorMap::new(|_| Vec::with_capacity(PIECES_PER_PLAYER)),
            occupants: FxHashMap::default(),
        };

        let seeded =
            (1..=STARTING_TILE_COUNT).filter_map(|tile| starting_color(tile).map(|c| (tile, c)));
        for (tile, color) in seeded {
            let index = board.pieces[color].len() as u8;
            let piece = PieceRef::new(color, index);

            let mut state = PieceState::on_tile(piece, tile);
            state.visited_happiness = tile >= HOUSE_HAPPINESS;
            state.exit_requirement = exit_requirement_for(tile);

            board.pieces[color].push(state);
            board.occupants.insert(tile, piece);
        }

        board
    }

    // === Queries ===

    /// Iterate over one side's pieces in index order.
    pub fn pieces_for(&self, color: PlayerColor) -> impl Iterator<Item = &PieceState> {
        self.pieces[color].iter()
    }

    /// Get the state of a specific piece.
    ///
    /// Panics if the reference does not name one of the board's pieces.
    #[must_use]
    pub fn piece(&self, piece: PieceRef) -> &PieceState {
        &self.pieces[piece.color][piece.index as usize]
    }

    /// Get the piece standing on `tile`, if any.
    #[must_use]
    pub fn piece_at_tile(&self, tile: Tile) -> Option<&PieceState> {
        self.occupants.get(&tile).map(|&piece| self.piece(piece))
    }

    /// Count a side's pieces that have left the board.
    #[must_use]
    pub fn finished_count(&self, color: PlayerColor) -> usize {
        self.pieces_for(color).filter(|p| p.finished).count()
    }

    /// The side that has borne off all seven pieces, if either has.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerColor> {
        PlayerColor::both().find(|&color| self.finished_count(color) == PIECES_PER_PLAYER)
    }

    /// Build the move for the piece of `color` standing on `tile`.
    ///
    /// Returns `None` for an empty tile, an opposing occupant, or an
    /// occupant with no legal move for this roll.
    #[must_use]
    pub fn move_for_tile(&self, color: PlayerColor, tile: Tile, roll: u8) -> Option<Move> {
        let piece = self.piece_at_tile(tile)?;
        if piece.piece.color != color {
            return None;
        }
        self.build_move(piece, roll)
    }

    /// All legal moves for one side with the given roll.
    ///
    /// At most one move per piece, in piece-index order. The order is
    /// stable and callers may rely on it to break ties.
    #[must_use]
    pub fn legal_moves(&self, color: PlayerColor, roll: u8) -> MoveList {
        self.pieces_for(color)
            .filter_map(|piece| self.build_move(piece, roll))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
