//! Move construction: the rules that decide what a piece may do.
//!
//! Each (piece, roll) pair yields at most one candidate move. The checks
//! run in a fixed order, and the order is load-bearing:
//!
//! 1. finished pieces never move
//! 2. a piece standing on an exit house resolves against its exit
//!    requirement before anything else
//! 3. an unblessed piece may not travel past the House of Happiness,
//!    whatever lies beyond it
//! 4. the House of Water knocks the piece back before occupancy matters
//! 5. exit houses, the overshoot rule, and ordinary block/capture follow
//!
//! Choosing *which* candidate to play is the caller's concern.

use crate::core::piece::{ExitRequirement, PieceRef, PieceState, Tile};

use super::layout::{
    exit_requirement_for, house_name, BOARD_TILES, HOUSE_HAPPINESS, HOUSE_HORUS, HOUSE_REBIRTH,
    HOUSE_WATER,
};
use super::moves::Move;
use super::Board;

impl Board {
    /// Build the single candidate move for `piece` with `roll`, if any.
    pub(crate) fn build_move(&self, piece: &PieceState, roll: u8) -> Option<Move> {
        if piece.finished {
            return None;
        }
        let start = piece.position?;

        if let Some(required) = piece.exit_requirement {
            return Some(self.exit_house_move(piece.piece, start, required, roll));
        }

        let dest = start + roll;

        // The happiness gate: until a piece has rested on the House of
        // Happiness it may approach or land on it, but never pass it.
        if !piece.visited_happiness && start < HOUSE_HAPPINESS && dest > HOUSE_HAPPINESS {
            return None;
        }

        if dest == HOUSE_WATER {
            return Some(self.rebirth_move(piece.piece, start, "Fell into the water"));
        }

        if exit_requirement_for(dest).is_some() {
            let note = if dest == HOUSE_HORUS {
                "Reached House of Horus"
            } else {
                "Reached special exit house"
            };
            let occupant = self.occupants.get(&dest).copied();
            if occupant.is_some_and(|o| o.color == piece.piece.color) {
                return None;
            }
            return Some(Move::normal(piece.piece, start, dest, occupant, note));
        }

        if dest > BOARD_TILES {
            if !piece.visited_happiness {
                return None;
            }
            return Some(Move::exit(piece.piece, start, "Leaves the board"));
        }

        let occupant = self.occupants.get(&dest).copied();
        if occupant.is_some_and(|o| o.color == piece.piece.color) {
            return None;
        }

        let note = if dest == HOUSE_HAPPINESS {
            "Visited the House of Happiness"
        } else if dest == HOUSE_REBIRTH {
            "Resting in the House of Rebirth"
        } else {
            ""
        };

        Some(Move::normal(piece.piece, start, dest, occupant, note))
    }

    /// Resolve a roll for a piece standing on an exit house.
    ///
    /// A met requirement releases the piece; a missed exact roll sends
    /// it back to the rebirth area.
    fn exit_house_move(
        &self,
        piece: PieceRef,
        start: Tile,
        required: ExitRequirement,
        roll: u8,
    ) -> Move {
        let house = house_name(start).unwrap_or("exit house");
        if required.is_met_by(roll) {
            Move::exit(piece, start, format!("Exited via {}", house))
        } else {
            self.rebirth_move(piece, start, format!("Failed {}", house))
        }
    }

    fn rebirth_move(&self, piece: PieceRef, start: Tile, note: impl Into<String>) -> Move {
        Move::rebirth(piece, start, self.find_rebirth_tile(), note)
    }

    /// First unoccupied tile scanning from the House of Rebirth down to
    /// tile 1.
    ///
    /// Fourteen pieces cannot fill fifteen tiles, so the scan always
    /// succeeds on a well-formed board; exhaustion is a corrupted-state
    /// panic.
    pub(crate) fn find_rebirth_tile(&self) -> Tile {
        for tile in (1..=HOUSE_REBIRTH).rev() {
            if !self.occupants.contains_key(&tile) {
                return tile;
            }
        }
        panic!("no unoccupied tile at or below the House of Rebirth");
    }
}
