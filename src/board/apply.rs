//! Move application: the board's single mutation path.
//!
//! Application is validate-then-mutate. A move that no longer matches
//! the board (the piece moved, the destination occupancy changed, the
//! value was hand-built with an impossible shape) is rejected with an
//! [`ApplyMoveError`] before either index is touched, so a failed apply
//! leaves the board exactly as it was.

use thiserror::Error;

use crate::core::piece::{PieceRef, Tile};

use super::invariants::assert_invariants;
use super::layout::{exit_requirement_for, HOUSE_HAPPINESS};
use super::moves::{Move, MoveStatus};
use super::Board;

/// Why a move could not be applied.
///
/// Every variant means the move does not describe this board: it was
/// built against an earlier position, deserialized from elsewhere, or
/// assembled by hand. Rejection never mutates state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApplyMoveError {
    /// The move carries no start tile.
    #[error("move for {piece} has no start tile")]
    MissingStart { piece: PieceRef },

    /// The moving piece is not standing on the move's start tile.
    #[error("{piece} is not standing on tile {start}")]
    PieceNotAtStart { piece: PieceRef, start: Tile },

    /// A non-exit move carries no destination.
    #[error("non-exit move for {piece} has no destination")]
    MissingDestination { piece: PieceRef },

    /// An exit move carries a destination tile.
    #[error("exit move for {piece} carries destination tile {end}")]
    ExitWithDestination { piece: PieceRef, end: Tile },

    /// The destination occupant no longer matches the move's capture.
    #[error("destination occupancy changed: move expected {expected:?}, board has {found:?}")]
    CaptureMismatch {
        expected: Option<PieceRef>,
        found: Option<PieceRef>,
    },
}

impl Board {
    /// Apply a previously generated move.
    ///
    /// On success the mover, any captured piece, and the occupancy index
    /// are all updated together:
    /// - a captured piece is placed on the mover's vacated start tile,
    ///   un-finished, its exit requirement re-derived from that tile and
    ///   its happiness blessing untouched
    /// - an exit move takes the mover off the board for good
    /// - a rebirth landing re-derives the blessing from the landing tile
    ///   (losing it), while an ordinary landing on the House of
    ///   Happiness grants it
    ///
    /// # Errors
    ///
    /// Returns an [`ApplyMoveError`] when the move does not match the
    /// current position. The board is left unchanged in that case.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), ApplyMoveError> {
        let piece = mv.piece;
        let start = mv.start.ok_or(ApplyMoveError::MissingStart { piece })?;

        if self.occupants.get(&start) != Some(&piece) {
            return Err(ApplyMoveError::PieceNotAtStart { piece, start });
        }

        let end = match (mv.status, mv.end) {
            (MoveStatus::Exit, None) => None,
            (MoveStatus::Exit, Some(end)) => {
                return Err(ApplyMoveError::ExitWithDestination { piece, end })
            }
            (_, Some(end)) => Some(end),
            (_, None) => return Err(ApplyMoveError::MissingDestination { piece }),
        };

        let found = end.and_then(|tile| self.occupants.get(&tile).copied());
        if found != mv.capture {
            return Err(ApplyMoveError::CaptureMismatch {
                expected: mv.capture,
                found,
            });
        }

        self.occupants.remove(&start);

        if let Some(captured) = mv.capture {
            let state = &mut self.pieces[captured.color][captured.index as usize];
            state.position = Some(start);
            state.finished = false;
            state.exit_requirement = exit_requirement_for(start);
            self.occupants.insert(start, captured);
        }

        let mover = &mut self.pieces[piece.color][piece.index as usize];
        match end {
            None => {
                mover.position = None;
                mover.finished = true;
                mover.exit_requirement = None;
            }
            Some(end) => {
                mover.position = Some(end);
                if mv.status == MoveStatus::Rebirth {
                    mover.visited_happiness = end >= HOUSE_HAPPINESS;
                } else if end == HOUSE_HAPPINESS {
                    mover.visited_happiness = true;
                }
                mover.exit_requirement = exit_requirement_for(end);
                self.occupants.insert(end, piece);
            }
        }

        assert_invariants(self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::layout::{HOUSE_HORUS, HOUSE_REBIRTH, HOUSE_THREE_TRUTHS};
    use super::super::testutil::{bless, relocate};
    use super::*;
    use crate::core::color::PlayerColor;
    use crate::core::piece::ExitRequirement;

    fn light(index: u8) -> PieceRef {
        PieceRef::new(PlayerColor::Light, index)
    }

    fn dark(index: u8) -> PieceRef {
        PieceRef::new(PlayerColor::Dark, index)
    }

    #[test]
    fn test_normal_move_updates_both_indexes() {
        let mut board = Board::new();
        let mv = board.move_for_tile(PlayerColor::Light, 13, 2).unwrap();

        board.apply_move(&mv).unwrap();

        assert_eq!(board.piece(light(6)).position, Some(HOUSE_REBIRTH));
        assert!(board.piece_at_tile(13).is_none());
        assert_eq!(
            board.piece_at_tile(HOUSE_REBIRTH).map(|p| p.piece),
            Some(light(6))
        );
    }

    #[test]
    fn test_capture_swaps_positions() {
        let mut board = Board::new();
        let mv = board.move_for_tile(PlayerColor::Light, 1, 1).unwrap();
        assert_eq!(mv.capture, Some(dark(0)));

        board.apply_move(&mv).unwrap();

        assert_eq!(board.piece(light(0)).position, Some(2));
        assert_eq!(board.piece(dark(0)).position, Some(1));
        assert_eq!(board.piece_at_tile(2).map(|p| p.piece), Some(light(0)));
        assert_eq!(board.piece_at_tile(1).map(|p| p.piece), Some(dark(0)));
    }

    #[test]
    fn test_captured_piece_keeps_blessing() {
        let mut board = Board::new();
        relocate(&mut board, light(0), 20);
        bless(&mut board, light(0));
        relocate(&mut board, dark(0), 16);

        let mv = board.move_for_tile(PlayerColor::Dark, 16, 4).unwrap();
        board.apply_move(&mv).unwrap();

        let captured = board.piece(light(0));
        assert_eq!(captured.position, Some(16));
        assert!(captured.visited_happiness);
        assert!(!captured.finished);
    }

    #[test]
    fn test_captured_piece_requirement_rederived() {
        let mut board = Board::new();
        relocate(&mut board, light(0), 25);
        bless(&mut board, light(0));
        relocate(&mut board, dark(0), HOUSE_THREE_TRUTHS);
        assert_eq!(
            board.piece(dark(0)).exit_requirement,
            Some(ExitRequirement::Exact(3))
        );

        let mv = board.move_for_tile(PlayerColor::Light, 25, 3).unwrap();
        board.apply_move(&mv).unwrap();

        let captured = board.piece(dark(0));
        assert_eq!(captured.position, Some(25));
        assert_eq!(captured.exit_requirement, None);
        assert_eq!(
            board.piece(light(0)).exit_requirement,
            Some(ExitRequirement::Exact(3))
        );
    }

    #[test]
    fn test_exit_takes_piece_off_the_board() {
        let mut board = Board::new();
        relocate(&mut board, light(0), HOUSE_HORUS);

        let mv = board
            .move_for_tile(PlayerColor::Light, HOUSE_HORUS, 4)
            .unwrap();
        board.apply_move(&mv).unwrap();

        let piece = board.piece(light(0));
        assert_eq!(piece.position, None);
        assert!(piece.finished);
        assert_eq!(piece.exit_requirement, None);
        assert!(board.piece_at_tile(HOUSE_HORUS).is_none());
        assert_eq!(board.finished_count(PlayerColor::Light), 1);
    }

    #[test]
    fn test_rebirth_revokes_blessing() {
        let mut board = Board::new();
        relocate(&mut board, light(0), 22);
        bless(&mut board, light(0));

        let mv = board.move_for_tile(PlayerColor::Light, 22, 5).unwrap();
        board.apply_move(&mv).unwrap();

        let piece = board.piece(light(0));
        assert_eq!(piece.position, Some(HOUSE_REBIRTH));
        assert!(!piece.visited_happiness);
    }

    #[test]
    fn test_happiness_landing_grants_blessing() {
        let mut board = Board::new();
        relocate(&mut board, light(0), 21);

        let mv = board.move_for_tile(PlayerColor::Light, 21, 5).unwrap();
        board.apply_move(&mv).unwrap();

        assert!(board.piece(light(0)).visited_happiness);
    }

    #[test]
    fn test_stale_move_rejected() {
        let mut board = Board::new();
        let mv = board.move_for_tile(PlayerColor::Light, 1, 1).unwrap();

        board.apply_move(&mv).unwrap();
        let err = board.apply_move(&mv).unwrap_err();

        assert_eq!(
            err,
            ApplyMoveError::PieceNotAtStart {
                piece: light(0),
                start: 1
            }
        );
    }

    #[test]
    fn test_capture_mismatch_rejected() {
        let mut board = Board::new();
        let mv = board.move_for_tile(PlayerColor::Light, 1, 1).unwrap();

        // The defender slips away before the move is applied.
        relocate(&mut board, dark(0), 20);
        let err = board.apply_move(&mv).unwrap_err();

        assert_eq!(
            err,
            ApplyMoveError::CaptureMismatch {
                expected: Some(dark(0)),
                found: None,
            }
        );
        assert_eq!(board.piece(light(0)).position, Some(1));
    }

    #[test]
    fn test_missing_start_rejected() {
        let mut board = Board::new();
        let mv = Move {
            piece: light(0),
            start: None,
            end: Some(5),
            capture: None,
            status: MoveStatus::Normal,
            note: String::new(),
        };

        assert_eq!(
            board.apply_move(&mv).unwrap_err(),
            ApplyMoveError::MissingStart { piece: light(0) }
        );
    }

    #[test]
    fn test_missing_destination_rejected() {
        let mut board = Board::new();
        let mv = Move {
            piece: light(0),
            start: Some(1),
            end: None,
            capture: None,
            status: MoveStatus::Normal,
            note: String::new(),
        };

        assert_eq!(
            board.apply_move(&mv).unwrap_err(),
            ApplyMoveError::MissingDestination { piece: light(0) }
        );
    }

    #[test]
    fn test_exit_with_destination_rejected() {
        let mut board = Board::new();
        let mv = Move {
            piece: light(0),
            start: Some(1),
            end: Some(5),
            capture: None,
            status: MoveStatus::Exit,
            note: String::new(),
        };

        assert_eq!(
            board.apply_move(&mv).unwrap_err(),
            ApplyMoveError::ExitWithDestination {
                piece: light(0),
                end: 5
            }
        );
    }

    #[test]
    fn test_failed_apply_leaves_board_unchanged() {
        let mut board = Board::new();
        let mv = board.move_for_tile(PlayerColor::Light, 3, 1).unwrap();
        relocate(&mut board, dark(1), 20);

        assert!(board.apply_move(&mv).is_err());

        assert_eq!(board.piece(light(1)).position, Some(3));
        assert_eq!(board.piece(dark(1)).position, Some(20));
        assert!(board.piece_at_tile(4).is_none());
    }

    #[test]
    fn test_error_messages_name_the_piece() {
        let err = ApplyMoveError::PieceNotAtStart {
            piece: dark(4),
            start: 12,
        };
        assert_eq!(format!("{}", err), "D5 is not standing on tile 12");
    }
}
