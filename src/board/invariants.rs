//! Board invariants - sanity checks that detect bugs.
//!
//! A correctly maintained board can never violate these: `apply_move` is
//! the only mutation path and it updates both indexes together. If a
//! check fires, some code mutated state it should not have.

use crate::core::piece::{PieceRef, Tile};

use super::layout::{BOARD_TILES, HOUSE_WATER, PIECES_PER_PLAYER};
use super::Board;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
/// Verified here:
/// - each side owns exactly seven pieces
/// - `finished` is true exactly for pieces without a position
/// - every position lies on the board and off the House of Water
/// - piece positions and the occupancy index form a bijection
#[must_use]
pub fn check_invariants(board: &Board) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut on_board = 0usize;

    for (color, pieces) in board.pieces.iter() {
        if pieces.len() != PIECES_PER_PLAYER {
            violations.push(InvariantViolation {
                message: format!("{} owns {} pieces instead of 7", color, pieces.len()),
            });
        }

        for piece in pieces {
            match piece.position {
                Some(tile) => {
                    on_board += 1;

                    if piece.finished {
                        violations.push(InvariantViolation {
                            message: format!("{} is finished yet stands on tile {}", piece.piece, tile),
                        });
                    }
                    if !(1..=BOARD_TILES).contains(&tile) {
                        violations.push(InvariantViolation {
                            message: format!("{} stands on tile {} outside the board", piece.piece, tile),
                        });
                    }
                    if tile == HOUSE_WATER {
                        violations.push(InvariantViolation {
                            message: format!("{} rests on the House of Water", piece.piece),
                        });
                    }
                    if board.occupants.get(&tile) != Some(&piece.piece) {
                        violations.push(InvariantViolation {
                            message: format!(
                                "{} claims tile {} but is not its occupant",
                                piece.piece, tile
                            ),
                        });
                    }
                }
                None => {
                    if !piece.finished {
                        violations.push(InvariantViolation {
                            message: format!("{} has no position yet is not finished", piece.piece),
                        });
                    }
                }
            }
        }
    }

    for (&tile, &occupant) in &board.occupants {
        let position = occupant_position(board, occupant);
        if position != Some(tile) {
            violations.push(InvariantViolation {
                message: format!(
                    "occupancy index lists {} on tile {} but the piece stands on {:?}",
                    occupant, tile, position
                ),
            });
        }
    }

    if board.occupants.len() != on_board {
        violations.push(InvariantViolation {
            message: format!(
                "occupancy index holds {} tiles but {} pieces are on the board",
                board.occupants.len(),
                on_board
            ),
        });
    }

    violations
}

fn occupant_position(board: &Board, occupant: PieceRef) -> Option<Tile> {
    board.pieces[occupant.color]
        .get(occupant.index as usize)
        .and_then(|p| p.position)
}

/// Assert all board invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(board: &Board) {
    let violations = check_invariants(board);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Board invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_board: &Board) {}
