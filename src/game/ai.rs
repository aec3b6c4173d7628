//! Greedy single-ply opponent.
//!
//! Scores each candidate in isolation and plays the best one. No
//! lookahead, no randomness: leaving the board is worth everything,
//! being knocked back costs, and otherwise further along the path is
//! better, with a small bonus for capturing on the way.

use crate::board::{Move, MoveList, MoveStatus};

/// Pick the move a greedy opponent plays, if any move exists.
///
/// Ties go to the earliest candidate, so with `Board::legal_moves`
/// input the lowest-indexed piece moves. Callers supplying their own
/// ordering get their own tie-break.
#[must_use]
pub fn choose_ai_move(moves: &MoveList) -> Option<&Move> {
    let mut best: Option<(&Move, i32)> = None;
    for mv in moves {
        let score = score_move(mv);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }
    best.map(|(mv, _)| mv)
}

fn score_move(mv: &Move) -> i32 {
    match mv.status {
        MoveStatus::Exit => 100,
        MoveStatus::Rebirth => -20,
        MoveStatus::Normal => {
            let advance = mv.end.map_or(0, i32::from);
            if mv.is_capture() {
                advance + 2
            } else {
                advance
            }
        }
    }
}
