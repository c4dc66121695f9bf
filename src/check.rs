//! Check and checkmate resolution.
//!
//! Legality of a move depends on a hypothetical future board, so every
//! probe here works on a short-lived clone that is discarded once the
//! boolean answer is known. The real board is never mutated.

use crate::{board::Board, color::Color, movement, square::Square};

/// Tests whether any piece of `attacker` reaches `target` on this board.
///
/// Attack detection uses the raw geometric reach of each attacker
/// ([`movement::raw_movements`]): whether the attacking move would leave
/// the attacker's own king in check is irrelevant, and gating it here
/// would recurse through mutually constraining kings.
pub fn attacked_by(board: &Board, attacker: Color, target: Square) -> bool {
    board
        .by_color(attacker)
        .any(|(from, _)| movement::raw_movements(board, from).contains(&target))
}

/// Tests whether the king of `color` is currently attacked.
///
/// A board without that king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king_of(color)
        .is_some_and(|king| attacked_by(board, !color, king))
}

/// Tests whether playing `from` → `to` would leave the mover's own king
/// in check.
///
/// The move is replayed on a clone, so the given board stays untouched.
/// An empty origin square reports `false`.
pub fn move_causes_check(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };

    let mut probe = board.clone();
    probe.move_piece(from, to);
    is_in_check(&probe, piece.color)
}

/// Tests whether `color` is checkmated: in check, with no move of any of
/// its pieces that would resolve the check.
///
/// Only meaningful together with check — a side that is not in check is
/// never reported as checkmated, even with no legal moves (stalemate is
/// not detected).
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    if !is_in_check(board, color) {
        return false;
    }

    board.by_color(color).all(|(from, _)| {
        movement::movements(board, from)
            .iter()
            .all(|&to| move_causes_check(board, from, to))
    })
}
