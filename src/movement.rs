//! Geometric move generation.
//!
//! Reachable squares are produced by two primitives: a sliding line that
//! walks a direction vector until blocked (with an optional step cap and
//! a pluggable per-step acceptance rule) and the knight's fixed leap
//! table. Per-role composition of those primitives lives in
//! [`movements`] and [`raw_movements`].

use arrayvec::ArrayVec;

use crate::{board::Board, check, color::Color, role::Role, square::Square, types::Piece};

/// Destination squares of a single piece.
///
/// A queen in the open reaches at most 27 squares, so the list is
/// stack-allocated.
pub type SquareList = ArrayVec<Square, 27>;

/// Verdict of a per-step acceptance rule on a sliding line.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Step {
    /// Yield the square and keep sliding.
    Next,
    /// Yield the square, then end the line (capture square).
    Last,
    /// End the line without yielding (blocked).
    Stop,
}

const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

const DIAGONALS: [(i8, i8); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

const KNIGHT_LEAPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Walks from `origin` in direction `(df, dr)`, collecting squares until
/// the edge of the board, the step cap, or the acceptance rule ends the
/// line.
fn line<F>(
    board: &Board,
    origin: Square,
    (df, dr): (i8, i8),
    take: Option<u32>,
    accept: &F,
    out: &mut SquareList,
) where
    F: Fn(&Board, Square, Option<Piece>) -> Step,
{
    let mut current = origin;
    let mut count = 0;

    loop {
        current = match current.offset(df, dr) {
            Some(next) => next,
            None => return,
        };
        count += 1;
        if take.is_some_and(|cap| count > cap) {
            return;
        }

        match accept(board, current, board.piece_at(current)) {
            Step::Stop => return,
            Step::Next => out.push(current),
            Step::Last => {
                out.push(current);
                return;
            }
        }
    }
}

/// Knights jump: each leap target is taken when it is on the board and
/// empty or enemy-occupied, with no regard for intervening squares.
fn leaps(board: &Board, origin: Square, color: Color, out: &mut SquareList) {
    for (df, dr) in KNIGHT_LEAPS {
        if let Some(target) = origin.offset(df, dr) {
            if board.piece_at(target).map_or(true, |p| p.color != color) {
                out.push(target);
            }
        }
    }
}

/// Slide through empty squares, include the first enemy square, stop
/// before allied pieces.
fn default_acceptance(origin: Piece) -> impl Fn(&Board, Square, Option<Piece>) -> Step {
    move |_, _, target| match target {
        None => Step::Next,
        Some(t) if t.color != origin.color => Step::Last,
        Some(_) => Step::Stop,
    }
}

/// Kings reject allied squares and any square where the moved king would
/// be attacked on the resulting board.
///
/// The hypothetical board is probed with [`check::attacked_by`], which
/// enumerates enemy pieces through [`raw_movements`] only. An enemy king
/// encountered there falls back to the default acceptance instead of
/// recursing into this rule again, so the probe bottoms out at depth one.
fn king_acceptance(
    origin: Piece,
    from: Square,
) -> impl Fn(&Board, Square, Option<Piece>) -> Step {
    move |board, to, target| {
        if target.is_some_and(|t| t.color == origin.color) {
            return Step::Stop;
        }

        let mut probe = board.clone();
        probe.move_piece(from, to);
        if check::attacked_by(&probe, !origin.color, to) {
            Step::Stop
        } else {
            Step::Next
        }
    }
}

/// Candidate destinations for the piece at `from`.
///
/// King moves are filtered against check; moves of other pieces are
/// purely geometric and still need the
/// [`move_causes_check`](check::move_causes_check) filter before they
/// are legal. An empty square yields an empty list.
///
/// # Examples
///
/// ```
/// use chessling::{movements, Board, Square};
///
/// let board = Board::new();
/// // An unmoved pawn has the single and the double step.
/// assert_eq!(movements(&board, Square::E2).as_slice(), [Square::E3, Square::E4]);
/// ```
pub fn movements(board: &Board, from: Square) -> SquareList {
    movements_with(board, from, true)
}

/// Raw geometric reach of the piece at `from`, with the king's check
/// filter disabled.
///
/// This is the attacker's view used by the check resolver: whether a
/// square is attacked never depends on whether the attacking move would
/// itself be legal.
pub(crate) fn raw_movements(board: &Board, from: Square) -> SquareList {
    movements_with(board, from, false)
}

fn movements_with(board: &Board, from: Square, checked_king: bool) -> SquareList {
    let mut out = SquareList::new();
    let Some(piece) = board.piece_at(from) else {
        return out;
    };

    match piece.role {
        Role::Pawn => {
            let forward = piece.color.forward();
            let take = if piece.has_moved() { 1 } else { 2 };
            let advance = |_: &Board, _: Square, target: Option<Piece>| match target {
                None => Step::Next,
                Some(_) => Step::Stop,
            };
            line(board, from, (0, forward), Some(take), &advance, &mut out);

            let capture = move |_: &Board, _: Square, target: Option<Piece>| match target {
                Some(t) if t.color != piece.color => Step::Next,
                _ => Step::Stop,
            };
            for df in [-1, 1] {
                line(board, from, (df, forward), Some(1), &capture, &mut out);
            }
        }
        Role::Knight => leaps(board, from, piece.color, &mut out),
        Role::Bishop => {
            let accept = default_acceptance(piece);
            for dir in DIAGONALS {
                line(board, from, dir, None, &accept, &mut out);
            }
        }
        Role::Rook => {
            let accept = default_acceptance(piece);
            for dir in ORTHOGONALS {
                line(board, from, dir, None, &accept, &mut out);
            }
        }
        Role::Queen => {
            let accept = default_acceptance(piece);
            for dir in ORTHOGONALS.into_iter().chain(DIAGONALS) {
                line(board, from, dir, None, &accept, &mut out);
            }
        }
        Role::King if checked_king => {
            let accept = king_acceptance(piece, from);
            for dir in ORTHOGONALS.into_iter().chain(DIAGONALS) {
                line(board, from, dir, Some(1), &accept, &mut out);
            }
        }
        Role::King => {
            let accept = default_acceptance(piece);
            for dir in ORTHOGONALS.into_iter().chain(DIAGONALS) {
                line(board, from, dir, Some(1), &accept, &mut out);
            }
        }
    }

    out
}
