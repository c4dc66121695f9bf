use std::fmt;

use crate::{color::Color, role::Role, square::Square, types::Piece};

/// Piece positions on the board: an 8×8 mailbox of optional pieces.
///
/// The board owns no game logic beyond placing, removing and relocating
/// pieces. Cloning produces a fully independent copy, which the check
/// resolver uses to evaluate hypothetical moves without touching the
/// real game.
///
/// # Examples
///
/// ```
/// use chessling::{Board, Color, Square};
///
/// let board = Board::new();
/// assert_eq!(board.piece_at(Square::E1), Some(Color::White.king()));
/// assert_eq!(board.pieces().count(), 32);
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Creates the standard chess starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();
        const BACKRANK: [Role; 8] = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];
        for (file, role) in (0..8).zip(BACKRANK) {
            board.set_piece_at(Square::new(file, 0), role.of(Color::White));
            board.set_piece_at(Square::new(file, 1), Color::White.pawn());
            board.set_piece_at(Square::new(file, 6), Color::Black.pawn());
            board.set_piece_at(Square::new(file, 7), role.of(Color::Black));
        }
        board
    }

    /// Creates an empty board.
    pub const fn empty() -> Board {
        Board {
            squares: [None; 64],
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[usize::from(square)]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Puts a piece on a square, returning any previous occupant.
    pub fn set_piece_at(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[usize::from(square)].replace(piece)
    }

    /// Clears a square, returning the removed piece if there was one.
    pub fn remove_piece_at(&mut self, square: Square) -> Option<Piece> {
        self.squares[usize::from(square)].take()
    }

    /// Relocates the piece at `from` to `to`, returning the captured
    /// occupant of `to` if there was one.
    ///
    /// The move count of the piece is not touched; that is the
    /// responsibility of [`Game::play`](crate::Game::play). Moving from
    /// an empty square leaves the board unchanged and returns `None`.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        match self.remove_piece_at(from) {
            Some(piece) => self.set_piece_at(to, piece),
            None => None,
        }
    }

    /// Iterates over all occupied squares, a1 through h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterates over the occupied squares of one side.
    pub fn by_color(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Finds the king of the given side.
    ///
    /// Returns `None` on a board without that king, which is a valid
    /// transient state while setting up a position.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.by_color(color)
            .find(|(_, piece)| piece.role == Role::King)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let ch = self
                    .piece_at(Square::new(file, rank))
                    .map_or('.', Piece::char);
                write!(f, "{ch}")?;
                if file < 7 {
                    write!(f, " ")?;
                }
            }
            if rank > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position() {
        let board = Board::new();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.by_color(Color::White).count(), 16);
        assert_eq!(board.king_of(Color::White), Some(Square::E1));
        assert_eq!(board.king_of(Color::Black), Some(Square::E8));
        for file in 0..8 {
            let pawn = board.piece_at(Square::new(file, 1)).unwrap();
            assert_eq!(pawn.role, Role::Pawn);
            assert_eq!(pawn.color, Color::White);
            assert_eq!(pawn.move_count, 0);
        }
    }

    #[test]
    fn test_move_piece_captures() {
        let mut board = Board::empty();
        board.set_piece_at(Square::A1, Color::White.rook());
        board.set_piece_at(Square::A4, Color::Black.bishop());

        let captured = board.move_piece(Square::A1, Square::A4);
        assert_eq!(captured, Some(Color::Black.bishop()));
        assert!(board.is_empty(Square::A1));
        assert_eq!(board.piece_at(Square::A4), Some(Color::White.rook()));
    }

    #[test]
    fn test_move_from_empty_square_is_noop() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(board.move_piece(Square::E4, Square::E5), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Board::new();
        let mut clone = original.clone();
        clone.move_piece(Square::E2, Square::E4);

        assert_eq!(original.piece_at(Square::E2), Some(Color::White.pawn()));
        assert!(original.is_empty(Square::E4));
        assert!(clone.is_empty(Square::E2));
    }
}
