use std::{error::Error, fmt};

use crate::{
    board::Board,
    check,
    color::Color,
    movement::{self, SquareList},
    square::Square,
    types::Piece,
};

/// Error when querying or playing an illegal move.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PlayError {
    /// The origin square is empty.
    NoPieceInPosition(Square),
    /// The piece at the origin square belongs to the side not to move.
    AnotherTeamTurn {
        /// The side whose turn it is.
        current: Color,
        /// The side owning the addressed piece.
        piece: Color,
    },
    /// The destination is not among the legal moves of the piece.
    MovementNotAllowed { from: Square, to: Square },
    /// The game is over and was configured to reject further moves.
    GameOver,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PlayError::NoPieceInPosition(square) => {
                write!(f, "no piece at {square}")
            }
            PlayError::AnotherTeamTurn { current, piece } => {
                write!(f, "it is {current}'s turn, not {piece}'s")
            }
            PlayError::MovementNotAllowed { from, to } => {
                write!(f, "piece at {from} cannot move to {to}")
            }
            PlayError::GameOver => f.write_str("the game is already decided"),
        }
    }
}

impl Error for PlayError {}

/// A game in progress: a [`Board`], the side to move and the captured
/// pieces in capture order.
///
/// Check and checkmate are not stored; they are derived from the board
/// on demand. Every rejected operation leaves the game untouched.
///
/// # Examples
///
/// ```
/// use chessling::{Color, Game, Square};
///
/// let mut game = Game::new();
/// assert_eq!(game.turn(), Color::White);
///
/// game.play(Square::E2, Square::E4)?;
/// assert_eq!(game.turn(), Color::Black);
/// assert_eq!(game.check(), None);
/// # Ok::<_, chessling::PlayError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    captured: Vec<Piece>,
    strict_endings: bool,
}

impl Game {
    /// Starts a game from the standard starting position, white to move.
    pub fn new() -> Game {
        Game::from_parts(Board::new(), Color::White, Vec::new())
    }

    /// Resumes a game from its parts, e.g. a reconstructed snapshot.
    pub fn from_parts(board: Board, turn: Color, captured: Vec<Piece>) -> Game {
        Game {
            board,
            turn,
            captured,
            strict_endings: false,
        }
    }

    /// Makes [`Game::play`] fail with [`PlayError::GameOver`] once the
    /// side to move is checkmated. Off by default: the engine does not
    /// referee game end, callers are expected to stop playing.
    pub fn strict_endings(mut self, strict: bool) -> Game {
        self.strict_endings = strict;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The captured pieces, oldest first.
    #[inline]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// The legal destinations of the piece at `from`.
    ///
    /// Raw geometric candidates are filtered by whether the move would
    /// leave the mover's own king in check. The list may be empty. The
    /// query never mutates the game, so repeated calls agree.
    pub fn moves(&self, from: Square) -> Result<SquareList, PlayError> {
        self.turn_piece_at(from)?;
        Ok(self.legal_moves(from))
    }

    /// Plays a move for the side to move, returning the captured piece
    /// if there was one.
    ///
    /// On success the capture is recorded, the piece is relocated with
    /// its move count incremented, and the turn flips — atomically. On
    /// error nothing changes.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Option<Piece>, PlayError> {
        if self.strict_endings && check::is_checkmate(&self.board, self.turn) {
            return Err(PlayError::GameOver);
        }

        let piece = self.turn_piece_at(from)?;
        if !self.legal_moves(from).contains(&to) {
            return Err(PlayError::MovementNotAllowed { from, to });
        }

        let captured = self.board.move_piece(from, to);
        self.board.set_piece_at(to, piece.bumped());
        if let Some(captured) = captured {
            self.captured.push(captured);
        }
        self.turn = !self.turn;
        Ok(captured)
    }

    /// The side currently in check, if any.
    ///
    /// The side to move is reported first; with legal play only the side
    /// to move can be in check.
    pub fn check(&self) -> Option<Color> {
        [self.turn, !self.turn]
            .into_iter()
            .find(|&color| check::is_in_check(&self.board, color))
    }

    /// Whether the side reported by [`Game::check`] has no move left
    /// that resolves the check.
    pub fn checkmate(&self) -> bool {
        self.check()
            .is_some_and(|color| check::is_checkmate(&self.board, color))
    }

    fn legal_moves(&self, from: Square) -> SquareList {
        movement::movements(&self.board, from)
            .into_iter()
            .filter(|&to| !check::move_causes_check(&self.board, from, to))
            .collect()
    }

    fn turn_piece_at(&self, from: Square) -> Result<Piece, PlayError> {
        let piece = self
            .board
            .piece_at(from)
            .ok_or(PlayError::NoPieceInPosition(from))?;
        if piece.color != self.turn {
            return Err(PlayError::AnotherTeamTurn {
                current: self.turn,
                piece: piece.color,
            });
        }
        Ok(piece)
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
