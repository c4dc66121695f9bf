//! The serializable boundary format.
//!
//! The engine is snapshot-in/snapshot-out: the UI (or storage) hands a
//! [`GameData`] over the boundary, the engine reconstructs a
//! [`Game`] from it, and answers with a [`GameDataResult`] carrying the
//! new board plus derived check and checkmate status. Wire field names
//! follow the external contract (`currentTeam`, `moveCount`, ...).

use std::{collections::BTreeMap, error::Error, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    board::Board, color::Color, game::Game, role::Role, square::Square, types::Piece,
};

/// A piece in wire form: color, kind tag and move count.
///
/// `moveCount` may be absent on input (defaulting to zero) but is always
/// written; the pawn double-step rule depends on it surviving
/// round-trips.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct RawPiece {
    pub color: Color,
    #[serde(rename = "type")]
    pub kind: Role,
    #[serde(rename = "moveCount", default)]
    pub move_count: u32,
}

impl From<Piece> for RawPiece {
    fn from(piece: Piece) -> RawPiece {
        RawPiece {
            color: piece.color,
            kind: piece.role,
            move_count: piece.move_count,
        }
    }
}

impl From<RawPiece> for Piece {
    fn from(raw: RawPiece) -> Piece {
        Piece {
            color: raw.color,
            role: raw.kind,
            move_count: raw.move_count,
        }
    }
}

/// A game snapshot as exchanged with the outside: a sparse cell → piece
/// mapping, the side to move and the captured pieces in capture order.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct GameData {
    pub pieces: BTreeMap<Square, RawPiece>,
    #[serde(rename = "currentTeam")]
    pub current_team: Color,
    #[serde(rename = "capturedPieces", default)]
    pub captured_pieces: Vec<RawPiece>,
}

impl GameData {
    /// Captures the current state of a game.
    pub fn from_game(game: &Game) -> GameData {
        GameData {
            pieces: game
                .board()
                .pieces()
                .map(|(square, piece)| (square, RawPiece::from(piece)))
                .collect(),
            current_team: game.turn(),
            captured_pieces: game.captured().iter().copied().map(RawPiece::from).collect(),
        }
    }

    /// Reconstructs a game from the snapshot.
    ///
    /// Fails when the snapshot describes a corrupted position that no
    /// operation on it could repair, currently: more than one king of a
    /// color. A missing king is accepted (reduced boards are common in
    /// tests and puzzles).
    pub fn to_game(&self) -> Result<Game, SnapshotError> {
        let mut board = Board::empty();
        for (&square, &raw) in &self.pieces {
            board.set_piece_at(square, Piece::from(raw));
        }

        for color in Color::ALL {
            let kings = board
                .by_color(color)
                .filter(|(_, piece)| piece.role == Role::King)
                .count();
            if kings > 1 {
                return Err(SnapshotError::TooManyKings(color));
            }
        }

        Ok(Game::from_parts(
            board,
            self.current_team,
            self.captured_pieces.iter().copied().map(Piece::from).collect(),
        ))
    }
}

/// A [`GameData`] extended with the derived check and checkmate status,
/// as returned to the caller after every operation.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct GameDataResult {
    #[serde(flatten)]
    pub data: GameData,
    /// The side in check, or `None`.
    #[serde(rename = "isCheck")]
    pub is_check: Option<Color>,
    #[serde(rename = "isCheckmate")]
    pub is_checkmate: bool,
}

impl GameDataResult {
    /// Captures the current state of a game together with derived
    /// check/checkmate status.
    pub fn from_game(game: &Game) -> GameDataResult {
        GameDataResult {
            data: GameData::from_game(game),
            is_check: game.check(),
            is_checkmate: game.checkmate(),
        }
    }
}

/// Error when a snapshot describes a structurally invalid position.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SnapshotError {
    /// More than one king of the given color.
    TooManyKings(Color),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SnapshotError::TooManyKings(color) => {
                write!(f, "more than one {color} king")
            }
        }
    }
}

impl Error for SnapshotError {}
