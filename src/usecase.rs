//! The three operations exposed to the UI layer.
//!
//! Each operation takes and returns snapshots; the engine keeps no state
//! between calls. Expected domain failures come back as a
//! [`UseCaseError`] whose `Display` output is the user-facing message —
//! no panic crosses this boundary for user input.

use std::{error::Error, fmt};

use crate::{
    game::{Game, PlayError},
    snapshot::{GameData, GameDataResult, SnapshotError},
    square::Square,
};

/// Error reported to the calling UI.
///
/// `Display` renders the exact user-facing message for each case.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum UseCaseError {
    /// The addressed cell is empty.
    NoPieceInPosition,
    /// The addressed piece belongs to the side not to move.
    AnotherTeamTurn,
    /// The destination is not a legal move of the piece.
    MovementNotAllowed,
    /// The cell label is not of the form `a1`..`h8`.
    InvalidCell,
    /// The snapshot itself is corrupted.
    Snapshot(SnapshotError),
}

impl fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            UseCaseError::NoPieceInPosition => f.write_str("No piece in position!"),
            UseCaseError::AnotherTeamTurn => f.write_str("Another turn team!"),
            UseCaseError::MovementNotAllowed => {
                f.write_str("Piece can't move to target position!")
            }
            UseCaseError::InvalidCell => f.write_str("Could not parse cell!"),
            UseCaseError::Snapshot(err) => write!(f, "Invalid game data: {err}"),
        }
    }
}

impl Error for UseCaseError {}

impl From<PlayError> for UseCaseError {
    fn from(err: PlayError) -> UseCaseError {
        match err {
            PlayError::NoPieceInPosition(_) => UseCaseError::NoPieceInPosition,
            PlayError::AnotherTeamTurn { .. } => UseCaseError::AnotherTeamTurn,
            PlayError::MovementNotAllowed { .. } | PlayError::GameOver => {
                UseCaseError::MovementNotAllowed
            }
        }
    }
}

impl From<SnapshotError> for UseCaseError {
    fn from(err: SnapshotError) -> UseCaseError {
        UseCaseError::Snapshot(err)
    }
}

fn parse_cell(cell: &str) -> Result<Square, UseCaseError> {
    cell.parse().map_err(|_| UseCaseError::InvalidCell)
}

/// Starts a fresh game: standard starting position, white to move,
/// nothing captured, no one in check.
///
/// # Examples
///
/// ```
/// use chessling::{create_initial_game, Color};
///
/// let result = create_initial_game();
/// assert_eq!(result.data.current_team, Color::White);
/// assert_eq!(result.data.pieces.len(), 32);
/// assert_eq!(result.is_check, None);
/// assert!(!result.is_checkmate);
/// ```
pub fn create_initial_game() -> GameDataResult {
    GameDataResult::from_game(&Game::new())
}

/// Lists the legal destination cells of the piece at `cell`.
///
/// # Examples
///
/// ```
/// use chessling::{create_initial_game, get_piece_moves};
///
/// let game = create_initial_game();
/// let moves = get_piece_moves(&game.data, "b1")?;
/// assert_eq!(moves.len(), 2);
///
/// assert_eq!(
///     get_piece_moves(&game.data, "e5").unwrap_err().to_string(),
///     "No piece in position!",
/// );
/// # Ok::<_, chessling::UseCaseError>(())
/// ```
pub fn get_piece_moves(data: &GameData, cell: &str) -> Result<Vec<Square>, UseCaseError> {
    let game = data.to_game()?;
    let from = parse_cell(cell)?;
    Ok(game.moves(from)?.into_iter().collect())
}

/// Plays `origin` → `destiny` and returns the resulting snapshot with
/// recomputed check and checkmate status.
///
/// On any error the input snapshot is untouched and no partial state is
/// returned.
pub fn move_piece(
    data: &GameData,
    origin: &str,
    destiny: &str,
) -> Result<GameDataResult, UseCaseError> {
    let mut game = data.to_game()?;
    let from = parse_cell(origin)?;
    let to = parse_cell(destiny)?;

    game.play(from, to)?;
    Ok(GameDataResult::from_game(&game))
}
