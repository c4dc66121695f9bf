//! A chess rules engine built around snapshots: given a board and a side
//! to move, it enumerates legal moves, applies a move, and derives check
//! and checkmate.
//!
//! # Examples
//!
//! Drive a game directly:
//!
//! ```
//! use chessling::{Color, Game, Square};
//!
//! let mut game = Game::new();
//! let targets = game.moves(Square::E2)?;
//! assert_eq!(targets.as_slice(), [Square::E3, Square::E4]);
//!
//! game.play(Square::E2, Square::E4)?;
//! assert_eq!(game.turn(), Color::Black);
//! # Ok::<_, chessling::PlayError>(())
//! ```
//!
//! Or go through the snapshot boundary the way a UI does:
//!
//! ```
//! use chessling::{create_initial_game, move_piece, Square};
//!
//! let game = create_initial_game();
//! let after = move_piece(&game.data, "e2", "e4")?;
//! assert_eq!(after.data.pieces[&Square::E4].move_count, 1);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Not covered, by design: castling, en passant, promotion, draw
//! detection, move history and clocks.

mod board;
mod check;
mod color;
mod game;
mod movement;
mod role;
mod snapshot;
mod square;
mod types;
mod usecase;

pub use board::Board;
pub use check::{attacked_by, is_checkmate, is_in_check, move_causes_check};
pub use color::{Color, ParseColorError};
pub use game::{Game, PlayError};
pub use movement::{movements, SquareList};
pub use role::Role;
pub use snapshot::{GameData, GameDataResult, RawPiece, SnapshotError};
pub use square::{ParseSquareError, Square};
pub use types::Piece;
pub use usecase::{create_initial_game, get_piece_moves, move_piece, UseCaseError};
