//! End-to-end scenarios driven through the snapshot boundary, the way
//! the UI layer calls the engine.

use std::collections::BTreeMap;

use chessling::{
    create_initial_game, get_piece_moves, move_piece, Color, GameData, Piece, RawPiece, Role,
    Square, UseCaseError,
};

fn piece(color: Color, role: Role) -> RawPiece {
    RawPiece::from(role.of(color))
}

fn game_data(pieces: &[(&str, Color, Role)], current_team: Color) -> GameData {
    GameData {
        pieces: pieces
            .iter()
            .map(|&(cell, color, role)| (cell.parse().unwrap(), piece(color, role)))
            .collect::<BTreeMap<Square, RawPiece>>(),
        current_team,
        captured_pieces: Vec::new(),
    }
}

#[test]
fn initial_game_snapshot() {
    let result = create_initial_game();

    assert_eq!(result.data.current_team, Color::White);
    assert_eq!(result.is_check, None);
    assert!(!result.is_checkmate);
    assert!(result.data.captured_pieces.is_empty());
    assert_eq!(result.data.pieces.len(), 32);

    for file in b'a'..=b'h' {
        let cell: Square = format!("{}2", file as char).parse().unwrap();
        assert_eq!(result.data.pieces[&cell], piece(Color::White, Role::Pawn));
    }
}

#[test]
fn pinned_rook_has_no_moves() {
    let data = game_data(
        &[
            ("a1", Color::Black, Role::King),
            ("c5", Color::Black, Role::Bishop),
            ("a7", Color::White, Role::King),
            ("b6", Color::White, Role::Rook),
        ],
        Color::White,
    );

    assert!(get_piece_moves(&data, "b6").unwrap().is_empty());
}

#[test]
fn rook_captures_bishop() {
    let data = game_data(
        &[
            ("a1", Color::Black, Role::King),
            ("a4", Color::Black, Role::Bishop),
            ("f6", Color::White, Role::King),
            ("a7", Color::White, Role::Rook),
        ],
        Color::White,
    );

    let result = move_piece(&data, "a7", "a4").unwrap();

    let rook = result.data.pieces[&Square::A4];
    assert_eq!(rook.color, Color::White);
    assert_eq!(rook.kind, Role::Rook);
    assert_eq!(rook.move_count, 1);

    assert_eq!(result.data.captured_pieces.len(), 1);
    assert_eq!(
        result.data.captured_pieces[0],
        piece(Color::Black, Role::Bishop)
    );
    assert_eq!(result.data.current_team, Color::Black);
    assert!(!result.data.pieces.contains_key(&Square::A7));
}

#[test]
fn empty_cell_and_wrong_turn_errors() {
    let game = create_initial_game();

    assert_eq!(
        get_piece_moves(&game.data, "e5").unwrap_err().to_string(),
        "No piece in position!"
    );
    assert_eq!(
        get_piece_moves(&game.data, "e7").unwrap_err().to_string(),
        "Another turn team!"
    );
    assert_eq!(
        move_piece(&game.data, "e5", "e6").unwrap_err().to_string(),
        "No piece in position!"
    );
    assert_eq!(
        move_piece(&game.data, "e7", "e5").unwrap_err().to_string(),
        "Another turn team!"
    );
}

#[test]
fn illegal_destination_error() {
    let game = create_initial_game();
    assert_eq!(
        move_piece(&game.data, "e2", "d3").unwrap_err().to_string(),
        "Piece can't move to target position!"
    );
}

#[test]
fn surrounded_king_has_no_moves() {
    // Every adjacent square is covered, but the king is not in check:
    // stalemate-shaped, deliberately not reported as checkmate.
    let data = game_data(
        &[
            ("a1", Color::White, Role::King),
            ("b8", Color::Black, Role::Rook),
            ("h2", Color::Black, Role::Rook),
            ("h8", Color::Black, Role::King),
        ],
        Color::White,
    );

    assert!(get_piece_moves(&data, "a1").unwrap().is_empty());
}

#[test]
fn moves_query_is_repeatable() {
    let game = create_initial_game();
    assert_eq!(
        get_piece_moves(&game.data, "b1").unwrap(),
        get_piece_moves(&game.data, "b1").unwrap()
    );
}

#[test]
fn fools_mate_over_the_boundary() {
    let mut data = create_initial_game().data;

    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
        let result = move_piece(&data, from, to).unwrap();
        assert_eq!(result.is_check, None);
        assert!(!result.is_checkmate);
        data = result.data;
    }

    let result = move_piece(&data, "d8", "h4").unwrap();
    assert_eq!(result.is_check, Some(Color::White));
    assert!(result.is_checkmate);
    assert_eq!(result.data.current_team, Color::White);
}

#[test]
fn snapshot_survives_json_round_trip() {
    let result = create_initial_game();
    let json = serde_json::to_string(&result).unwrap();
    let back: chessling::GameDataResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);

    // moveCount survives a move and the following round trip, so the
    // pawn double-step rule keeps working across the boundary.
    let after = move_piece(&back.data, "e2", "e4").unwrap();
    let json = serde_json::to_string(&after.data).unwrap();
    let rebuilt: GameData = serde_json::from_str(&json).unwrap();
    assert_eq!(
        Piece::from(rebuilt.pieces[&Square::E4]),
        Color::White.pawn().bumped()
    );

    let white_again = GameData {
        current_team: Color::White,
        ..rebuilt
    };
    assert_eq!(get_piece_moves(&white_again, "e4").unwrap(), [Square::E5]);
}

#[test]
fn corrupted_snapshot_is_rejected() {
    let mut data = create_initial_game().data;
    data.pieces
        .insert(Square::E4, piece(Color::White, Role::King));
    assert!(matches!(
        move_piece(&data, "e2", "e3"),
        Err(UseCaseError::Snapshot(_))
    ));
}

#[test]
fn rejected_move_returns_no_partial_state() {
    let game = create_initial_game();
    let before = game.data.clone();
    let _ = move_piece(&game.data, "e2", "e5");
    assert_eq!(game.data, before);
}
