use serde::Deserialize;

use chess_core::board::Board;
use chess_core::{Game, GameStatus};

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<Position>,
}

#[derive(Deserialize)]
struct Position {
    name: String,
    fen: String,
    legal_moves: usize,
    check: bool,
    checkmate: bool,
    stalemate: bool,
}

fn positions() -> Vec<Position> {
    let data = include_str!("data/positions.json");
    let set: PositionSet = serde_json::from_str(data).expect("invalid positions.json");
    set.positions
}

#[test]
fn position_suite() {
    for position in positions() {
        let (board, side) = Board::try_from_fen(&position.fen).expect("valid fen");
        assert_eq!(
            board.legal_moves(side, None).len(),
            position.legal_moves,
            "{}",
            position.name
        );
        assert_eq!(board.is_check(side), position.check, "{}", position.name);
        assert_eq!(board.is_checkmate(side), position.checkmate, "{}", position.name);
        assert_eq!(
            board.is_stalemate(side, None),
            position.stalemate,
            "{}",
            position.name
        );
    }
}

#[test]
fn fen_round_trip_suite() {
    for position in positions() {
        let (board, side) = Board::try_from_fen(&position.fen).expect("valid fen");
        let expected: Vec<&str> = position.fen.split_whitespace().take(3).collect();
        assert_eq!(board.to_fen(side), expected.join(" "), "{}", position.name);
    }
}

#[test]
fn game_status_matches_suite() {
    for position in positions() {
        let (board, side) = Board::try_from_fen(&position.fen).expect("valid fen");
        let game = Game::from_board(board, side);
        let expected = if position.checkmate {
            GameStatus::Checkmate {
                winner: side.opponent(),
            }
        } else if position.stalemate {
            GameStatus::Stalemate
        } else if position.check {
            GameStatus::Check(side)
        } else {
            GameStatus::Ongoing
        };
        assert_eq!(game.status(), expected, "{}", position.name);
    }
}
