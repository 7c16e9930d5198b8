//! Evaluation tests.
//!
//! Tests for the evaluation as a whole:
//! - Perspective and color-mirror symmetry
//! - Material balance
//! - Endgame signatures only in low-material positions

use crate::board::{Board, BoardBuilder, Color};

fn make_board(fen: &str) -> Board {
    Board::try_from_fen(fen).expect("valid fen").0
}

/// Flip the board vertically and swap colors.
fn mirror(board: &Board) -> Board {
    board
        .pieces()
        .fold(BoardBuilder::new(), |builder, (sq, color, piece)| {
            builder.piece(sq.flip_vertical(), color.opponent(), piece)
        })
        .build()
}

#[test]
fn mirrored_position_negates_score() {
    let fens = [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        "4k3/8/8/8/8/8/8/3QK3 w - -",
        "6k1/5ppp/8/8/8/8/PP6/1K6 w - -",
    ];
    for fen in fens {
        let board = make_board(fen);
        assert_eq!(
            board.evaluate(Color::White),
            mirror(&board).evaluate(Color::Black),
            "{fen}"
        );
        assert_eq!(board.evaluate(Color::White), -board.evaluate(Color::Black));
    }
}

#[test]
fn extra_piece_is_worth_roughly_its_value() {
    let balanced = make_board("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -");
    let knight_up = make_board("r1bqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -");
    let diff = knight_up.evaluate(Color::White) - balanced.evaluate(Color::White);
    // Knight value 320, less the -40 it scored on b8.
    assert_eq!(diff, 280);
    assert!(knight_up.win_rate() > 50.0);
}

#[test]
fn endgame_signature_needs_low_material() {
    // KR v K: 500 non-king material, signature applies.
    let rook_ending = make_board("4k3/8/8/8/8/8/8/R3K3 w - -");
    // Same plus two queens for each side: no signature bonus.
    let heavy = make_board("qq2k3/8/8/8/8/8/8/QQR1K3 w - -");
    let rook_score = rook_ending.evaluate(Color::White);
    assert!(rook_score > 800, "got {rook_score}");

    let without_rook = make_board("qq2k3/8/8/8/8/8/8/QQ2K3 w - -");
    let heavy_rook = heavy.evaluate(Color::White) - without_rook.evaluate(Color::White);
    assert!(heavy_rook < 600, "got {heavy_rook}");
}

#[test]
fn pawns_do_not_change_signature() {
    let with_pawn = make_board("4k3/p7/8/8/8/8/8/3QK3 w - -");
    let without = make_board("4k3/8/8/8/8/8/8/3QK3 w - -");
    // The pawn only contributes its own terms; the KQ v K bonus stays.
    assert!(with_pawn.evaluate(Color::White) > 1500);
    assert!(without.evaluate(Color::White) > 1500);
}
