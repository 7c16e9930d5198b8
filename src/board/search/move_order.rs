//! Move ordering utilities for search.
//!
//! Ordering only affects how quickly alpha-beta cuts off, never the result.

use std::cmp::Reverse;

use super::super::{Board, Move, Piece};

/// Captures are tried before everything else.
const CAPTURE_SCORE: i32 = 1 << 20;

/// Promotions come next, ahead of quiet moves.
const PROMOTION_SCORE: i32 = 1 << 19;

/// MVV-LVA: high-value victims captured by low-value attackers first.
pub(crate) fn mvv_lva_score(board: &Board, mv: Move, last_move: Option<Move>) -> i32 {
    let Some((_, attacker)) = board.piece_at(mv.from) else {
        return 0;
    };

    let victim = match board.piece_at(mv.to) {
        Some((_, victim)) => Some(victim),
        None if board.is_valid_en_passant(mv.from, mv.to, last_move) => Some(Piece::Pawn),
        None => None,
    };

    let mut score = match victim {
        Some(victim) => CAPTURE_SCORE + victim.value() * 10 - attacker.value(),
        None => 0,
    };
    if board.is_pawn_promotion(mv.from, mv.to) {
        score += PROMOTION_SCORE;
    }
    score
}

/// Sort `moves` best-first. The sort is stable, so equal moves keep their
/// generation order and searches stay deterministic.
pub(crate) fn order_moves(board: &Board, moves: &mut [Move], last_move: Option<Move>) {
    moves.sort_by_cached_key(|&mv| Reverse(mvv_lva_score(board, mv, last_move)));
}

/// Move `first` to the front if present, shifting the rest down.
pub(crate) fn promote_first(moves: &mut [Move], first: Move) {
    if let Some(pos) = moves.iter().position(|&mv| mv == first) {
        moves[..=pos].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Color, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn pawn_takes_queen_before_queen_takes_pawn() {
        let board = BoardBuilder::new()
            .piece(sq("d4"), Color::White, Piece::Pawn)
            .piece(sq("e5"), Color::Black, Piece::Queen)
            .piece(sq("a1"), Color::White, Piece::Queen)
            .piece(sq("a7"), Color::Black, Piece::Pawn)
            .build();
        let pxq = mvv_lva_score(&board, mv("d4e5"), None);
        let qxp = mvv_lva_score(&board, mv("a1a7"), None);
        let quiet = mvv_lva_score(&board, mv("a1b1"), None);
        assert!(pxq > qxp);
        assert!(qxp > quiet);
    }

    #[test]
    fn promotion_outranks_quiet_moves() {
        let board = BoardBuilder::new()
            .piece(sq("b7"), Color::White, Piece::Pawn)
            .piece(sq("h1"), Color::White, Piece::Rook)
            .build();
        let mut moves = vec![mv("h1h2"), mv("b7b8")];
        order_moves(&board, &mut moves, None);
        assert_eq!(moves[0], mv("b7b8"));
    }

    #[test]
    fn en_passant_is_scored_as_capture() {
        let board = BoardBuilder::new()
            .piece(sq("e5"), Color::White, Piece::Pawn)
            .piece(sq("d5"), Color::Black, Piece::Pawn)
            .build();
        assert!(mvv_lva_score(&board, mv("e5d6"), Some(mv("d7d5"))) >= CAPTURE_SCORE);
        assert_eq!(mvv_lva_score(&board, mv("e5e6"), Some(mv("d7d5"))), 0);
    }

    #[test]
    fn promote_first_keeps_relative_order() {
        let mut moves = vec![mv("a2a3"), mv("b2b3"), mv("c2c3"), mv("d2d3")];
        promote_first(&mut moves, mv("c2c3"));
        assert_eq!(
            moves,
            vec![mv("c2c3"), mv("a2a3"), mv("b2b3"), mv("d2d3")]
        );
        promote_first(&mut moves, mv("h2h3"));
        assert_eq!(moves[0], mv("c2c3"));
    }
}
