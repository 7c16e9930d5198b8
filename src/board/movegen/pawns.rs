use super::super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Pawn pushes and ordinary diagonal captures (en passant is separate).
    pub(crate) fn is_valid_pawn_move(&self, from: Square, to: Square, color: Color) -> bool {
        let dir = color.pawn_direction();
        let dr = from.rank_delta(to);
        let df = from.file_delta(to);

        if df == 0 {
            if dr == dir {
                return self.is_empty(to);
            }
            if dr == 2 * dir && from.rank() == color.pawn_start_rank() {
                return from.offset(dir, 0).is_some_and(|mid| self.is_empty(mid)) && self.is_empty(to);
            }
            return false;
        }

        df.abs() == 1 && dr == dir && self.is_occupied_by(to, color.opponent())
    }

    /// Returns true if the pawn on `from` may capture en passant onto `to`.
    ///
    /// `last_move` must be an enemy pawn's two-rank advance that finished
    /// beside the capturing pawn; the capture lands on the square it skipped.
    /// The right lasts exactly one ply because only the previous move counts.
    #[must_use]
    pub fn is_valid_en_passant(&self, from: Square, to: Square, last_move: Option<Move>) -> bool {
        let Some(last) = last_move else {
            return false;
        };
        let Some((color, Piece::Pawn)) = self.piece_at(from) else {
            return false;
        };
        if self.piece_at(last.to) != Some((color.opponent(), Piece::Pawn)) {
            return false;
        }
        if !last.is_double_step() || last.from.rank() != color.opponent().pawn_start_rank() {
            return false;
        }
        if last.to.rank() != from.rank() || from.file_delta(last.to).abs() != 1 {
            return false;
        }
        if to.file() != last.to.file() {
            return false;
        }
        last.to.offset(color.pawn_direction(), 0) == Some(to) && self.is_empty(to)
    }

    /// Returns true if moving the pawn on `from` to `to` reaches its last rank.
    #[must_use]
    pub fn is_pawn_promotion(&self, from: Square, to: Square) -> bool {
        match self.piece_at(from) {
            Some((color, Piece::Pawn)) => to.rank() == color.pawn_promotion_rank(),
            _ => false,
        }
    }

    pub(crate) fn push_pawn_candidates(&self, from: Square, color: Color, out: &mut Vec<Square>) {
        let dir = color.pawn_direction();
        out.extend(
            [(dir, 0), (2 * dir, 0), (dir, -1), (dir, 1)]
                .iter()
                .filter_map(|&(dr, df)| from.offset(dr, df)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn pushes_from_start_rank() {
        let board = Board::new();
        assert!(board.is_valid_pawn_move(sq("e2"), sq("e3"), Color::White));
        assert!(board.is_valid_pawn_move(sq("e2"), sq("e4"), Color::White));
        assert!(!board.is_valid_pawn_move(sq("e2"), sq("e5"), Color::White));
        assert!(board.is_valid_pawn_move(sq("d7"), sq("d5"), Color::Black));
        assert!(!board.is_valid_pawn_move(sq("d7"), sq("d8"), Color::Black));
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let board = BoardBuilder::starting_position()
            .piece(sq("e3"), Color::Black, Piece::Knight)
            .piece(sq("d4"), Color::Black, Piece::Knight)
            .build();
        assert!(!board.is_valid_pawn_move(sq("e2"), sq("e4"), Color::White));
        assert!(!board.is_valid_pawn_move(sq("d2"), sq("d4"), Color::White));
        assert!(board.is_valid_pawn_move(sq("d2"), sq("d3"), Color::White));
    }

    #[test]
    fn double_step_only_from_start_rank() {
        let board = BoardBuilder::new()
            .piece(sq("e3"), Color::White, Piece::Pawn)
            .build();
        assert!(!board.is_valid_pawn_move(sq("e3"), sq("e5"), Color::White));
    }

    #[test]
    fn captures_diagonally_forward_only() {
        let board = BoardBuilder::new()
            .piece(sq("e4"), Color::White, Piece::Pawn)
            .piece(sq("d5"), Color::Black, Piece::Pawn)
            .piece(sq("f3"), Color::Black, Piece::Pawn)
            .build();
        assert!(board.is_valid_pawn_move(sq("e4"), sq("d5"), Color::White));
        assert!(!board.is_valid_pawn_move(sq("e4"), sq("f5"), Color::White));
        assert!(!board.is_valid_pawn_move(sq("e4"), sq("f3"), Color::White));
        assert!(!board.is_valid_pawn_move(sq("f3"), sq("e2"), Color::Black));
        assert!(board.is_valid_pawn_move(sq("d5"), sq("e4"), Color::Black));
    }

    #[test]
    fn en_passant_after_double_step() {
        let board = BoardBuilder::new()
            .piece(sq("e5"), Color::White, Piece::Pawn)
            .piece(sq("d5"), Color::Black, Piece::Pawn)
            .build();
        assert!(board.is_valid_en_passant(sq("e5"), sq("d6"), Some(mv("d7d5"))));
        assert!(!board.is_valid_en_passant(sq("e5"), sq("d6"), None));
        assert!(!board.is_valid_en_passant(sq("e5"), sq("f6"), Some(mv("d7d5"))));
        // Single steps do not grant the right.
        assert!(!board.is_valid_en_passant(sq("e5"), sq("d6"), Some(mv("d6d5"))));
    }

    #[test]
    fn en_passant_requires_adjacent_pawn_on_same_rank() {
        let board = BoardBuilder::new()
            .piece(sq("e4"), Color::White, Piece::Pawn)
            .piece(sq("d5"), Color::Black, Piece::Pawn)
            .build();
        assert!(!board.is_valid_en_passant(sq("e4"), sq("d6"), Some(mv("d7d5"))));
        assert!(!board.is_valid_en_passant(sq("e4"), sq("d5"), Some(mv("d7d5"))));
    }

    #[test]
    fn black_en_passant() {
        let board = BoardBuilder::new()
            .piece(sq("c4"), Color::Black, Piece::Pawn)
            .piece(sq("b4"), Color::White, Piece::Pawn)
            .build();
        assert!(board.is_valid_en_passant(sq("c4"), sq("b3"), Some(mv("b2b4"))));
        assert!(!board.is_valid_en_passant(sq("c4"), sq("b5"), Some(mv("b2b4"))));
    }

    #[test]
    fn promotion_detection() {
        let board = BoardBuilder::new()
            .piece(sq("a7"), Color::White, Piece::Pawn)
            .piece(sq("h2"), Color::Black, Piece::Pawn)
            .piece(sq("c7"), Color::White, Piece::Rook)
            .build();
        assert!(board.is_pawn_promotion(sq("a7"), sq("a8")));
        assert!(board.is_pawn_promotion(sq("h2"), sq("h1")));
        assert!(!board.is_pawn_promotion(sq("c7"), sq("c8")));
        assert!(!board.is_pawn_promotion(sq("e4"), sq("e5")));
    }
}
