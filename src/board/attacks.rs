//! Attack detection.
//!
//! Attacks are found by scanning outward from the target square, so the cost
//! is bounded by the number of rays rather than by the number of pieces.

use super::movegen::{DIAGONAL_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, STRAIGHT_DIRECTIONS};
use super::{Board, Color, Piece, Square};

impl Board {
    /// Returns true if any piece of color `by` attacks `sq`.
    ///
    /// Pawns attack diagonally only and castling never attacks, so this is
    /// the "could capture on `sq`" relation regardless of who occupies it.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        // A pawn of `by` attacks from one rank behind, relative to its direction.
        let pawn_rank = -by.pawn_direction();
        for df in [-1, 1] {
            if let Some(from) = sq.offset(pawn_rank, df) {
                if self.piece_at(from) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        if self.is_attacked_by_leaper(sq, by, Piece::Knight, &KNIGHT_OFFSETS)
            || self.is_attacked_by_leaper(sq, by, Piece::King, &KING_OFFSETS)
        {
            return true;
        }

        self.is_attacked_along(sq, by, &STRAIGHT_DIRECTIONS, Piece::attacks_straight)
            || self.is_attacked_along(sq, by, &DIAGONAL_DIRECTIONS, Piece::attacks_diagonally)
    }

    fn is_attacked_by_leaper(
        &self,
        sq: Square,
        by: Color,
        piece: Piece,
        offsets: &[(isize, isize)],
    ) -> bool {
        offsets
            .iter()
            .filter_map(|&(dr, df)| sq.offset(dr, df))
            .any(|from| self.piece_at(from) == Some((by, piece)))
    }

    fn is_attacked_along(
        &self,
        sq: Square,
        by: Color,
        directions: &[(isize, isize)],
        slides: fn(Piece) -> bool,
    ) -> bool {
        for &(dr, df) in directions {
            let mut cursor = sq.offset(dr, df);
            while let Some(current) = cursor {
                if let Some((color, piece)) = self.piece_at(current) {
                    if color == by && slides(piece) {
                        return true;
                    }
                    break;
                }
                cursor = current.offset(dr, df);
            }
        }
        false
    }

    /// Returns true if `color`'s king is attacked.
    ///
    /// A board without a king of `color` is never in check.
    #[must_use]
    pub fn is_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }
}
