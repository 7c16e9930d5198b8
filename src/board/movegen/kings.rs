use super::super::{Board, Color, Piece, Square};
use super::KING_OFFSETS;

const KING_HOME_FILE: usize = 4;

impl Board {
    pub(crate) fn is_valid_king_step(&self, from: Square, to: Square) -> bool {
        let dr = from.rank_delta(to).abs();
        let df = from.file_delta(to).abs();
        dr.max(df) == 1
    }

    /// Returns true if moving the king from `from` to `to` is a legal castle
    /// for `color`.
    ///
    /// The king must be on its home square with the matching right still
    /// held, the own rook on its corner, every square between them empty, and
    /// neither the king's square nor the two squares it crosses attacked.
    #[must_use]
    pub fn is_valid_castling(&self, from: Square, to: Square, color: Color) -> bool {
        let back = color.back_rank();
        if self.piece_at(from) != Some((color, Piece::King)) {
            return false;
        }
        if from.rank() != back || from.file() != KING_HOME_FILE || to.rank() != back {
            return false;
        }

        let (kingside, rook_file) = match from.file_delta(to) {
            2 => (true, 7),
            -2 => (false, 0),
            _ => return false,
        };
        if !self.castling_rights.has(color, kingside) {
            return false;
        }
        let Some(rook_sq) = Square::new(back, rook_file) else {
            return false;
        };
        if self.piece_at(rook_sq) != Some((color, Piece::Rook)) {
            return false;
        }

        let (lo, hi) = if kingside {
            (KING_HOME_FILE + 1, rook_file)
        } else {
            (rook_file + 1, KING_HOME_FILE)
        };
        let between_clear = (lo..hi)
            .filter_map(|file| Square::new(back, file))
            .all(|sq| self.is_empty(sq));
        if !between_clear {
            return false;
        }

        let enemy = color.opponent();
        if self.is_square_attacked(from, enemy) {
            return false;
        }
        let step: isize = if kingside { 1 } else { -1 };
        [step, 2 * step]
            .iter()
            .filter_map(|&df| from.offset(0, df))
            .all(|sq| !self.is_square_attacked(sq, enemy))
    }

    pub(crate) fn push_king_candidates(&self, from: Square, out: &mut Vec<Square>) {
        out.extend(
            KING_OFFSETS
                .iter()
                .chain(&[(0, 2), (0, -2)])
                .filter_map(|&(dr, df)| from.offset(dr, df)),
        );
    }
}
