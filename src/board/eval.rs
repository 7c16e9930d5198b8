use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::pst::square_bonus;
use super::{Board, Color, Piece, Square};

const DOUBLED_PAWN_PENALTY: i32 = 10;
const ISOLATED_PAWN_PENALTY: i32 = 20;
const PAWN_SHIELD_BONUS: i32 = 30;

/// Below this much non-king material the endgame signatures apply.
const ENDGAME_MATERIAL: i32 = 1500;

/// Bonuses for a few known winning material signatures, keyed from the
/// stronger side: its pieces in upper case, then the bare enemy king.
static ENDGAME_SIGNATURES: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert("KQk", 1000);
    table.insert("KRk", 800);
    table.insert("KBNk", 600);
    table
});

impl Board {
    /// Static evaluation in centipawns from `perspective`'s point of view.
    ///
    /// The score is computed for White and negated for Black, so
    /// `evaluate(White) == -evaluate(Black)` always holds.
    #[must_use]
    pub fn evaluate(&self, perspective: Color) -> i32 {
        self.evaluate_white() * perspective.sign()
    }

    pub(crate) fn evaluate_white(&self) -> i32 {
        let mut score = 0;
        let mut non_king_material = 0;

        for (sq, color, piece) in self.pieces() {
            score += color.sign() * (piece.value() + square_bonus(color, piece, sq));
            match piece {
                Piece::King => score += color.sign() * self.pawn_shield(sq, color),
                Piece::Pawn => {
                    score += color.sign() * self.pawn_structure(sq, color);
                    non_king_material += piece.value();
                }
                _ => non_king_material += piece.value(),
            }
        }

        if non_king_material < ENDGAME_MATERIAL {
            score += self.endgame_bonus();
        }
        score
    }

    /// Doubled and isolated pawn penalties for one pawn (non-positive).
    fn pawn_structure(&self, sq: Square, color: Color) -> i32 {
        let file = sq.file();
        let mut files = [0i32; 8];
        for (other, piece) in self.pieces_of(color) {
            if piece == Piece::Pawn {
                files[other.file()] += 1;
            }
        }

        let mut penalty = (files[file] - 1) * DOUBLED_PAWN_PENALTY;
        let left = file.checked_sub(1).map_or(0, |f| files[f]);
        let right = files.get(file + 1).copied().unwrap_or(0);
        if left == 0 && right == 0 {
            penalty += ISOLATED_PAWN_PENALTY;
        }
        -penalty
    }

    /// Bonus when a friendly pawn stands on one of the three squares in front
    /// of the king.
    fn pawn_shield(&self, king: Square, color: Color) -> i32 {
        let dir = color.pawn_direction();
        let shielded = (-1..=1)
            .filter_map(|df| king.offset(dir, df))
            .any(|sq| self.piece_at(sq) == Some((color, Piece::Pawn)));
        if shielded {
            PAWN_SHIELD_BONUS
        } else {
            0
        }
    }

    /// White-relative bonus from the endgame signature table.
    fn endgame_bonus(&self) -> i32 {
        Color::BOTH
            .iter()
            .filter_map(|&strong| {
                let key = self.signature(strong);
                ENDGAME_SIGNATURES
                    .get(key.as_str())
                    .map(|bonus| bonus * strong.sign())
            })
            .sum()
    }

    /// Material signature with `strong` written first in upper case.
    /// Pawns are ignored.
    fn signature(&self, strong: Color) -> String {
        const ORDER: [Piece; 4] = [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];
        let mut key = String::from("K");
        for (color, upper) in [(strong, true), (strong.opponent(), false)] {
            if !upper {
                key.push('k');
            }
            for piece in ORDER {
                let count = self
                    .pieces_of(color)
                    .filter(|&(_, p)| p == piece)
                    .count();
                let c = if upper {
                    piece.to_char().to_ascii_uppercase()
                } else {
                    piece.to_char().to_ascii_lowercase()
                };
                key.extend(std::iter::repeat(c).take(count));
            }
        }
        key
    }

    /// White's winning chances as a percentage in `[0, 100]`.
    ///
    /// A linear map of the static evaluation: 50 at equality, one point per
    /// pawn of advantage.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        (50.0 + f64::from(self.evaluate_white()) / 100.0).clamp(0.0, 100.0)
    }
}
