use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::MoveError;
use super::{Board, Color, Move, Piece, Square};

/// A played move as a history entry: who moved what, from where to where.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub piece: Piece,
    pub color: Color,
    pub from: Square,
    pub to: Square,
}

impl MoveRecord {
    /// Describe `mv` on `board`, before the move is applied.
    ///
    /// # Errors
    /// [`MoveError::EmptySquare`] when there is no piece on `mv.from`.
    pub fn from_move(board: &Board, mv: Move) -> Result<Self, MoveError> {
        let (color, piece) = board
            .piece_at(mv.from)
            .ok_or(MoveError::EmptySquare { square: mv.from })?;
        Ok(MoveRecord {
            piece,
            color,
            from: mv.from,
            to: mv.to,
        })
    }

    /// Algebraic label of the origin square, e.g. `"e2"`.
    #[must_use]
    pub fn from_label(&self) -> String {
        self.from.to_string()
    }

    /// Algebraic label of the destination square, e.g. `"e4"`.
    #[must_use]
    pub fn to_label(&self) -> String {
        self.to.to_string()
    }

    #[must_use]
    pub const fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}-{}", self.color, self.piece, self.from, self.to)
    }
}
