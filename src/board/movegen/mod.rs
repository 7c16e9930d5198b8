//! Move legality.
//!
//! Every rule query takes the side to move and the previous move explicitly;
//! the board itself does not remember either. Generation works from
//! per-piece candidate squares filtered through the same predicate that
//! validates a single move, so "is this move legal" and "list the legal
//! moves" can never disagree.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::error::MoveError;
use super::{Board, Color, Move, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const STRAIGHT_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const DIAGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Returns true if `side` may move the piece on `from` to `to`.
    ///
    /// Checks ownership, the piece's movement pattern (including castling
    /// and en passant) and that the mover's king is not left attacked.
    /// `last_move` is the opponent's previous move, used for en passant.
    #[must_use]
    pub fn is_legal_move(&self, from: Square, to: Square, side: Color, last_move: Option<Move>) -> bool {
        self.validate_move(from, to, side, last_move).is_ok()
    }

    /// Like [`Board::is_legal_move`], but reports why a move is rejected.
    pub fn validate_move(
        &self,
        from: Square,
        to: Square,
        side: Color,
        last_move: Option<Move>,
    ) -> Result<(), MoveError> {
        let Some((color, piece)) = self.piece_at(from) else {
            return Err(MoveError::EmptySquare { square: from });
        };
        if color != side {
            return Err(MoveError::WrongColor {
                square: from,
                expected: side,
            });
        }
        if !self.is_pattern_move(from, to, color, piece, last_move) {
            return Err(MoveError::IllegalGeometry { from, to });
        }
        if self.leaves_king_in_check(Move::new(from, to), color) {
            return Err(MoveError::LeavesKingInCheck { from, to });
        }
        Ok(())
    }

    /// Movement pattern for one piece, ignoring checks on the mover's king.
    fn is_pattern_move(
        &self,
        from: Square,
        to: Square,
        color: Color,
        piece: Piece,
        last_move: Option<Move>,
    ) -> bool {
        if from == to || self.is_occupied_by(to, color) {
            return false;
        }
        match piece {
            Piece::Pawn => {
                self.is_valid_pawn_move(from, to, color)
                    || self.is_valid_en_passant(from, to, last_move)
            }
            Piece::Knight => self.is_valid_knight_move(from, to),
            Piece::Bishop => self.is_valid_bishop_move(from, to),
            Piece::Rook => self.is_valid_rook_move(from, to),
            Piece::Queen => self.is_valid_rook_move(from, to) || self.is_valid_bishop_move(from, to),
            Piece::King => {
                self.is_valid_king_step(from, to) || self.is_valid_castling(from, to, color)
            }
        }
    }

    /// Play the move on a copy and look for an attack on `color`'s king.
    fn leaves_king_in_check(&self, mv: Move, color: Color) -> bool {
        match self.apply_move(mv) {
            Ok(next) => next.is_check(color),
            Err(_) => true,
        }
    }

    /// All destination squares the piece on `from` may legally reach.
    ///
    /// Empty when `from` is empty or holds a piece of the other side. This
    /// is the exhaustive form: every square on the board is tested.
    #[must_use]
    pub fn possible_moves(&self, from: Square, side: Color, last_move: Option<Move>) -> Vec<Square> {
        Square::all()
            .filter(|&to| self.is_legal_move(from, to, side, last_move))
            .collect()
    }

    /// Every legal move for `side`, ordered by origin square then destination.
    #[must_use]
    pub fn legal_moves(&self, side: Color, last_move: Option<Move>) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        let mut targets = Vec::with_capacity(28);
        for (from, piece) in self.pieces_of(side) {
            targets.clear();
            self.push_candidates(from, side, piece, &mut targets);
            targets.sort_unstable();
            targets.dedup();
            moves.extend(
                targets
                    .iter()
                    .filter(|&&to| self.is_legal_move(from, to, side, last_move))
                    .map(|&to| Move::new(from, to)),
            );
        }
        moves
    }

    /// Legal moves that capture something, en passant included.
    #[must_use]
    pub fn capture_moves(&self, side: Color, last_move: Option<Move>) -> Vec<Move> {
        self.legal_moves(side, last_move)
            .into_iter()
            .filter(|mv| self.is_capture(*mv, last_move))
            .collect()
    }

    /// Returns true if `mv` removes an enemy piece. Assumes `mv` is legal.
    #[must_use]
    pub fn is_capture(&self, mv: Move, last_move: Option<Move>) -> bool {
        !self.is_empty(mv.to) || self.is_valid_en_passant(mv.from, mv.to, last_move)
    }

    /// Returns true if `side` has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self, side: Color, last_move: Option<Move>) -> bool {
        let mut targets = Vec::with_capacity(28);
        self.pieces_of(side).any(|(from, piece)| {
            targets.clear();
            self.push_candidates(from, side, piece, &mut targets);
            targets
                .iter()
                .any(|&to| self.is_legal_move(from, to, side, last_move))
        })
    }

    /// Returns true if `color` is in check and has no legal move.
    ///
    /// En passant is not considered as an escape, matching a query made
    /// without knowledge of the previous move.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_check(color) && !self.has_legal_move(color, None)
    }

    /// Returns true if `color` is not in check and has no legal move.
    #[must_use]
    pub fn is_stalemate(&self, color: Color, last_move: Option<Move>) -> bool {
        !self.is_check(color) && !self.has_legal_move(color, last_move)
    }

    /// Superset of the squares a piece could legally reach.
    fn push_candidates(&self, from: Square, color: Color, piece: Piece, out: &mut Vec<Square>) {
        match piece {
            Piece::Pawn => self.push_pawn_candidates(from, color, out),
            Piece::Knight => self.push_knight_candidates(from, out),
            Piece::Bishop => self.push_slider_candidates(from, SliderType::Bishop, out),
            Piece::Rook => self.push_slider_candidates(from, SliderType::Rook, out),
            Piece::Queen => self.push_slider_candidates(from, SliderType::Queen, out),
            Piece::King => self.push_king_candidates(from, out),
        }
    }
}
