use super::error::MoveError;
use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Return the position after `mv`, leaving `self` unchanged.
    ///
    /// Performs the side effects of special moves: removes a pawn captured en
    /// passant, moves the rook when the king travels two files, turns a pawn
    /// reaching its last rank into a queen, and drops castling rights when a
    /// king or rook leaves (or a rook is captured on) its home square.
    ///
    /// Legality is not checked; validate with [`Board::is_legal_move`] first.
    pub fn apply_move(&self, mv: Move) -> Result<Board, MoveError> {
        let (color, piece) = self
            .piece_at(mv.from)
            .ok_or(MoveError::EmptySquare { square: mv.from })?;

        let mut next = self.clone();
        next.take_piece(mv.from);

        let df = mv.from.file_delta(mv.to);
        match piece {
            // Diagonal step onto an empty square is an en passant capture.
            Piece::Pawn if df != 0 && next.is_empty(mv.to) => {
                if let Some(victim) = Square::new(mv.from.rank(), mv.to.file()) {
                    next.take_piece(victim);
                }
            }
            Piece::King if df.abs() == 2 => {
                let (rook_file, step) = if df > 0 { (7, -1) } else { (0, 1) };
                let corner = Square::new(mv.from.rank(), rook_file);
                let landing = mv.to.offset(0, step);
                if let (Some(corner), Some(landing)) = (corner, landing) {
                    if let Some((rook_color, rook)) = next.take_piece(corner) {
                        next.set_piece(landing, rook_color, rook);
                    }
                }
            }
            _ => {}
        }

        let placed = if piece == Piece::Pawn && mv.to.rank() == color.pawn_promotion_rank() {
            Piece::Queen
        } else {
            piece
        };
        next.set_piece(mv.to, color, placed);

        if piece == Piece::King {
            next.castling_rights.remove_color(color);
        }
        next.clear_corner_right(mv.from);
        next.clear_corner_right(mv.to);

        Ok(next)
    }

    fn clear_corner_right(&mut self, sq: Square) {
        for color in Color::BOTH {
            if sq.rank() != color.back_rank() {
                continue;
            }
            match sq.file() {
                0 => self.castling_rights.remove(color, false),
                7 => self.castling_rights.remove(color, true),
                _ => {}
            }
        }
    }
}
