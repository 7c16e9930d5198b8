use std::fmt;

use super::{CastlingRights, Color, Piece, Square};

/// An 8x8 chess position.
///
/// A `Board` is a plain value: the grid of pieces plus the castling rights that
/// cannot be recovered from the grid alone. Side to move and the previous move
/// are supplied by the caller to every rule query. Transformations such as
/// [`Board::apply_move`] return a new board and leave `self` untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) castling_rights: CastlingRights,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    /// The standard starting position with all castling rights.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            board.squares[0][file] = Some((Color::White, piece));
            board.squares[1][file] = Some((Color::White, Piece::Pawn));
            board.squares[6][file] = Some((Color::Black, Piece::Pawn));
            board.squares[7][file] = Some((Color::Black, piece));
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    /// A board with no pieces and no castling rights.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            castling_rights: CastlingRights::none(),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Returns true if `sq` holds a piece of `color`
    #[inline]
    #[must_use]
    pub fn is_occupied_by(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some((c, _)) if c == color)
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.rank()][sq.file()] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()].take()
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Every occupied square with its piece, a1 through h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
    }

    /// Occupied squares of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces()
            .filter(move |&(_, c, _)| c == color)
            .map(|(sq, _, piece)| (sq, piece))
    }

    /// Locate the king of `color`, if it is on the board.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|&(_, piece)| piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self.squares[rank][file].map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
