use super::error::FenError;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Parse a position from FEN notation.
    ///
    /// Only the first three fields are read (placement, side to move,
    /// castling). The en passant field is ignored: en passant is decided by
    /// the previous move, which callers pass explicitly.
    pub fn try_from_fen(fen: &str) -> Result<(Self, Color), FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 3 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let sq = Square::new(7 - rank_idx, file).ok_or(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file + 1,
                })?;
                board.set_piece(sq, color, piece);
                file += 1;
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        let side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            match c {
                'K' => board.castling_rights.set(Color::White, true),
                'Q' => board.castling_rights.set(Color::White, false),
                'k' => board.castling_rights.set(Color::Black, true),
                'q' => board.castling_rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        Ok((board, side))
    }

    /// The piece-placement field of FEN (e.g. `rnbqkbnr/pppppppp/8/...`).
    ///
    /// Two boards with equal placement hold the same pieces on the same
    /// squares; this is the key used for the opening book.
    #[must_use]
    pub fn placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.squares[rank][file] {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }

    /// Convert the position to FEN (placement, side to move, castling).
    #[must_use]
    pub fn to_fen(&self, side_to_move: Color) -> String {
        let active = if side_to_move == Color::White { "w" } else { "b" };
        let rights = self.castling_rights;
        let mut castling = String::new();
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if rights.has(color, kingside) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        format!("{} {active} {castling}", self.placement())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CastlingRights;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn parses_starting_position() {
        let (board, side) = Board::try_from_fen(START_FEN).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(side, Color::White);
    }

    #[test]
    fn writes_starting_position() {
        assert_eq!(
            Board::new().to_fen(Color::White),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq"
        );
    }

    #[test]
    fn parses_partial_castling_and_black_to_move() {
        let (board, side) = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R b Kq -").unwrap();
        assert_eq!(side, Color::Black);
        let rights = board.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));
        assert_eq!(board.to_fen(side), "r3k2r/8/8/8/8/8/8/R3K2R b Kq");
    }

    #[test]
    fn no_castling_writes_dash() {
        let (board, _) = Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
        assert_eq!(board.castling_rights(), CastlingRights::none());
        assert!(board.to_fen(Color::White).ends_with(" w -"));
    }

    #[test]
    fn rejects_malformed_fen() {
        assert_eq!(
            Board::try_from_fen("8/8/8 w"),
            Err(FenError::TooFewParts { found: 2 })
        );
        assert_eq!(
            Board::try_from_fen("4x3/8/8/8/8/8/8/4K3 w -"),
            Err(FenError::InvalidPiece { char: 'x' })
        );
        assert!(matches!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 x -"),
            Err(FenError::InvalidSideToMove { .. })
        ));
        assert_eq!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w Z"),
            Err(FenError::InvalidCastling { char: 'Z' })
        );
        assert!(matches!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/8/4K3 w -"),
            Err(FenError::InvalidRank { rank: 8 })
        ));
        assert!(matches!(
            Board::try_from_fen("4k3p/8/8/8/8/8/8/4K3 w -"),
            Err(FenError::TooManyFiles { .. })
        ));
    }
}
