use super::super::{Board, Square};
use super::KNIGHT_OFFSETS;

impl Board {
    pub(crate) fn is_valid_knight_move(&self, from: Square, to: Square) -> bool {
        let dr = from.rank_delta(to).abs();
        let df = from.file_delta(to).abs();
        (dr == 2 && df == 1) || (dr == 1 && df == 2)
    }

    pub(crate) fn push_knight_candidates(&self, from: Square, out: &mut Vec<Square>) {
        out.extend(
            KNIGHT_OFFSETS
                .iter()
                .filter_map(|&(dr, df)| from.offset(dr, df)),
        );
    }
}
