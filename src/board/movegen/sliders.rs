use super::super::{Board, Square};
use super::{DIAGONAL_DIRECTIONS, STRAIGHT_DIRECTIONS};

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [(isize, isize)] {
        const QUEEN: [(isize, isize); 8] = [
            (1, 0),
            (-1, 0),
            (0, 1),
            (0, -1),
            (1, 1),
            (1, -1),
            (-1, 1),
            (-1, -1),
        ];
        match self {
            SliderType::Bishop => &DIAGONAL_DIRECTIONS,
            SliderType::Rook => &STRAIGHT_DIRECTIONS,
            SliderType::Queen => &QUEEN,
        }
    }
}

impl Board {
    pub(crate) fn is_valid_rook_move(&self, from: Square, to: Square) -> bool {
        let dr = from.rank_delta(to);
        let df = from.file_delta(to);
        (dr == 0) != (df == 0) && self.is_path_clear(from, to)
    }

    pub(crate) fn is_valid_bishop_move(&self, from: Square, to: Square) -> bool {
        let dr = from.rank_delta(to);
        let df = from.file_delta(to);
        dr != 0 && dr.abs() == df.abs() && self.is_path_clear(from, to)
    }

    /// Every square strictly between `from` and `to` is empty.
    ///
    /// Only meaningful when the two squares share a rank, file or diagonal.
    pub(crate) fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let step_r = from.rank_delta(to).signum();
        let step_f = from.file_delta(to).signum();
        let mut cursor = from.offset(step_r, step_f);
        while let Some(current) = cursor {
            if current == to {
                return true;
            }
            if !self.is_empty(current) {
                return false;
            }
            cursor = current.offset(step_r, step_f);
        }
        false
    }

    /// Walk each ray up to and including the first occupied square.
    pub(crate) fn push_slider_candidates(
        &self,
        from: Square,
        slider: SliderType,
        out: &mut Vec<Square>,
    ) {
        for &(dr, df) in slider.directions() {
            let mut cursor = from.offset(dr, df);
            while let Some(current) = cursor {
                out.push(current);
                if !self.is_empty(current) {
                    break;
                }
                cursor = current.offset(dr, df);
            }
        }
    }
}
