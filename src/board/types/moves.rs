//! Move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// A move from one square to another.
///
/// A move carries no flags: whether it castles, captures en passant or promotes
/// is decided by the board it is played on. Promotion is always to a queen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns true if this move is a two-rank advance along a file
    #[inline]
    #[must_use]
    pub fn is_double_step(self) -> bool {
        self.from.file() == self.to.file() && self.from.rank_delta(self.to).abs() == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse coordinate notation such as `e2e4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }
        let invalid = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from = s[0..2].parse::<Square>().map_err(|_| invalid())?;
        let to = s[2..4].parse::<Square>().map_err(|_| invalid())?;
        Ok(Move { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_round_trips_through_notation() {
        let mv: Move = "g1f3".parse().unwrap();
        assert_eq!(mv.from.to_string(), "g1");
        assert_eq!(mv.to.to_string(), "f3");
        assert_eq!(mv.to_string(), "g1f3");
    }

    #[test]
    fn move_parse_errors() {
        assert_eq!(
            "e2e".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert!(matches!(
            "z2e4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn double_step_detection() {
        assert!("e2e4".parse::<Move>().unwrap().is_double_step());
        assert!("d7d5".parse::<Move>().unwrap().is_double_step());
        assert!(!"e2e3".parse::<Move>().unwrap().is_double_step());
        assert!(!"a1c3".parse::<Move>().unwrap().is_double_step());
    }
}
