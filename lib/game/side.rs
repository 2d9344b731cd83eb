use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::Not;
use test_strategy::Arbitrary;

/// One of the two seats at the board.
///
/// The [`Side::First`] player always makes the opening move.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Side {
    #[display(fmt = "first")]
    First,
    #[display(fmt = "second")]
    Second,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::First, Side::Second];

    /// This side as an index into per-side storage.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Not for Side {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn side_implements_not_operator(s: Side) {
        assert_eq!(!!s, s);
        assert_ne!(!s, s);
    }

    #[proptest]
    fn side_indexes_are_distinct(s: Side) {
        assert_ne!(s.index(), (!s).index());
        assert_eq!(Side::ALL[s.index()], s);
    }

    #[test]
    fn first_side_moves_first() {
        assert_eq!(Side::ALL[0], Side::First);
    }
}
