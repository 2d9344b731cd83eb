use super::Side;
use derive_more::{Constructor, Display};
use serde::{Deserialize, Serialize};
use std::ops::Index;
use test_strategy::Arbitrary;

/// The end-of-match score, one integer per [`Side`].
///
/// What the numbers mean depends on the game being played,
/// they only summarize a match and never decide its outcome.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Constructor)]
#[derive(Deserialize, Serialize)]
#[display(fmt = "{_0}-{_1}")]
pub struct Score(pub u32, pub u32);

impl Index<Side> for Score {
    type Output = u32;

    fn index(&self, s: Side) -> &Self::Output {
        match s {
            Side::First => &self.0,
            Side::Second => &self.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn score_can_be_indexed_by_side(a: u32, b: u32) {
        let score = Score::new(a, b);
        assert_eq!(score[Side::First], a);
        assert_eq!(score[Side::Second], b);
    }

    #[proptest]
    fn score_is_printed_first_to_second(s: Score) {
        assert_eq!(s.to_string(), format!("{}-{}", s.0, s.1));
    }

    #[test]
    fn default_score_is_nil() {
        assert_eq!(Score::default(), Score(0, 0));
    }
}
