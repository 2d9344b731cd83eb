use super::Side;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use test_strategy::Arbitrary;

/// One of the possible outcomes of a match.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[display(fmt = "win by the {_0} player")]
    Win(Side),

    #[display(fmt = "draw")]
    Draw,
}

impl Outcome {
    /// Whether the outcome is a draw and neither side has won.
    pub fn is_draw(&self) -> bool {
        !self.is_decisive()
    }

    /// Whether the outcome is decisive and one of the sides has won.
    pub fn is_decisive(&self) -> bool {
        matches!(self, Outcome::Win(_))
    }

    /// The winning side, if the outcome is [decisive](`Self::is_decisive`).
    pub fn winner(&self) -> Option<Side> {
        match *self {
            Outcome::Win(s) => Some(s),
            Outcome::Draw => None,
        }
    }
}
