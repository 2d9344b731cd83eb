use super::Ruleset;
use crate::{checkers::Checkers, tictactoe::TicTacToe};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// The games that may be played.
#[derive(
    Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Deserialize, Serialize,
)]
pub enum Variant {
    #[display(fmt = "Tic Tac Toe")]
    TicTacToe,
    #[display(fmt = "Checkers")]
    Checkers,
}

impl Variant {
    /// Every game available.
    pub const ALL: [Variant; 2] = [Variant::TicTacToe, Variant::Checkers];

    /// Sets up the [`Ruleset`] for a new match of this game.
    pub fn setup(self) -> Ruleset {
        match self {
            Variant::TicTacToe => TicTacToe::default().into(),
            Variant::Checkers => Checkers::default().into(),
        }
    }
}

/// Represents a game name that does not match any [`Variant`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "unknown game `{_0}`")]
pub struct UnknownGame(#[error(not(source))] pub String);

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Variant {
    type Err = UnknownGame;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize(s);

        Variant::ALL
            .into_iter()
            .find(|v| normalize(&v.to_string()) == name)
            .ok_or_else(|| UnknownGame(s.into()))
    }
}
