use derive_more::{Constructor, Display, Error, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// The identity of a person sitting at the board.
///
/// Identities are owned by an external directory,
/// a match only reads them and hands the winner back when it ends.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Arbitrary, Constructor)]
#[derive(Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[display(fmt = "{}", nickname)]
pub struct Player {
    /// The identifier assigned by the player directory.
    pub id: u64,
    /// The name shown to other players.
    #[strategy("[a-zA-Z][a-zA-Z0-9 _]{0,15}")]
    pub nickname: String,
}

/// The reason why parsing [`Player`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse player identity")]
pub struct ParsePlayerError(ron::de::SpannedError);

/// Parses a [`Player`] from its [RON] representation, e.g. `(id: 1, nickname: "Nicolas")`.
///
/// [RON]: https://github.com/ron-rs/ron
impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
