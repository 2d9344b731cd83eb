use super::{ParseSquareError, Rules, Score, Side, Variant};
use crate::checkers::{self, Checkers, ParseMoveError};
use crate::tictactoe::{self, TicTacToe};
use derive_more::{Display, Error, From};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// A move in any of the supported games.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, From)]
pub enum Play {
    /// Marks a square on the tic-tac-toe board.
    Place(tictactoe::Square),
    /// Moves a checkers piece from one square to another.
    Shift(checkers::Move),
}

/// The reason why parsing [`Play`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParsePlayError {
    #[display(fmt = "failed to parse placement")]
    InvalidPlacement(ParseSquareError),
    #[display(fmt = "failed to parse shift")]
    InvalidShift(ParseMoveError),
}

impl FromStr for Play {
    type Err = ParsePlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('-') {
            Ok(Play::Shift(s.trim().parse()?))
        } else {
            Ok(Play::Place(s.parse()?))
        }
    }
}

/// A copy of the board of any of the supported games.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, From)]
pub enum Snapshot {
    TicTacToe(tictactoe::Board),
    Checkers(checkers::Board),
}

/// The rules of any of the supported games, chosen at runtime.
#[derive(Debug, Clone, Eq, PartialEq, Hash, From)]
pub enum Ruleset {
    TicTacToe(TicTacToe),
    Checkers(Checkers),
}

impl Ruleset {
    /// Which game these rules are for.
    pub fn variant(&self) -> Variant {
        match self {
            Ruleset::TicTacToe(_) => Variant::TicTacToe,
            Ruleset::Checkers(_) => Variant::Checkers,
        }
    }
}

impl Rules for Ruleset {
    type Move = Play;
    type Board = Snapshot;

    fn board(&self) -> Snapshot {
        match self {
            Ruleset::TicTacToe(r) => r.board().into(),
            Ruleset::Checkers(r) => r.board().into(),
        }
    }

    /// A [`Play`] meant for a different game is never legal.
    fn is_legal(&self, side: Side, m: Play) -> bool {
        match (self, m) {
            (Ruleset::TicTacToe(r), Play::Place(s)) => r.is_legal(side, s),
            (Ruleset::Checkers(r), Play::Shift(m)) => r.is_legal(side, m),
            _ => false,
        }
    }

    /// Must only be called with a [`Play`] found [legal](`Self::is_legal`),
    /// so never with one meant for a different game.
    fn apply(&mut self, side: Side, m: Play) {
        let variant = self.variant();

        match (self, m) {
            (Ruleset::TicTacToe(r), Play::Place(s)) => r.apply(side, s),
            (Ruleset::Checkers(r), Play::Shift(m)) => r.apply(side, m),
            _ => debug_assert!(false, "`{m}` is not a move in {variant}"),
        }
    }

    fn is_winner(&self, side: Side) -> bool {
        match self {
            Ruleset::TicTacToe(r) => r.is_winner(side),
            Ruleset::Checkers(r) => r.is_winner(side),
        }
    }

    fn is_draw(&self) -> bool {
        match self {
            Ruleset::TicTacToe(r) => r.is_draw(),
            Ruleset::Checkers(r) => r.is_draw(),
        }
    }

    fn score(&self) -> Score {
        match self {
            Ruleset::TicTacToe(r) => r.score(),
            Ruleset::Checkers(r) => r.score(),
        }
    }
}
