use super::Square;
use crate::game::ParseSquareError;
use derive_more::{Constructor, DebugCustom, Display, Error, From};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// A checkers move, from an origin to a destination [`Square`].
///
/// A move spanning two rows and two columns jumps over the square in between.
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Constructor)]
#[debug(fmt = "Move({self})")]
#[display(fmt = "{_0}-{_1}")]
pub struct Move(pub Square, pub Square);

impl Move {
    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }

    /// How many rows and columns this move travels, signed.
    #[inline(always)]
    pub fn delta(&self) -> (i8, i8) {
        (
            self.whither().row() as i8 - self.whence().row() as i8,
            self.whither().col() as i8 - self.whence().col() as i8,
        )
    }

    /// The [`Square`] jumped over, if this move spans two diagonal steps.
    pub fn midpoint(&self) -> Option<Square> {
        match self.delta() {
            (dr, dc) if dr.abs() == 2 && dc.abs() == 2 => self.whence().offset(dr / 2, dc / 2),
            _ => None,
        }
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseMoveError {
    #[display(fmt = "failed to parse move, expected `<origin>-<destination>`")]
    InvalidSyntax,
    #[display(fmt = "failed to parse move")]
    InvalidSquare(ParseSquareError),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whence, whither) = s.split_once('-').ok_or(ParseMoveError::InvalidSyntax)?;
        Ok(Move(whence.parse()?, whither.parse()?))
    }
}
