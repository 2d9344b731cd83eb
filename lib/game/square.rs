use derive_more::{Display, Error, From};
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use std::num::ParseIntError;
use std::{fmt, str::FromStr};

/// A square on an `N`x`N` board.
///
/// Squares are numbered row by row, starting from `0` at the top left corner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square<const N: u8>(u8);

impl<const N: u8> Square<N> {
    /// The number of squares on the board.
    pub const COUNT: u8 = N * N;

    /// Constructs [`Square`] from a pair of row and column, if both are on the board.
    #[inline(always)]
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < N && col < N).then_some(Square(row * N + col))
    }

    /// This square's row-major index.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// This square's row.
    #[inline(always)]
    pub fn row(&self) -> u8 {
        self.0 / N
    }

    /// This square's column.
    #[inline(always)]
    pub fn col(&self) -> u8 {
        self.0 % N
    }

    /// The square `drow` rows and `dcol` columns away, if it is on the board.
    pub fn offset(&self, drow: i8, dcol: i8) -> Option<Self> {
        let row = u8::try_from((self.row() as i8).checked_add(drow)?).ok()?;
        let col = u8::try_from((self.col() as i8).checked_add(dcol)?).ok()?;
        Self::new(row, col)
    }

    /// An iterator over all squares in index order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..Self::COUNT).map(Square)
    }
}

impl<const N: u8> Arbitrary for Square<N> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..Self::COUNT).prop_map(Square).boxed()
    }
}

/// Represents an index that does not name a square on the board.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "square `{_0}` is off the board")]
pub struct InvalidSquare(#[error(not(source))] pub u8);

impl<const N: u8> TryFrom<u8> for Square<N> {
    type Error = InvalidSquare;

    fn try_from(i: u8) -> Result<Self, Self::Error> {
        if i < Self::COUNT {
            Ok(Square(i))
        } else {
            Err(InvalidSquare(i))
        }
    }
}

impl<const N: u8> fmt::Display for Square<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseSquareError {
    #[display(fmt = "failed to parse square")]
    InvalidIndex(ParseIntError),
    #[display(fmt = "failed to parse square")]
    OffTheBoard(InvalidSquare),
}

impl<const N: u8> FromStr for Square<N> {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.trim().parse::<u8>()?.try_into()?)
    }
}
