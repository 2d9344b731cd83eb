use super::Square;
use crate::game::Side;
use std::fmt::{self, Write};
use std::ops::{Index, IndexMut};

/// The marks on a tic-tac-toe board.
///
/// The [first](`Side::First`) player marks squares with `X`, the second with `O`.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board([Option<Side>; Square::COUNT as usize]);

impl Board {
    /// An iterator over every square and its mark, if any.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Square, Option<Side>)> + '_ {
        Square::iter().map(|s| (s, self[s]))
    }

    /// How many squares have been marked.
    pub fn marked(&self) -> usize {
        self.0.iter().flatten().count()
    }

    /// Whether every square has been marked.
    pub fn is_full(&self) -> bool {
        self.marked() == self.0.len()
    }
}

impl Index<Square> for Board {
    type Output = Option<Side>;

    #[inline(always)]
    fn index(&self, s: Square) -> &Self::Output {
        &self.0[s.index()]
    }
}

impl IndexMut<Square> for Board {
    #[inline(always)]
    fn index_mut(&mut self, s: Square) -> &mut Self::Output {
        &mut self.0[s.index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (s, mark) in self.iter() {
            if s.index() > 0 && s.col() == 0 {
                f.write_char('\n')?;
            }

            f.write_char(match mark {
                Some(Side::First) => 'X',
                Some(Side::Second) => 'O',
                None => '-',
            })?;
        }

        Ok(())
    }
}
