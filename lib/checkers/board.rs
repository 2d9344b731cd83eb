use super::{Cell, Square};
use crate::game::Side;
use std::fmt::{self, Write};
use std::ops::{Index, IndexMut};

/// The cells of a checkers board.
///
/// Only dark squares, those whose row and column add up to an odd number, are playable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board([Cell; Square::COUNT as usize]);

impl Board {
    /// A board with every dark square empty.
    pub fn empty() -> Self {
        let mut cells = [Cell::Unplayable; Square::COUNT as usize];

        for s in Square::iter().filter(|s| (s.row() + s.col()) % 2 == 1) {
            cells[s.index()] = Cell::Empty;
        }

        Board(cells)
    }

    /// An iterator over every square and its cell.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Square, Cell)> + '_ {
        Square::iter().map(|s| (s, self[s]))
    }

    /// An iterator over the squares occupied by pieces of a [`Side`].
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        self.iter()
            .filter(move |(_, c)| c.piece() == Some(side))
            .map(|(s, _)| s)
    }

    /// How many pieces of a [`Side`] are left on the board.
    pub fn count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }
}

/// The starting position.
///
/// The first player's pieces fill the dark squares of rows 0 to 2,
/// the second player's those of rows 5 to 7.
impl Default for Board {
    fn default() -> Self {
        let mut board = Board::empty();

        for s in Square::iter() {
            if board[s].is_empty() {
                match s.row() {
                    0..=2 => board[s] = Cell::Piece(Side::First),
                    5..=7 => board[s] = Cell::Piece(Side::Second),
                    _ => {}
                }
            }
        }

        board
    }
}

impl Index<Square> for Board {
    type Output = Cell;

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
        for (s, cell) in self.iter() {
            if s.index() > 0 && s.col() == 0 {
                f.write_char('\n')?;
            }

            fmt::Display::fmt(&cell, f)?;
        }

        Ok(())
    }
}
