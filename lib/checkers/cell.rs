use crate::game::Side;
use derive_more::Display;
use test_strategy::Arbitrary;

/// The contents of a square on the checkers board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
pub enum Cell {
    /// A light square, never used during the game.
    #[display(fmt = " ")]
    Unplayable,

    #[display(fmt = "-")]
    Empty,

    #[display(fmt = "{}", "glyph(*_0)")]
    Piece(Side),
}

fn glyph(s: Side) -> char {
    match s {
        Side::First => 'X',
        Side::Second => 'O',
    }
}

impl Cell {
    /// Whether a piece may land on this cell.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// The owner of the piece on this cell, if any.
    #[inline(always)]
    pub fn piece(&self) -> Option<Side> {
        match *self {
            Cell::Piece(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn pieces_are_never_empty(s: Side) {
        assert!(!Cell::Piece(s).is_empty());
        assert_eq!(Cell::Piece(s).piece(), Some(s));
    }

    #[test]
    fn unplayable_cells_are_neither_empty_nor_occupied() {
        assert!(!Cell::Unplayable.is_empty());
        assert_eq!(Cell::Unplayable.piece(), None);
    }

    #[proptest]
    fn every_cell_is_printed_as_one_character(c: Cell) {
        assert_eq!(c.to_string().chars().count(), 1);
    }
}
