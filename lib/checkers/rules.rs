use super::{Board, Cell, Move};
use crate::game::{Rules, Score, Side};

/// The rules of [checkers], without promotion.
///
/// Pieces only ever move forward, diagonally, either one step onto an empty square
/// or two steps jumping over an opponent's piece, which is then removed from the board.
/// A side wins once the opponent has no pieces left.
///
/// [checkers]: https://en.wikipedia.org/wiki/Checkers
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Checkers {
    board: Board,
    captures: [u32; 2],
}

impl Checkers {
    /// Starts a game from an arbitrary [`Board`].
    pub fn with_board(board: Board) -> Self {
        Checkers {
            board,
            captures: [0; 2],
        }
    }

    /// How many rows a piece of this [`Side`] advances per step.
    #[inline(always)]
    pub fn forward(side: Side) -> i8 {
        match side {
            Side::First => 1,
            Side::Second => -1,
        }
    }

    /// How many of the opponent's pieces a [`Side`] has captured.
    pub fn captures(&self, side: Side) -> u32 {
        self.captures[side.index()]
    }

    /// An iterator over the legal [`Move`]s available to a [`Side`].
    pub fn moves(&self, side: Side) -> impl Iterator<Item = Move> + '_ {
        let dr = Self::forward(side);

        self.board.pieces(side).flat_map(move |whence| {
            [(dr, -1), (dr, 1), (2 * dr, -2), (2 * dr, 2)]
                .into_iter()
                .filter_map(move |(r, c)| whence.offset(r, c))
                .map(move |whither| Move(whence, whither))
                .filter(move |&m| self.is_legal(side, m))
        })
    }

    fn has_moves(&self, side: Side) -> bool {
        self.moves(side).next().is_some()
    }
}

impl Rules for Checkers {
    type Move = Move;
    type Board = Board;

    fn board(&self) -> Board {
        self.board
    }

    fn is_legal(&self, side: Side, m: Move) -> bool {
        if !self.board[m.whither()].is_empty() || self.board[m.whence()] != Cell::Piece(side) {
            return false;
        }

        let forward = Self::forward(side);

        match m.delta() {
            (dr, dc) if dr == forward && dc.abs() == 1 => true,
            (dr, dc) if dr == 2 * forward && dc.abs() == 2 => m
                .midpoint()
                .is_some_and(|s| self.board[s] == Cell::Piece(!side)),
            _ => false,
        }
    }

    fn apply(&mut self, side: Side, m: Move) {
        if let Some(captured) = m.midpoint() {
            self.board[captured] = Cell::Empty;
            self.captures[side.index()] += 1;
        }

        self.board[m.whither()] = self.board[m.whence()];
        self.board[m.whence()] = Cell::Empty;
    }

    fn is_winner(&self, side: Side) -> bool {
        self.board.count(!side) == 0
    }

    fn is_draw(&self) -> bool {
        !self.has_moves(Side::First) && !self.has_moves(Side::Second)
    }

    /// Each side scores the number of pieces it has captured.
    fn score(&self) -> Score {
        Score(self.captures(Side::First), self.captures(Side::Second))
    }
}
