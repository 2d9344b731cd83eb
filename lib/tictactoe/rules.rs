use super::{Board, Square};
use crate::game::{Rules, Score, Side};

/// The eight lines of three squares, by index: rows, columns, then diagonals.
const LINES: [[u8; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The rules of [tic-tac-toe].
///
/// Players take turns marking an empty square,
/// the first to complete a line of three of their marks wins.
///
/// [tic-tac-toe]: https://en.wikipedia.org/wiki/Tic-tac-toe
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct TicTacToe {
    board: Board,
    plays: u32,
}

impl TicTacToe {
    /// How many moves have been played.
    pub fn plays(&self) -> u32 {
        self.plays
    }

    /// An iterator over the squares still available.
    pub fn moves(&self) -> impl Iterator<Item = Square> + '_ {
        self.board
            .iter()
            .filter(|(_, mark)| mark.is_none())
            .map(|(s, _)| s)
    }
}

impl Rules for TicTacToe {
    type Move = Square;
    type Board = Board;

    fn board(&self) -> Board {
        self.board
    }

    fn is_legal(&self, _: Side, s: Square) -> bool {
        self.board[s].is_none()
    }

    fn apply(&mut self, side: Side, s: Square) {
        self.board[s] = Some(side);
        self.plays += 1;
    }

    fn is_winner(&self, side: Side) -> bool {
        LINES.iter().any(|line| {
            line.iter().all(|&i| {
                Square::try_from(i).map_or(false, |s| self.board[s] == Some(side))
            })
        })
    }

    fn is_draw(&self) -> bool {
        self.board.is_full() && !Side::ALL.into_iter().any(|s| self.is_winner(s))
    }

    /// The winner scores one point for every pair of moves played, the loser scores nothing.
    fn score(&self) -> Score {
        let points = self.plays / 2;

        if self.is_winner(Side::First) {
            Score(points, 0)
        } else if self.is_winner(Side::Second) {
            Score(0, points)
        } else {
            Score(0, 0)
        }
    }
}
