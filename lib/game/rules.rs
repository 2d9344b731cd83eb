use super::{Score, Side};
use std::fmt::{Debug, Display};

/// Trait for types that know the rules of a two-player board game.
///
/// Implementations own the board for the duration of a single match.
/// They never decide whose turn it is, the [`Match`][`super::Match`] tells them.
#[cfg_attr(test, mockall::automock(type Move = u8; type Board = String;))]
pub trait Rules {
    /// What a player submits on their turn.
    type Move: Debug + Display + Copy;

    /// The state of every square on the board.
    type Board: Debug + Display + Clone;

    /// A snapshot of the current board.
    fn board(&self) -> Self::Board;

    /// Whether `side` may play [`Self::Move`] on the current board.
    ///
    /// Must not have observable side effects.
    fn is_legal(&self, side: Side, m: Self::Move) -> bool;

    /// Plays a [`Self::Move`] previously found [legal](`Self::is_legal`) for `side`.
    fn apply(&mut self, side: Side, m: Self::Move);

    /// Whether `side` has met the winning condition.
    fn is_winner(&self, side: Side) -> bool;

    /// Whether the game can no longer be won by either side.
    fn is_draw(&self) -> bool;

    /// Summarizes the match so far.
    fn score(&self) -> Score;
}
