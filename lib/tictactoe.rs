use crate::game;

mod board;
mod rules;

pub use board::*;
pub use rules::*;

/// A square on the 3x3 board.
pub type Square = game::Square<3>;
