use crate::game;

mod board;
mod cell;
mod r#move;
mod rules;

pub use board::*;
pub use cell::*;
pub use r#move::*;
pub use rules::*;

/// A square on the 8x8 board.
pub type Square = game::Square<8>;
