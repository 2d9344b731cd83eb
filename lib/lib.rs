/// Types shared by every two-player game.
pub mod game;
/// The 3x3 game where players take turns placing their mark.
pub mod tictactoe;
/// The 8x8 game where players move pieces diagonally and capture by jumping.
pub mod checkers;
