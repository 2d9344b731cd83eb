use crate::io::Io;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::game::{self, Match, Player};
use std::io::{stdin, stdout, ErrorKind};
use tracing::{info, instrument, warn};

/// A match between two players taking turns at the same terminal.
///
/// Moves are read from the standard input, one per line,
/// either a single square for tic-tac-toe or `<origin>-<destination>` for checkers.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The game to play, e.g. `tic-tac-toe` or `checkers`.
    game: String,

    /// The player who moves first, e.g. `(id: 1, nickname: "Ana")`.
    first: Player,

    /// The player who moves second.
    second: Player,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let notifier = |winner: Option<Player>| match winner {
            Some(p) => info!(winner = %p, "the match is over"),
            None => info!("the match is over, nobody wins"),
        };

        let mut io = Io::new(stdout(), stdin());
        let mut game = Match::start(&self.game, self.first, self.second, notifier)?;

        io.send(game.board())?;

        while let Some(side) = game.turn() {
            io.send(format!("{} to move:", game.player(side)))?;
            io.flush()?;

            let line = match io.recv() {
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    warn!("the match was abandoned");
                    return Ok(());
                }

                line => line?,
            };

            match line.parse::<game::Play>() {
                Err(e) => io.send(e)?,
                Ok(m) => match game.play(m) {
                    Err(e) => io.send(e)?,
                    Ok(_) => io.send(game.board())?,
                },
            }
        }

        if let Some(report) = game.report() {
            io.send(ron::ser::to_string(&report)?)?;
        }

        Ok(io.flush()?)
    }
}
