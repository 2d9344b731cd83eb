use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod games;
mod play;

#[derive(From, Subcommand)]
pub enum Applet {
    Games(games::Games),
    Play(play::Play),
}

impl Default for Applet {
    fn default() -> Self {
        games::Games::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Games(a) => Ok(a.execute()?),
            Applet::Play(a) => Ok(a.execute()?),
        }
    }
}
