use crate::io::Io;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::game::Variant;
use std::io::{empty, stdout};
use tracing::instrument;

/// Lists the games available.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Games {}

impl Games {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut io = Io::new(stdout(), empty());

        for v in Variant::ALL {
            io.send(v)?;
        }

        Ok(io.flush()?)
    }
}
