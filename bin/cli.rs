use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Command line interface.
#[derive(Parser)]
#[clap(author, version, long_about = None)]
#[clap(about = "Play tic-tac-toe or checkers with a friend at the terminal")]
pub struct Cli {
    /// Verbosity level.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// What to do, lists the games available if omitted.
    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        let writer = layer()
            .pretty()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(stderr);

        registry().with(filter).with(writer).init();

        self.applet.unwrap_or_default().execute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_interface_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn players_are_parsed_from_ron() {
        let cli = Cli::try_parse_from([
            "cli",
            "play",
            "tic-tac-toe",
            r#"(id: 1, nickname: "Ana")"#,
            r#"(id: 2, nickname: "Bo")"#,
        ]);

        assert!(matches!(cli, Ok(Cli { applet: Some(Applet::Play(_)), .. })));
    }

    #[test]
    fn malformed_players_are_rejected() {
        let cli = Cli::try_parse_from(["cli", "play", "checkers", "Ana", "Bo"]);
        assert!(cli.is_err());
    }

    #[test]
    fn help_names_the_games() {
        let about = Cli::command().get_about().map(|a| a.to_string());
        assert_eq!(
            about.as_deref(),
            Some("Play tic-tac-toe or checkers with a friend at the terminal")
        );
    }

    #[test]
    fn games_are_listed_by_default() {
        let cli = Cli::try_parse_from(["cli"]);
        assert!(matches!(cli, Ok(Cli { applet: None, .. })));
    }
}
