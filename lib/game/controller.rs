use super::{Notify, Outcome, Player, Rules, Ruleset, Score, Side, UnknownGame, Variant};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use test_strategy::Arbitrary;
use tracing::{debug, field::display, info, instrument, warn, Span};

/// The state of a [`Match`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    #[display(fmt = "awaiting a move by the {_0} player")]
    AwaitingMove(Side),

    #[display(fmt = "ended in a {_0}")]
    Ended(Outcome),
}

/// The reason why a move was not accepted.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Rejection<M> {
    /// The move is not legal on the current board, the match goes on unchanged.
    #[display(fmt = "illegal move `{}`", _0)]
    IllegalMove(#[error(not(source))] M),

    /// The match has already ended, no move is ever accepted again.
    #[display(fmt = "the match has already ended")]
    MatchEnded,
}

/// The end-of-match summary.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash)]
#[derive(Deserialize, Serialize)]
#[display(fmt = "{} ({})", outcome, score)]
pub struct Report {
    pub outcome: Outcome,
    pub winner: Option<Player>,
    pub score: Score,
}

/// A match between two [`Player`]s.
///
/// The first player moves first, then turns alternate until the [`Rules`] declare
/// either a winner or a draw, at which point the [`Notify`] is called exactly once.
#[derive(Clone)]
pub struct Match<R, N> {
    rules: R,
    players: [Player; 2],
    state: State,
    notifier: N,
}

impl<R: fmt::Debug, N> fmt::Debug for Match<R, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("rules", &self.rules)
            .field("players", &self.players)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<N: Notify> Match<Ruleset, N> {
    /// Starts a match of the game called `game`.
    ///
    /// Game names are matched ignoring case, spacing and punctuation,
    /// see [`Variant`].
    #[instrument(level = "debug", skip(notifier), err)]
    pub fn start(
        game: &str,
        first: Player,
        second: Player,
        notifier: N,
    ) -> Result<Self, UnknownGame> {
        let variant: Variant = game.parse()?;
        info!(%variant, %first, %second, "starting a new match");
        Ok(Match::new(variant.setup(), first, second, notifier))
    }
}

impl<R: Rules, N: Notify> Match<R, N> {
    /// Constructs a [`Match`] awaiting a move by the first player.
    pub fn new(rules: R, first: Player, second: Player, notifier: N) -> Self {
        Match {
            rules,
            players: [first, second],
            state: State::AwaitingMove(Side::First),
            notifier,
        }
    }

    /// The [`Rules`] of the game being played.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// A snapshot of the current board.
    pub fn board(&self) -> R::Board {
        self.rules.board()
    }

    /// The current [`Score`].
    pub fn score(&self) -> Score {
        self.rules.score()
    }

    /// The current [`State`].
    pub fn state(&self) -> State {
        self.state
    }

    /// The [`Side`] to move, unless the match has ended.
    pub fn turn(&self) -> Option<Side> {
        match self.state {
            State::AwaitingMove(side) => Some(side),
            State::Ended(_) => None,
        }
    }

    /// The [`Player`] sitting on a [`Side`].
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// The [`Outcome`], if the match has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            State::Ended(outcome) => Some(outcome),
            State::AwaitingMove(_) => None,
        }
    }

    /// The winning [`Player`], if the match has ended decisively.
    pub fn winner(&self) -> Option<&Player> {
        Some(self.player(self.outcome()?.winner()?))
    }

    /// The end-of-match [`Report`], if the match has ended.
    pub fn report(&self) -> Option<Report> {
        Some(Report {
            outcome: self.outcome()?,
            winner: self.winner().cloned(),
            score: self.score(),
        })
    }

    /// Plays a move on behalf of the side to move.
    ///
    /// An illegal move is rejected and leaves the match unchanged,
    /// the same side may then try another move.
    #[instrument(level = "debug", skip(self, m), fields(%m, side, outcome))]
    pub fn play(&mut self, m: R::Move) -> Result<State, Rejection<R::Move>> {
        let side = match self.state {
            State::AwaitingMove(side) => side,
            State::Ended(_) => {
                warn!(%m, "rejected move after the match has ended");
                return Err(Rejection::MatchEnded);
            }
        };

        Span::current().record("side", display(side));

        if !self.rules.is_legal(side, m) {
            warn!(%side, %m, "rejected illegal move");
            return Err(Rejection::IllegalMove(m));
        }

        self.rules.apply(side, m);
        debug!(%side, %m, "accepted move");

        let outcome = if self.rules.is_winner(side) {
            Outcome::Win(side)
        } else if self.rules.is_winner(!side) {
            Outcome::Win(!side)
        } else if self.rules.is_draw() {
            Outcome::Draw
        } else {
            self.state = State::AwaitingMove(!side);
            return Ok(self.state);
        };

        Span::current().record("outcome", display(outcome));
        self.state = State::Ended(outcome);

        let winner = self.winner().cloned();
        info!(%outcome, score = %self.score(), "the match has ended");
        self.notifier.notify(winner);

        Ok(self.state)
    }
}
