use lib::game::{Match, Notify, Outcome, Player, Rules, Side};
use lib::tictactoe::TicTacToe;
use rayon::prelude::*;
use std::ops::Add;

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
struct Tally {
    games: usize,
    first: usize,
    second: usize,
    draws: usize,
}

impl Add for Tally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Tally {
            games: self.games + rhs.games,
            first: self.first + rhs.first,
            second: self.second + rhs.second,
            draws: self.draws + rhs.draws,
        }
    }
}

fn tally<N>(game: &Match<TicTacToe, N>) -> Tally
where
    N: Notify + Clone + Send + Sync,
{
    let rules = game.rules();
    assert!(!(rules.is_winner(Side::First) && rules.is_winner(Side::Second)));

    match game.outcome() {
        Some(Outcome::Win(Side::First)) => Tally {
            games: 1,
            first: 1,
            ..Tally::default()
        },

        Some(Outcome::Win(Side::Second)) => Tally {
            games: 1,
            second: 1,
            ..Tally::default()
        },

        Some(Outcome::Draw) => Tally {
            games: 1,
            draws: 1,
            ..Tally::default()
        },

        None => rules
            .moves()
            .par_bridge()
            .map(|s| {
                let mut next = game.clone();
                assert!(next.play(s).is_ok());
                tally(&next)
            })
            .reduce(Tally::default, Add::add),
    }
}

#[cfg(not(tarpaulin))]
#[test]
fn every_game_of_tictactoe_is_accounted_for() {
    let first = Player::new(1, "Ana".into());
    let second = Player::new(2, "Bo".into());
    let game = Match::new(TicTacToe::default(), first, second, |_: Option<Player>| {});

    assert_eq!(
        tally(&game),
        Tally {
            games: 255168,
            first: 131184,
            second: 77904,
            draws: 46080,
        }
    );
}
