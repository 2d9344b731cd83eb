use anyhow::Error as Anyhow;
use lib::checkers::Square;
use lib::game::{
    Match, Outcome, Play, Player, Rejection, Score, Side, Snapshot, State, UnknownGame,
};

fn ana() -> Player {
    r#"(id: 1, nickname: "Ana")"#.parse().unwrap()
}

fn bo() -> Player {
    r#"(id: 2, nickname: "Bo")"#.parse().unwrap()
}

fn plays(moves: &[&str]) -> Vec<Play> {
    moves.iter().map(|m| m.parse().unwrap()).collect()
}

#[test]
fn first_player_completes_the_top_row() -> Result<(), Anyhow> {
    let mut notifications = Vec::new();
    let mut game = Match::start("Tic Tac Toe", ana(), bo(), |w: Option<Player>| {
        notifications.push(w)
    })?;

    for m in plays(&["0", "3", "1", "4"]) {
        assert!(matches!(game.play(m)?, State::AwaitingMove(_)));
    }

    let outcome = Outcome::Win(Side::First);
    assert_eq!(game.play("2".parse()?)?, State::Ended(outcome));
    assert_eq!(game.play("8".parse()?), Err(Rejection::MatchEnded));
    assert_eq!(game.winner(), Some(&ana()));

    let report = game.report().unwrap();
    assert_eq!(report.outcome, outcome);
    assert_eq!(report.winner, Some(ana()));
    assert_eq!(report.score, Score(2, 0));

    drop(game);
    assert_eq!(notifications, [Some(ana())]);

    Ok(())
}

#[test]
fn full_board_without_line_is_drawn() -> Result<(), Anyhow> {
    let mut notifications = Vec::new();
    let mut game = Match::start("tic-tac-toe", ana(), bo(), |w: Option<Player>| {
        notifications.push(w)
    })?;

    for m in plays(&["0", "4", "8", "1", "7", "6", "2", "5"]) {
        assert!(matches!(game.play(m)?, State::AwaitingMove(_)));
    }

    assert_eq!(game.play("3".parse()?)?, State::Ended(Outcome::Draw));
    assert_eq!(game.winner(), None);
    assert_eq!(game.score(), Score(0, 0));

    drop(game);
    assert_eq!(notifications, [None]);

    Ok(())
}

#[test]
fn first_column_wins_before_the_board_fills() -> Result<(), Anyhow> {
    let mut notifications = Vec::new();
    let mut game = Match::start("tictactoe", ana(), bo(), |w: Option<Player>| {
        notifications.push(w)
    })?;

    for m in plays(&["0", "1", "2", "4", "3", "5"]) {
        game.play(m)?;
    }

    assert_eq!(game.play("6".parse()?)?, State::Ended(Outcome::Win(Side::First)));

    for m in plays(&["8", "7"]) {
        assert_eq!(game.play(m), Err(Rejection::MatchEnded));
    }

    drop(game);
    assert_eq!(notifications, [Some(ana())]);

    Ok(())
}

#[test]
fn jumping_over_an_opponents_piece_captures_it() -> Result<(), Anyhow> {
    let mut game = Match::start("Checkers", ana(), bo(), |_: Option<Player>| {
        panic!("the match should not have ended");
    })?;

    for m in plays(&["23-30", "44-35", "14-23", "35-26"]) {
        game.play(m)?;
    }

    let before = match game.board() {
        Snapshot::Checkers(board) => board,
        Snapshot::TicTacToe(_) => panic!("expected a checkers board"),
    };

    assert_eq!(game.score(), Score(0, 0));
    assert_eq!(before.count(Side::Second), 12);

    assert_eq!(game.play("17-35".parse()?)?, State::AwaitingMove(Side::Second));

    let after = match game.board() {
        Snapshot::Checkers(board) => board,
        Snapshot::TicTacToe(_) => panic!("expected a checkers board"),
    };

    let [from, over, to] = ["17", "26", "35"].map(|s| s.parse::<Square>().unwrap());
    assert_eq!(after[from].piece(), None);
    assert_eq!(after[over].piece(), None);
    assert_eq!(after[to].piece(), Some(Side::First));
    assert_eq!(after.count(Side::Second), 11);
    assert_eq!(game.score(), Score(1, 0));

    Ok(())
}

#[test]
fn occupied_and_unplayable_squares_are_rejected() -> Result<(), Anyhow> {
    let mut game = Match::start("Tic Tac Toe", ana(), bo(), |_: Option<Player>| {})?;
    game.play("4".parse()?)?;

    let board = game.board();
    for m in plays(&["4", "17-26"]) {
        assert_eq!(game.play(m), Err(Rejection::IllegalMove(m)));
        assert_eq!(game.board(), board);
        assert_eq!(game.turn(), Some(Side::Second));
    }

    let mut game = Match::start("Checkers", ana(), bo(), |_: Option<Player>| {})?;

    let board = game.board();
    for m in plays(&["10-17", "17-25", "17-8", "4"]) {
        assert_eq!(game.play(m), Err(Rejection::IllegalMove(m)));
        assert_eq!(game.board(), board);
        assert_eq!(game.turn(), Some(Side::First));
    }

    Ok(())
}

#[test]
fn unknown_game_does_not_start_a_match() {
    let mut notifications = Vec::new();
    let result = Match::start("Chess", ana(), bo(), |w: Option<Player>| notifications.push(w));

    assert_eq!(result.map(|_| ()), Err(UnknownGame("Chess".into())));
    assert!(notifications.is_empty());
}
