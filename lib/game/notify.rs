use super::Player;

/// Trait for types that want to learn how a match ended.
#[cfg_attr(test, mockall::automock)]
pub trait Notify {
    /// Called exactly once, with the winning [`Player`] or `None` if the match is drawn.
    fn notify(&mut self, winner: Option<Player>);
}

impl<F: FnMut(Option<Player>)> Notify for F {
    fn notify(&mut self, winner: Option<Player>) {
        self(winner)
    }
}
