mod controller;
mod notify;
mod outcome;
mod player;
mod rules;
mod ruleset;
mod score;
mod side;
mod square;
mod variant;

pub use controller::*;
pub use notify::*;
pub use outcome::*;
pub use player::*;
pub use rules::*;
pub use ruleset::*;
pub use score::*;
pub use side::*;
pub use square::*;
pub use variant::*;
