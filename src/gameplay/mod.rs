mod game;
mod outcome;
mod phase;
mod player;
mod report;
mod round;
mod rules;

pub use game::*;
pub use outcome::*;
pub use phase::*;
pub use player::*;
pub use report::*;
pub use round::*;
pub use rules::*;
