//! Guess selection.
//!
//! Every policy picks from the current opponent candidates, so no strategy
//! ever tries a code already ruled out by public evidence. Candidates are
//! scanned in enumeration order and the first best one wins, which makes
//! every choice deterministic without consulting randomness.
mod policy;
mod strategy;

pub use policy::*;
pub use strategy::*;
