//! Possible-worlds model used to cross-check belief updates.
//!
//! A world fixes both secrets. Each agent cannot tell apart worlds that agree
//! on its own code, which gives one accessibility relation per agent. Public
//! announcements are positive formulas (conjunctions of per-agent
//! disjunctions of atoms), and solving by an announcement keeps exactly the
//! worlds that satisfy it.
//!
//! This model is not the game state. The beliefs are. After every round the
//! model must contain exactly `|P1.Si| × |P2.Si|` worlds, and any disagreement
//! means the belief bookkeeping is wrong.
mod agent;
mod formula;
mod model;
mod world;

pub use agent::*;
pub use formula::*;
pub use model::*;
pub use world::*;
