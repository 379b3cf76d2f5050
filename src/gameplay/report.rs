use super::*;
use crate::Epoch;

/// Summary of a finished game.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Report {
    /// Rounds played by the run that produced this report.
    pub rounds: Epoch,
    /// Possible worlds before the run's first round.
    pub initial: usize,
    /// Possible worlds after each of those rounds, in order.
    pub worlds: Vec<usize>,
    pub outcome: Outcome,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} after {} rounds", self.outcome, self.rounds)
    }
}
