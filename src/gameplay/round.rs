use crate::Epoch;
use crate::codes::Code;
use crate::codes::Feedback;
use crate::worlds::Agent;

/// Everything observable about one completed round, indexed by agent.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Round {
    /// 1-based.
    pub epoch: Epoch,
    pub guesses: [Code; 2],
    /// Each guess scored against the opponent's secret.
    pub scored: [Feedback; 2],
    /// Each guess scored against the guesser's own secret.
    pub revealed: [Feedback; 2],
    /// |Si| per agent after the round.
    pub opponent: [usize; 2],
    /// |Ti| per agent after the round.
    pub own: [usize; 2],
    /// Possible worlds surviving the round.
    pub worlds: usize,
}

impl Round {
    pub fn guess(&self, agent: Agent) -> Code {
        self.guesses[agent.index()]
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "round {:>3}  {} {} {}  {} {} {}  |S| {:>3} {:>3}  |T| {:>3} {:>3}  worlds {}",
            self.epoch,
            Agent::P1,
            self.guesses[0],
            self.scored[0],
            Agent::P2,
            self.guesses[1],
            self.scored[1],
            self.opponent[0],
            self.opponent[1],
            self.own[0],
            self.own[1],
            self.worlds,
        )
    }
}
