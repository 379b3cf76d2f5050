use super::*;
use crate::codes::Code;

/// One way the game could be: a secret for each agent.
///
/// The valuation is implicit: the atom "code `c` belongs to agent `x`" is
/// true here exactly when `self.code(x) == c`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct World([Code; 2]);

impl World {
    pub fn code(&self, agent: Agent) -> Code {
        self.0[agent.index()]
    }
    /// Two worlds look the same to an agent when its own code agrees.
    pub fn indistinguishable(&self, other: &Self, agent: Agent) -> bool {
        self.code(agent) == other.code(agent)
    }
}

impl From<(Code, Code)> for World {
    fn from((p1, p2): (Code, Code)) -> Self {
        Self([p1, p2])
    }
}

impl std::fmt::Display for World {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({},{})", self.0[0], self.0[1])
    }
}
