use super::*;
use crate::worlds::Agent;

/// Terminal label exported to reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    P1,
    P2,
    Tie,
    Draw,
}

impl From<Agent> for Outcome {
    fn from(agent: Agent) -> Self {
        match agent {
            Agent::P1 => Self::P1,
            Agent::P2 => Self::P2,
        }
    }
}

/// Labels a game by final candidate counts: whoever is down to one
/// opponent candidate has won. A game still in progress labels as a draw.
impl From<&Game> for Outcome {
    fn from(game: &Game) -> Self {
        let knows = |agent| game.player(agent).belief().knows();
        match (knows(Agent::P1), knows(Agent::P2)) {
            (true, true) => Self::Tie,
            (true, false) => Self::P1,
            (false, true) => Self::P2,
            (false, false) => Self::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::P1 => write!(f, "p1"),
            Self::P2 => write!(f, "p2"),
            Self::Tie => write!(f, "tie"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert!(serde_json::to_string(&Outcome::Tie).unwrap() == "\"tie\"");
        assert!(serde_json::from_str::<Outcome>("\"p2\"").unwrap() == Outcome::P2);
        assert!(Outcome::from(Agent::P1).to_string() == "p1");
    }

    #[test]
    fn fresh_game_is_undecided() {
        assert!(Outcome::from(&Game::default()) == Outcome::Draw);
    }
}
