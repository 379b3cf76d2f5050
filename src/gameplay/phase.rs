use crate::worlds::Agent;

/// Who reached certainty about the other's code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    One(Agent),
    /// Both in the same round.
    Both,
}

/// Game loop state. `InProgress` is initial; the others are terminal and
/// never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    InProgress,
    EpistemicWin(Winner),
    /// Round cap reached with neither agent certain.
    Draw,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
    /// Phase after a completed round, from who knows and how many rounds
    /// have been played against the cap.
    pub fn after(knows: [bool; 2], played: crate::Epoch, limit: crate::Epoch) -> Self {
        match knows {
            [true, true] => Self::EpistemicWin(Winner::Both),
            [true, false] => Self::EpistemicWin(Winner::One(Agent::P1)),
            [false, true] => Self::EpistemicWin(Winner::One(Agent::P2)),
            [false, false] if played >= limit => Self::Draw,
            [false, false] => Self::InProgress,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::EpistemicWin(Winner::One(agent)) => write!(f, "{} wins", agent),
            Self::EpistemicWin(Winner::Both) => write!(f, "tie"),
            Self::Draw => write!(f, "draw"),
        }
    }
}
