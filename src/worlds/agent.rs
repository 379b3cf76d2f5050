/// One of the two players, indexing everything that comes in pairs.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Agent {
    /// Moves first every round.
    P1,
    /// Moves second every round.
    P2,
}

impl Agent {
    pub const fn all() -> [Self; 2] {
        [Self::P1, Self::P2]
    }
    pub const fn opponent(&self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
    pub const fn index(&self) -> usize {
        match self {
            Self::P1 => 0,
            Self::P2 => 1,
        }
    }
}

impl TryFrom<usize> for Agent {
    type Error = crate::Error;
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::P1),
            1 => Ok(Self::P2),
            n => Err(crate::Error::Agent(n)),
        }
    }
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::P1 => write!(f, "p1"),
            Self::P2 => write!(f, "p2"),
        }
    }
}
