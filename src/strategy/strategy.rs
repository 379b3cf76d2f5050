use crate::BALANCED_LAMBDAS;
use crate::Entropy;
use crate::Error;

/// Guess-selection policy, chosen once per player at construction.
///
/// The set is closed: every variant is a weighting of the same two scores,
/// so a new policy is a new arm here rather than a new type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Strategy {
    /// Maximize information gain about the opponent's code.
    #[default]
    Guessing,
    /// Minimize information leaked about our own code, then maximize gain.
    Hiding,
    /// Maximize IG − λ·IL for a fixed non-negative λ.
    Balanced(Entropy),
}

impl Strategy {
    /// Balanced policy with a validated weight.
    pub fn balanced(lambda: Entropy) -> Result<Self, Error> {
        match lambda.is_finite() && lambda >= 0.0 {
            true => Ok(Self::Balanced(lambda)),
            false => Err(Error::Lambda(lambda)),
        }
    }
    /// Checks a strategy built directly from its variants.
    pub fn validate(self) -> Result<Self, Error> {
        match self {
            Self::Balanced(lambda) => Self::balanced(lambda),
            strategy => Ok(strategy),
        }
    }
    /// The standard pool used for round-robin comparisons.
    pub fn pool() -> Vec<Self> {
        [Self::Guessing, Self::Hiding]
            .into_iter()
            .chain(BALANCED_LAMBDAS.into_iter().map(Self::Balanced))
            .collect()
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Guessing => write!(f, "GuessingFocused"),
            Self::Hiding => write!(f, "HidingFocused"),
            Self::Balanced(lambda) => write!(f, "Balanced(lam={})", lambda),
        }
    }
}

impl TryFrom<&str> for Strategy {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "GuessingFocused" => Ok(Self::Guessing),
            "HidingFocused" => Ok(Self::Hiding),
            s => {
                let lambda = s
                    .strip_prefix("Balanced(lam=")
                    .and_then(|s| s.strip_suffix(')'))
                    .ok_or_else(|| anyhow::anyhow!("unknown strategy: {}", s))?
                    .parse::<Entropy>()?;
                Ok(Self::balanced(lambda)?)
            }
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = anyhow::Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.to_string()
    }
}
