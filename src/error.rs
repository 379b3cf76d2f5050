//! Recoverable errors: bad configuration and caller misuse.
//!
//! Internal inconsistencies (a belief update that would discard the ground
//! truth) are not represented here. Those panic, since no caller can recover
//! from a broken feedback oracle or bookkeeping defect.
use crate::Entropy;
use crate::codes::Code;
use crate::codes::Feedback;
use crate::codes::Symbol;
use crate::worlds::Agent;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The palette has no symbols at all.
    #[error("palette is empty")]
    Empty,

    /// More palette symbols than a `u64` membership mask can track.
    #[error("palette has {0} symbols, at most {} supported", crate::MAX_PALETTE)]
    Wide(usize),

    /// A palette symbol appears more than once.
    #[error("palette repeats symbol {0}")]
    Duplicate(Symbol),

    /// No code of distinct symbols can be formed with this palette and length.
    #[error("cannot form codes of length {length} from {palette} distinct symbols")]
    Length { palette: usize, length: usize },

    /// Balanced weight must be finite and non-negative.
    #[error("balanced weight must be finite and non-negative, got {0}")]
    Lambda(Entropy),

    /// Guess is not admissible for this update: an own guess that is not in the
    /// current opponent candidates, or an observed guess outside the code space.
    #[error("guess {0} is not admissible here")]
    Foreign(Code),

    /// Feedback outside `exact + partial <= length`.
    #[error("feedback {feedback} is out of range for codes of length {length}")]
    Feedback { feedback: Feedback, length: usize },

    /// Announced self-feedback disagrees with the agent's own secret.
    #[error("guess {guess} cannot score {feedback} against the agent's own secret")]
    Contradiction { guess: Code, feedback: Feedback },

    /// Feedback that no remaining opponent candidate could produce.
    #[error("no opponent candidate scores {feedback} against {guess}")]
    Inconsistent { guess: Code, feedback: Feedback },

    /// Agent index other than 0 or 1.
    #[error("no agent at index {0}")]
    Agent(usize),

    /// A player was seated in the other agent's position.
    #[error("player for {found} seated as {expected}")]
    Seat { expected: Agent, found: Agent },

    /// Players were built over different code spaces.
    #[error("players disagree on the code space")]
    Mismatch,
}

impl Error {
    /// Whether this error was raised while validating configuration,
    /// before any game could start.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::Empty
                | Self::Wide(_)
                | Self::Duplicate(_)
                | Self::Length { .. }
                | Self::Lambda(_)
        )
    }
    /// Whether this error was raised by a caller misusing a running game.
    pub fn is_misuse(&self) -> bool {
        matches!(
            self,
            Self::Foreign(_)
                | Self::Feedback { .. }
                | Self::Contradiction { .. }
                | Self::Inconsistent { .. }
                | Self::Agent(_)
                | Self::Seat { .. }
                | Self::Mismatch
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_disjoint() {
        let config = Error::Length {
            palette: 2,
            length: 3,
        };
        let misuse = Error::Feedback {
            feedback: Feedback::from((2, 2)),
            length: 3,
        };
        assert!(config.is_config() && !config.is_misuse());
        assert!(misuse.is_misuse() && !misuse.is_config());
    }

    #[test]
    fn messages_name_the_problem() {
        let error = Error::Length {
            palette: 2,
            length: 3,
        };
        assert!(error.to_string() == "cannot form codes of length 3 from 2 distinct symbols");
    }
}
