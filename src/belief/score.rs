use super::*;
use crate::Entropy;
use crate::codes::Code;

/// Both information measures of one candidate guess.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub guess: Code,
    pub gain: Entropy,
    pub leak: Entropy,
}

impl Score {
    /// U(g) = IG(g) − λ·IL(g)
    pub fn utility(&self, lambda: Entropy) -> Entropy {
        self.gain - lambda * self.leak
    }
}

impl From<(&Belief, &Code)> for Score {
    fn from((belief, guess): (&Belief, &Code)) -> Self {
        Self {
            guess: *guess,
            gain: belief.gain(guess),
            leak: belief.leak(guess),
        }
    }
}

impl Belief {
    /// Score every opponent candidate as a guess, in enumeration order.
    ///
    /// Each score is independent, so with the `server` feature they are
    /// computed in parallel. Collection preserves order either way, which
    /// keeps tie-breaking independent of scheduling.
    pub fn scores(&self) -> Vec<Score> {
        #[cfg(feature = "server")]
        {
            use rayon::prelude::*;
            self.opponent()
                .par_iter()
                .map(|guess| Score::from((self, guess)))
                .collect()
        }
        #[cfg(not(feature = "server"))]
        {
            self.opponent()
                .iter()
                .map(|guess| Score::from((self, guess)))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::CodeSpace;
    use crate::worlds::Agent;
    use std::sync::Arc;

    #[test]
    fn one_score_per_candidate_in_order() {
        let space = Arc::new(CodeSpace::default());
        let secret = space.codes()[17];
        let belief = Belief::new(Agent::P2, secret, space.clone()).unwrap();
        let scores = belief.scores();
        assert!(scores.len() == space.len());
        assert!(scores.iter().map(|s| s.guess).eq(space.iter().copied()));
        assert!(scores.iter().all(|s| s.gain >= 0.0 && s.leak >= 0.0));
    }

    #[test]
    fn utility_trades_gain_for_leak() {
        let score = Score {
            guess: Code::try_from("brg").unwrap(),
            gain: 2.0,
            leak: 0.5,
        };
        assert!(score.utility(0.0) == 2.0);
        assert!(score.utility(2.0) == 1.0);
    }
}
