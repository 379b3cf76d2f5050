use super::*;
use crate::belief::Belief;
use crate::belief::Score;
use crate::codes::Code;

/// Anything that can pick the next guess from a belief.
pub trait Policy {
    /// Always one of `belief.opponent()`.
    fn guess(&self, belief: &Belief) -> Code;
}

impl Policy for Strategy {
    fn guess(&self, belief: &Belief) -> Code {
        let scores = belief.scores();
        let best = match self {
            Self::Guessing => argbest(scores, |next, best| next.gain > best.gain),
            Self::Hiding => argbest(scores, |next, best| {
                next.leak < best.leak || (next.leak == best.leak && next.gain > best.gain)
            }),
            Self::Balanced(lambda) => argbest(scores, |next, best| {
                next.utility(*lambda) > best.utility(*lambda)
            }),
        };
        log::trace!(
            "{:<32}{:<32}",
            format!("{} {} picks", belief.agent(), self),
            format!("{} ig {:.3} il {:.3}", best.guess, best.gain, best.leak),
        );
        best.guess
    }
}

/// First score in enumeration order that no later score strictly beats.
fn argbest<F>(scores: Vec<Score>, better: F) -> Score
where
    F: Fn(&Score, &Score) -> bool,
{
    scores
        .into_iter()
        .reduce(|best, next| if better(&next, &best) { next } else { best })
        .expect("opponent candidates are never empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Entropy;
    use crate::codes::CodeSpace;
    use crate::codes::Feedback;
    use crate::worlds::Agent;
    use std::sync::Arc;

    fn code(s: &str) -> Code {
        Code::try_from(s).unwrap()
    }
    fn belief(secret: &str) -> Belief {
        Belief::new(Agent::P1, code(secret), Arc::new(CodeSpace::default())).unwrap()
    }
    /// belief after one informative round against opponent `ypb`
    fn advanced(secret: &str) -> Belief {
        let mut belief = belief(secret);
        let guess = code("gyr");
        let opponent = code("ypb");
        belief
            .update(
                &guess,
                Feedback::from((&guess, &opponent)),
                Feedback::from((&guess, &belief.secret())),
            )
            .unwrap();
        belief
    }

    #[test]
    fn every_strategy_guesses_a_candidate() {
        for belief in [belief("brg"), advanced("brg"), advanced("pyg")] {
            for strategy in Strategy::pool() {
                assert!(belief.opponent().contains(&strategy.guess(&belief)));
            }
        }
    }

    #[test]
    fn guessing_maximizes_gain_first_wins() {
        let belief = advanced("brg");
        let guess = Strategy::Guessing.guess(&belief);
        let scores = belief.scores();
        let best = scores.iter().map(|s| s.gain).fold(Entropy::MIN, Entropy::max);
        let first = scores.iter().find(|s| s.gain == best).unwrap();
        assert!(guess == first.guess);
    }

    #[test]
    fn hiding_minimizes_leak_then_maximizes_gain() {
        let belief = advanced("brg");
        let guess = Strategy::Hiding.guess(&belief);
        let scores = belief.scores();
        let least = scores.iter().map(|s| s.leak).fold(Entropy::MAX, Entropy::min);
        let tied = scores.iter().filter(|s| s.leak == least).collect::<Vec<_>>();
        let most = tied.iter().map(|s| s.gain).fold(Entropy::MIN, Entropy::max);
        let first = tied.iter().find(|s| s.gain == most).unwrap();
        assert!(guess == first.guess);
    }

    #[test]
    fn zero_weight_balance_is_guessing() {
        for belief in [belief("brg"), advanced("brg"), advanced("yrp")] {
            let balanced = Strategy::Balanced(0.0).guess(&belief);
            let guessing = Strategy::Guessing.guess(&belief);
            assert!(balanced == guessing);
        }
    }

    #[test]
    fn fresh_guessing_picks_first_code() {
        let belief = belief("brg");
        let guess = Strategy::Guessing.guess(&belief);
        assert!(guess == belief.space().codes()[0]);
    }

    #[test]
    fn deterministic() {
        let belief = advanced("ryb");
        for strategy in Strategy::pool() {
            assert!(strategy.guess(&belief) == strategy.guess(&belief));
        }
    }
}
