use super::*;
use crate::Entropy;
use crate::Error;
use crate::codes::Code;
use crate::codes::CodeSpace;
use crate::codes::Feedback;
use crate::worlds::Agent;
use crate::worlds::Clause;
use std::sync::Arc;

/// What one agent knows, and what it believes its opponent knows about it.
///
/// # Candidate sets
///
/// - `opponent` (Si) — codes the opponent's secret could still be
/// - `own` (Ti) — codes the opponent could still believe *our* secret is,
///   judged from public evidence alone
///
/// Both start as the whole code space, keep enumeration order, and only
/// ever shrink. Our own secret never leaves `own`. Feedback that disagrees
/// with our secret, or that no opponent candidate could produce, is
/// rejected before anything changes.
///
/// # Updates
///
/// Every guess is scored against both secrets and both scores become
/// public. The guesser's own move goes through [`Belief::update`]; the
/// other agent's move goes through [`Belief::observe`]. They differ only
/// in which guesses they accept: an own guess must be a current candidate,
/// while an observed guess merely has to be a code of this game.
#[derive(Debug, Clone)]
pub struct Belief {
    agent: Agent,
    secret: Code,
    space: Arc<CodeSpace>,
    opponent: Vec<Code>,
    own: Vec<Code>,
}

impl Belief {
    /// Fresh belief at game start: every code is still possible on both sides.
    pub fn new(agent: Agent, secret: Code, space: Arc<CodeSpace>) -> Result<Self, Error> {
        if !space.contains(&secret) {
            return Err(Error::Foreign(secret));
        }
        Ok(Self {
            agent,
            secret,
            opponent: space.codes().to_vec(),
            own: space.codes().to_vec(),
            space,
        })
    }

    pub fn agent(&self) -> Agent {
        self.agent
    }
    pub fn secret(&self) -> Code {
        self.secret
    }
    pub fn space(&self) -> &CodeSpace {
        &self.space
    }
    pub fn length(&self) -> usize {
        self.space.length()
    }
    /// Si: candidates for the opponent's secret.
    pub fn opponent(&self) -> &[Code] {
        &self.opponent
    }
    /// Ti: candidates the opponent could hold for our secret.
    pub fn own(&self) -> &[Code] {
        &self.own
    }
    /// The opponent's secret, once it is the only candidate left.
    pub fn solution(&self) -> Option<Code> {
        match self.opponent.as_slice() {
            [code] => Some(*code),
            _ => None,
        }
    }
    /// Epistemic win condition: exactly one opponent candidate remains.
    pub fn knows(&self) -> bool {
        self.opponent.len() == 1
    }

    /// Expected drop in H(Si) from the feedback this guess would receive.
    pub fn gain(&self, guess: &Code) -> Entropy {
        if self.opponent.len() <= 1 {
            return 0.0;
        }
        let partition = Partition::from((guess, self.opponent.iter()));
        (hartley(self.opponent.len()) - partition.remainder()).max(0.0)
    }
    /// Drop in H(Ti) forced by this guess's public score against our own secret.
    pub fn leak(&self, guess: &Code) -> Entropy {
        if self.own.len() <= 1 {
            return 0.0;
        }
        let revealed = Feedback::from((guess, &self.secret));
        let survivors = self
            .own
            .iter()
            .filter(|code| Feedback::from((guess, *code)) == revealed)
            .count();
        hartley(self.own.len()) - hartley(survivors)
    }

    /// Apply our own move. `about_opponent` scores the guess against the
    /// opponent's secret, `about_self` against ours. Returns the clause
    /// "the opponent's code is one of the surviving Si".
    pub fn update(
        &mut self,
        guess: &Code,
        about_opponent: Feedback,
        about_self: Feedback,
    ) -> Result<Clause, Error> {
        if !self.opponent.contains(guess) {
            return Err(Error::Foreign(*guess));
        }
        self.filter(guess, about_opponent, about_self)
    }
    /// Apply the opponent's move. From our side the roles flip:
    /// `about_opponent` scores their guess against their own secret,
    /// `about_self` scores it against ours.
    pub fn observe(
        &mut self,
        guess: &Code,
        about_opponent: Feedback,
        about_self: Feedback,
    ) -> Result<Clause, Error> {
        if !self.space.contains(guess) {
            return Err(Error::Foreign(*guess));
        }
        self.filter(guess, about_opponent, about_self)
    }

    fn filter(
        &mut self,
        guess: &Code,
        about_opponent: Feedback,
        about_self: Feedback,
    ) -> Result<Clause, Error> {
        let length = self.length();
        let about_opponent = about_opponent.validate(length)?;
        let about_self = about_self.validate(length)?;
        if Feedback::from((guess, &self.secret)) != about_self {
            return Err(Error::Contradiction {
                guess: *guess,
                feedback: about_self,
            });
        }
        let opponent = Self::consistent(&self.opponent, guess, about_opponent);
        if opponent.is_empty() {
            return Err(Error::Inconsistent {
                guess: *guess,
                feedback: about_opponent,
            });
        }
        let own = Self::consistent(&self.own, guess, about_self);
        debug_assert!(own.contains(&self.secret));
        log::trace!(
            "{:<32}|S| {:>4} -> {:<4} |T| {:>4} -> {:<4}",
            format!("{} filtered by {}", self.agent, guess),
            self.opponent.len(),
            opponent.len(),
            self.own.len(),
            own.len(),
        );
        self.opponent = opponent;
        self.own = own;
        Ok(Clause::from((self.agent.opponent(), self.opponent.iter().copied())))
    }
    fn consistent(candidates: &[Code], guess: &Code, feedback: Feedback) -> Vec<Code> {
        candidates
            .iter()
            .filter(|code| Feedback::from((guess, *code)) == feedback)
            .copied()
            .collect()
    }
}
