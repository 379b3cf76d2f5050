use crate::Error;
use crate::belief::Belief;
use crate::codes::Code;
use crate::codes::CodeSpace;
use crate::codes::Feedback;
use crate::strategy::Policy;
use crate::strategy::Strategy;
use crate::worlds::Agent;
use crate::worlds::Clause;
use std::sync::Arc;

/// A belief paired with the policy that reads it.
#[derive(Debug, Clone)]
pub struct Player {
    belief: Belief,
    strategy: Strategy,
}

impl Player {
    /// Seat a player with a secret drawn uniformly from the space.
    pub fn new<R>(
        agent: Agent,
        strategy: Strategy,
        space: Arc<CodeSpace>,
        rng: &mut R,
    ) -> Result<Self, Error>
    where
        R: rand::Rng + ?Sized,
    {
        let strategy = strategy.validate()?;
        let secret = space.random(rng);
        log::trace!("{:<32}{:<32}", format!("{} ({}) drew", agent, strategy), secret);
        Ok(Self {
            belief: Belief::new(agent, secret, space)?,
            strategy,
        })
    }
    /// Seat a player with a chosen secret.
    pub fn with_secret(
        agent: Agent,
        strategy: Strategy,
        secret: Code,
        space: Arc<CodeSpace>,
    ) -> Result<Self, Error> {
        Ok(Self {
            belief: Belief::new(agent, secret, space)?,
            strategy: strategy.validate()?,
        })
    }

    pub fn agent(&self) -> Agent {
        self.belief.agent()
    }
    pub fn secret(&self) -> Code {
        self.belief.secret()
    }
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    pub fn belief(&self) -> &Belief {
        &self.belief
    }
    pub fn guess(&self) -> Code {
        self.strategy.guess(&self.belief)
    }
    /// See [`Belief::update`].
    pub fn update(
        &mut self,
        guess: &Code,
        about_opponent: Feedback,
        about_self: Feedback,
    ) -> Result<Clause, Error> {
        self.belief.update(guess, about_opponent, about_self)
    }
    /// See [`Belief::observe`].
    pub fn observe(
        &mut self,
        guess: &Code,
        about_opponent: Feedback,
        about_self: Feedback,
    ) -> Result<Clause, Error> {
        self.belief.observe(guess, about_opponent, about_self)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.agent(), self.strategy)
    }
}
