use super::*;
use crate::Epoch;
use crate::Error;
use crate::codes::Code;
use crate::codes::CodeSpace;
use crate::codes::Feedback;
use crate::strategy::Strategy;
use crate::worlds::Agent;
use crate::worlds::Announcement;
use crate::worlds::Clause;
use crate::worlds::Model;
use crate::worlds::World;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Arc;

/// Two players alternating guesses until one of them knows the other's code.
///
/// Each round P1 moves, then P2. A move is scored against both secrets and
/// both scores are public, so the mover updates its own belief and the
/// other player observes the same move. The four clauses produced by a
/// round are conjoined and announced to the possible-worlds model, which
/// must then hold exactly `|P1.Si| × |P2.Si|` worlds.
///
/// `Game` is an iterator over completed rounds. It stops yielding once the
/// phase is terminal; [`Game::run`] drains it into a [`Report`].
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    model: Model,
    phase: Phase,
    epoch: Epoch,
    limit: Epoch,
}

impl Game {
    /// Seat two already-constructed players. Each must have been built for
    /// its position and over the same code space.
    pub fn new(p1: Player, p2: Player) -> Result<Self, Error> {
        for (expected, player) in Agent::all().into_iter().zip([&p1, &p2]) {
            if player.agent() != expected {
                return Err(Error::Seat {
                    expected,
                    found: player.agent(),
                });
            }
        }
        if p1.belief().space() != p2.belief().space() {
            return Err(Error::Mismatch);
        }
        let model = Model::from(p1.belief().space());
        Ok(Self {
            players: [p1, p2],
            model,
            phase: Phase::InProgress,
            epoch: 0,
            limit: crate::MAX_ROUNDS,
        })
    }
    /// Build both players from the rules, drawing secrets from `rng`.
    pub fn random<R>(rules: &Rules, strategies: [Strategy; 2], rng: &mut R) -> Result<Self, Error>
    where
        R: rand::Rng + ?Sized,
    {
        let space = Arc::new(CodeSpace::try_from(rules)?);
        let [s1, s2] = strategies;
        let p1 = Player::new(Agent::P1, s1, space.clone(), rng)?;
        let p2 = Player::new(Agent::P2, s2, space.clone(), rng)?;
        Ok(Self::new(p1, p2)?.limit(rules.rounds))
    }
    /// Round cap before a draw.
    pub fn limit(mut self, rounds: Epoch) -> Self {
        self.limit = rounds;
        self
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn player(&self, agent: Agent) -> &Player {
        &self.players[agent.index()]
    }
    pub fn model(&self) -> &Model {
        &self.model
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    /// Rounds played so far.
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }
    /// The actual world: both secrets.
    pub fn truth(&self) -> World {
        World::from((
            self.player(Agent::P1).secret(),
            self.player(Agent::P2).secret(),
        ))
    }

    /// Play until a terminal phase or until `max_rounds` have been played in
    /// total, whichever comes first. The report covers only the rounds played
    /// by this call; [`Game::epoch`] counts every round.
    pub fn run(&mut self, max_rounds: Epoch) -> Report {
        self.limit = max_rounds;
        let initial = self.model.len();
        let worlds = self.by_ref().map(|round| round.worlds).collect::<Vec<usize>>();
        let report = Report {
            rounds: worlds.len(),
            initial,
            worlds,
            outcome: Outcome::from(&*self),
        };
        log::info!("{:<32}{:<32}", "game over", report);
        report
    }

    /// One full round: both agents move, the model is solved, and the
    /// phase advances.
    fn play(&mut self) -> Round {
        self.epoch += 1;
        let [m1, m2] = Agent::all().map(|mover| self.step(mover));
        let announcement = [&m1, &m2]
            .into_iter()
            .flat_map(|step| step.clauses.iter().cloned())
            .fold(Announcement::default(), Announcement::and);
        self.model = self.model.solve(&announcement);
        debug_assert!(self.model.contains(&self.truth()));
        debug_assert!(self.model.len() == self.candidates().iter().product::<usize>());
        let knows = Agent::all().map(|agent| self.player(agent).belief().knows());
        self.phase = Phase::after(knows, self.epoch, self.limit);
        let round = Round {
            epoch: self.epoch,
            guesses: [m1.guess, m2.guess],
            scored: [m1.scored, m2.scored],
            revealed: [m1.revealed, m2.revealed],
            opponent: self.candidates(),
            own: Agent::all().map(|agent| self.player(agent).belief().own().len()),
            worlds: self.model.len(),
        };
        log::debug!("{}", round);
        round
    }
    /// One move: the mover guesses, then both players digest the two
    /// public scores.
    fn step(&mut self, mover: Agent) -> Step {
        let other = mover.opponent();
        let guess = self.player(mover).guess();
        let scored = Feedback::from((&guess, &self.player(other).secret()));
        let revealed = Feedback::from((&guess, &self.player(mover).secret()));
        let mine = self.players[mover.index()]
            .update(&guess, scored, revealed)
            .expect("oracle scores agree with both secrets");
        let theirs = self.players[other.index()]
            .observe(&guess, revealed, scored)
            .expect("oracle scores agree with both secrets");
        Step {
            guess,
            scored,
            revealed,
            clauses: [mine, theirs],
        }
    }
    /// |Si| per agent.
    fn candidates(&self) -> [usize; 2] {
        Agent::all().map(|agent| self.player(agent).belief().opponent().len())
    }
}

struct Step {
    guess: Code,
    scored: Feedback,
    revealed: Feedback,
    clauses: [Clause; 2],
}

impl Iterator for Game {
    type Item = Round;
    fn next(&mut self) -> Option<Self::Item> {
        if self.phase.is_terminal() {
            return None;
        }
        if self.epoch >= self.limit {
            self.phase = Phase::Draw;
            return None;
        }
        Some(self.play())
    }
}

/// Two information-maximizing players under the default rules, seeded.
impl Default for Game {
    fn default() -> Self {
        let mut rng = SmallRng::seed_from_u64(crate::DEFAULT_SEED);
        Self::random(&Rules::default(), [Strategy::Guessing; 2], &mut rng)
            .expect("default rules are valid")
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} vs {}, round {}, {}, {}",
            self.players[0], self.players[1], self.epoch, self.model, self.phase
        )
    }
}
