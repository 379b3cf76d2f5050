use super::*;
use crate::codes::Code;
use std::collections::BTreeSet;

/// "`code` is the secret of `agent`."
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Atom {
    pub code: Code,
    pub agent: Agent,
}

impl Atom {
    pub fn holds(&self, world: &World) -> bool {
        world.code(self.agent) == self.code
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}@{}", self.code, self.agent)
    }
}

/// Disjunction of atoms that all name the same agent.
///
/// This is the only disjunction a belief update ever produces: "the
/// opponent's code is one of these survivors". Storing the codes as a set
/// makes satisfaction a single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    agent: Agent,
    codes: BTreeSet<Code>,
}

impl Clause {
    pub fn agent(&self) -> Agent {
        self.agent
    }
    pub fn len(&self) -> usize {
        self.codes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
    pub fn codes(&self) -> impl Iterator<Item = &Code> {
        self.codes.iter()
    }
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.codes.iter().map(|&code| Atom {
            code,
            agent: self.agent,
        })
    }
    /// An empty disjunction is false everywhere.
    pub fn holds(&self, world: &World) -> bool {
        self.codes.contains(&world.code(self.agent))
    }
}

impl<I> From<(Agent, I)> for Clause
where
    I: IntoIterator<Item = Code>,
{
    fn from((agent, codes): (Agent, I)) -> Self {
        Self {
            agent,
            codes: codes.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, atom) in self.atoms().enumerate() {
            if i > 0 {
                write!(f, " ∨ ")?;
            }
            write!(f, "{}", atom)?;
        }
        write!(f, ")")
    }
}

/// Conjunction of clauses: everything made public in one round.
///
/// Built fresh each round from the clauses the four belief updates return,
/// consumed by [`Model::solve`], then dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Announcement(Vec<Clause>);

impl Announcement {
    /// Conjoin one more clause.
    pub fn and(mut self, clause: Clause) -> Self {
        self.0.push(clause);
        self
    }
    pub fn clauses(&self) -> &[Clause] {
        &self.0
    }
    /// An empty conjunction is true everywhere.
    pub fn holds(&self, world: &World) -> bool {
        self.0.iter().all(|clause| clause.holds(world))
    }
    /// Codes still allowed for an agent: the intersection of every clause
    /// about that agent, or `None` when the announcement says nothing about it.
    pub fn allowed(&self, agent: Agent) -> Option<BTreeSet<Code>> {
        self.0
            .iter()
            .filter(|clause| clause.agent() == agent)
            .map(|clause| clause.codes.clone())
            .reduce(|a, b| a.intersection(&b).copied().collect())
    }
}

impl FromIterator<Clause> for Announcement {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Clause>,
    {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Announcement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, clause) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ∧ ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        Code::try_from(s).unwrap()
    }

    #[test]
    fn atom_reads_the_named_component() {
        let world = World::from((code("brg"), code("ypb")));
        let atom = Atom {
            code: code("ypb"),
            agent: Agent::P2,
        };
        assert!(atom.holds(&world));
        assert!(!Atom { agent: Agent::P1, ..atom }.holds(&world));
    }

    #[test]
    fn clause_is_disjunction() {
        let world = World::from((code("brg"), code("ypb")));
        let clause = Clause::from((Agent::P2, [code("gyp"), code("ypb")]));
        assert!(clause.holds(&world));
        let clause = Clause::from((Agent::P2, [code("gyp")]));
        assert!(!clause.holds(&world));
        let clause = Clause::from((Agent::P2, Vec::<Code>::new()));
        assert!(!clause.holds(&world));
    }

    #[test]
    fn announcement_is_conjunction() {
        let world = World::from((code("brg"), code("ypb")));
        let p1 = Clause::from((Agent::P1, [code("brg"), code("rgb")]));
        let p2 = Clause::from((Agent::P2, [code("gyp")]));
        assert!(Announcement::default().holds(&world));
        assert!(Announcement::default().and(p1.clone()).holds(&world));
        assert!(!Announcement::default().and(p1).and(p2).holds(&world));
    }

    #[test]
    fn allowed_intersects_per_agent() {
        let announcement = [
            Clause::from((Agent::P1, [code("brg"), code("rgb")])),
            Clause::from((Agent::P1, [code("rgb"), code("gbr")])),
        ]
        .into_iter()
        .collect::<Announcement>();
        let allowed = announcement.allowed(Agent::P1).unwrap();
        assert!(allowed.into_iter().collect::<Vec<_>>() == [code("rgb")]);
        assert!(announcement.allowed(Agent::P2).is_none());
    }

    #[test]
    fn displays_as_formula() {
        let clause = Clause::from((Agent::P2, [code("br")]));
        let announcement = Announcement::default().and(clause.clone()).and(clause);
        assert!(announcement.to_string() == "(br@p2) ∧ (br@p2)");
    }
}
