use super::*;
use crate::codes::Code;
use crate::codes::CodeSpace;
use petgraph::graph::NodeIndex;
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use std::collections::BTreeSet;
use std::collections::HashMap;

/// Multi-agent Kripke model over pairs of secrets.
///
/// Vertices are worlds. An edge labelled with an agent joins two distinct
/// worlds that agent cannot tell apart; reflexive links are implicit. Both
/// relations are equivalences built once from the full product space, and
/// solving by an announcement restricts them to the surviving worlds.
///
/// # Size
///
/// With `n` codes there are `n²` worlds and `n · n(n−1)/2` edges per agent,
/// which for the default 60-code space is 3,600 worlds and 212,400 edges.
#[derive(Debug, Clone)]
pub struct Model {
    graph: UnGraph<World, Agent>,
    index: HashMap<World, NodeIndex>,
}

impl Model {
    /// Number of worlds still considered possible.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
    pub fn worlds(&self) -> impl Iterator<Item = &World> {
        self.graph.node_weights()
    }
    pub fn contains(&self, world: &World) -> bool {
        self.index.contains_key(world)
    }
    /// Number of (unordered, irreflexive) indistinguishability links for an agent.
    pub fn links(&self, agent: Agent) -> usize {
        self.graph
            .edge_weights()
            .filter(|&&label| label == agent)
            .count()
    }

    /// Public announcement update: keep exactly the worlds satisfying the
    /// announcement, along with every link between two survivors.
    ///
    /// Clauses about the same agent are intersected once up front, so each
    /// world costs one lookup per agent.
    pub fn solve(&self, announcement: &Announcement) -> Self {
        let allowed = Agent::all().map(|agent| announcement.allowed(agent));
        let graph = self.graph.filter_map(
            |_, world| {
                Agent::all()
                    .into_iter()
                    .zip(allowed.iter())
                    .all(|(agent, codes)| {
                        codes
                            .as_ref()
                            .is_none_or(|codes| codes.contains(&world.code(agent)))
                    })
                    .then_some(*world)
            },
            |_, agent| Some(*agent),
        );
        debug_assert!(graph.node_weights().all(|world| announcement.holds(world)));
        log::trace!("{:<32}{:<32}", "solved possible worlds", graph.node_count());
        Self::from(graph)
    }

    /// Worlds an agent considers possible when the actual world is `world`,
    /// including `world` itself. Empty if `world` has been eliminated.
    pub fn accessible(&self, agent: Agent, world: &World) -> Vec<World> {
        match self.index.get(world) {
            None => Vec::new(),
            Some(&node) => std::iter::once(node)
                .chain(
                    self.graph
                        .edges(node)
                        .filter(|edge| *edge.weight() == agent)
                        .map(|edge| match edge.source() == node {
                            true => edge.target(),
                            false => edge.source(),
                        }),
                )
                .map(|n| self.graph[n])
                .collect(),
        }
    }
    /// Opponent codes an agent still considers possible at `world`.
    pub fn possibilities(&self, agent: Agent, world: &World) -> BTreeSet<Code> {
        self.accessible(agent, world)
            .into_iter()
            .map(|w| w.code(agent.opponent()))
            .collect()
    }
    /// Whether the agent knows its opponent's code at `world`: every world it
    /// cannot distinguish from `world` agrees on the opponent's component.
    pub fn knows(&self, agent: Agent, world: &World) -> bool {
        self.possibilities(agent, world).len() == 1
    }
}

/// the full product space, before anything has been announced
impl From<&CodeSpace> for Model {
    fn from(space: &CodeSpace) -> Self {
        let n = space.len();
        let mut graph = UnGraph::with_capacity(n * n, n * n * n.saturating_sub(1));
        let nodes = space
            .iter()
            .map(|&p1| {
                space
                    .iter()
                    .map(|&p2| graph.add_node(World::from((p1, p2))))
                    .collect::<Vec<NodeIndex>>()
            })
            .collect::<Vec<Vec<NodeIndex>>>();
        for i in 0..n {
            for j in 0..n {
                for k in j + 1..n {
                    graph.add_edge(nodes[i][j], nodes[i][k], Agent::P1);
                    graph.add_edge(nodes[j][i], nodes[k][i], Agent::P2);
                }
            }
        }
        log::trace!("{:<32}{:<32}", "built possible worlds", graph.node_count());
        Self::from(graph)
    }
}

impl From<UnGraph<World, Agent>> for Model {
    fn from(graph: UnGraph<World, Agent>) -> Self {
        let index = graph
            .node_indices()
            .map(|n| (graph[n], n))
            .collect::<HashMap<World, NodeIndex>>();
        Self { graph, index }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} worlds", self.len())
    }
}
