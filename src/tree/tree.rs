use super::key::Tag;
use super::node::Branch;
use super::node::Node;
use super::node::NodeId;
use crate::gameplay::action::Action;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;

/// A fully expanded abstract game.
///
/// Nodes live in one arena and refer to each other by [`NodeId`]. They are
/// appended children-first, so every child precedes its parents, the root is
/// the last node, and arena order is already a valid order for backward
/// induction. Shared subgames make this a DAG rather than a tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameTree {
    root: NodeId,
    nodes: Vec<Node>,
}

impl From<(NodeId, Vec<Node>)> for GameTree {
    fn from((root, nodes): (NodeId, Vec<Node>)) -> Self {
        Self { root, nodes }
    }
}

impl GameTree {
    pub fn root(&self) -> NodeId {
        self.root
    }
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[usize::from(id)]
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node counts by kind and the longest root-to-leaf path in edges.
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        let mut height = vec![0usize; self.nodes.len()];
        for node in self.nodes.iter() {
            match node.tag() {
                Tag::Decision => census.decision += 1,
                Tag::Chance => census.chance += 1,
                Tag::Fold => census.fold += 1,
                Tag::Showdown => census.showdown += 1,
            }
            height[usize::from(node.id())] = node
                .children()
                .iter()
                .map(|c| height[usize::from(*c)] + 1)
                .max()
                .unwrap_or(0);
        }
        census.depth = height.get(usize::from(self.root)).copied().unwrap_or(0);
        census
    }

    /// The tree as a petgraph graph. Node indices equal arena ids; decision
    /// edges carry their action, chance edges carry nothing.
    pub fn graph(&self) -> DiGraph<NodeId, Option<Action>> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.nodes.len());
        for node in self.nodes.iter() {
            graph.add_node(node.id());
        }
        for node in self.nodes.iter() {
            let head = NodeIndex::new(usize::from(node.id()));
            match node.branch() {
                Branch::Decision { actions, children } => {
                    for (action, child) in actions.iter().zip(children.iter()) {
                        graph.add_edge(head, NodeIndex::new(usize::from(*child)), Some(*action));
                    }
                }
                Branch::Chance { child } => {
                    graph.add_edge(head, NodeIndex::new(usize::from(*child)), None);
                }
                Branch::Terminal(_) => {}
            }
        }
        graph
    }

    pub fn is_acyclic(&self) -> bool {
        !petgraph::algo::is_cyclic_directed(&self.graph())
    }
}

/// Summary counts of a [`GameTree`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Census {
    pub decision: usize,
    pub chance: usize,
    pub fold: usize,
    pub showdown: usize,
    pub depth: usize,
}

impl Census {
    pub fn total(&self) -> usize {
        self.decision + self.chance + self.fold + self.showdown
    }
    pub fn terminal(&self) -> usize {
        self.fold + self.showdown
    }
}

impl std::fmt::Display for Census {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} nodes ({} decision, {} chance, {} fold, {} showdown), depth {}",
            self.total(),
            self.decision,
            self.chance,
            self.fold,
            self.showdown,
            self.depth
        )
    }
}
