use super::key::Key;
use super::key::Tag;
use crate::gameplay::action::Action;
use crate::gameplay::payoff::Payoff;

/// Index of a node in its tree's arena.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

/// usize isomorphism
impl From<usize> for NodeId {
    fn from(i: usize) -> Self {
        Self(i)
    }
}
impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node does with its children.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Branch {
    /// one child per legal action, index-aligned
    Decision {
        actions: Vec<Action>,
        children: Vec<NodeId>,
    },
    /// cards are dealt, then play continues
    Chance { child: NodeId },
    Terminal(Payoff),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    id: NodeId,
    key: Key,
    branch: Branch,
}

impl From<(NodeId, Key, Branch)> for Node {
    fn from((id, key, branch): (NodeId, Key, Branch)) -> Self {
        debug_assert!(match &branch {
            Branch::Decision { actions, children } => actions.len() == children.len(),
            _ => true,
        });
        Self { id, key, branch }
    }
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }
    pub fn key(&self) -> &Key {
        &self.key
    }
    pub fn tag(&self) -> Tag {
        self.key.tag()
    }
    pub fn branch(&self) -> &Branch {
        &self.branch
    }
    pub fn children(&self) -> &[NodeId] {
        match &self.branch {
            Branch::Decision { children, .. } => children,
            Branch::Chance { child } => std::slice::from_ref(child),
            Branch::Terminal(_) => &[],
        }
    }
    pub fn actions(&self) -> &[Action] {
        match &self.branch {
            Branch::Decision { actions, .. } => actions,
            _ => &[],
        }
    }
    pub fn payoff(&self) -> Option<&Payoff> {
        match &self.branch {
            Branch::Terminal(payoff) => Some(payoff),
            _ => None,
        }
    }
    pub fn is_terminal(&self) -> bool {
        matches!(self.branch, Branch::Terminal(_))
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>7} {}", self.id, self.key)
    }
}
