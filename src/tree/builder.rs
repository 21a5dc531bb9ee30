use super::abstraction::Abstraction;
use super::key::Key;
use super::key::Tag;
use super::node::Branch;
use super::node::Node;
use super::node::NodeId;
use super::tree::GameTree;
use crate::gameplay::ledger::Ledger;
use crate::gameplay::ledger::Transition;
use crate::gameplay::payoff::Payoff;
use std::collections::HashMap;

/// Expands every reachable state of an [`Abstraction`] into a [`GameTree`].
pub struct Builder {
    abstraction: Abstraction,
}

impl From<Abstraction> for Builder {
    fn from(abstraction: Abstraction) -> Self {
        Self::new(abstraction)
    }
}

impl Builder {
    pub fn new(abstraction: Abstraction) -> Self {
        Self { abstraction }
    }
    pub fn abstraction(&self) -> &Abstraction {
        &self.abstraction
    }

    /// Builds the whole tree, or fails without a partial result when the
    /// abstraction is invalid or the tree would hold more than `max_nodes`.
    pub fn build(&self, max_nodes: usize) -> anyhow::Result<GameTree> {
        self.abstraction.validate()?;
        let mut expansion = Expansion {
            abstraction: &self.abstraction,
            nodes: Vec::new(),
            memo: HashMap::new(),
            max_nodes,
            max_depth: self.abstraction.max_depth(),
        };
        let root = expansion.visit(self.abstraction.root(), 0)?;
        let tree = GameTree::from((root, expansion.nodes));
        log::info!("built {}", tree.census());
        Ok(tree)
    }
}

/// Per-build memo table and arena.
struct Expansion<'a> {
    abstraction: &'a Abstraction,
    nodes: Vec<Node>,
    memo: HashMap<Key, NodeId>,
    max_nodes: usize,
    max_depth: usize,
}

impl Expansion<'_> {
    fn visit(&mut self, ledger: Ledger, depth: usize) -> anyhow::Result<NodeId> {
        if ledger.is_terminal() {
            return self.terminal(ledger);
        }
        anyhow::ensure!(depth <= self.max_depth, "tree depth exceeds {}", self.max_depth);
        let key = Key::from((Tag::Decision, ledger));
        if let Some(id) = self.memo.get(&key) {
            return Ok(*id);
        }
        let actions = ledger.options(&self.abstraction.sizing(ledger.street()));
        let mut children = Vec::with_capacity(actions.len());
        for action in actions.iter() {
            let mut next = ledger;
            let child = match next.commit(action) {
                Transition::Pass => self.visit(next, depth + 1)?,
                Transition::Deal(_) => self.chance(next, depth + 1)?,
                Transition::Fold => self.terminal(next)?,
                Transition::Showdown | Transition::Runout => {
                    next.conclude();
                    self.terminal(next)?
                }
            };
            children.push(child);
        }
        self.push(key, Branch::Decision { actions, children })
    }

    fn chance(&mut self, ledger: Ledger, depth: usize) -> anyhow::Result<NodeId> {
        let key = Key::from((Tag::Chance, ledger));
        if let Some(id) = self.memo.get(&key) {
            return Ok(*id);
        }
        let child = self.visit(ledger, depth + 1)?;
        self.push(key, Branch::Chance { child })
    }

    fn terminal(&mut self, ledger: Ledger) -> anyhow::Result<NodeId> {
        let (tag, payoff) = match ledger.folder() {
            Some(_) => (Tag::Fold, Payoff::folded(&ledger)),
            None => (Tag::Showdown, Payoff::unresolved(&ledger)),
        };
        let key = Key::from((tag, ledger));
        if let Some(id) = self.memo.get(&key) {
            return Ok(*id);
        }
        self.push(key, Branch::Terminal(payoff))
    }

    fn push(&mut self, key: Key, branch: Branch) -> anyhow::Result<NodeId> {
        anyhow::ensure!(
            self.nodes.len() < self.max_nodes,
            "tree exceeds budget of {} nodes",
            self.max_nodes
        );
        let id = NodeId::from(self.nodes.len());
        log::trace!("{} {}", id, key);
        self.nodes.push(Node::from((id, key, branch)));
        self.memo.insert(key, id);
        Ok(id)
    }
}
