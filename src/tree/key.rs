use crate::gameplay::ledger::Ledger;

/// Kind of node a state materializes as.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    Decision,
    Chance,
    Fold,
    Showdown,
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Decision => write!(f, "D:"),
            Self::Chance => write!(f, "C:"),
            Self::Fold => write!(f, "T:F:"),
            Self::Showdown => write!(f, "T:S:"),
        }
    }
}

/// Canonical identity of a tree node.
///
/// Equal keys mean equal betting state and equal node kind, so the nodes
/// behind them have identical futures and may be shared.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key {
    tag: Tag,
    ledger: Ledger,
}

impl From<(Tag, Ledger)> for Key {
    fn from((tag, ledger): (Tag, Ledger)) -> Self {
        Self { tag, ledger }
    }
}

impl Key {
    pub fn tag(&self) -> Tag {
        self.tag
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

/// `street|pot|s0,s1|actor|to_call|last|current|r0,r1|t0,t1|f0,f1|a0,a1|raises`
/// behind the tag prefix
impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.tag, self.ledger)
    }
}
