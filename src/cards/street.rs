/// Stage of a hand.
///
/// The four betting streets are followed by `Showdown`, which is transient
/// (remaining board cards are dealt, then it collapses into `Terminal`).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Street {
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
    Showdown = 4isize,
    Terminal = 5isize,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    pub const fn next(&self) -> Self {
        match self {
            Self::Pref => Self::Flop,
            Self::Flop => Self::Turn,
            Self::Turn => Self::Rive,
            Self::Rive => Self::Showdown,
            Self::Showdown => Self::Terminal,
            Self::Terminal => Self::Terminal,
        }
    }
    /// board cards visible once this street begins
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive | Self::Showdown | Self::Terminal => 5,
        }
    }
    /// true for the four streets on which players act
    pub const fn is_betting(&self) -> bool {
        matches!(self, Self::Pref | Self::Flop | Self::Turn | Self::Rive)
    }
}

/// isize isomorphism
impl From<isize> for Street {
    fn from(n: isize) -> Self {
        match n {
            0 => Self::Pref,
            1 => Self::Flop,
            2 => Self::Turn,
            3 => Self::Rive,
            4 => Self::Showdown,
            5 => Self::Terminal,
            _ => panic!("no other isizes"),
        }
    }
}
impl From<Street> for isize {
    fn from(street: Street) -> Self {
        street as isize
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
            Self::Showdown => write!(f, "showdown"),
            Self::Terminal => write!(f, "terminal"),
        }
    }
}
