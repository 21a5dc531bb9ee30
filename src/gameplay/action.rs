use crate::cards::street::Street;
use crate::Chips;
use crate::Position;

/// Kind of decision, ordered from most passive to most aggressive.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "fold"),
            Self::Check => write!(f, "check"),
            Self::Call => write!(f, "call"),
            Self::Bet => write!(f, "bet"),
            Self::Raise => write!(f, "raise"),
        }
    }
}

impl TryFrom<&str> for Move {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "fold" => Ok(Self::Fold),
            "check" => Ok(Self::Check),
            "call" => Ok(Self::Call),
            "bet" => Ok(Self::Bet),
            "raise" => Ok(Self::Raise),
            _ => Err(anyhow::anyhow!("invalid move: {}", s)),
        }
    }
}

/// One player decision.
///
/// `amount` is the number of chips this action moves from the actor's stack
/// into the pot: zero for folds and checks, the full increment for raises.
/// `to_call` and `street` record the situation the action was taken in.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    player: Position,
    kind: Move,
    amount: Chips,
    to_call: Chips,
    street: Street,
}

impl Action {
    pub fn new(player: Position, kind: Move, amount: Chips, to_call: Chips, street: Street) -> Self {
        Self {
            player,
            kind,
            amount,
            to_call,
            street,
        }
    }
    pub fn player(&self) -> Position {
        self.player
    }
    pub fn kind(&self) -> Move {
        self.kind
    }
    pub fn amount(&self) -> Chips {
        self.amount
    }
    pub fn to_call(&self) -> Chips {
        self.to_call
    }
    pub fn street(&self) -> Street {
        self.street
    }
    /// Same decision by the same player, regardless of recorded context.
    pub fn matches(&self, other: &Self) -> bool {
        self.player == other.player && self.kind == other.kind && self.amount == other.amount
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            Move::Fold | Move::Check => write!(f, "P{} {}", self.player, self.kind),
            _ => write!(f, "P{} {} {}", self.player, self.kind, self.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_order_passive_to_aggressive() {
        assert!(Move::Fold < Move::Check);
        assert!(Move::Check < Move::Call);
        assert!(Move::Call < Move::Bet);
        assert!(Move::Bet < Move::Raise);
    }

    #[test]
    fn matching_ignores_context() {
        let a = Action::new(0, Move::Call, 5, 5, Street::Pref);
        let b = Action::new(0, Move::Call, 5, 0, Street::Flop);
        let c = Action::new(1, Move::Call, 5, 5, Street::Pref);
        assert!(a.matches(&b));
        assert!(!a.matches(&c));
        assert_eq!(a.to_string(), "P0 call 5");
    }

    #[test]
    fn parse_moves() {
        assert_eq!(Move::try_from("RAISE").unwrap(), Move::Raise);
        assert!(Move::try_from("shove").is_err());
    }
}
