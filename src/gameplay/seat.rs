use crate::Chips;

/// One player's chips and betting status within a hand.
///
/// - `stack` chips behind, not yet committed
/// - `stake` chips committed this street
/// - `spent` chips committed this hand
/// - `acted` whether the player has acted since the last aggression
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    stack: Chips,
    stake: Chips,
    spent: Chips,
    folded: bool,
    acted: bool,
}

impl From<Chips> for Seat {
    fn from(stack: Chips) -> Self {
        Self {
            stack,
            ..Self::default()
        }
    }
}

impl Seat {
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn stake(&self) -> Chips {
        self.stake
    }
    pub fn spent(&self) -> Chips {
        self.spent
    }
    pub fn folded(&self) -> bool {
        self.folded
    }
    pub fn acted(&self) -> bool {
        self.acted
    }
    /// Moves chips from stack to pot, never more than the stack.
    pub fn bet(&mut self, chips: Chips) -> Chips {
        let chips = chips.min(self.stack);
        self.stack -= chips;
        self.stake += chips;
        self.spent += chips;
        chips
    }
    pub fn fold(&mut self) {
        self.folded = true;
    }
    pub fn set_acted(&mut self, acted: bool) {
        self.acted = acted;
    }
    pub fn reset_round(&mut self) {
        self.stake = 0;
        self.acted = false;
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let status = if self.folded {
            "F"
        } else if self.stack == 0 {
            "S"
        } else {
            "P"
        };
        write!(f, "{} ${:>5} ({:>5} in)", status, self.stack, self.spent)
    }
}
