use super::ledger::Ledger;
use crate::cards::strength::Strength;
use crate::Chips;
use crate::Position;
use crate::N;

/// How a hand ended.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ending {
    Fold,
    Showdown,
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "fold"),
            Self::Showdown => write!(f, "showdown"),
        }
    }
}

/// Result of a finished hand.
///
/// `winner` is `None` for a split pot, and for abstract showdowns whose
/// cards are unknown. `delta` is pot share received minus chips spent, so
/// it always sums to zero once resolved.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Payoff {
    ending: Ending,
    winner: Option<Position>,
    pot: Chips,
    spent: [Chips; N],
    delta: [Chips; N],
}

impl Payoff {
    /// The player who did not fold takes the whole pot.
    pub fn folded(ledger: &Ledger) -> Self {
        let winner = ledger
            .seats()
            .iter()
            .position(|s| !s.folded())
            .unwrap_or_default();
        let mut shares = [0; N];
        shares[winner] = ledger.pot();
        Self::settle(ledger, Ending::Fold, Some(winner), shares)
    }
    /// A showdown left for a downstream solver: no winner, no chips moved.
    pub fn unresolved(ledger: &Ledger) -> Self {
        Self {
            ending: Ending::Showdown,
            winner: None,
            pot: ledger.pot(),
            spent: ledger.spent(),
            delta: [0; N],
        }
    }
    /// Higher strength takes the pot. Ties split, odd chip to P0.
    pub fn showdown(ledger: &Ledger, strengths: [Strength; N]) -> Self {
        let pot = ledger.pot();
        match strengths[0].cmp(&strengths[1]) {
            std::cmp::Ordering::Greater => Self::settle(ledger, Ending::Showdown, Some(0), [pot, 0]),
            std::cmp::Ordering::Less => Self::settle(ledger, Ending::Showdown, Some(1), [0, pot]),
            std::cmp::Ordering::Equal => {
                let half = pot / 2;
                Self::settle(ledger, Ending::Showdown, None, [pot - half, half])
            }
        }
    }
    fn settle(ledger: &Ledger, ending: Ending, winner: Option<Position>, shares: [Chips; N]) -> Self {
        let spent = ledger.spent();
        Self {
            ending,
            winner,
            pot: ledger.pot(),
            spent,
            delta: [shares[0] - spent[0], shares[1] - spent[1]],
        }
    }

    pub fn ending(&self) -> Ending {
        self.ending
    }
    pub fn winner(&self) -> Option<Position> {
        self.winner
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn spent(&self) -> [Chips; N] {
        self.spent
    }
    pub fn delta(&self) -> [Chips; N] {
        self.delta
    }
}

impl std::fmt::Display for Payoff {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.winner {
            Some(p) => write!(f, "{:<8} P{} wins ", self.ending, p)?,
            None => write!(f, "{:<8} split   ", self.ending)?,
        }
        write!(f, "pot {:>5} delta {:+},{:+}", self.pot, self.delta[0], self.delta[1])
    }
}
