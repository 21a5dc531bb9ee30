use super::action::Action;
use super::ledger::Ledger;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::street::Street;
use crate::Chips;
use crate::Position;
use crate::N;

/// One concrete hand in progress.
///
/// The betting state plus everything a ledger does not know about: hole
/// cards, the board, which cards are out of the deck, and the action history.
/// Only the [`Engine`](super::engine::Engine) mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Play {
    ledger: Ledger,
    holes: [[Card; 2]; N],
    board: Vec<Card>,
    used: Hand,
    history: Vec<Action>,
}

impl From<(Ledger, [[Card; 2]; N])> for Play {
    fn from((ledger, holes): (Ledger, [[Card; 2]; N])) -> Self {
        let used = Hand::from(holes.as_flattened());
        Self {
            ledger,
            holes,
            board: Vec::with_capacity(5),
            used,
            history: Vec::new(),
        }
    }
}

impl Play {
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    pub fn street(&self) -> Street {
        self.ledger.street()
    }
    pub fn pot(&self) -> Chips {
        self.ledger.pot()
    }
    pub fn stacks(&self) -> [Chips; N] {
        self.ledger.stacks()
    }
    pub fn stakes(&self) -> [Chips; N] {
        self.ledger.stakes()
    }
    pub fn spent(&self) -> [Chips; N] {
        self.ledger.spent()
    }
    pub fn folded(&self) -> [bool; N] {
        self.ledger.seats().map(|s| s.folded())
    }
    pub fn actor(&self) -> Position {
        self.ledger.actor()
    }
    pub fn to_call(&self) -> Chips {
        self.ledger.to_call()
    }
    pub fn current_bet(&self) -> Chips {
        self.ledger.current_bet()
    }
    pub fn last_bet(&self) -> Chips {
        self.ledger.last_bet()
    }
    pub fn hole(&self, position: Position) -> [Card; 2] {
        self.holes[position]
    }
    pub fn holes(&self) -> [[Card; 2]; N] {
        self.holes
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn used(&self) -> Hand {
        self.used
    }
    pub fn history(&self) -> &[Action] {
        &self.history
    }
    pub fn is_terminal(&self) -> bool {
        self.ledger.is_terminal()
    }

    pub(super) fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }
    pub(super) fn reveal(&mut self, card: Card) {
        debug_assert!(!self.used.contains(&card));
        self.used.insert(card);
        self.board.push(card);
    }
    pub(super) fn record(&mut self, action: Action) {
        self.history.push(action);
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<9} pot {:>5}", self.street(), self.pot())?;
        for (p, seat) in self.ledger.seats().iter().enumerate() {
            writeln!(f, "P{} {}{} {}", p, self.holes[p][0], self.holes[p][1], seat)?;
        }
        write!(f, "board")?;
        for card in self.board.iter() {
            write!(f, " {}", card)?;
        }
        writeln!(f)?;
        for action in self.history.iter() {
            writeln!(f, "  {:<8} {}", action.street(), action)?;
        }
        Ok(())
    }
}
