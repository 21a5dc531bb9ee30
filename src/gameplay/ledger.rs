use super::action::Action;
use super::action::Move;
use super::seat::Seat;
use super::sizing::Sizing;
use crate::cards::street::Street;
use crate::Chips;
use crate::Fraction;
use crate::Position;
use crate::N;

/// What the table must do after an action is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// the other player acts next on the same street
    Pass,
    /// the round closed and this street begins, after its cards are dealt
    Deal(Street),
    /// the river closed with both players in
    Showdown,
    /// a player is all-in, remaining cards are dealt with no more betting
    Runout,
    /// the actor folded
    Fold,
}

/// The betting state of a heads-up hand, without cards.
///
/// Everything that determines which actions are legal and where they lead
/// lives here, so two ledgers that compare equal are interchangeable for all
/// future play. The concrete engine drives a ledger alongside real cards;
/// the tree builder drives ledgers alone.
///
/// A round closes once both players have acted since the last aggression and
/// their stakes are equal. Any bet or raise clears the opponent's acted flag,
/// so the big blind keeps its option after a preflop limp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ledger {
    street: Street,
    pot: Chips,
    seats: [Seat; N],
    actor: Position,
    to_call: Chips,
    last_bet: Chips,
    current_bet: Chips,
    raises: usize,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(crate::STACK, crate::S_BLIND, crate::B_BLIND)
    }
}

impl Ledger {
    /// Posts the blinds: P0 small, P1 big, P0 to act. Blinds are clamped to the stack.
    pub fn new(stack: Chips, small: Chips, big: Chips) -> Self {
        let mut seats = [Seat::from(stack); N];
        let small = seats[0].bet(small);
        let big = seats[1].bet(big);
        Self {
            street: Street::Pref,
            pot: small + big,
            seats,
            actor: 0,
            to_call: (big - small).max(0),
            last_bet: (big - small).max(0),
            current_bet: small.max(big),
            raises: 0,
        }
    }

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn seats(&self) -> &[Seat; N] {
        &self.seats
    }
    pub fn seat(&self, position: Position) -> &Seat {
        &self.seats[position]
    }
    pub fn actor(&self) -> Position {
        self.actor
    }
    pub fn to_call(&self) -> Chips {
        self.to_call
    }
    pub fn last_bet(&self) -> Chips {
        self.last_bet
    }
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }
    pub fn raises(&self) -> usize {
        self.raises
    }
    pub fn stacks(&self) -> [Chips; N] {
        self.seats.map(|s| s.stack())
    }
    pub fn stakes(&self) -> [Chips; N] {
        self.seats.map(|s| s.stake())
    }
    pub fn spent(&self) -> [Chips; N] {
        self.seats.map(|s| s.spent())
    }
    pub fn is_terminal(&self) -> bool {
        self.street == Street::Terminal
    }
    /// The player who folded, if anyone did.
    pub fn folder(&self) -> Option<Position> {
        self.seats.iter().position(|s| s.folded())
    }

    /// Every legal action for the player to act, sorted by (move, amount).
    pub fn options(&self, sizing: &Sizing) -> Vec<Action> {
        if !self.street.is_betting() {
            return Vec::new();
        }
        let p = self.actor;
        let stack = self.seats[p].stack();
        let stake = self.seats[p].stake();
        let call = (self.current_bet - stake).max(0);
        let action = |kind, amount| Action::new(p, kind, amount, call, self.street);
        let mut options = Vec::new();
        if call > 0 {
            options.push(action(Move::Fold, 0));
            options.push(action(Move::Call, call.min(stack)));
            if stack > call && sizing.allows(self.raises) {
                let min_to = self.current_bet + self.last_bet.max(1);
                for needed in sizing
                    .raises
                    .iter()
                    .map(|x| self.current_bet + self.fraction(*x))
                    .map(|target| target.max(min_to) - stake)
                    .filter(|needed| *needed > call && *needed < stack)
                {
                    options.push(action(Move::Raise, needed));
                }
                if sizing.shove {
                    options.push(action(Move::Raise, stack));
                }
            }
        } else {
            options.push(action(Move::Check, 0));
            if stack > 0 && sizing.allows(self.raises) {
                for amount in sizing
                    .bets
                    .iter()
                    .map(|x| self.fraction(*x).max(1))
                    .filter(|amount| *amount < stack)
                {
                    options.push(action(Move::Bet, amount));
                }
                if sizing.shove {
                    options.push(action(Move::Bet, stack));
                }
            }
        }
        options.sort_by_key(|a| (a.kind(), a.amount()));
        options.dedup_by_key(|a| (a.kind(), a.amount()));
        options
    }

    /// Applies an action already known to be legal and reports what follows.
    pub fn commit(&mut self, action: &Action) -> Transition {
        let p = self.actor;
        let o = Self::opponent(p);
        match action.kind() {
            Move::Fold => {
                self.seats[p].fold();
                self.reset_round();
                self.street = Street::Terminal;
                self.actor = o;
                Transition::Fold
            }
            Move::Check => {
                self.seats[p].set_acted(true);
                if self.is_closed() {
                    self.advance()
                } else {
                    self.pass(o)
                }
            }
            Move::Call => {
                self.put(p, action.amount());
                self.seats[p].set_acted(true);
                if self.is_runout() {
                    self.street = Street::Showdown;
                    Transition::Runout
                } else if self.is_closed() {
                    self.advance()
                } else {
                    self.pass(o)
                }
            }
            Move::Bet | Move::Raise => {
                self.put(p, action.amount());
                let prior = self.current_bet;
                self.current_bet = self.current_bet.max(self.seats[p].stake());
                self.last_bet = (self.current_bet - prior).max(1);
                self.seats[p].set_acted(true);
                self.seats[o].set_acted(false);
                self.raises += 1;
                if self.is_runout() {
                    self.actor = o;
                    self.to_call = (self.current_bet - self.seats[o].stake()).max(0);
                    self.street = Street::Showdown;
                    Transition::Runout
                } else {
                    self.pass(o)
                }
            }
        }
    }

    /// Finishes a hand that reached showdown once its board is complete.
    pub fn conclude(&mut self) {
        self.reset_round();
        self.street = Street::Terminal;
        self.actor = 0;
    }

    fn opponent(p: Position) -> Position {
        (p + 1) % N
    }
    fn fraction(&self, x: Fraction) -> Chips {
        (self.pot as Fraction * x).floor() as Chips
    }
    fn put(&mut self, p: Position, chips: Chips) {
        self.pot += self.seats[p].bet(chips);
    }
    fn pass(&mut self, next: Position) -> Transition {
        self.actor = next;
        self.to_call = (self.current_bet - self.seats[next].stake()).max(0);
        Transition::Pass
    }
    fn is_closed(&self) -> bool {
        self.seats[0].stake() == self.seats[1].stake() && self.seats.iter().all(|s| s.acted())
    }
    fn is_runout(&self) -> bool {
        self.seats.iter().all(|s| !s.folded()) && self.seats.iter().any(|s| s.stack() == 0)
    }
    fn reset_round(&mut self) {
        self.to_call = 0;
        self.last_bet = 0;
        self.current_bet = 0;
        self.raises = 0;
        self.seats.iter_mut().for_each(Seat::reset_round);
    }
    fn advance(&mut self) -> Transition {
        self.reset_round();
        self.street = self.street.next();
        self.actor = 0;
        log::trace!("round closed, {}", self.street);
        match self.street {
            Street::Showdown => Transition::Showdown,
            street => Transition::Deal(street),
        }
    }
}

impl std::fmt::Display for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}|{}|{},{}|{}|{}|{}|{}|{},{}|{},{}|{},{}|{},{}|{}",
            isize::from(self.street),
            self.pot,
            self.seats[0].stack(),
            self.seats[1].stack(),
            self.actor,
            self.to_call,
            self.last_bet,
            self.current_bet,
            self.seats[0].stake(),
            self.seats[1].stake(),
            self.seats[0].spent(),
            self.seats[1].spent(),
            self.seats[0].folded() as u8,
            self.seats[1].folded() as u8,
            self.seats[0].acted() as u8,
            self.seats[1].acted() as u8,
            self.raises,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(ledger: &Ledger, kind: Move) -> Action {
        ledger
            .options(&Sizing::FIXED)
            .into_iter()
            .find(|a| a.kind() == kind)
            .unwrap()
    }

    #[test]
    fn blinds_posted() {
        let ledger = Ledger::new(1000, 5, 10);
        assert_eq!(ledger.stacks(), [995, 990]);
        assert_eq!(ledger.pot(), 15);
        assert_eq!(ledger.to_call(), 5);
        assert_eq!(ledger.current_bet(), 10);
        assert_eq!(ledger.last_bet(), 5);
        assert_eq!(ledger.actor(), 0);
        assert_eq!(ledger.street(), Street::Pref);
    }

    #[test]
    fn blinds_clamped_to_stack() {
        let ledger = Ledger::new(8, 5, 10);
        assert_eq!(ledger.stacks(), [3, 0]);
        assert_eq!(ledger.pot(), 13);
        assert_eq!(ledger.current_bet(), 8);
    }

    #[test]
    fn opening_options() {
        let ledger = Ledger::new(1000, 5, 10);
        let options = ledger
            .options(&Sizing::FIXED)
            .iter()
            .map(|a| (a.kind(), a.amount()))
            .collect::<Vec<_>>();
        // raise-to targets 17, 25, 40 from a pot of 15, less the 5 already in
        assert_eq!(
            options,
            vec![
                (Move::Fold, 0),
                (Move::Call, 5),
                (Move::Raise, 12),
                (Move::Raise, 20),
                (Move::Raise, 35),
                (Move::Raise, 995),
            ]
        );
    }

    #[test]
    fn ladder_respects_min_raise() {
        let mut ledger = Ledger::new(1000, 5, 10);
        ledger.commit(&Action::new(0, Move::Raise, 95, 5, Street::Pref));
        // pot 110, facing 100 with 10 in: min raise-to is 190
        let raises = ledger
            .options(&Sizing::FIXED)
            .into_iter()
            .filter(|a| a.kind() == Move::Raise)
            .map(|a| a.amount())
            .collect::<Vec<_>>();
        assert_eq!(raises, vec![180, 200, 310, 990]);
    }

    #[test]
    fn limp_gives_big_blind_option() {
        let mut ledger = Ledger::new(1000, 5, 10);
        let t = ledger.commit(&find(&ledger, Move::Call));
        assert_eq!(t, Transition::Pass);
        assert_eq!(ledger.actor(), 1);
        assert_eq!(ledger.street(), Street::Pref);
        let t = ledger.commit(&find(&ledger, Move::Check));
        assert_eq!(t, Transition::Deal(Street::Flop));
        assert_eq!(ledger.pot(), 20);
        assert_eq!(ledger.actor(), 0);
        assert_eq!(ledger.current_bet(), 0);
    }

    #[test]
    fn check_check_advances() {
        let mut ledger = Ledger::new(1000, 5, 10);
        ledger.commit(&find(&ledger, Move::Call));
        ledger.commit(&find(&ledger, Move::Check));
        assert_eq!(ledger.commit(&find(&ledger, Move::Check)), Transition::Pass);
        assert_eq!(
            ledger.commit(&find(&ledger, Move::Check)),
            Transition::Deal(Street::Turn)
        );
    }

    #[test]
    fn river_closes_into_showdown() {
        let mut ledger = Ledger::new(1000, 5, 10);
        ledger.commit(&find(&ledger, Move::Call));
        ledger.commit(&find(&ledger, Move::Check));
        for _ in 0..2 {
            ledger.commit(&find(&ledger, Move::Check));
            ledger.commit(&find(&ledger, Move::Check));
        }
        ledger.commit(&find(&ledger, Move::Check));
        assert_eq!(ledger.commit(&find(&ledger, Move::Check)), Transition::Showdown);
        assert_eq!(ledger.street(), Street::Showdown);
        assert!(ledger.options(&Sizing::FIXED).is_empty());
        ledger.conclude();
        assert!(ledger.is_terminal());
    }

    #[test]
    fn shove_runs_out_immediately() {
        let mut ledger = Ledger::new(1000, 5, 10);
        let shove = ledger
            .options(&Sizing::FIXED)
            .into_iter()
            .last()
            .unwrap();
        assert_eq!(shove.amount(), 995);
        assert_eq!(ledger.commit(&shove), Transition::Runout);
        assert_eq!(ledger.street(), Street::Showdown);
        assert_eq!(ledger.stacks(), [0, 990]);
        assert_eq!(ledger.pot(), 1010);
        assert!(ledger.options(&Sizing::FIXED).is_empty());
        ledger.conclude();
        assert!(ledger.is_terminal());
        assert_eq!(ledger.spent(), [1000, 10]);
    }

    #[test]
    fn short_call_runs_out() {
        let mut ledger = Ledger::new(8, 5, 10);
        let kinds = ledger
            .options(&Sizing::FIXED)
            .iter()
            .map(|a| (a.kind(), a.amount()))
            .collect::<Vec<_>>();
        assert_eq!(kinds, vec![(Move::Fold, 0), (Move::Call, 3)]);
        assert_eq!(ledger.commit(&find(&ledger, Move::Call)), Transition::Runout);
        assert_eq!(ledger.pot(), 16);
        assert_eq!(ledger.stacks(), [0, 0]);
    }

    #[test]
    fn raise_reopens_action() {
        let mut ledger = Ledger::new(1000, 5, 10);
        ledger.commit(&find(&ledger, Move::Call));
        ledger.commit(&find(&ledger, Move::Check));
        let bet = find(&ledger, Move::Bet);
        ledger.commit(&bet);
        assert!(ledger.seat(0).acted());
        let raise = find(&ledger, Move::Raise);
        ledger.commit(&raise);
        assert!(!ledger.seat(0).acted());
        assert_eq!(ledger.raises(), 2);
        assert_eq!(ledger.actor(), 0);
    }

    #[test]
    fn cap_removes_aggression() {
        let sizing = Sizing {
            bets: &[1.0],
            raises: &[1.0],
            cap: Some(1),
            shove: false,
        };
        let mut ledger = Ledger::new(1000, 5, 10);
        let raise = ledger
            .options(&sizing)
            .into_iter()
            .find(|a| a.kind() == Move::Raise)
            .unwrap();
        ledger.commit(&raise);
        let kinds = ledger
            .options(&sizing)
            .iter()
            .map(|a| a.kind())
            .collect::<Vec<_>>();
        assert_eq!(kinds, vec![Move::Fold, Move::Call]);
    }

    #[test]
    fn fold_terminates() {
        let mut ledger = Ledger::new(1000, 5, 10);
        assert_eq!(ledger.commit(&find(&ledger, Move::Fold)), Transition::Fold);
        assert!(ledger.is_terminal());
        assert_eq!(ledger.folder(), Some(0));
        assert_eq!(ledger.pot(), 15);
    }

    #[test]
    fn textual_key() {
        let ledger = Ledger::new(1000, 5, 10);
        assert_eq!(ledger.to_string(), "0|15|995,990|0|5|5|10|5,10|5,10|0,0|0,0|0");
    }
}
