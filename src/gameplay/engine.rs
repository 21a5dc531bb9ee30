use super::action::Action;
use super::ledger::Ledger;
use super::ledger::Transition;
use super::payoff::Payoff;
use super::play::Play;
use super::sizing::Sizing;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::evaluator;
use crate::cards::street::Street;
use crate::cards::strength::Strength;
use crate::Chips;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Drives concrete hands with real cards.
///
/// Owns the only source of randomness for the hands it deals, seeded at
/// construction, so a given seed replays the same cards and the same random
/// decisions. Hands running concurrently each need their own engine.
#[derive(Debug, Clone)]
pub struct Engine {
    rng: SmallRng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(crate::SEED)
    }
}

impl Engine {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Posts blinds and deals hole cards. P0 posts the small blind and acts first.
    pub fn new_hand(&mut self, stack: Chips, small: Chips, big: Chips) -> Play {
        let ledger = Ledger::new(stack, small, big);
        let ref mut deck = Deck::new();
        let holes = [
            [deck.draw(&mut self.rng), deck.draw(&mut self.rng)],
            [deck.draw(&mut self.rng), deck.draw(&mut self.rng)],
        ];
        log::trace!("dealt {}{} {}{}", holes[0][0], holes[0][1], holes[1][0], holes[1][1]);
        Play::from((ledger, holes))
    }

    pub fn legal_actions(&self, play: &Play) -> Vec<Action> {
        play.ledger().options(&Sizing::FIXED)
    }

    /// Applies a legal action, dealing whatever cards it calls for.
    /// Illegal actions are rejected and leave the hand untouched.
    pub fn apply_action(&mut self, play: &mut Play, action: Action) -> anyhow::Result<()> {
        let action = self
            .legal_actions(play)
            .into_iter()
            .find(|legal| legal.matches(&action))
            .ok_or_else(|| anyhow::anyhow!("illegal action {} on {}", action, play.street()))?;
        log::trace!("{}", action);
        play.record(action);
        match play.ledger_mut().commit(&action) {
            Transition::Pass => {}
            Transition::Fold => log::debug!("P{} folds", action.player()),
            Transition::Deal(street) => {
                self.deal_to(play, street.n_observed());
                log::debug!("{} {:?}", street, play.board().iter().map(Card::to_string).collect::<Vec<_>>());
            }
            Transition::Showdown | Transition::Runout => {
                self.deal_to(play, Street::Rive.n_observed());
                play.ledger_mut().conclude();
                log::debug!("showdown on {:?}", play.board().iter().map(Card::to_string).collect::<Vec<_>>());
            }
        }
        Ok(())
    }

    /// Chips won and lost by each player once the hand is over.
    pub fn terminal_payoff(&self, play: &Play) -> anyhow::Result<Payoff> {
        anyhow::ensure!(play.is_terminal(), "not terminal");
        match play.ledger().folder() {
            Some(_) => Ok(Payoff::folded(play.ledger())),
            None => {
                let board: [Card; 5] = play
                    .board()
                    .try_into()
                    .map_err(|_| anyhow::anyhow!("showdown with {} board cards", play.board().len()))?;
                let strengths = play.holes().map(|hole| evaluator::evaluate_7card(hole, board));
                Ok(Payoff::showdown(play.ledger(), strengths))
            }
        }
    }

    /// A uniformly random legal action.
    pub fn random_legal_action(&mut self, play: &Play) -> anyhow::Result<Action> {
        self.legal_actions(play)
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("no legal actions on {}", play.street()))
    }

    pub fn evaluate_7card(&self, hole: [Card; 2], board: [Card; 5]) -> Strength {
        evaluator::evaluate_7card(hole, board)
    }

    /// Plays random legal actions until the hand ends.
    pub fn play_out(&mut self, play: &mut Play) -> anyhow::Result<Payoff> {
        while !play.is_terminal() {
            let action = self.random_legal_action(play)?;
            self.apply_action(play, action)?;
        }
        self.terminal_payoff(play)
    }

    fn deal_to(&mut self, play: &mut Play, n: usize) {
        while play.board().len() < n {
            let card = Deck::from(play.used().complement()).draw(&mut self.rng);
            play.reveal(card);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::action::Move;
    use crate::gameplay::payoff::Ending;

    fn find(engine: &Engine, play: &Play, kind: Move) -> Action {
        engine
            .legal_actions(play)
            .into_iter()
            .find(|a| a.kind() == kind)
            .unwrap()
    }

    #[test]
    fn new_hand_posts_blinds() {
        let mut engine = Engine::new(1);
        let play = engine.new_hand(1000, 5, 10);
        assert_eq!(play.stacks(), [995, 990]);
        assert_eq!(play.pot(), 15);
        assert_eq!(play.to_call(), 5);
        assert_eq!(play.current_bet(), 10);
        assert_eq!(play.actor(), 0);
        assert_eq!(play.used().size(), 4);
        assert!(play.board().is_empty());
    }

    #[test]
    fn fold_ends_hand() {
        let mut engine = Engine::new(2);
        let mut play = engine.new_hand(1000, 5, 10);
        let fold = find(&engine, &play, Move::Fold);
        engine.apply_action(&mut play, fold).unwrap();
        assert!(play.is_terminal());
        assert!(play.board().is_empty());
        let payoff = engine.terminal_payoff(&play).unwrap();
        assert_eq!(payoff.winner(), Some(1));
        assert_eq!(payoff.delta(), [-5, 5]);
        assert!(engine.legal_actions(&play).is_empty());
        assert!(engine.random_legal_action(&play).is_err());
    }

    #[test]
    fn payoff_requires_terminal() {
        let mut engine = Engine::new(3);
        let play = engine.new_hand(1000, 5, 10);
        let err = engine.terminal_payoff(&play).unwrap_err();
        assert_eq!(err.to_string(), "not terminal");
    }

    #[test]
    fn illegal_action_changes_nothing() {
        let mut engine = Engine::new(4);
        let mut play = engine.new_hand(1000, 5, 10);
        let before = play.clone();
        let wrong_player = Action::new(1, Move::Call, 5, 5, Street::Pref);
        let wrong_amount = Action::new(0, Move::Raise, 13, 5, Street::Pref);
        let wrong_kind = Action::new(0, Move::Check, 0, 5, Street::Pref);
        for action in [wrong_player, wrong_amount, wrong_kind] {
            assert!(engine.apply_action(&mut play, action).is_err());
            assert_eq!(play, before);
        }
    }

    #[test]
    fn legal_actions_is_pure() {
        let mut engine = Engine::new(5);
        let play = engine.new_hand(1000, 5, 10);
        let before = play.clone();
        let a = engine.legal_actions(&play);
        let b = engine.legal_actions(&play);
        assert_eq!(a, b);
        assert_eq!(play, before);
    }

    #[test]
    fn streets_deal_board() {
        let mut engine = Engine::new(6);
        let mut play = engine.new_hand(1000, 5, 10);
        let call = find(&engine, &play, Move::Call);
        engine.apply_action(&mut play, call).unwrap();
        assert!(play.board().is_empty());
        let check = find(&engine, &play, Move::Check);
        engine.apply_action(&mut play, check).unwrap();
        assert_eq!(play.street(), Street::Flop);
        assert_eq!(play.board().len(), 3);
        assert_eq!(play.used().size(), 7);
        for (street, n) in [(Street::Turn, 4), (Street::Rive, 5)] {
            for _ in 0..2 {
                let check = find(&engine, &play, Move::Check);
                engine.apply_action(&mut play, check).unwrap();
            }
            assert_eq!(play.street(), street);
            assert_eq!(play.board().len(), n);
        }
        for _ in 0..2 {
            let check = find(&engine, &play, Move::Check);
            engine.apply_action(&mut play, check).unwrap();
        }
        assert!(play.is_terminal());
        let payoff = engine.terminal_payoff(&play).unwrap();
        assert_eq!(payoff.delta().iter().sum::<Chips>(), 0);
        assert_eq!(play.history().len(), 8);
    }

    #[test]
    fn all_in_runs_out_board() {
        let mut engine = Engine::new(7);
        let mut play = engine.new_hand(1000, 5, 10);
        let shove = *engine.legal_actions(&play).last().unwrap();
        assert_eq!((shove.kind(), shove.amount()), (Move::Raise, 995));
        engine.apply_action(&mut play, shove).unwrap();
        assert!(play.is_terminal());
        assert!(engine.legal_actions(&play).is_empty());
        assert_eq!(play.board().len(), 5);
        assert_eq!(play.used().size(), 9);
        assert_eq!(play.stacks(), [0, 990]);
        let payoff = engine.terminal_payoff(&play).unwrap();
        assert_eq!(payoff.ending(), Ending::Showdown);
        assert_eq!(payoff.pot(), 1010);
        assert_eq!(payoff.spent(), [1000, 10]);
        assert_eq!(payoff.delta().iter().sum::<Chips>(), 0);
        // P0 wins the blind, loses the stack, or chops a 1010 pot 505/505
        assert!([-10, 1000, 495].contains(&payoff.delta()[1]));
    }

    #[test]
    fn random_hands_conserve_chips() {
        let mut engine = Engine::new(8);
        for _ in 0..500 {
            let mut play = engine.new_hand(1000, 5, 10);
            while !play.is_terminal() {
                assert_eq!(play.stacks().iter().sum::<Chips>() + play.pot(), 2000);
                assert_eq!(play.spent().iter().sum::<Chips>(), play.pot());
                let action = engine.random_legal_action(&play).unwrap();
                engine.apply_action(&mut play, action).unwrap();
            }
            assert_eq!(play.stacks().iter().sum::<Chips>() + play.pot(), 2000);
            let payoff = engine.terminal_payoff(&play).unwrap();
            assert_eq!(payoff.delta().iter().sum::<Chips>(), 0);
            assert!(payoff.delta().iter().all(|d| d.abs() <= 1000));
        }
    }

    #[test]
    fn same_seed_same_hand() {
        let mut a = Engine::new(9);
        let mut b = Engine::new(9);
        let mut x = a.new_hand(1000, 5, 10);
        let mut y = b.new_hand(1000, 5, 10);
        assert_eq!(a.play_out(&mut x).unwrap(), b.play_out(&mut y).unwrap());
        assert_eq!(x, y);
    }
}
