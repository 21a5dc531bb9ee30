use crate::cards::street::Street;
use crate::gameplay::ledger::Ledger;
use crate::gameplay::sizing::Sizing;
use crate::Chips;
use crate::Fraction;

/// A discretized heads-up betting game.
///
/// Stacks, blinds, a cap on aggressive actions per street, and per-street
/// ladders of pot fractions for opening bets and for raises. Indexed by
/// betting street: preflop, flop, turn, river.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Abstraction {
    pub stack: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub max_raises: usize,
    pub allow_all_in: bool,
    pub bets: [Vec<Fraction>; 4],
    pub raises: [Vec<Fraction>; 4],
}

impl Default for Abstraction {
    fn default() -> Self {
        Self {
            stack: crate::STACK,
            small_blind: crate::S_BLIND,
            big_blind: crate::B_BLIND,
            max_raises: crate::MAX_RAISES,
            allow_all_in: true,
            bets: std::array::from_fn(|_| crate::LADDER.to_vec()),
            raises: std::array::from_fn(|_| crate::LADDER.to_vec()),
        }
    }
}

impl Abstraction {
    /// Same ladder for bets and raises on every street.
    pub fn uniform(stack: Chips, small: Chips, big: Chips, max_raises: usize, ladder: &[Fraction]) -> Self {
        Self {
            stack,
            small_blind: small,
            big_blind: big,
            max_raises,
            allow_all_in: true,
            bets: std::array::from_fn(|_| ladder.to_vec()),
            raises: std::array::from_fn(|_| ladder.to_vec()),
        }
    }
    /// Blinds posted, P0 to act.
    pub fn root(&self) -> Ledger {
        Ledger::new(self.stack, self.small_blind, self.big_blind)
    }
    /// The sizes available on a street. Nothing is offered once betting is over.
    pub fn sizing(&self, street: Street) -> Sizing<'_> {
        match street {
            Street::Pref | Street::Flop | Street::Turn | Street::Rive => Sizing {
                bets: &self.bets[isize::from(street) as usize],
                raises: &self.raises[isize::from(street) as usize],
                cap: Some(self.max_raises),
                shove: self.allow_all_in,
            },
            Street::Showdown | Street::Terminal => Sizing {
                bets: &[],
                raises: &[],
                cap: Some(0),
                shove: false,
            },
        }
    }
    /// Longest possible chain of decision and chance nodes.
    pub fn max_depth(&self) -> usize {
        self.max_raises
            .saturating_add(2)
            .saturating_mul(4)
            .saturating_add(4)
    }
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.small_blind > 0, "small blind must be positive");
        anyhow::ensure!(
            self.small_blind <= self.big_blind,
            "small blind {} exceeds big blind {}",
            self.small_blind,
            self.big_blind
        );
        anyhow::ensure!(
            self.big_blind < self.stack,
            "big blind {} must be below stack {}",
            self.big_blind,
            self.stack
        );
        for (street, ladder) in Street::all()
            .iter()
            .zip(self.bets.iter().zip(self.raises.iter()))
            .flat_map(|(s, (b, r))| [(s, b), (s, r)])
        {
            anyhow::ensure!(
                ladder.iter().all(|x| x.is_finite() && *x > 0.0),
                "{} ladder has a non-positive size: {:?}",
                street,
                ladder
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_abstraction() {
        let abstraction = Abstraction::default();
        assert_eq!(abstraction.stack, 1000);
        assert_eq!(abstraction.small_blind, 5);
        assert_eq!(abstraction.big_blind, 10);
        assert_eq!(abstraction.max_raises, 2);
        assert!(abstraction.allow_all_in);
        assert!(abstraction.bets.iter().all(|l| l == &vec![0.5, 1.0, 2.0]));
        assert!(abstraction.validate().is_ok());
    }

    #[test]
    fn rejects_bad_configs() {
        let mut abstraction = Abstraction::default();
        abstraction.small_blind = 20;
        assert!(abstraction.validate().is_err());
        let mut abstraction = Abstraction::default();
        abstraction.big_blind = 1000;
        assert!(abstraction.validate().is_err());
        let mut abstraction = Abstraction::default();
        abstraction.raises[2] = vec![1.0, -0.5];
        assert!(abstraction.validate().is_err());
        let mut abstraction = Abstraction::default();
        abstraction.bets[0] = vec![f64::NAN];
        assert!(abstraction.validate().is_err());
    }

    #[test]
    fn depth_bound_saturates() {
        assert_eq!(Abstraction::default().max_depth(), 20);
        let abstraction = Abstraction::uniform(100, 5, 10, usize::MAX, &[1.0]);
        assert_eq!(abstraction.max_depth(), usize::MAX);
        assert!(abstraction.validate().is_ok());
    }

    #[test]
    fn no_sizes_after_river() {
        let abstraction = Abstraction::default();
        let sizing = abstraction.sizing(Street::Showdown);
        assert!(sizing.bets.is_empty());
        assert!(!sizing.shove);
        let sizing = abstraction.sizing(Street::Turn);
        assert_eq!(sizing.cap, Some(2));
        assert_eq!(sizing.raises.len(), 3);
    }
}
