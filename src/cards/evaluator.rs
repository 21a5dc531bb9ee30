use super::card::Card;
use super::ranking::Ranking;
use super::strength::Strength;

/// Face values of the wheel, A-2-3-4-5, sorted descending.
const WHEEL: [u8; 5] = [14, 5, 4, 3, 2];

/// Scores the best five-card hand out of two hole cards and a full board.
///
/// Exhausts all 21 ways of leaving out two of the seven cards and keeps
/// the strongest. Pure and order-independent in both arguments.
pub fn evaluate_7card(hole: [Card; 2], board: [Card; 5]) -> Strength {
    let seven = [
        hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
    ];
    (0..7)
        .flat_map(|a| (a + 1..7).map(move |b| (a, b)))
        .map(|(a, b)| {
            let mut five = [seven[0]; 5];
            seven
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != a && *i != b)
                .map(|(_, c)| *c)
                .zip(five.iter_mut())
                .for_each(|(c, slot)| *slot = c);
            five
        })
        .map(|five| Evaluator::from(five).strength())
        .max()
        .unwrap_or_default()
}

/// A five-card classifier.
///
/// Tallies ranks and suits once, then searches categories strongest first.
/// Face values are stored sorted high to low so kickers fall out in order.
pub struct Evaluator {
    ranks: [u8; 5],
    count: [u8; 15],
    flush: bool,
}

impl From<[Card; 5]> for Evaluator {
    fn from(cards: [Card; 5]) -> Self {
        let mut ranks = cards.map(|c| c.rank().value());
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        let mut count = [0u8; 15];
        for r in ranks {
            count[r as usize] += 1;
        }
        let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        Self {
            ranks,
            count,
            flush,
        }
    }
}

impl Evaluator {
    pub fn strength(&self) -> Strength {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or_else(|| self.find_1_oak())
    }

    fn find_straight_flush(&self) -> Option<Strength> {
        self.flush
            .then(|| self.find_rank_of_straight())
            .flatten()
            .map(|hi| Strength::from((Ranking::StraightFlush, &[hi][..])))
    }
    fn find_4_oak(&self) -> Option<Strength> {
        self.find_rank_of_n_oak(4).map(|quad| {
            let kick = self.kickers(&[quad]);
            Strength::from((Ranking::FourOAK, &[quad, kick[0]][..]))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Strength> {
        self.find_rank_of_n_oak(3).and_then(|trips| {
            self.find_rank_of_n_oak(2)
                .map(|pair| Strength::from((Ranking::FullHouse, &[trips, pair][..])))
        })
    }
    fn find_flush(&self) -> Option<Strength> {
        self.flush
            .then(|| Strength::from((Ranking::Flush, &self.ranks[..])))
    }
    fn find_straight(&self) -> Option<Strength> {
        self.find_rank_of_straight()
            .map(|hi| Strength::from((Ranking::Straight, &[hi][..])))
    }
    fn find_3_oak(&self) -> Option<Strength> {
        self.find_rank_of_n_oak(3).map(|trips| {
            let kick = self.kickers(&[trips]);
            Strength::from((Ranking::ThreeOAK, &[trips, kick[0], kick[1]][..]))
        })
    }
    fn find_2_oak_2_oak(&self) -> Option<Strength> {
        let mut pairs = self.ranks_of_n_oak(2);
        let hi = pairs.next()?;
        let lo = pairs.next()?;
        let kick = self.kickers(&[hi, lo]);
        Some(Strength::from((Ranking::TwoPair, &[hi, lo, kick[0]][..])))
    }
    fn find_2_oak(&self) -> Option<Strength> {
        self.find_rank_of_n_oak(2).map(|pair| {
            let kick = self.kickers(&[pair]);
            Strength::from((Ranking::OnePair, &[pair, kick[0], kick[1], kick[2]][..]))
        })
    }
    fn find_1_oak(&self) -> Strength {
        Strength::from((Ranking::HighCard, &self.ranks[..]))
    }

    /// five distinct consecutive values, or the wheel which plays 5-high
    fn find_rank_of_straight(&self) -> Option<u8> {
        let distinct = self.count.iter().filter(|&&n| n > 0).count() == 5;
        if !distinct {
            None
        } else if self.ranks[0] - self.ranks[4] == 4 {
            Some(self.ranks[0])
        } else if self.ranks == WHEEL {
            Some(5)
        } else {
            None
        }
    }
    /// highest face value held exactly n times
    fn find_rank_of_n_oak(&self, n: u8) -> Option<u8> {
        self.ranks_of_n_oak(n).next()
    }
    fn ranks_of_n_oak(&self, n: u8) -> impl Iterator<Item = u8> + '_ {
        (2..=14u8).rev().filter(move |&r| self.count[r as usize] == n)
    }
    /// remaining face values, high to low, after removing the made ranks
    fn kickers(&self, made: &[u8]) -> Vec<u8> {
        self.ranks
            .iter()
            .copied()
            .filter(|r| !made.contains(r))
            .collect()
    }
}
