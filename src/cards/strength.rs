use super::ranking::Ranking;

/// Positional base of the packed score. Face values run 2..=14.
const BASE: u32 = 15;
/// Kicker slots following the category digit.
const SLOTS: usize = 5;

/// A hand's strength as a single totally ordered integer.
///
/// Packed as a fixed-width base-15 number: the [`Ranking`] is the leading
/// digit, followed by exactly five kicker slots (face values, zero-padded).
/// Since every slot is below the base, any category outranks any kicker
/// combination of a lower category, so plain integer comparison is correct.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strength(u32);

impl Strength {
    pub fn ranking(&self) -> Ranking {
        Ranking::from((self.0 / BASE.pow(SLOTS as u32)) as u8)
    }
    /// Face values in the kicker slots, most significant first.
    pub fn kickers(&self) -> [u8; SLOTS] {
        let mut slots = [0u8; SLOTS];
        let mut rest = self.0;
        for slot in slots.iter_mut().rev() {
            *slot = (rest % BASE) as u8;
            rest /= BASE;
        }
        slots
    }
}

/// kickers beyond the fifth are dropped, missing ones are zero
impl From<(Ranking, &[u8])> for Strength {
    fn from((ranking, kickers): (Ranking, &[u8])) -> Self {
        debug_assert!(kickers.iter().all(|&k| (k as u32) < BASE));
        Self(
            (0..SLOTS)
                .map(|i| kickers.get(i).copied().unwrap_or(0) as u32)
                .fold(u8::from(ranking) as u32, |score, k| score * BASE + k),
        )
    }
}

impl From<Strength> for u32 {
    fn from(s: Strength) -> Self {
        s.0
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<14}", self.ranking())?;
        for k in self.kickers().iter().filter(|&&k| k > 0) {
            write!(f, "{:>3}", k)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_what_it_packs() {
        let strength = Strength::from((Ranking::TwoPair, &[14u8, 9, 3][..]));
        assert_eq!(strength.ranking(), Ranking::TwoPair);
        assert_eq!(strength.kickers(), [14, 9, 3, 0, 0]);
    }

    #[test]
    fn category_dominates_kickers() {
        let best_pair = Strength::from((Ranking::OnePair, &[14u8, 13, 12, 11][..]));
        let worst_two = Strength::from((Ranking::TwoPair, &[3u8, 2, 4][..]));
        assert!(worst_two > best_pair);
        let best_high = Strength::from((Ranking::HighCard, &[14u8, 14, 14, 14, 14][..]));
        let worst_pair = Strength::from((Ranking::OnePair, &[2u8, 3, 4, 5][..]));
        assert!(worst_pair > best_high);
    }
}
