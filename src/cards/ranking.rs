/// A poker hand's category, weakest to strongest.
///
/// The discriminant is the leading digit of a packed [`Strength`], so
/// comparing rankings and comparing strengths always agree.
///
/// [`Strength`]: super::strength::Strength
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ranking {
    HighCard = 0,      // 5 kickers
    OnePair = 1,       // pair + 3 kickers
    TwoPair = 2,       // hi, lo + 1 kicker
    ThreeOAK = 3,      // trips + 2 kickers
    Straight = 4,      // high card only
    Flush = 5,         // 5 kickers
    FullHouse = 6,     // trips, pair
    FourOAK = 7,       // quads + 1 kicker
    StraightFlush = 8, // high card only
}

impl Ranking {
    pub const fn all() -> [Self; 9] {
        [
            Self::HighCard,
            Self::OnePair,
            Self::TwoPair,
            Self::ThreeOAK,
            Self::Straight,
            Self::Flush,
            Self::FullHouse,
            Self::FourOAK,
            Self::StraightFlush,
        ]
    }
}

impl From<u8> for Ranking {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::HighCard,
            1 => Self::OnePair,
            2 => Self::TwoPair,
            3 => Self::ThreeOAK,
            4 => Self::Straight,
            5 => Self::Flush,
            6 => Self::FullHouse,
            7 => Self::FourOAK,
            8 => Self::StraightFlush,
            _ => panic!("invalid ranking u8: {}", n),
        }
    }
}
impl From<Ranking> for u8 {
    fn from(r: Ranking) -> u8 {
        r as u8
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::HighCard => write!(f, "HighCard"),
            Self::OnePair => write!(f, "OnePair"),
            Self::TwoPair => write!(f, "TwoPair"),
            Self::ThreeOAK => write!(f, "ThreeOfAKind"),
            Self::Straight => write!(f, "Straight"),
            Self::Flush => write!(f, "Flush"),
            Self::FullHouse => write!(f, "FullHouse"),
            Self::FourOAK => write!(f, "FourOfAKind"),
            Self::StraightFlush => write!(f, "StraightFlush"),
        }
    }
}
