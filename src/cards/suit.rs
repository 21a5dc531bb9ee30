/// A card suit.
///
/// Suits never outrank one another in hold'em. Their order only fixes the
/// low two bits of a [`Card`](super::card::Card) encoding.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Self::Club, Self::Diamond, Self::Heart, Self::Spade]
    }
    /// Lowercase notation letter.
    pub const fn symbol(&self) -> char {
        match self {
            Self::Club => 'c',
            Self::Diamond => 'd',
            Self::Heart => 'h',
            Self::Spade => 's',
        }
    }
}

/// u8 isomorphism, only the low two bits are read
impl From<u8> for Suit {
    fn from(n: u8) -> Self {
        debug_assert!(n < 4, "suit index out of range: {}", n);
        Self::all()[(n & 0b11) as usize]
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// char isomorphism
impl TryFrom<char> for Suit {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|s| s.symbol() == c)
            .ok_or_else(|| anyhow::anyhow!("invalid suit char: {:?}", c))
    }
}
impl TryFrom<&str> for Suit {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(anyhow::anyhow!("suit notation is 1 character: {:?}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for suit in Suit::all() {
            assert_eq!(suit, Suit::from(u8::from(suit)));
            assert_eq!(suit, Suit::try_from(suit.symbol()).unwrap());
            assert_eq!(suit, Suit::try_from(suit.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn rejects_unknown_letters() {
        assert!(Suit::try_from('x').is_err());
        assert!(Suit::try_from("S").is_err());
        assert!(Suit::try_from("sh").is_err());
    }
}
