use crate::Fraction;

/// Which bet and raise sizes are offered on the current street.
///
/// Sizes are pot fractions. `cap` bounds the number of aggressive actions
/// per street (unbounded when `None`) and `shove` toggles the all-in option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sizing<'a> {
    pub bets: &'a [Fraction],
    pub raises: &'a [Fraction],
    pub cap: Option<usize>,
    pub shove: bool,
}

impl Sizing<'static> {
    /// The fixed ladder used for concrete play: no raise cap, all-in allowed.
    pub const FIXED: Self = Self {
        bets: &crate::LADDER,
        raises: &crate::LADDER,
        cap: None,
        shove: true,
    };
}

impl Sizing<'_> {
    pub fn allows(&self, raises: usize) -> bool {
        self.cap.map_or(true, |cap| raises < cap)
    }
}
