//! Strike/ball scoring result

use super::{DIGITS_LENGTH, MAX_STRIKES};
use std::fmt;

/// Outcome of scoring one guess against the secret
///
/// `strikes` counts digits right in value and position, `balls` counts digits
/// present in the secret at another position. A `balls` value of
/// [`Hint::CONSECUTIVE_SIGNAL`] is out of band: the guess shared nothing with a
/// secret whose digits form a consecutive run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hint {
    strikes: u8,
    balls: u8,
}

impl Hint {
    /// Ball count reported when nothing matched and the secret is a consecutive run
    pub const CONSECUTIVE_SIGNAL: u8 = MAX_STRIKES as u8 + 1;

    /// Every digit in place
    pub const OUT: Self = Self::new(DIGITS_LENGTH as u8, 0);

    #[inline]
    #[must_use]
    pub const fn new(strikes: u8, balls: u8) -> Self {
        Self { strikes, balls }
    }

    #[inline]
    #[must_use]
    pub const fn strikes(self) -> u8 {
        self.strikes
    }

    #[inline]
    #[must_use]
    pub const fn balls(self) -> u8 {
        self.balls
    }

    /// Check if the guess matched the secret completely
    #[inline]
    #[must_use]
    pub const fn is_out(self) -> bool {
        self.strikes as usize == DIGITS_LENGTH
    }

    /// No strikes and no balls
    #[inline]
    #[must_use]
    pub const fn is_nothing(self) -> bool {
        self.strikes == 0 && self.balls == 0
    }

    /// Check for the out-of-band consecutive-secret signal
    #[inline]
    #[must_use]
    pub const fn is_consecutive_signal(self) -> bool {
        self.strikes == 0 && self.balls == Self::CONSECUTIVE_SIGNAL
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}S {}B", self.strikes, self.balls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_constant() {
        assert!(Hint::OUT.is_out());
        assert_eq!(Hint::OUT.strikes(), 3);
        assert_eq!(Hint::OUT.balls(), 0);
    }

    #[test]
    fn nothing_and_signal() {
        assert!(Hint::new(0, 0).is_nothing());
        assert!(!Hint::new(0, 0).is_consecutive_signal());
        assert!(Hint::new(0, 4).is_consecutive_signal());
        assert!(!Hint::new(0, 4).is_nothing());
        assert_eq!(Hint::CONSECUTIVE_SIGNAL, 4);
    }

    #[test]
    fn partial_hint_is_not_out() {
        let hint = Hint::new(2, 0);
        assert!(!hint.is_out());
        assert!(!hint.is_nothing());
    }

    #[test]
    fn hint_display() {
        assert_eq!(Hint::new(1, 2).to_string(), "1S 2B");
    }
}
