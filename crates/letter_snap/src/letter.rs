use std::fmt::{self, Display, Formatter};

use thiserror::Error;

/// One of the 26 alphabet letters, cyclically ordered (`Z` wraps back to `A`).
/// Stored as a code in `0..26` so letter arithmetic is plain integer math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(u8);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LetterError {
    #[error("`{0}` is not an ASCII letter")]
    NotALetter(char),
}

impl Letter {
    pub const A: Self = Self(0);
    pub const COUNT: u8 = 26;

    /// Wraps any index onto the alphabet with a true modulo, so even a
    /// negative step count can never produce an out-of-range code.
    pub fn from_index(index: i64) -> Self {
        Self(index.rem_euclid(i64::from(Self::COUNT)) as u8)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn as_char(self) -> char {
        (b'A' + self.0) as char
    }

    pub fn advanced_by(self, steps: i64) -> Self {
        Self::from_index(i64::from(self.0) + steps)
    }

    /// Maps a drag distance onto the letter displayed on the tile: every
    /// `distance_per_letter` of distance advances the alphabet by one step.
    pub fn advanced_by_distance(self, distance: f32, distance_per_letter: f32) -> Self {
        if distance_per_letter <= 0.0 {
            return self;
        }
        let steps = (distance / distance_per_letter).floor() as i64;
        self.advanced_by(steps)
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        if value.is_ascii_uppercase() {
            Ok(Self(value as u8 - b'A'))
        } else if value.is_ascii_lowercase() {
            Ok(Self(value as u8 - b'a'))
        } else {
            Err(LetterError::NotALetter(value))
        }
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
