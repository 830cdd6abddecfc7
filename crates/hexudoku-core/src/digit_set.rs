//! A set of digits 1-7, used for candidate notes.

use std::fmt::{self, Display};

use crate::Digit;

/// A set of [`Digit`]s represented as a bitset.
///
/// The implementation uses a single byte where bits 0-6 represent digits 1-7
/// respectively, providing cheap copies and fast membership tests. Cells carry
/// two of these for their center and outer candidate notes.
///
/// # Examples
///
/// ```
/// use hexudoku_core::{Digit, DigitSet};
///
/// let mut notes = DigitSet::new();
/// notes.insert(Digit::D2);
/// notes.insert(Digit::D5);
///
/// assert_eq!(notes.len(), 2);
/// assert!(notes.contains(Digit::D5));
/// assert!(!notes.contains(Digit::D1));
///
/// notes.remove(Digit::D5);
/// assert!(!notes.contains(Digit::D5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet(u8);

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit 1-7.
    pub const FULL: Self = Self(0x7f);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u8 {
        1 << (digit.value() - 1)
    }

    /// Inserts a digit into the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= Self::bit(digit);
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !Self::bit(digit);
    }

    /// Returns whether the set contains the given digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the digits in the set, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexudoku_core::{Digit, DigitSet};
    ///
    /// let set: DigitSet = [Digit::D3, Digit::D1].into_iter().collect();
    /// let digits: Vec<_> = set.iter().collect();
    /// assert_eq!(digits, vec![Digit::D1, Digit::D3]);
    /// ```
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::ALL.into_iter().filter(move |digit| self.contains(*digit))
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for digit in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{digit}")?;
            first = false;
        }
        write!(f, "}}")
    }
}
