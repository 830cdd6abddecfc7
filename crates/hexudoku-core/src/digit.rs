//! Hexudoku digit representation.

use std::fmt::{self, Display};

/// A hexudoku digit in the range 1-7.
///
/// This enum provides type-safe representation of digits, preventing invalid
/// values at compile time. Each variant corresponds to exactly one digit value.
///
/// # Examples
///
/// ```
/// use hexudoku_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Create from a u8 value
/// let digit = Digit::from_value(7);
/// assert_eq!(digit, Digit::D7);
///
/// // Iterate over all digits
/// for digit in Digit::ALL {
///     println!("{}", digit);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
}

impl Digit {
    /// Array containing all digits from 1 to 7.
    ///
    /// Useful for iterating over all possible digits, and as the candidate
    /// pool shuffled by the random fill.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexudoku_core::Digit;
    ///
    /// assert_eq!(Digit::ALL.len(), 7);
    /// assert_eq!(Digit::ALL[0], Digit::D1);
    /// assert_eq!(Digit::ALL[6], Digit::D7);
    /// ```
    pub const ALL: [Self; 7] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
    ];

    /// Creates a digit from a u8 value in the range 1-7.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-7.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexudoku_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(5), Digit::D5);
    /// ```
    ///
    /// ```should_panic
    /// use hexudoku_core::Digit;
    ///
    /// // This will panic
    /// let _ = Digit::from_value(8);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value)
            .unwrap_or_else(|| panic!("Invalid digit value: {value}"))
    }

    /// Creates a digit from a u8 value, returning `None` when out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexudoku_core::Digit;
    ///
    /// assert_eq!(Digit::try_from_value(3), Some(Digit::D3));
    /// assert_eq!(Digit::try_from_value(0), None);
    /// assert_eq!(Digit::try_from_value(8), None);
    /// ```
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (1-7).
    ///
    /// # Examples
    ///
    /// ```
    /// use hexudoku_core::Digit;
    ///
    /// assert_eq!(Digit::D1.value(), 1);
    /// assert_eq!(Digit::D7.value(), 7);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_round_trips_through_value() {
        for digit in Digit::ALL {
            assert_eq!(Digit::from_value(digit.value()), digit);
        }
    }

    #[test]
    fn test_try_from_value_bounds() {
        assert_eq!(Digit::try_from_value(1), Some(Digit::D1));
        assert_eq!(Digit::try_from_value(7), Some(Digit::D7));
        assert_eq!(Digit::try_from_value(0), None);
        assert_eq!(Digit::try_from_value(8), None);
    }

    #[test]
    #[should_panic(expected = "Invalid digit value")]
    fn test_from_value_rejects_zero() {
        let _ = Digit::from_value(0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Digit::D4.to_string(), "4");
    }
}
