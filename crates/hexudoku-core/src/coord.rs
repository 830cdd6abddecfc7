//! Axial coordinates for the hexagonal grid.

use std::{
    fmt::{self, Display},
    ops::{Add, Sub},
};

/// An axial coordinate on a hexagonal grid.
///
/// A coordinate is a pair of signed integers `(q, r)` with a derived third
/// axis `s = -q - r`, so that `q + r + s == 0` holds for every coordinate.
/// Coordinates are plain values: two coordinates with the same `q` and `r`
/// compare and hash equal, which makes them usable as map keys for cell
/// identity across the whole board.
///
/// # Examples
///
/// ```
/// use hexudoku_core::{HexCoordinate, HexDirection};
///
/// let coord = HexCoordinate::new(4, 2);
/// assert_eq!(coord.s(), -6);
/// assert_eq!(coord.next(HexDirection::Up), HexCoordinate::new(4, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexCoordinate {
    /// The q axis component.
    pub q: i32,
    /// The r axis component.
    pub r: i32,
}

impl HexCoordinate {
    /// Creates a coordinate from its `q` and `r` components.
    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Returns the derived third axis `s = -q - r`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexudoku_core::HexCoordinate;
    ///
    /// assert_eq!(HexCoordinate::new(3, -1).s(), -2);
    /// assert_eq!(HexCoordinate::new(0, 0).s(), 0);
    /// ```
    #[must_use]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Snaps fractional axial coordinates to the nearest valid hex coordinate.
    ///
    /// Derives `s = -q - r`, rounds all three axes independently, then
    /// recomputes whichever axis has the largest rounding error from the other
    /// two so that `q + r + s == 0` holds exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexudoku_core::HexCoordinate;
    ///
    /// assert_eq!(HexCoordinate::rounded(3.9, 2.1), HexCoordinate::new(4, 2));
    /// assert_eq!(HexCoordinate::rounded(0.0, 0.0), HexCoordinate::new(0, 0));
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn rounded(q: f64, r: f64) -> Self {
        let s = -q - r;
        let mut rounded_q = q.round();
        let mut rounded_r = r.round();
        let rounded_s = s.round();

        let q_err = (rounded_q - q).abs();
        let r_err = (rounded_r - r).abs();
        let s_err = (rounded_s - s).abs();

        if q_err > r_err && q_err > s_err {
            rounded_q = -rounded_r - rounded_s;
        } else if r_err > s_err {
            rounded_r = -rounded_q - rounded_s;
        }
        // When the s error dominates, q and r already satisfy the invariant
        // because s is never stored.

        Self::new(rounded_q as i32, rounded_r as i32)
    }

    /// Returns the neighboring coordinate in the given direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexudoku_core::{HexCoordinate, HexDirection};
    ///
    /// let coord = HexCoordinate::new(4, 2);
    /// assert_eq!(coord.next(HexDirection::Down), HexCoordinate::new(4, 3));
    /// ```
    #[must_use]
    pub const fn next(self, direction: HexDirection) -> Self {
        let offset = direction.offset();
        Self::new(self.q + offset.q, self.r + offset.r)
    }
}

impl Add for HexCoordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for HexCoordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl Display for HexCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// One of the six unit directions on a flat-top hexagonal grid, clockwise
/// starting at [`Up`](Self::Up).
///
/// Each direction maps to a fixed `(Δq, Δr)` offset; neighbor lookup is
/// [`HexCoordinate::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexDirection {
    /// `(0, -1)`
    Up,
    /// `(1, -1)`
    UpRight,
    /// `(1, 0)`
    DownRight,
    /// `(0, 1)`
    Down,
    /// `(-1, 1)`
    DownLeft,
    /// `(-1, 0)`
    UpLeft,
}

impl HexDirection {
    /// All six directions in clockwise order starting at [`Up`](Self::Up).
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::UpRight,
        Self::DownRight,
        Self::Down,
        Self::DownLeft,
        Self::UpLeft,
    ];

    /// Returns the coordinate offset for this direction.
    #[must_use]
    pub const fn offset(self) -> HexCoordinate {
        match self {
            Self::Up => HexCoordinate::new(0, -1),
            Self::UpRight => HexCoordinate::new(1, -1),
            Self::DownRight => HexCoordinate::new(1, 0),
            Self::Down => HexCoordinate::new(0, 1),
            Self::DownLeft => HexCoordinate::new(-1, 1),
            Self::UpLeft => HexCoordinate::new(-1, 0),
        }
    }
}
