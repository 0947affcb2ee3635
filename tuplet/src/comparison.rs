//! The three-way result of comparing two values or two tuples.

use std::cmp::Ordering;

/// The result of an ordered comparison between a host and a guest value.
///
/// A `Comparison` is also a signed integer in disguise: [`Less`](Comparison::Less) is `-1`,
/// [`Equal`](Comparison::Equal) is `0` and [`Greater`](Comparison::Greater) is `1`, which is what
/// [`signum`](Comparison::signum) returns.
///
/// # Examples
///
/// ```
/// use tuplet::{Comparison, T2};
///
/// let result = T2::new(1, 2).compare(&T2::new(2, 3));
/// assert_eq!(result, Comparison::Less);
/// assert!(result.is_lt());
/// assert!(result.is_le());
/// assert!(!result.is_ge());
/// ```
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Comparison {
    /// The host is less than the guest.
    Less = -1,
    /// The host is equal to the guest.
    Equal = 0,
    /// The host is greater than the guest.
    Greater = 1,
}

impl Comparison {
    /// Returns whether the compared values are equal.
    pub const fn is_eq(self) -> bool {
        matches!(self, Comparison::Equal)
    }

    /// Returns whether the compared values are not equal.
    pub const fn is_ne(self) -> bool {
        !self.is_eq()
    }

    /// Returns whether the host is less than the guest.
    pub const fn is_lt(self) -> bool {
        matches!(self, Comparison::Less)
    }

    /// Returns whether the host is less than or equal to the guest.
    pub const fn is_le(self) -> bool {
        !self.is_gt()
    }

    /// Returns whether the host is greater than the guest.
    pub const fn is_gt(self) -> bool {
        matches!(self, Comparison::Greater)
    }

    /// Returns whether the host is greater than or equal to the guest.
    pub const fn is_ge(self) -> bool {
        !self.is_lt()
    }

    /// Swaps the roles of host and guest.
    pub const fn reverse(self) -> Self {
        match self {
            Comparison::Less => Comparison::Greater,
            Comparison::Equal => Comparison::Equal,
            Comparison::Greater => Comparison::Less,
        }
    }

    /// The signed integer form of this result: `-1`, `0` or `1`.
    pub const fn signum(self) -> i8 {
        self as i8
    }

    /// Interpret any signed integer by its sign: negative is `Less`, zero is `Equal` and positive
    /// is `Greater`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplet::Comparison;
    ///
    /// assert_eq!(Comparison::from_signum(-42), Comparison::Less);
    /// assert_eq!(Comparison::from_signum(0), Comparison::Equal);
    /// assert_eq!(Comparison::from_signum(7), Comparison::Greater);
    /// ```
    pub const fn from_signum(value: i64) -> Self {
        if value < 0 {
            Comparison::Less
        } else if value > 0 {
            Comparison::Greater
        } else {
            Comparison::Equal
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }
}

impl From<Comparison> for Ordering {
    fn from(comparison: Comparison) -> Self {
        match comparison {
            Comparison::Less => Ordering::Less,
            Comparison::Equal => Ordering::Equal,
            Comparison::Greater => Ordering::Greater,
        }
    }
}
