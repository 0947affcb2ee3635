//! The ways a field type can opt into tuple-level equality and ordering.
//!
//! Every tuple comparison method requires *all* of the tuple's fields to support the same
//! strategy:
//!
//! - **Natural ordering**: every field is [`PartialOrd`], so the built-in `<` and `>` operators
//!   decide the result (see [`compare_ordered`]). Built-in equality is plain [`PartialEq`].
//! - **Custom equality**: every field is [`Equalable`].
//! - **Custom ordering**: every field is [`Comparable`].
//!
//! Which strategy is used is chosen by the method called, not by the field types, so a type may
//! implement several of them without ambiguity.

use crate::Comparison;

/// A field type whose equality to other instances of itself can be tested.
///
/// # Examples
///
/// ```
/// use tuplet::{Equalable, T2};
///
/// struct CaseInsensitive(&'static str);
///
/// impl Equalable for CaseInsensitive {
///     fn equal(&self, other: &Self) -> bool {
///         self.0.eq_ignore_ascii_case(other.0)
///     }
/// }
///
/// let host = T2::new(CaseInsensitive("a"), CaseInsensitive("B"));
/// let guest = T2::new(CaseInsensitive("A"), CaseInsensitive("b"));
/// assert!(host.equal_custom(&guest));
/// ```
pub trait Equalable {
    /// Returns whether `self` is semantically equal to `other`.
    fn equal(&self, other: &Self) -> bool;
}

/// A field type which can be compared to other instances of itself.
///
/// # Examples
///
/// ```
/// use tuplet::{Comparable, Comparison, T2};
///
/// struct Version(u32);
///
/// impl Comparable for Version {
///     fn compare_to(&self, other: &Self) -> Comparison {
///         self.0.cmp(&other.0).into()
///     }
/// }
///
/// let old = T2::new(Version(1), Version(9));
/// let new = T2::new(Version(2), Version(0));
/// assert!(old.less_than_custom(&new));
/// ```
pub trait Comparable {
    /// Returns whether `self` is less than, equal to, or greater than `other`.
    fn compare_to(&self, other: &Self) -> Comparison;
}

/// Compare two naturally ordered values with the built-in operators: `host < guest` is
/// [`Less`](Comparison::Less), `host > guest` is [`Greater`](Comparison::Greater), and anything
/// else is [`Equal`](Comparison::Equal).
///
/// Values which are incomparable (such as a floating point `NaN`) are therefore `Equal`.
pub fn compare_ordered<T: PartialOrd + ?Sized>(host: &T, guest: &T) -> Comparison {
    if host < guest {
        Comparison::Less
    } else if host > guest {
        Comparison::Greater
    } else {
        Comparison::Equal
    }
}
