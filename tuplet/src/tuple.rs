//! The tuple types [`T1`] through [`T9`], and the traits which let code be generic over them.
//!
//! Each `TN` is generated by the same template, so every arity has the same methods and trait
//! implementations; only the number of fields differs. The traits here convert between the `TN`
//! structs, Rust's built-in tuples, and untyped collections of [`AnyValue`].

use crate::{AnyValue, TupleError};

/// A tuple type of a fixed arity, corresponding to one of Rust's built-in tuples.
pub trait Tuple: Sized {
    /// The number of values held by the tuple.
    const ARITY: usize;

    /// The built-in tuple holding the same values, e.g. `(A, B)` for `T2<A, B>`.
    type Native: Native<AsTuple = Self>;

    /// Convert into the corresponding built-in tuple.
    fn into_native(self) -> Self::Native;

    /// Convert from the corresponding built-in tuple.
    fn from_native(native: Self::Native) -> Self;
}

/// A built-in tuple which has a corresponding [`Tuple`] type.
///
/// # Examples
///
/// ```
/// use tuplet::{Native, T3};
///
/// let tuple = (1, 'b', "c").into_tuple();
/// assert_eq!(tuple, T3::new(1, 'b', "c"));
/// ```
pub trait Native: Sized {
    /// The corresponding tuple type.
    type AsTuple: Tuple<Native = Self>;

    /// Convert into the corresponding tuple type.
    fn into_tuple(self) -> Self::AsTuple {
        Self::AsTuple::from_native(self)
    }
}

/// A tuple whose values can be erased into, and recovered from, a `Vec` of [`AnyValue`].
///
/// Every `TN` implements this when all of its fields are `Any + Send`. The same operations are
/// also available as inherent methods; this trait exists for code which is generic over arity.
///
/// # Examples
///
/// ```
/// use tuplet::{Erase, TupleError, T2};
///
/// fn roundtrip<T: Erase>(tuple: T) -> Result<T, TupleError> {
///     T::try_from_vec(tuple.into_vec())
/// }
///
/// assert_eq!(roundtrip(T2::new(1, "a")), Ok(T2::new(1, "a")));
/// ```
pub trait Erase: Tuple {
    /// Erase the values, in order, into a `Vec` of length [`ARITY`](Tuple::ARITY).
    fn into_vec(self) -> Vec<AnyValue>;

    /// Recover a tuple from a `Vec` of values.
    ///
    /// The length is checked first; then each value is downcast to the type of its field, in
    /// order, stopping at the first failure.
    fn try_from_vec(values: Vec<AnyValue>) -> Result<Self, TupleError>;

    /// Recover a tuple from a `Vec` of values, like [`try_from_vec`](Erase::try_from_vec).
    ///
    /// # Panics
    ///
    /// If the length of `values` is not the arity of the tuple, or any value does not have the
    /// type of its field.
    fn from_vec(values: Vec<AnyValue>) -> Self {
        Self::try_from_vec(values).unwrap_or_else(|error| panic!("{}", error))
    }
}

tuplet_macro::impl_tuples!(9);
