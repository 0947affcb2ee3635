/*!
Fixed-arity, statically typed tuples which can be checked in and out of untyped collections.

The tuple types [`T1`] through [`T9`] each hold N independently typed values. Besides the usual
construction and positional access, every tuple can:

- **erase** its values into an array or `Vec` of [`AnyValue`], and be **recovered** from one,
  with every position checked against the type of its field;
- be **compared** field by field, lexicographically, using whichever comparison
  [strategy](strategy) its field types support;
- be **rendered** as `["a" "b"]` (its [`Display`](std::fmt::Display) form) or as
  `T2<&str, &str> { v1: "a", v2: "b" }` (its [`Debug`](std::fmt::Debug) form).

## Conversion

Recovering a tuple from an untyped collection either succeeds or reports the *first* problem
found. A `Vec` must have exactly as many values as the tuple, and its length is checked before
any value is looked at; then each value is downcast to its field's type, from index `0` upward.

```
use tuplet::{any_values, T2, TupleError};

let tuple = T2::<&str, &str>::try_from_array(any_values!["1", "2"]);
assert_eq!(tuple, Ok(T2::new("1", "2")));

let error = T2::<&str, &str>::try_from_array(any_values![0, "1"]).unwrap_err();
assert_eq!(
    error,
    TupleError::TypeMismatch {
        index: 0,
        expected: std::any::type_name::<&str>(),
        actual: std::any::type_name::<i32>(),
    }
);

let error = T2::<&str, &str>::try_from_vec(vec![]).unwrap_err();
assert_eq!(error, TupleError::LengthMismatch { expected: 2, actual: 0 });
```

Every checked conversion (`try_from_array`, `try_from_vec`, and the [`TryFrom`] impls) has a
panicking twin (`from_array`, `from_vec`) for call sites which already know the types line up.

## Comparison

There are three ways for the fields of a tuple to be compared, and a tuple-level method for each:

| Fields implement | Equality | Ordering |
| :--------------- | :------- | :------- |
| [`PartialEq`] / [`PartialOrd`] | `==` | [`compare`](T2::compare), [`less_than`](T2::less_than), ... |
| [`Equalable`] | [`equal_custom`](T2::equal_custom) | |
| [`Comparable`] | [`equal_by_compare`](T2::equal_by_compare) | [`compare_custom`](T2::compare_custom), [`less_than_custom`](T2::less_than_custom), ... |

Orderings are lexicographic and short-circuiting: once a position differs, no later position is
compared. All of them are built on [`compose`].

```
use tuplet::{Comparison, T2};

let lesser = T2::new(1, 2);
let greater = T2::new(2, 3);
assert_eq!(lesser.compare(&greater), Comparison::Less);
assert!(lesser.less_than(&greater));
assert!(!lesser.greater_or_equal(&greater));
```

## Serialization

With the `serde` feature enabled, every tuple implements `Serialize` and `Deserialize` as a
sequence of exactly N values.
*/

#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod comparison;
mod compose;
mod convert;
mod error;
pub mod render;
pub mod strategy;
mod tuple;
mod value;

#[cfg(feature = "serde")]
mod interchange;

pub use comparison::Comparison;
pub use compose::{all_equal, compose};
pub use error::TupleError;
pub use strategy::{compare_ordered, Comparable, Equalable};
pub use tuple::*;
pub use value::AnyValue;
