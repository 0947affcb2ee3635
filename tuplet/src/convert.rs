//! Recovering typed values, position by position, from untyped collections.
//!
//! Every tuple arity converts through the same [`Elements`] cursor: the generated code only lists
//! the field types in order, and the cursor does the length check, the downcasts, and the error
//! reporting.

use std::{any::Any, array, vec};

use crate::{AnyValue, TupleError};

/// A cursor over the values of an untyped collection which is being converted into a tuple.
#[derive(Debug)]
pub(crate) struct Elements<I> {
    values: I,
    index: usize,
    arity: usize,
}

impl<const N: usize> Elements<array::IntoIter<AnyValue, N>> {
    /// Start converting a fixed-size collection, whose length is already known to be `N`.
    pub(crate) fn fixed(array: [AnyValue; N]) -> Self {
        Elements {
            values: IntoIterator::into_iter(array),
            index: 0,
            arity: N,
        }
    }
}

impl Elements<vec::IntoIter<AnyValue>> {
    /// Start converting a variable-size collection, which must hold exactly `arity` values.
    pub(crate) fn exact(values: Vec<AnyValue>, arity: usize) -> Result<Self, TupleError> {
        if values.len() != arity {
            return Err(rejected(TupleError::LengthMismatch {
                expected: arity,
                actual: values.len(),
            }));
        }

        Ok(Elements {
            values: values.into_iter(),
            index: 0,
            arity,
        })
    }
}

impl<I: Iterator<Item = AnyValue>> Elements<I> {
    /// Downcast the next value to `T`.
    pub(crate) fn take<T: Any>(&mut self) -> Result<T, TupleError> {
        let index = self.index;
        let value = self.values.next().ok_or_else(|| {
            rejected(TupleError::LengthMismatch {
                expected: self.arity,
                actual: index,
            })
        })?;
        self.index += 1;

        value.downcast::<T>().map_err(|value| {
            rejected(TupleError::TypeMismatch {
                index,
                expected: std::any::type_name::<T>(),
                actual: value.type_name(),
            })
        })
    }
}

fn rejected(error: TupleError) -> TupleError {
    tracing::debug!(error = %error, "rejected untyped collection");
    error
}
