use thiserror::Error;

/// The error returned when an untyped collection can not be converted into a tuple.
///
/// Only the first problem found is reported: the length of a variable-size collection is checked
/// before any of its elements, and elements are checked in order starting from index `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TupleError {
    /// A variable-size collection does not hold exactly as many values as the tuple.
    #[error("collection length {actual} must match number of tuple values {expected}")]
    LengthMismatch {
        /// The arity of the tuple.
        expected: usize,
        /// The length of the collection.
        actual: usize,
    },
    /// A value can not be downcast to the type of the tuple field at the same position.
    #[error("value at index {index} expected to have type {expected} but has type {actual}")]
    TypeMismatch {
        /// The 0-based position of the offending value.
        index: usize,
        /// The name of the type declared for the tuple field.
        expected: &'static str,
        /// The name of the runtime type of the offending value.
        actual: &'static str,
    },
}
