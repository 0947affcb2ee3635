//! Combining per-field results into one tuple-level result.

use crate::Comparison;

/// Compose an ordered list of per-field comparisons into a single lexicographic result.
///
/// The thunks are called one at a time, in order. The first result which is not
/// [`Equal`](Comparison::Equal) is returned immediately, and the remaining thunks are never
/// called. If every thunk returns `Equal`, so does `compose`.
///
/// # Examples
///
/// ```
/// use tuplet::{compose, compare_ordered, Comparison};
///
/// let (a, b) = ((1, "x"), (1, "y"));
/// let result = compose(&[
///     &|| compare_ordered(&a.0, &b.0),
///     &|| compare_ordered(a.1, b.1),
/// ]);
/// assert_eq!(result, Comparison::Less);
/// ```
pub fn compose(thunks: &[&dyn Fn() -> Comparison]) -> Comparison {
    thunks
        .iter()
        .map(|thunk| thunk())
        .find(|result| result.is_ne())
        .unwrap_or(Comparison::Equal)
}

/// Compose an ordered list of per-field equality tests: `true` only if every test is `true`.
///
/// The tests are called in order, and none is called after the first one to return `false`.
pub fn all_equal(thunks: &[&dyn Fn() -> bool]) -> bool {
    thunks.iter().all(|thunk| thunk())
}
