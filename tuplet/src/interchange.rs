//! Serialization of tuples as fixed-length sequences, for use with any [Serde](serde_crate)
//! format.
//!
//! A `TN` serializes as a sequence of exactly N elements (a JSON array, for instance), and
//! deserializes only from a sequence of exactly N elements, each of which must deserialize into
//! the type of its field. As with [`Erase::try_from_vec`](crate::Erase::try_from_vec), the length
//! is checked before any element is: a sequence of any other length is rejected with the message
//! of [`TupleError::LengthMismatch`], whatever its elements are.
//!
//! Formats which know the length of a sequence up front (such as `bincode`) are read in a single
//! pass. Otherwise the elements are first buffered as [`serde_value::Value`]s, and only
//! deserialized into the field types once the length is known to be right. Buffered elements own
//! their data, so fields which borrow from the input (like `&str`) can only be read from formats of
//! the first kind.

use std::{fmt, marker::PhantomData, vec};

use serde_crate::de::{self, Deserialize, IgnoredAny, SeqAccess, Visitor};
use serde_value::{Value, ValueDeserializer};

use crate::{Tuple, TupleError};

/// A tuple which can be read, field by field, out of a [`SeqReader`].
pub(crate) trait FromSeq<'de>: Tuple {
    fn from_seq<A: SeqAccess<'de>>(seq: &mut SeqReader<A>) -> Result<Self, A::Error>;
}

/// Where the elements of a sequence are read from.
enum Source<A> {
    /// Straight from the format, which has already reported the right length.
    Streamed(A),
    /// From elements already read out of the format, of which there are the right number.
    Buffered(vec::IntoIter<Value>),
}

/// Reads the elements of a sequence one at a time, keeping count of how many have been read.
pub(crate) struct SeqReader<A> {
    source: Source<A>,
    index: usize,
    arity: usize,
}

impl<'de, A: SeqAccess<'de>> SeqReader<A> {
    /// Check the length of `seq`, reading it into a buffer first if the format can't say.
    fn new(mut seq: A, arity: usize) -> Result<Self, A::Error> {
        let source = match seq.size_hint() {
            Some(actual) if actual != arity => {
                return Err(rejected(TupleError::LengthMismatch {
                    expected: arity,
                    actual,
                }))
            }
            Some(_) => Source::Streamed(seq),
            None => {
                let mut values = Vec::with_capacity(arity);
                while let Some(value) = seq.next_element::<Value>()? {
                    values.push(value);
                }
                if values.len() != arity {
                    return Err(rejected(TupleError::LengthMismatch {
                        expected: arity,
                        actual: values.len(),
                    }));
                }
                Source::Buffered(values.into_iter())
            }
        };

        Ok(SeqReader {
            source,
            index: 0,
            arity,
        })
    }

    /// Deserialize the next element as a `T`.
    pub(crate) fn next<T: Deserialize<'de>>(&mut self) -> Result<T, A::Error> {
        let index = self.index;
        let next = match &mut self.source {
            Source::Streamed(seq) => seq.next_element::<T>(),
            Source::Buffered(values) => values
                .next()
                .map(|value| T::deserialize(ValueDeserializer::<A::Error>::new(value)))
                .transpose(),
        };

        match next {
            Ok(Some(value)) => {
                self.index += 1;
                Ok(value)
            }
            Ok(None) => Err(rejected(TupleError::LengthMismatch {
                expected: self.arity,
                actual: index,
            })),
            Err(error) => {
                tracing::debug!(index, error = %error, "rejected sequence element");
                Err(de::Error::custom(format_args!(
                    "value at index {}: {}",
                    index, error
                )))
            }
        }
    }

    /// Make sure that nothing is left in the sequence.
    fn finish(self) -> Result<(), A::Error> {
        let mut actual = self.index;
        match self.source {
            Source::Streamed(mut seq) => {
                while seq.next_element::<IgnoredAny>()?.is_some() {
                    actual += 1;
                }
            }
            Source::Buffered(values) => actual += values.len(),
        }

        if actual == self.arity {
            Ok(())
        } else {
            Err(rejected(TupleError::LengthMismatch {
                expected: self.arity,
                actual,
            }))
        }
    }
}

fn rejected<E: de::Error>(error: TupleError) -> E {
    tracing::debug!(error = %error, "rejected sequence");
    E::custom(error)
}

/// The [`Visitor`] for every tuple type.
pub(crate) struct TupleVisitor<T>(PhantomData<T>);

impl<T> TupleVisitor<T> {
    pub(crate) fn new() -> Self {
        TupleVisitor(PhantomData)
    }
}

impl<'de, T: FromSeq<'de>> Visitor<'de> for TupleVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence of {} values", T::ARITY)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<T, A::Error> {
        let mut reader = SeqReader::new(seq, T::ARITY)?;
        let tuple = T::from_seq(&mut reader)?;
        reader.finish()?;
        Ok(tuple)
    }
}
