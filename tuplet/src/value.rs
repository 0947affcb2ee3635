//! Values whose static type has been erased.

use std::{
    any::{self, Any},
    fmt,
};

use crate::render::short_type_name;

/// A value of any `'static + Send` type, boxed behind [`dyn Any`](Any), which remembers the name of
/// the type it was created from.
///
/// This is the element type of the untyped collections that tuples convert to and from. Getting
/// the value back out requires naming its type: [`downcast`](AnyValue::downcast) fails, handing
/// the value back, if the guess is wrong.
///
/// # Examples
///
/// ```
/// use tuplet::AnyValue;
///
/// let value = AnyValue::new(String::from("hello"));
/// assert!(value.is::<String>());
/// assert_eq!(value.type_name(), std::any::type_name::<String>());
///
/// let value = value.downcast::<i32>().unwrap_err();
/// assert_eq!(value.downcast::<String>().unwrap(), "hello");
/// ```
pub struct AnyValue {
    value: Box<dyn Any + Send>,
    type_name: &'static str,
}

impl AnyValue {
    /// Erase the static type of `value`.
    pub fn new<T: Any + Send>(value: T) -> Self {
        AnyValue {
            value: Box::new(value),
            type_name: any::type_name::<T>(),
        }
    }

    /// The full name of the type this value was created from, as given by
    /// [`std::any::type_name`].
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns whether the value has type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrow the value as a `T`, if that is its type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }

    /// Take the value back out as a `T`, or get `self` back unchanged if `T` is not its type.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let AnyValue { value, type_name } = self;
        match value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(AnyValue { value, type_name }),
        }
    }

    /// Unwrap into the underlying box, forgetting the type name.
    pub fn into_inner(self) -> Box<dyn Any + Send> {
        self.value
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AnyValue<{}>", short_type_name(self.type_name))
    }
}

/// Build an array of [`AnyValue`]s from a list of expressions of any types.
///
/// # Examples
///
/// ```
/// use tuplet::{any_values, T2};
///
/// let tuple = T2::<i32, &str>::from_array(any_values![1, "one"]);
/// assert_eq!(tuple, T2::new(1, "one"));
///
/// let tuple = T2::<i32, &str>::try_from_vec(any_values![1, "one"].into());
/// assert!(tuple.is_ok());
/// ```
#[macro_export]
macro_rules! any_values {
    ($($value:expr),* $(,)?) => {
        [$($crate::AnyValue::new($value)),*]
    };
}
