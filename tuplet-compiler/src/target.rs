//! The items generated for one tuple arity.
//!
//! Generated code refers to the rest of the `tuplet` crate through `crate::` paths, so it must be
//! expanded inside that crate.

use {
    proc_macro2::{Literal, TokenStream},
    quote::{quote, ToTokens},
};

use crate::Arity;

impl ToTokens for Arity {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let name = self.name();
        let name_str = name.to_string();
        let types = self.types();
        let fields = self.fields();
        let arity = Literal::usize_unsuffixed(self.get());

        let struct_doc = if self.get() == 1 {
            "A tuple holding 1 generic value.".to_owned()
        } else {
            format!("A tuple holding {} generic values.", self.get())
        };
        let new_doc = format!("Creates a new tuple holding {} generic values.", self.get());
        let accessor_docs = (1..=self.get())
            .map(|i| format!("Returns the value at position {}.", i))
            .collect::<Vec<_>>();

        let natural_thunks = fields
            .iter()
            .map(|v| quote!(&|| crate::compare_ordered(&self.#v, &other.#v)))
            .collect::<Vec<_>>();
        let custom_thunks = fields
            .iter()
            .map(|v| quote!(&|| crate::Comparable::compare_to(&self.#v, &other.#v)))
            .collect::<Vec<_>>();
        let equal_thunks = fields
            .iter()
            .map(|v| quote!(&|| crate::Equalable::equal(&self.#v, &other.#v)))
            .collect::<Vec<_>>();
        let typed_fields = fields
            .iter()
            .zip(&types)
            .map(|(v, ty)| quote!((::core::any::type_name::<#ty>(), &self.#v)))
            .collect::<Vec<_>>();

        quote! {
            #[doc = #struct_doc]
            #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
            pub struct #name<#(#types),*> {
                #(#fields: #types,)*
            }

            impl<#(#types),*> #name<#(#types),*> {
                #[doc = #new_doc]
                pub const fn new(#(#fields: #types),*) -> Self {
                    #name { #(#fields),* }
                }

                /// Returns the number of values held by the tuple.
                #[allow(clippy::len_without_is_empty)]
                pub const fn len(&self) -> usize {
                    #arity
                }

                #(
                    #[doc = #accessor_docs]
                    pub const fn #fields(&self) -> &#types {
                        &self.#fields
                    }
                )*

                /// Returns references to the values held by the tuple, in order.
                pub const fn values(&self) -> (#(&#types,)*) {
                    (#(&self.#fields,)*)
                }

                /// Returns the values held by the tuple, in order.
                pub fn into_values(self) -> (#(#types,)*) {
                    (#(self.#fields,)*)
                }
            }

            impl<#(#types: ::core::any::Any + ::core::marker::Send),*> #name<#(#types),*> {
                /// Erases the values held by the tuple, in order, into an array.
                pub fn into_array(self) -> [crate::AnyValue; #arity] {
                    [#(crate::AnyValue::new(self.#fields)),*]
                }

                /// Erases the values held by the tuple, in order, into a `Vec`.
                pub fn into_vec(self) -> ::std::vec::Vec<crate::AnyValue> {
                    <Self as crate::Erase>::into_vec(self)
                }

                /// Returns a tuple from an array of the same length.
                ///
                /// If any of the values does not have the type of its field, an error naming the
                /// first such position is returned.
                pub fn try_from_array(
                    array: [crate::AnyValue; #arity],
                ) -> ::core::result::Result<Self, crate::TupleError> {
                    let mut elements = crate::convert::Elements::fixed(array);
                    ::core::result::Result::Ok(#name::new(#(elements.take::<#types>()?),*))
                }

                /// Returns a tuple from an array of the same length.
                ///
                /// # Panics
                ///
                /// If any of the values does not have the type of its field.
                pub fn from_array(array: [crate::AnyValue; #arity]) -> Self {
                    Self::try_from_array(array).unwrap_or_else(|error| ::core::panic!("{}", error))
                }

                /// Returns a tuple from a `Vec` which must have the same length as the tuple.
                ///
                /// If the length doesn't match, or any of the values does not have the type of its
                /// field, an error describing the first problem is returned.
                pub fn try_from_vec(
                    values: ::std::vec::Vec<crate::AnyValue>,
                ) -> ::core::result::Result<Self, crate::TupleError> {
                    <Self as crate::Erase>::try_from_vec(values)
                }

                /// Returns a tuple from a `Vec` which must have the same length as the tuple.
                ///
                /// # Panics
                ///
                /// If the length doesn't match, or any of the values does not have the type of
                /// its field.
                pub fn from_vec(values: ::std::vec::Vec<crate::AnyValue>) -> Self {
                    <Self as crate::Erase>::from_vec(values)
                }
            }

            impl<#(#types: ::core::any::Any + ::core::marker::Send + ::core::clone::Clone),*>
                #name<#(#types),*>
            {
                /// Erases clones of the values held by the tuple, in order, into an array.
                pub fn to_array(&self) -> [crate::AnyValue; #arity] {
                    [#(crate::AnyValue::new(::core::clone::Clone::clone(&self.#fields))),*]
                }

                /// Erases clones of the values held by the tuple, in order, into a `Vec`.
                pub fn to_vec(&self) -> ::std::vec::Vec<crate::AnyValue> {
                    ::std::vec::Vec::from(self.to_array())
                }
            }

            impl<#(#types: ::core::cmp::PartialOrd),*> #name<#(#types),*> {
                /// Returns whether this tuple is less than, equal to, or greater than `other`,
                /// comparing the values in order with their built-in ordering.
                ///
                /// Values after the first unequal position are not compared.
                pub fn compare(&self, other: &Self) -> crate::Comparison {
                    let thunks: [&dyn ::core::ops::Fn() -> crate::Comparison; #arity] =
                        [#(#natural_thunks),*];
                    crate::compose(&thunks)
                }

                /// Returns whether this tuple is less than `other`.
                pub fn less_than(&self, other: &Self) -> bool {
                    self.compare(other).is_lt()
                }

                /// Returns whether this tuple is less than or equal to `other`.
                pub fn less_or_equal(&self, other: &Self) -> bool {
                    self.compare(other).is_le()
                }

                /// Returns whether this tuple is greater than `other`.
                pub fn greater_than(&self, other: &Self) -> bool {
                    self.compare(other).is_gt()
                }

                /// Returns whether this tuple is greater than or equal to `other`.
                pub fn greater_or_equal(&self, other: &Self) -> bool {
                    self.compare(other).is_ge()
                }
            }

            impl<#(#types: crate::Comparable),*> #name<#(#types),*> {
                /// Returns whether this tuple is less than, equal to, or greater than `other`,
                /// comparing the values in order with [`Comparable::compare_to`](crate::Comparable).
                ///
                /// Values after the first unequal position are not compared.
                pub fn compare_custom(&self, other: &Self) -> crate::Comparison {
                    let thunks: [&dyn ::core::ops::Fn() -> crate::Comparison; #arity] =
                        [#(#custom_thunks),*];
                    crate::compose(&thunks)
                }

                /// Returns whether this tuple is less than `other`, by
                /// [`compare_custom`](Self::compare_custom).
                pub fn less_than_custom(&self, other: &Self) -> bool {
                    self.compare_custom(other).is_lt()
                }

                /// Returns whether this tuple is less than or equal to `other`, by
                /// [`compare_custom`](Self::compare_custom).
                pub fn less_or_equal_custom(&self, other: &Self) -> bool {
                    self.compare_custom(other).is_le()
                }

                /// Returns whether this tuple is greater than `other`, by
                /// [`compare_custom`](Self::compare_custom).
                pub fn greater_than_custom(&self, other: &Self) -> bool {
                    self.compare_custom(other).is_gt()
                }

                /// Returns whether this tuple is greater than or equal to `other`, by
                /// [`compare_custom`](Self::compare_custom).
                pub fn greater_or_equal_custom(&self, other: &Self) -> bool {
                    self.compare_custom(other).is_ge()
                }

                /// Returns whether this tuple is equal to `other`, by
                /// [`compare_custom`](Self::compare_custom).
                pub fn equal_by_compare(&self, other: &Self) -> bool {
                    self.compare_custom(other).is_eq()
                }
            }

            impl<#(#types: crate::Equalable),*> #name<#(#types),*> {
                /// Returns whether this tuple is equal to `other`, testing the values in order
                /// with [`Equalable::equal`](crate::Equalable).
                ///
                /// Values after the first unequal position are not tested.
                pub fn equal_custom(&self, other: &Self) -> bool {
                    let thunks: [&dyn ::core::ops::Fn() -> bool; #arity] = [#(#equal_thunks),*];
                    crate::all_equal(&thunks)
                }
            }

            impl<#(#types: ::core::fmt::Debug),*> ::core::fmt::Display for #name<#(#types),*> {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    let values: [&dyn ::core::fmt::Debug; #arity] = [#(&self.#fields),*];
                    crate::render::fmt_values(f, &values)
                }
            }

            impl<#(#types: ::core::fmt::Debug),*> ::core::fmt::Debug for #name<#(#types),*> {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    let fields: [(&'static str, &dyn ::core::fmt::Debug); #arity] =
                        [#(#typed_fields),*];
                    crate::render::fmt_constructor(f, #name_str, &fields)
                }
            }

            impl<#(#types),*> ::core::convert::From<(#(#types,)*)> for #name<#(#types),*> {
                fn from((#(#fields,)*): (#(#types,)*)) -> Self {
                    #name::new(#(#fields),*)
                }
            }

            impl<#(#types),*> ::core::convert::From<#name<#(#types),*>> for (#(#types,)*) {
                fn from(tuple: #name<#(#types),*>) -> Self {
                    tuple.into_values()
                }
            }

            impl<#(#types: ::core::any::Any + ::core::marker::Send),*>
                ::core::convert::TryFrom<[crate::AnyValue; #arity]> for #name<#(#types),*>
            {
                type Error = crate::TupleError;

                fn try_from(
                    array: [crate::AnyValue; #arity],
                ) -> ::core::result::Result<Self, Self::Error> {
                    #name::try_from_array(array)
                }
            }

            impl<#(#types: ::core::any::Any + ::core::marker::Send),*>
                ::core::convert::TryFrom<::std::vec::Vec<crate::AnyValue>> for #name<#(#types),*>
            {
                type Error = crate::TupleError;

                fn try_from(
                    values: ::std::vec::Vec<crate::AnyValue>,
                ) -> ::core::result::Result<Self, Self::Error> {
                    <Self as crate::Erase>::try_from_vec(values)
                }
            }

            impl<#(#types),*> crate::Tuple for #name<#(#types),*> {
                const ARITY: usize = #arity;

                type Native = (#(#types,)*);

                fn into_native(self) -> Self::Native {
                    self.into_values()
                }

                fn from_native((#(#fields,)*): Self::Native) -> Self {
                    #name::new(#(#fields),*)
                }
            }

            impl<#(#types),*> crate::Native for (#(#types,)*) {
                type AsTuple = #name<#(#types),*>;
            }

            impl<#(#types: ::core::any::Any + ::core::marker::Send),*> crate::Erase
                for #name<#(#types),*>
            {
                fn into_vec(self) -> ::std::vec::Vec<crate::AnyValue> {
                    ::std::vec::Vec::from(self.into_array())
                }

                fn try_from_vec(
                    values: ::std::vec::Vec<crate::AnyValue>,
                ) -> ::core::result::Result<Self, crate::TupleError> {
                    let mut elements = crate::convert::Elements::exact(values, #arity)?;
                    ::core::result::Result::Ok(#name::new(#(elements.take::<#types>()?),*))
                }
            }

            #[cfg(feature = "serde")]
            impl<#(#types: ::serde_crate::Serialize),*> ::serde_crate::Serialize
                for #name<#(#types),*>
            {
                fn serialize<S: ::serde_crate::Serializer>(
                    &self,
                    serializer: S,
                ) -> ::core::result::Result<S::Ok, S::Error> {
                    use ::serde_crate::ser::SerializeTuple;

                    let mut seq = serializer.serialize_tuple(#arity)?;
                    #(seq.serialize_element(&self.#fields)?;)*
                    seq.end()
                }
            }

            #[cfg(feature = "serde")]
            impl<'de, #(#types: ::serde_crate::Deserialize<'de>),*> ::serde_crate::Deserialize<'de>
                for #name<#(#types),*>
            {
                fn deserialize<D: ::serde_crate::Deserializer<'de>>(
                    deserializer: D,
                ) -> ::core::result::Result<Self, D::Error> {
                    deserializer
                        .deserialize_tuple(#arity, crate::interchange::TupleVisitor::<Self>::new())
                }
            }

            #[cfg(feature = "serde")]
            impl<'de, #(#types: ::serde_crate::Deserialize<'de>),*> crate::interchange::FromSeq<'de>
                for #name<#(#types),*>
            {
                fn from_seq<A: ::serde_crate::de::SeqAccess<'de>>(
                    seq: &mut crate::interchange::SeqReader<A>,
                ) -> ::core::result::Result<Self, A::Error> {
                    ::core::result::Result::Ok(#name::new(#(seq.next::<#types>()?),*))
                }
            }
        }
        .to_tokens(tokens);
    }
}
