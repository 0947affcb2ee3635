//! Procedural macros used by the `tuplet` crate. Not intended for use outside it: the generated
//! items refer to the rest of `tuplet` through `crate::` paths.

extern crate proc_macro;

use {proc_macro::TokenStream, syn::parse_macro_input, tuplet_compiler::Invocation};

/// Generate the tuple types `T1` up to `TN`, where `N` is the given integer literal.
///
/// ```ignore
/// tuplet_macro::impl_tuples!(9);
/// ```
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let invocation = parse_macro_input!(input as Invocation);
    match invocation.compile() {
        Ok(tokens) => tokens.into(),
        Err(error) => error.to_compile_error().into(),
    }
}
