//! The code generator behind `tuplet_macro::impl_tuples!`.
//!
//! An invocation names the largest arity to generate; the compiler turns it into one [`Arity`]
//! per tuple type and renders each of them as Rust items. Rendering lives here rather than in the
//! proc-macro crate so that it can be tested as ordinary code.

use {
    proc_macro2::{Span, TokenStream},
    quote::{format_ident, ToTokens},
    syn::Ident,
    thiserror::Error,
};

mod parse;
mod target;

/// The largest tuple arity which can be generated.
pub const MAX_ARITY: usize = 9;

/// A problem with the arity requested from the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("tuple arity must be at least 1")]
    ZeroArity,
    #[error("tuple arity {0} exceeds the maximum supported arity {max}", max = MAX_ARITY)]
    TooLarge(usize),
}

/// A parsed macro invocation: generate every tuple type from arity 1 up to `max`.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub max: usize,
    pub span: Span,
}

impl Invocation {
    /// The arities to generate, in increasing order.
    pub fn arities(&self) -> Result<Vec<Arity>, CompileError> {
        let _ = Arity::new(self.max)?;
        (1..=self.max).map(Arity::new).collect()
    }

    /// Render every requested tuple type, or an error spanned on the invocation's literal.
    pub fn compile(&self) -> Result<TokenStream, syn::Error> {
        let arities = self
            .arities()
            .map_err(|error| syn::Error::new(self.span, error))?;

        let mut tokens = TokenStream::new();
        for arity in &arities {
            arity.to_tokens(&mut tokens);
        }
        Ok(tokens)
    }
}

/// The number of fields of one generated tuple type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arity(usize);

impl Arity {
    pub fn new(arity: usize) -> Result<Self, CompileError> {
        match arity {
            0 => Err(CompileError::ZeroArity),
            n if n > MAX_ARITY => Err(CompileError::TooLarge(n)),
            n => Ok(Arity(n)),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// The name of the tuple type: `T1`, `T2`, ...
    pub fn name(self) -> Ident {
        format_ident!("T{}", self.0)
    }

    /// The type parameters of the tuple type: `Ty1`, `Ty2`, ...
    pub fn types(self) -> Vec<Ident> {
        (1..=self.0).map(|i| format_ident!("Ty{}", i)).collect()
    }

    /// The fields of the tuple type: `v1`, `v2`, ...
    pub fn fields(self) -> Vec<Ident> {
        (1..=self.0).map(|i| format_ident!("v{}", i)).collect()
    }
}

#[cfg(feature = "quickcheck")]
impl quickcheck::Arbitrary for Arity {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Arity(usize::arbitrary(g) % MAX_ARITY + 1)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new((1..self.0).rev().map(Arity))
    }
}
