use syn::{
    parse::{Parse, ParseStream, Result},
    LitInt,
};

use crate::Invocation;

impl Parse for Invocation {
    fn parse(input: ParseStream) -> Result<Self> {
        let literal = input.parse::<LitInt>()?;
        let max = literal.base10_parse::<usize>()?;
        Ok(Invocation {
            max,
            span: literal.span(),
        })
    }
}
