use {
    quickcheck::{Gen, QuickCheck, TestResult},
    quote::ToTokens,
    syn::{File, Item},
    tuplet_compiler::{Arity, Invocation},
};

fn generated_struct_property(arity: Arity) -> TestResult {
    let tokens = arity.to_token_stream();
    match syn::parse2::<File>(tokens.clone()) {
        Ok(file) => {
            let structs = file
                .items
                .iter()
                .filter_map(|item| match item {
                    Item::Struct(item) => Some(item),
                    _ => None,
                })
                .collect::<Vec<_>>();
            TestResult::from_bool(
                structs.len() == 1
                    && structs[0].ident == arity.name()
                    && structs[0].fields.len() == arity.get()
                    && structs[0].generics.params.len() == arity.get(),
            )
        }
        Err(error) => TestResult::error(format!(
            "failed to parse generated code {}, error: {}",
            tokens, error
        )),
    }
}

fn invocation_property(arity: Arity) -> TestResult {
    let source = arity.get().to_string();
    let invocation = match syn::parse_str::<Invocation>(&source) {
        Ok(invocation) => invocation,
        Err(error) => return TestResult::error(format!("failed to parse {}: {}", source, error)),
    };
    match invocation.compile() {
        Ok(tokens) => match syn::parse2::<File>(tokens) {
            Ok(file) => TestResult::from_bool(
                file.items
                    .iter()
                    .filter(|item| matches!(item, Item::Struct(_)))
                    .count()
                    == arity.get(),
            ),
            Err(error) => TestResult::error(error.to_string()),
        },
        Err(error) => TestResult::error(error.to_string()),
    }
}

#[test]
fn generated_struct() {
    QuickCheck::new()
        .gen(Gen::new(64))
        .quickcheck(generated_struct_property as fn(_) -> TestResult)
}

#[test]
fn invocation_generates_every_arity() {
    QuickCheck::new()
        .gen(Gen::new(64))
        .tests(20)
        .quickcheck(invocation_property as fn(_) -> TestResult)
}
