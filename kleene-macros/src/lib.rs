use kleene::{Expression, Order};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, LitStr};

/// Build a [`kleene::Expression`] over characters from a pattern literal at
/// compile time, so a malformed pattern is a build error instead of a
/// runtime one.
///
/// The pattern syntax is that of [`kleene::parse_pattern`].
///
/// ```rust
/// use kleene::ToStructures;
/// use kleene_macros::pattern;
///
/// let expression = pattern!("a(b|c)*");
/// assert!(expression.run(&"abxx".to_structures()).next().is_some());
/// ```
#[proc_macro]
pub fn pattern(input: TokenStream) -> TokenStream {
    let literal = parse_macro_input!(input as LitStr);
    match kleene::parse_pattern(literal.value()) {
        Ok(expression) => emit(&expression).into(),
        Err(err) => syn::Error::new(literal.span(), err)
            .to_compile_error()
            .into(),
    }
}

fn emit(expression: &Expression<char>) -> proc_macro2::TokenStream {
    match expression {
        Expression::Constant(c) => quote!(::kleene::Expression::Constant(#c)),
        Expression::Sequence(children) => {
            let children = children.iter().map(emit);
            quote!(::kleene::Expression::Sequence(::std::vec![#(#children),*]))
        }
        Expression::Alternation(alternatives) => {
            let alternatives = alternatives.iter().map(emit);
            quote!(::kleene::Expression::Alternation(::std::vec![#(#alternatives),*]))
        }
        Expression::Repetition(Order::Greedy) => {
            quote!(::kleene::Expression::Repetition(::kleene::Order::Greedy))
        }
        Expression::Repetition(Order::Lazy) => {
            quote!(::kleene::Expression::Repetition(::kleene::Order::Lazy))
        }
    }
}
