mod common;
mod generics;
mod value;

use proc_macro::TokenStream;

/**
Derive `doptions::parameter::Value` for a type.

- Enums: every unit variant is matched by its kebab-case name, ignoring ASCII
  case. `#[doptions(rename = "name")]` replaces that spelling and
  `#[doptions(alias = "name")]` adds another; aliases may be repeated. One
  variant with a single field may act as a fallback, parsed with that field's
  `Value` implementation when none of the names match.
- Structs with exactly one field delegate to that field's `Value`
  implementation, so a newtype around `bool` is still a flag.
*/
#[proc_macro_derive(Value, attributes(doptions))]
pub fn derive_value(item: TokenStream) -> TokenStream {
    match value::derive_value_result(item.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
