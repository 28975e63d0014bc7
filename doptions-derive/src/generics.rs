use syn::{GenericParam, Generics, spanned::Spanned as _};

/// `Value` impls are never generic; reject any type that has generic
/// parameters of its own.
pub fn reject_generics(generics: &Generics) -> syn::Result<()> {
    match generics.params.first() {
        None => Ok(()),
        Some(GenericParam::Lifetime(param)) => Err(syn::Error::new(
            param.span(),
            "can't derive `Value` on a type with a lifetime; values are always owned",
        )),
        Some(GenericParam::Type(param)) => Err(syn::Error::new(
            param.span(),
            "generic types aren't supported by `derive(Value)`",
        )),
        Some(GenericParam::Const(param)) => Err(syn::Error::new(
            param.span(),
            "const generics aren't supported by `derive(Value)`",
        )),
    }
}
