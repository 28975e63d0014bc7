use itertools::Itertools as _;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Field, Ident, Token, Variant, punctuated::Punctuated, spanned::Spanned};

use crate::{common::value::AnalyzedEnum, generics::reject_generics};

fn derive_value_enum(
    ident: &Ident,
    variants: &Punctuated<Variant, Token![,]>,
) -> syn::Result<TokenStream2> {
    let analyzed = AnalyzedEnum::from_variants(variants)?;

    let unit_checks = analyzed.variants.iter().map(|variant| {
        let ident = variant.ident;
        let spellings = variant.spellings.iter();

        quote! {
            if #(argument.eq_ignore_ascii_case(#spellings))||* {
                return ::core::result::Result::Ok(Self::#ident);
            }
        }
    });

    let names = analyzed.variants.iter().map(|variant| variant.primary());

    let fallback = match analyzed.fallback {
        Some(fallback) => {
            let variant = fallback.variant;
            let ty = fallback.ty;

            let body = match fallback.field {
                Some(field) => quote! { { #field: value } },
                None => quote! { ( value ) },
            };

            quote! {
                match <#ty as ::doptions::parameter::Value>::from_arg(argument) {
                    ::core::result::Result::Ok(value) => ::core::result::Result::Ok(
                        Self::#variant #body
                    ),
                    ::core::result::Result::Err(err) => ::core::result::Result::Err(err),
                }
            }
        }
        None => quote! {
            ::core::result::Result::Err(
                ::doptions::parameter::ValueError::should_be(
                    argument,
                    &[ #(#names,)* ],
                )
            )
        },
    };

    Ok(quote! {
        impl ::doptions::parameter::Value for #ident {
            fn from_arg(
                argument: &str,
            ) -> ::core::result::Result<Self, ::doptions::parameter::ValueError> {
                #(#unit_checks)*
                #fallback
            }
        }
    })
}

fn derive_value_newtype(ident: &Ident, field: &Field) -> TokenStream2 {
    let ty = &field.ty;

    let struct_body = match field.ident {
        Some(ref field) => quote! { { #field: value } },
        None => quote! { ( value ) },
    };

    quote! {
        impl ::doptions::parameter::Value for #ident {
            const TAKES_ARGUMENT: bool = <#ty as ::doptions::parameter::Value>::TAKES_ARGUMENT;

            fn from_arg(
                argument: &str,
            ) -> ::core::result::Result<Self, ::doptions::parameter::ValueError> {
                match <#ty as ::doptions::parameter::Value>::from_arg(argument) {
                    ::core::result::Result::Ok(value) => ::core::result::Result::Ok(
                        Self #struct_body
                    ),
                    ::core::result::Result::Err(err) => ::core::result::Result::Err(err),
                }
            }
        }
    }
}

pub fn derive_value_result(item: TokenStream2) -> syn::Result<TokenStream2> {
    let input: DeriveInput = syn::parse2(item)?;
    reject_generics(&input.generics)?;

    match input.data {
        Data::Struct(ref data) => {
            let field = data.fields.iter().exactly_one().map_err(|_| {
                syn::Error::new(
                    input.span(),
                    "can only derive `Value` on structs with exactly one field",
                )
            })?;

            Ok(derive_value_newtype(&input.ident, field))
        }
        Data::Enum(ref data) => derive_value_enum(&input.ident, &data.variants),
        Data::Union(_) => Err(syn::Error::new(
            input.span(),
            "can't derive `Value` on a union",
        )),
    }
}
