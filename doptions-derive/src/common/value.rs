use std::collections::HashMap;

use darling::{FromAttributes, util::SpannedValue};
use heck::ToKebabCase as _;
use itertools::Itertools as _;
use proc_macro2::Span;
use syn::{Fields, FieldsNamed, FieldsUnnamed, Ident, Type, Variant, spanned::Spanned as _};

#[derive(FromAttributes, Default)]
#[darling(attributes(doptions))]
struct VariantAttr {
    rename: Option<SpannedValue<String>>,

    #[darling(multiple)]
    alias: Vec<SpannedValue<String>>,
}

/// A unit variant and every spelling that selects it. The first spelling is
/// the primary one, reported in errors.
pub struct UnitVariant<'a> {
    pub ident: &'a Ident,
    pub spellings: Vec<String>,
}

impl UnitVariant<'_> {
    pub fn primary(&self) -> &str {
        &self.spellings[0]
    }
}

pub struct Fallback<'a> {
    pub variant: &'a Ident,
    pub field: Option<&'a Ident>,
    pub ty: &'a Type,
}

pub struct AnalyzedEnum<'a> {
    pub variants: Vec<UnitVariant<'a>>,
    pub fallback: Option<Fallback<'a>>,
}

fn checked_spelling(spelling: SpannedValue<String>) -> syn::Result<(String, Span)> {
    let span = spelling.span();
    let spelling: String = (*spelling).clone();

    if spelling.is_empty() {
        Err(syn::Error::new(span, "value names can't be empty"))
    } else if spelling.contains(char::is_whitespace) {
        Err(syn::Error::new(
            span,
            "value names shouldn't include whitespace",
        ))
    } else {
        Ok((spelling, span))
    }
}

impl<'a> AnalyzedEnum<'a> {
    pub fn from_variants(variants: impl IntoIterator<Item = &'a Variant>) -> syn::Result<Self> {
        let mut fallback: Option<Fallback<'a>> = None;
        let mut collected = Vec::new();

        // Lowercased spelling -> where it was first used
        let mut seen: HashMap<String, Span> = HashMap::new();

        for variant in variants {
            let attr = VariantAttr::from_attributes(&variant.attrs)?;

            match variant.fields {
                Fields::Unit => {
                    let primary = attr.rename.unwrap_or_else(|| {
                        SpannedValue::new(
                            variant.ident.to_string().to_kebab_case(),
                            variant.ident.span(),
                        )
                    });

                    let spellings: Vec<(String, Span)> = [primary]
                        .into_iter()
                        .chain(attr.alias)
                        .map(checked_spelling)
                        .try_collect()?;

                    for (spelling, span) in &spellings {
                        if let Some(&previous) = seen.get(&spelling.to_ascii_lowercase()) {
                            let mut err = syn::Error::new(
                                *span,
                                format!("the value name {spelling:?} is used more than once"),
                            );
                            err.combine(syn::Error::new(previous, "previously used here"));
                            return Err(err);
                        }

                        seen.insert(spelling.to_ascii_lowercase(), *span);
                    }

                    collected.push(UnitVariant {
                        ident: &variant.ident,
                        spellings: spellings.into_iter().map(|(spelling, _)| spelling).collect(),
                    });
                }
                Fields::Unnamed(FieldsUnnamed {
                    unnamed: ref fields,
                    ..
                })
                | Fields::Named(FieldsNamed {
                    named: ref fields, ..
                }) => {
                    if attr.rename.is_some() || !attr.alias.is_empty() {
                        return Err(syn::Error::new(
                            variant.span(),
                            "the fallback variant can't be renamed or aliased",
                        ));
                    }

                    let field = fields.iter().exactly_one().map_err(|_| {
                        syn::Error::new(
                            variant.span(),
                            "a fallback variant must have exactly one field",
                        )
                    })?;

                    if let Some(ref previous) = fallback {
                        let mut err = syn::Error::new(
                            variant.span(),
                            "can't have more than one fallback variant",
                        );
                        err.combine(syn::Error::new(
                            previous.variant.span(),
                            "previous fallback here",
                        ));
                        return Err(err);
                    }

                    fallback = Some(Fallback {
                        variant: &variant.ident,
                        field: field.ident.as_ref(),
                        ty: &field.ty,
                    });
                }
            }
        }

        Ok(AnalyzedEnum {
            variants: collected,
            fallback,
        })
    }
}
