use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{parse2, spanned::Spanned, Data, DeriveInput, Field, Fields, Ident, LitStr, Result};

use crate::syn_utils::invalidating_value_type;

pub fn invalidating_setters(input: TokenStream) -> Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => bail!(
                input.ident.span(),
                "`InvalidatingSetters` requires a struct with named fields."
            ),
        },
        _ => bail!(
            input.ident.span(),
            "`InvalidatingSetters` can only be derived for structs."
        ),
    };

    let mut setters = Vec::new();
    for field in fields {
        let args = FieldArgs::from_field(field)?;
        if args.skip {
            continue;
        }
        let Some(value_ty) = invalidating_value_type(&field.ty) else {
            if args.setter.is_some() {
                bail!(
                    field.ty.span(),
                    "`#[invalidating(setter = ..)]` requires a field of type `Invalidating<T, V>`."
                );
            }
            continue;
        };
        let Some(field_ident) = &field.ident else {
            continue;
        };
        let vis = &field.vis;
        let setter = args
            .setter
            .unwrap_or_else(|| format_ident!("set_{}", field_ident));
        let doc = format!(
            "Sets `{field_ident}` and invalidates `self` if the value changed. Returns `true` if it changed."
        );
        setters.push(quote! {
            #[doc = #doc]
            #vis fn #setter(&mut self, value: #value_ty) -> bool {
                let dispatch = ::invalidating::Invalidating::set(&mut self.#field_ident, value);
                ::invalidating::Dispatch::invalidate(dispatch, self)
            }
        });
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#setters)*
        }
    })
}

#[derive(Default)]
struct FieldArgs {
    skip: bool,
    setter: Option<Ident>,
}

impl FieldArgs {
    fn from_field(field: &Field) -> Result<Self> {
        let mut args = Self::default();
        for attr in &field.attrs {
            if !attr.path().is_ident("invalidating") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    args.skip = true;
                    Ok(())
                } else if meta.path.is_ident("setter") {
                    let name: LitStr = meta.value()?.parse()?;
                    args.setter = Some(name.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("expected `skip` or `setter = \"..\"`."))
                }
            })?;
        }
        Ok(args)
    }
}
