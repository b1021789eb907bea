use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index, Member, parse_macro_input, spanned::Spanned};

/// Field attribute: #[weight]
///
/// Marks the one field of a struct that carries its sampling weight. The
/// field type must convert losslessly into `f64` (`f64: From<FieldType>`).
#[proc_macro_derive(Weighted, attributes(weight))]
pub fn derive_weighted(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let ident = &input.ident;

    let Data::Struct(data_struct) = &input.data else {
        return syn::Error::new(ident.span(), "Weighted can only be derived for structs")
            .to_compile_error()
            .into();
    };

    let members: Vec<(Member, &syn::Field)> = match &data_struct.fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter_map(|f| f.ident.clone().map(|id| (Member::Named(id), f)))
            .collect(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .map(|(i, f)| (Member::Unnamed(Index::from(i)), f))
            .collect(),
        Fields::Unit => {
            return syn::Error::new(ident.span(), "Weighted needs a field marked #[weight]")
                .to_compile_error()
                .into();
        }
    };

    // Find the single #[weight] field
    let mut weight_member: Option<Member> = None;
    for (member, field) in members {
        for attr in &field.attrs {
            if !attr.path().is_ident("weight") {
                continue;
            }
            if attr.meta.require_path_only().is_err() {
                return syn::Error::new(attr.span(), "use a bare #[weight]")
                    .to_compile_error()
                    .into();
            }
            if weight_member.is_some() {
                return syn::Error::new(attr.span(), "only one field may be marked #[weight]")
                    .to_compile_error()
                    .into();
            }
            weight_member = Some(member.clone());
        }
    }
    let Some(member) = weight_member else {
        return syn::Error::new(ident.span(), "missing #[weight] on a field")
            .to_compile_error()
            .into();
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics reservoirs::Weighted for #ident #ty_generics #where_clause {
            #[inline]
            fn weight(&self) -> f64 {
                ::core::convert::From::from(self.#member)
            }
        }
    };

    expanded.into()
}
