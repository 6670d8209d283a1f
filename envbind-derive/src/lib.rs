mod field;
mod helpers;

use darling::{
    FromDeriveInput,
    ast::{Data, Fields},
};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{DeriveInput, Generics, Ident, ext::IdentExt, parse_macro_input};

use crate::{
    field::RecordFieldReceiver,
    helpers::{is_scalar, type_name},
};

#[proc_macro_derive(Record, attributes(env))]
pub fn derive_record(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match impl_derive(input) {
        Ok(output) => output.into(),
        Err(err) => err.write_errors().into(),
    }
}

fn impl_derive(input: DeriveInput) -> darling::Result<TokenStream> {
    let named = matches!(
        &input.data,
        syn::Data::Struct(syn::DataStruct {
            fields: syn::Fields::Named(_),
            ..
        })
    );
    if !named {
        let err = darling::Error::custom("Record derive only supports structs with named fields")
            .with_span(&input.ident);
        return Err(err);
    }

    let record = RecordReceiver::from_derive_input(&input)?;

    record.validate()?;

    Ok(record.to_token_stream())
}

#[derive(FromDeriveInput)]
#[darling(supports(struct_named))]
struct RecordReceiver {
    pub ident: Ident,
    pub generics: Generics,
    pub data: Data<(), RecordFieldReceiver>,
}

impl ToTokens for RecordReceiver {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let private_path = quote!(__envbind::__private);
        let struct_name = &self.ident;
        let name = struct_name.unraw().to_string();

        let descriptors = self
            .get_fields()
            .iter()
            .map(|field| field_descriptor(field, &private_path));

        let derive = quote! {
            const _: () = {
                extern crate envbind as __envbind;

                impl #struct_name {
                    /// Binds every `#[env]` field from the process environment.
                    pub fn bind_from_env(&mut self) -> ::core::result::Result<(), #private_path::FieldErrors> {
                        #private_path::bind(self, &#private_path::ProcessEnv)
                    }

                    /// Lists the environment variables read by this struct.
                    pub fn requirements() -> ::std::string::String {
                        #private_path::requirements::<Self>()
                    }
                }

                impl #private_path::Record for #struct_name {
                    const NAME: &'static str = #name;
                    const FIELDS: &'static [#private_path::FieldDescriptor<Self>] = &[
                        #(#descriptors,)*
                    ];
                }
            };
        };

        tokens.extend(derive);
    }
}

impl RecordReceiver {
    fn validate(&self) -> darling::Result<()> {
        let mut accumulator = darling::Error::accumulator();

        if !self.generics.params.is_empty() {
            accumulator.push(
                darling::Error::custom("Record derive does not support generic structs")
                    .with_span(&self.generics.params),
            );
        }

        for field in self.get_fields().iter() {
            accumulator.handle(field.validate());
        }

        accumulator.finish()
    }

    fn get_fields(&self) -> &Fields<RecordFieldReceiver> {
        let Data::Struct(fields) = &self.data else {
            panic!("we've asserted that it's a struct");
        };

        fields
    }
}

fn field_descriptor(field: &RecordFieldReceiver, private_path: &TokenStream) -> TokenStream {
    let ident = field.ident();
    let ty = &field.ty;
    let name = ident.unraw().to_string();
    let env_key = option_str(field.env_key());
    let required = option_str(field.required());
    let writable = field.writable();
    let scalar = is_scalar(ty);

    let kind = if scalar {
        quote!(<#ty as #private_path::Scalar>::KIND)
    } else {
        let type_name = type_name(ty);
        quote!(#private_path::FieldKind::Unsupported(#type_name))
    };

    let setter = if scalar && writable {
        quote! {
            ::core::option::Option::Some(|record: &mut Self, value: #private_path::Value| {
                match <#ty as #private_path::Scalar>::from_value(value) {
                    ::core::option::Option::Some(value) => {
                        record.#ident = value;
                        true
                    }
                    ::core::option::Option::None => false,
                }
            })
        }
    } else {
        quote!(::core::option::Option::None)
    };

    quote! {
        #private_path::FieldDescriptor {
            name: #name,
            env_key: #env_key,
            required: #required,
            kind: #kind,
            writable: #writable,
            setter: #setter,
        }
    }
}

fn option_str(value: Option<String>) -> TokenStream {
    match value {
        Some(value) => quote!(::core::option::Option::Some(#value)),
        None => quote!(::core::option::Option::None),
    }
}
