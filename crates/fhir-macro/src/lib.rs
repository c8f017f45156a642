//! `#[derive(FhirSerde)]` for tessera-fhir model types.
//!
//! # Records
//!
//! On a struct with named fields the derive generates the FHIR JSON codec:
//! `FhirComplex`, `FhirField`, `FhirRepeatable`, `serde::Serialize` and
//! `serde::Deserialize`. Each field delegates to its type's `FhirField`
//! implementation, so primitives get their `_name` metadata sibling and
//! choice enums get their suffixed keys without the struct knowing which is
//! which.
//!
//! - The wire name is the lowerCamelCase field name, with `r#` and a
//!   trailing `_` removed (`birth_date` → `birthDate`, `class_` → `class`).
//!   `#[fhir_serde(rename = "...")]` overrides it.
//! - `Option<T>` fields are optional. Any other field is required.
//! - `#[fhir_serde(resource)]` marks a resource: `resourceType` is written
//!   first and checked on decode. `#[fhir_serde(resource = "Name")]` sets a
//!   type name different from the struct name.
//!
//! # Choice elements
//!
//! On an enum whose variants each wrap one type, the derive generates the
//! choice codec: a variant `Quantity(Quantity)` of a field named `value` is
//! written as `valueQuantity`. `#[fhir_serde(rename = "...")]` on a variant
//! overrides the suffix.
//!
//! ```ignore
//! #[derive(Debug, Clone, PartialEq, FhirSerde)]
//! pub enum ObservationValue {
//!     Quantity(Quantity),
//!     CodeableConcept(CodeableConcept),
//!     String(String),
//!     Boolean(Boolean),
//! }
//!
//! #[derive(Debug, Clone, PartialEq, FhirSerde)]
//! #[fhir_serde(resource)]
//! pub struct Observation {
//!     pub id: Option<std::string::String>,
//!     pub status: Code,
//!     pub value: Option<ObservationValue>,
//! }
//! ```

use heck::ToLowerCamelCase;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    Attribute, Data, DataEnum, DataStruct, DeriveInput, Fields, GenericArgument, Ident, LitStr,
    PathArguments, Type, parse_macro_input,
};

#[proc_macro_derive(FhirSerde, attributes(fhir_serde))]
pub fn derive_fhir_serde(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "FhirSerde cannot be derived for generic types",
        ));
    }
    match &input.data {
        Data::Struct(data) => expand_record(input, data),
        Data::Enum(data) => expand_choice(input, data),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "FhirSerde cannot be derived for unions",
        )),
    }
}

fn support() -> TokenStream2 {
    quote!(::tessera_serde_support)
}

/// Reads `#[fhir_serde(resource)]` / `#[fhir_serde(resource = "...")]`.
fn resource_name(input: &DeriveInput) -> syn::Result<Option<String>> {
    let mut resource = None;
    for attr in fhir_serde_attrs(&input.attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("resource") {
                let name = if meta.input.peek(syn::Token![=]) {
                    meta.value()?.parse::<LitStr>()?.value()
                } else {
                    input.ident.to_string()
                };
                resource = Some(name);
                Ok(())
            } else {
                Err(meta.error("unsupported fhir_serde attribute on a type"))
            }
        })?;
    }
    Ok(resource)
}

/// Reads `#[fhir_serde(rename = "...")]` on a field or variant.
fn rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut renamed = None;
    for attr in fhir_serde_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                renamed = Some(meta.value()?.parse::<LitStr>()?.value());
                Ok(())
            } else {
                Err(meta.error("unsupported fhir_serde attribute on a field"))
            }
        })?;
    }
    Ok(renamed)
}

fn fhir_serde_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("fhir_serde"))
}

fn wire_name(ident: &Ident) -> String {
    ident
        .unraw()
        .to_string()
        .trim_end_matches('_')
        .to_lower_camel_case()
}

/// `T` when `ty` is spelled `Option<T>`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

fn expand_record(input: &DeriveInput, data: &DataStruct) -> syn::Result<TokenStream2> {
    let support = support();
    let ident = &input.ident;
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            ident,
            "FhirSerde records need named fields",
        ));
    };

    let mut encoders = Vec::with_capacity(fields.named.len());
    let mut decoders = Vec::with_capacity(fields.named.len());
    for field in &fields.named {
        let Some(field_ident) = &field.ident else {
            continue;
        };
        let name = rename(&field.attrs)?.unwrap_or_else(|| wire_name(field_ident));
        match option_inner(&field.ty) {
            Some(inner) => {
                encoders.push(quote! {
                    if let ::core::option::Option::Some(__value) = &self.#field_ident {
                        #support::FhirField::write_field(__value, #name, __map)?;
                    }
                });
                decoders.push(quote! {
                    #field_ident: <#inner as #support::FhirField>::read_field(#name, __source)?,
                });
            }
            None => {
                let ty = &field.ty;
                encoders.push(quote! {
                    #support::FhirField::write_field(&self.#field_ident, #name, __map)?;
                });
                decoders.push(quote! {
                    #field_ident: #support::required::<#ty>(#name, __source)?,
                });
            }
        }
    }

    let resource = resource_name(input)?;
    let resource_check = resource.as_ref().map(|name| {
        quote! { #support::check_resource_type(#name, __source)?; }
    });
    let resource_type = match &resource {
        Some(name) => quote!(::core::option::Option::Some(#name)),
        None => quote!(::core::option::Option::None),
    };
    let resource_impl = resource.as_ref().map(|name| {
        quote! {
            impl #support::FhirResource for #ident {
                const RESOURCE_TYPE: &'static str = #name;
            }
        }
    });

    Ok(quote! {
        impl #support::FhirComplex for #ident {
            fn encode_fields<__M: #support::serde::ser::SerializeMap>(
                &self,
                __map: &mut __M,
            ) -> ::core::result::Result<(), __M::Error> {
                #(#encoders)*
                ::core::result::Result::Ok(())
            }

            fn decode_fields(
                __source: &mut #support::FieldSource,
            ) -> #support::DecodeResult<Self> {
                #resource_check
                ::core::result::Result::Ok(#ident {
                    #(#decoders)*
                })
            }
        }

        impl #support::FhirField for #ident {
            fn write_field<__M: #support::serde::ser::SerializeMap>(
                &self,
                __name: &str,
                __map: &mut __M,
            ) -> ::core::result::Result<(), __M::Error> {
                #support::write_complex(self, __name, __map)
            }

            fn read_field(
                __name: &str,
                __source: &mut #support::FieldSource,
            ) -> #support::DecodeResult<::core::option::Option<Self>> {
                #support::read_complex(__name, __source)
            }
        }

        impl #support::FhirRepeatable for #ident {
            fn write_list<__M: #support::serde::ser::SerializeMap>(
                __items: &[Self],
                __name: &str,
                __map: &mut __M,
            ) -> ::core::result::Result<(), __M::Error> {
                #support::write_complex_list(__items, __name, __map)
            }

            fn read_list(
                __name: &str,
                __source: &mut #support::FieldSource,
            ) -> #support::DecodeResult<::core::option::Option<::std::vec::Vec<Self>>> {
                #support::read_complex_list(__name, __source)
            }
        }

        impl #support::serde::Serialize for #ident {
            fn serialize<__S: #support::serde::Serializer>(
                &self,
                __serializer: __S,
            ) -> ::core::result::Result<__S::Ok, __S::Error> {
                #support::serialize_record(self, #resource_type, __serializer)
            }
        }

        impl<'de> #support::serde::Deserialize<'de> for #ident {
            fn deserialize<__D: #support::serde::Deserializer<'de>>(
                __deserializer: __D,
            ) -> ::core::result::Result<Self, __D::Error> {
                #support::deserialize_record(__deserializer)
            }
        }

        #resource_impl
    })
}

fn expand_choice(input: &DeriveInput, data: &DataEnum) -> syn::Result<TokenStream2> {
    let support = support();
    let ident = &input.ident;
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            ident,
            "a choice element needs at least one alternative",
        ));
    }

    let mut writers = Vec::with_capacity(data.variants.len());
    let mut readers = Vec::with_capacity(data.variants.len());
    let mut type_names = Vec::with_capacity(data.variants.len());
    let mut suffixes = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        let variant_ident = &variant.ident;
        let ty = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "choice alternatives must wrap exactly one type, e.g. `Quantity(Quantity)`",
                ));
            }
        };
        let suffix = rename(&variant.attrs)?.unwrap_or_else(|| variant_ident.to_string());

        writers.push(quote! {
            #ident::#variant_ident(__value) => #support::FhirField::write_field(
                __value,
                &#support::choice_key(__name, #suffix),
                __map,
            ),
        });
        readers.push(quote! {
            __decoder.alternative::<#ty>(__source, #suffix, #ident::#variant_ident)?;
        });
        type_names.push(quote! {
            #ident::#variant_ident(_) => #suffix,
        });
        suffixes.push(suffix);
    }

    Ok(quote! {
        impl #support::FhirField for #ident {
            fn write_field<__M: #support::serde::ser::SerializeMap>(
                &self,
                __name: &str,
                __map: &mut __M,
            ) -> ::core::result::Result<(), __M::Error> {
                match self {
                    #(#writers)*
                }
            }

            fn read_field(
                __name: &str,
                __source: &mut #support::FieldSource,
            ) -> #support::DecodeResult<::core::option::Option<Self>> {
                let mut __decoder = #support::ChoiceDecoder::new(__name);
                #(#readers)*
                __decoder.finish()
            }

            fn describe(__name: &str) -> ::std::string::String {
                #support::describe_choice(__name)
            }
        }

        impl #ident {
            /// Type-name suffixes of every alternative, in declaration order.
            pub const SUFFIXES: &'static [&'static str] = &[#(#suffixes),*];

            /// Type-name suffix of the active alternative.
            pub fn type_name(&self) -> &'static str {
                match self {
                    #(#type_names)*
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn wire_names_are_lower_camel_case() {
        let cases: [(Ident, &str); 5] = [
            (parse_quote!(birth_date), "birthDate"),
            (parse_quote!(class_), "class"),
            (parse_quote!(r#type), "type"),
            (parse_quote!(modifier_extension), "modifierExtension"),
            (parse_quote!(div), "div"),
        ];
        for (ident, expected) in cases {
            assert_eq!(wire_name(&ident), expected);
        }
    }

    #[test]
    fn option_fields_are_detected() {
        let ty: Type = parse_quote!(Option<Vec<Coding>>);
        let inner = option_inner(&ty).expect("Option<T> should be unwrapped");
        let expected: Type = parse_quote!(Vec<Coding>);
        assert_eq!(quote!(#inner).to_string(), quote!(#expected).to_string());

        let ty: Type = parse_quote!(Vec<Coding>);
        assert!(option_inner(&ty).is_none());
    }

    #[test]
    fn resource_attribute_defaults_to_the_type_name() {
        let input: DeriveInput = parse_quote! {
            #[fhir_serde(resource)]
            struct Patient { id: Option<String> }
        };
        assert_eq!(resource_name(&input).unwrap().as_deref(), Some("Patient"));

        let input: DeriveInput = parse_quote! {
            #[fhir_serde(resource = "Basic")]
            struct BasicResource { id: Option<String> }
        };
        assert_eq!(resource_name(&input).unwrap().as_deref(), Some("Basic"));
    }

    #[test]
    fn tuple_records_are_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Pair(String, String);
        };
        assert!(expand(&input).is_err());
    }

    #[test]
    fn choice_variants_must_wrap_one_type() {
        let input: DeriveInput = parse_quote! {
            enum Bad { Two(String, String) }
        };
        assert!(expand(&input).is_err());
    }
}
