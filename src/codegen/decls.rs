//! Declaration emission: structs, oneof unions, proto enums, and the
//! per-message `Default` prototype.

use proc_macro2::{Literal, TokenStream};
use prost_types::{DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, OneofDescriptorProto};
use quote::{format_ident, quote};

use super::classify;
use super::names;
use super::typemap::TypeMap;
use super::ImportSet;
use crate::Error;

/// How a message surfaces one struct field: either a plain descriptor field
/// or the single `Option<Union>` slot a oneof collapses into, placed where
/// the oneof's first member appears.
pub(super) enum Slot<'a> {
    Field(&'a FieldDescriptorProto),
    Oneof {
        decl: &'a OneofDescriptorProto,
        members: Vec<&'a FieldDescriptorProto>,
    },
}

pub(super) fn struct_slots(message: &DescriptorProto) -> Vec<Slot<'_>> {
    let mut slots = Vec::new();
    let mut seen_oneofs = Vec::new();
    for field in &message.field {
        if classify::is_within_oneof(field) {
            let index = field.oneof_index();
            if seen_oneofs.contains(&index) {
                continue;
            }
            seen_oneofs.push(index);
            let members = message
                .field
                .iter()
                .filter(|f| classify::is_within_oneof(f) && f.oneof_index() == index)
                .collect();
            slots.push(Slot::Oneof {
                decl: &message.oneof_decl[index as usize],
                members,
            });
        } else {
            slots.push(Slot::Field(field));
        }
    }
    slots
}

pub fn oneof_union_name(message_name: &str, oneof: &OneofDescriptorProto) -> String {
    format!("{}_{}", message_name, names::to_pascal_case(oneof.name()))
}

pub(super) fn oneof_field_ident(oneof: &OneofDescriptorProto) -> proc_macro2::Ident {
    format_ident!(
        "{}",
        names::sanitize_field_name(&names::to_snake_case(oneof.name()))
    )
}

pub fn variant_ident(field: &FieldDescriptorProto) -> proc_macro2::Ident {
    format_ident!("{}", names::to_pascal_case(field.name()))
}

/// Flattened identifiers keep their `_` joints, which trips the default
/// style lint; plain top-level names stay clean.
fn lint_attr(name: &str) -> TokenStream {
    if name.contains('_') {
        quote! { #[allow(non_camel_case_types)] }
    } else {
        TokenStream::new()
    }
}

/// The payload type of one oneof member. Wrappers keep their struct form
/// here so the union variant holds a real message.
fn member_type(
    type_map: &TypeMap,
    imports: &mut ImportSet,
    field: &FieldDescriptorProto,
) -> Result<TokenStream, Error> {
    use prost_types::field_descriptor_proto::Type;
    match field.r#type() {
        Type::Message => names::type_ref(type_map, imports, field.type_name(), true),
        Type::Enum => {
            type_map.lookup(field.type_name())?;
            Ok(quote! { i32 })
        }
        other => Ok(names::scalar_type_tokens(other)),
    }
}

/// Emit the struct for one message plus one union enum per oneof.
pub fn message_decl(
    type_map: &TypeMap,
    imports: &mut ImportSet,
    name: &str,
    message: &DescriptorProto,
) -> Result<TokenStream, Error> {
    for field in &message.field {
        classify::check_field_shape(type_map, name, field)?;
    }

    let ident = format_ident!("{}", name);
    let attr = lint_attr(name);

    let mut fields = Vec::new();
    let mut unions = Vec::new();
    for slot in struct_slots(message) {
        match slot {
            Slot::Field(field) => {
                let fid = names::field_ident(field);
                let ty = names::type_expr(type_map, imports, field)?;
                fields.push(quote! { pub #fid: #ty });
            }
            Slot::Oneof { decl, members } => {
                let union_name = oneof_union_name(name, decl);
                let union_ident = format_ident!("{}", union_name);
                let union_attr = lint_attr(&union_name);
                let fid = oneof_field_ident(decl);
                fields.push(quote! { pub #fid: Option<#union_ident> });

                let mut variants = Vec::new();
                for member in members {
                    let vid = variant_ident(member);
                    let ty = member_type(type_map, imports, member)?;
                    variants.push(quote! { #vid(#ty) });
                }
                unions.push(quote! {
                    #[derive(Clone, Debug, PartialEq)]
                    #union_attr
                    pub enum #union_ident {
                        #(#variants,)*
                    }
                });
            }
        }
    }

    Ok(quote! {
        #[derive(Clone, Debug, PartialEq)]
        #attr
        pub struct #ident {
            #(#fields,)*
        }
        #(#unions)*
    })
}

/// Emit one proto enum. Enum-typed fields stay `i32` on the struct, so the
/// declaration ships a classifier back from the open domain.
pub fn enum_decl(name: &str, enumeration: &EnumDescriptorProto) -> TokenStream {
    let ident = format_ident!("{}", name);
    let attr = lint_attr(name);

    let mut variants = Vec::new();
    let mut arms = Vec::new();
    for value in &enumeration.value {
        let vid = format_ident!("{}", names::to_pascal_case(value.name()));
        let number = Literal::i32_unsuffixed(value.number());
        variants.push(quote! { #vid = #number });
        arms.push(quote! { #number => Some(#ident::#vid) });
    }

    quote! {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #attr
        #[repr(i32)]
        pub enum #ident {
            #(#variants,)*
        }
        impl #ident {
            pub fn from_i32(value: i32) -> Option<#ident> {
                match value {
                    #(#arms,)*
                    _ => None,
                }
            }
        }
    }
}

/// The base prototype: every non-oneof field at its scalar default, every
/// oneof absent. Decoders clone this via `Default::default()`, so encoder
/// guards and decoder seeds can never disagree.
pub fn base_impl(name: &str, message: &DescriptorProto) -> TokenStream {
    let ident = format_ident!("{}", name);
    let mut inits = Vec::new();
    for slot in struct_slots(message) {
        match slot {
            Slot::Field(field) => {
                let fid = names::field_ident(field);
                let value = names::default_value_tokens(field);
                inits.push(quote! { #fid: #value });
            }
            Slot::Oneof { decl, .. } => {
                let fid = oneof_field_ident(decl);
                inits.push(quote! { #fid: None });
            }
        }
    }
    quote! {
        impl Default for #ident {
            fn default() -> Self {
                #ident {
                    #(#inits,)*
                }
            }
        }
    }
}
