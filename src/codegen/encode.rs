//! Encoder synthesis.
//!
//! Singular scalar primitives are written unconditionally; presence guards
//! exist only for messages, wrappers, proto3-optional fields, and oneofs.
//! Repeated packable fields pack into one length-delimited frame.

use proc_macro2::{Literal, TokenStream};
use prost_types::field_descriptor_proto::Type;
use prost_types::{DescriptorProto, FieldDescriptorProto, OneofDescriptorProto};
use quote::{format_ident, quote};

use super::classify;
use super::decls::{self, Slot};
use super::names;
use super::typemap::TypeMap;
use super::ImportSet;
use crate::wire::{tag, WireType};
use crate::Error;

fn method_ident(ty: Type) -> proc_macro2::Ident {
    format_ident!("{}", classify::scalar_method(ty).expect("scalar primitive field"))
}

fn tag_literal(field: &FieldDescriptorProto, wire_type: WireType) -> Literal {
    Literal::u32_unsuffixed(tag(field.number(), wire_type))
}

/// Whether the Writer method borrows its argument (`&str` / `&[u8]`) rather
/// than taking it by value.
fn takes_ref(ty: Type) -> bool {
    matches!(ty, Type::String | Type::Bytes)
}

/// Write one already-bound scalar reference `v`.
fn write_bound_scalar(field: &FieldDescriptorProto) -> TokenStream {
    let ty = field.r#type();
    let tag = tag_literal(field, classify::wire_type_of(ty));
    let method = method_ident(ty);
    if takes_ref(ty) {
        quote! { w.uint32(#tag).#method(v); }
    } else {
        quote! { w.uint32(#tag).#method(*v); }
    }
}

/// Write one already-bound message reference `v` as a framed sub-message.
fn write_bound_message(field: &FieldDescriptorProto) -> TokenStream {
    let tag = tag_literal(field, WireType::LengthDelimited);
    quote! {
        w.uint32(#tag).fork();
        v.encode(w);
        w.ldelim();
    }
}

fn field_encode(
    type_map: &TypeMap,
    imports: &mut ImportSet,
    field: &FieldDescriptorProto,
) -> Result<TokenStream, Error> {
    let fid = names::field_ident(field);
    let ty = field.r#type();

    if classify::is_repeated(field) {
        if classify::is_packable(field) {
            let tag = tag_literal(field, WireType::LengthDelimited);
            let method = method_ident(ty);
            return Ok(quote! {
                w.uint32(#tag).fork();
                for v in &self.#fid {
                    w.#method(*v);
                }
                w.ldelim();
            });
        }
        let body = if classify::is_message(field) {
            write_bound_message(field)
        } else {
            write_bound_scalar(field)
        };
        return Ok(quote! {
            for v in &self.#fid {
                #body
            }
        });
    }

    if classify::is_wrapper(field) {
        let wrapper = names::type_ref(type_map, imports, field.type_name(), true)?;
        let scalar = classify::wrapper_scalar(field.type_name()).expect("wrapper field");
        let tag = tag_literal(field, WireType::LengthDelimited);
        let value = if takes_ref(scalar) {
            quote! { v.clone() }
        } else {
            quote! { *v }
        };
        return Ok(quote! {
            if let Some(v) = &self.#fid {
                w.uint32(#tag).fork();
                #wrapper { value: #value }.encode(w);
                w.ldelim();
            }
        });
    }

    if classify::is_message(field) {
        let body = write_bound_message(field);
        return Ok(quote! {
            if let Some(v) = &self.#fid {
                #body
            }
        });
    }

    if classify::is_optional(field) {
        let body = write_bound_scalar(field);
        return Ok(quote! {
            if let Some(v) = &self.#fid {
                #body
            }
        });
    }

    // Singular scalar primitive: written unconditionally.
    let tag = tag_literal(field, classify::wire_type_of(ty));
    let method = method_ident(ty);
    if takes_ref(ty) {
        Ok(quote! { w.uint32(#tag).#method(&self.#fid); })
    } else {
        Ok(quote! { w.uint32(#tag).#method(self.#fid); })
    }
}

fn oneof_encode(
    message_name: &str,
    oneof: &OneofDescriptorProto,
    members: &[&FieldDescriptorProto],
) -> TokenStream {
    let union_ident = format_ident!("{}", decls::oneof_union_name(message_name, oneof));
    let fid = decls::oneof_field_ident(oneof);
    let mut arms = Vec::new();
    for member in members {
        let vid = decls::variant_ident(member);
        let body = if classify::is_message(member) {
            write_bound_message(member)
        } else {
            write_bound_scalar(member)
        };
        arms.push(quote! {
            Some(#union_ident::#vid(v)) => {
                #body
            }
        });
    }
    quote! {
        match &self.#fid {
            #(#arms)*
            None => {}
        }
    }
}

/// Emit `encode` / `encode_to_vec` for one message.
pub fn encode_impl(
    type_map: &TypeMap,
    imports: &mut ImportSet,
    name: &str,
    message: &DescriptorProto,
) -> Result<TokenStream, Error> {
    let ident = format_ident!("{}", name);
    let mut stmts = Vec::new();
    for slot in decls::struct_slots(message) {
        match slot {
            Slot::Field(field) => stmts.push(field_encode(type_map, imports, field)?),
            Slot::Oneof { decl, members } => stmts.push(oneof_encode(name, decl, &members)),
        }
    }
    let writer_param = if message.field.is_empty() {
        format_ident!("_w")
    } else {
        format_ident!("w")
    };
    Ok(quote! {
        impl #ident {
            pub fn encode(&self, #writer_param: &mut Writer) {
                #(#stmts)*
            }
            pub fn encode_to_vec(&self) -> Vec<u8> {
                let mut w = Writer::new();
                self.encode(&mut w);
                w.finish()
            }
        }
    })
}
