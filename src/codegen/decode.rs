//! Decoder synthesis.
//!
//! Each decoder seeds from the message prototype, then runs a tag-dispatch
//! loop bounded by `end`. Unknown field numbers are skipped by wire type;
//! duplicate singular fields resolve last-wins by plain assignment.

use proc_macro2::{Literal, TokenStream};
use prost_types::field_descriptor_proto::Type;
use prost_types::{DescriptorProto, FieldDescriptorProto};
use quote::{format_ident, quote};

use super::classify;
use super::decls;
use super::names;
use super::typemap::TypeMap;
use super::ImportSet;
use crate::Error;

fn method_ident(ty: Type) -> proc_macro2::Ident {
    format_ident!("{}", classify::scalar_method(ty).expect("scalar primitive field"))
}

fn field_arm(
    type_map: &TypeMap,
    imports: &mut ImportSet,
    message: &DescriptorProto,
    message_name: &str,
    field: &FieldDescriptorProto,
) -> Result<TokenStream, Error> {
    let number = Literal::u32_unsuffixed(field.number() as u32);
    let fid = names::field_ident(field);
    let ty = field.r#type();

    if classify::is_repeated(field) {
        if classify::is_packable(field) {
            let method = method_ident(ty);
            return Ok(quote! {
                #number => {
                    if tag & 7 == 2 {
                        let end = r.pos() + r.uint32()? as usize;
                        while r.pos() < end {
                            message.#fid.push(r.#method()?);
                        }
                    } else {
                        message.#fid.push(r.#method()?);
                    }
                }
            });
        }
        if classify::is_message(field) {
            let inner = names::type_ref(type_map, imports, field.type_name(), true)?;
            return Ok(quote! {
                #number => {
                    let len = r.uint32()? as usize;
                    message.#fid.push(#inner::decode(r, Some(len))?);
                }
            });
        }
        let method = method_ident(ty);
        return Ok(quote! {
            #number => message.#fid.push(r.#method()?),
        });
    }

    if classify::is_within_oneof(field) {
        let oneof = &message.oneof_decl[field.oneof_index() as usize];
        let union_ident = format_ident!("{}", decls::oneof_union_name(message_name, oneof));
        let ofid = decls::oneof_field_ident(oneof);
        let vid = decls::variant_ident(field);
        if classify::is_message(field) {
            let inner = names::type_ref(type_map, imports, field.type_name(), true)?;
            return Ok(quote! {
                #number => {
                    let len = r.uint32()? as usize;
                    message.#ofid = Some(#union_ident::#vid(#inner::decode(r, Some(len))?));
                }
            });
        }
        let method = method_ident(ty);
        return Ok(quote! {
            #number => message.#ofid = Some(#union_ident::#vid(r.#method()?)),
        });
    }

    if classify::is_wrapper(field) {
        let wrapper = names::type_ref(type_map, imports, field.type_name(), true)?;
        return Ok(quote! {
            #number => {
                let len = r.uint32()? as usize;
                message.#fid = Some(#wrapper::decode(r, Some(len))?.value);
            }
        });
    }

    if classify::is_message(field) {
        let inner = names::type_ref(type_map, imports, field.type_name(), true)?;
        return Ok(quote! {
            #number => {
                let len = r.uint32()? as usize;
                message.#fid = Some(#inner::decode(r, Some(len))?);
            }
        });
    }

    if classify::is_optional(field) {
        let method = method_ident(ty);
        return Ok(quote! {
            #number => message.#fid = Some(r.#method()?),
        });
    }

    let method = method_ident(ty);
    Ok(quote! {
        #number => message.#fid = r.#method()?,
    })
}

/// Emit `decode` for one message.
pub fn decode_impl(
    type_map: &TypeMap,
    imports: &mut ImportSet,
    name: &str,
    message: &DescriptorProto,
) -> Result<TokenStream, Error> {
    let ident = format_ident!("{}", name);
    let mut arms = Vec::new();
    for field in &message.field {
        arms.push(field_arm(type_map, imports, message, name, field)?);
    }
    Ok(quote! {
        impl #ident {
            pub fn decode(r: &mut Reader<'_>, len: Option<usize>) -> Result<Self, DecodeError> {
                let end = match len {
                    Some(n) => r.pos() + n,
                    None => r.len(),
                };
                let mut message = #ident::default();
                while r.pos() < end {
                    let tag = r.uint32()?;
                    match tag >> 3 {
                        #(#arms)*
                        _ => r.skip_type(tag & 7)?,
                    }
                }
                Ok(message)
            }
        }
    })
}
