//! Identifier conversion and type-expression rendering.

use proc_macro2::TokenStream;
use prost_types::field_descriptor_proto::Type;
use prost_types::FieldDescriptorProto;
use quote::{format_ident, quote};

use super::classify;
use super::typemap::TypeMap;
use super::ImportSet;
use crate::Error;

const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use", "where",
    "while", "async", "await", "dyn",
];

/// Escape keyword collisions with the raw-identifier prefix.
pub fn sanitize_field_name(name: &str) -> String {
    if RUST_KEYWORDS.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

/// Module names cannot use the r# escape, so keywords get a trailing
/// underscore instead.
pub fn sanitize_module_name(name: &str) -> String {
    if RUST_KEYWORDS.contains(&name) {
        format!("{}_", name)
    } else {
        name.to_string()
    }
}

/// `search_request` / `SEARCH_REQUEST` / `searchRequest` -> `SearchRequest`.
pub fn to_pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;
    let mut prev_lower = false;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = true;
            prev_lower = false;
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else if ch.is_ascii_uppercase() && !prev_lower {
            // Runs of capitals (SCREAMING enum values) fold to one capital.
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
        prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
    }
    out
}

/// `pageNumber` -> `page_number`; already-snake names pass through.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Join a flattening prefix with the PascalCased simple name. Nested types
/// accumulate `Outer_` prefixes so `Foo.Bar` emits as `Foo_Bar`.
pub fn flat_name(prefix: &str, simple: &str) -> String {
    format!("{}{}", prefix, to_pascal_case(simple))
}

/// The struct-field identifier for a descriptor field.
pub fn field_ident(field: &FieldDescriptorProto) -> proc_macro2::Ident {
    format_ident!("{}", sanitize_field_name(&to_snake_case(field.name())))
}

/// The native Rust type a scalar primitive maps to. Message fields have no
/// scalar mapping and must go through [`type_expr`].
pub fn scalar_type_tokens(ty: Type) -> TokenStream {
    match ty {
        Type::Int32 | Type::Sint32 | Type::Sfixed32 => quote! { i32 },
        Type::Int64 | Type::Sint64 | Type::Sfixed64 => quote! { i64 },
        Type::Uint32 | Type::Fixed32 => quote! { u32 },
        Type::Uint64 | Type::Fixed64 => quote! { u64 },
        Type::Float => quote! { f32 },
        Type::Double => quote! { f64 },
        Type::Bool => quote! { bool },
        Type::String => quote! { String },
        Type::Bytes => quote! { Vec<u8> },
        Type::Enum => quote! { i32 },
        Type::Message | Type::Group => quote! { () },
    }
}

/// The default expression for one field of the base prototype.
pub fn default_value_tokens(field: &FieldDescriptorProto) -> TokenStream {
    if classify::is_repeated(field) {
        return quote! { Vec::new() };
    }
    if classify::is_optional(field)
        || classify::is_wrapper(field)
        || classify::is_message(field)
    {
        return quote! { None };
    }
    match field.r#type() {
        Type::String => quote! { String::new() },
        Type::Bytes => quote! { Vec::new() },
        Type::Bool => quote! { false },
        Type::Float => quote! { 0.0f32 },
        Type::Double => quote! { 0.0f64 },
        Type::Int32 | Type::Sint32 | Type::Sfixed32 | Type::Enum => quote! { 0i32 },
        Type::Int64 | Type::Sint64 | Type::Sfixed64 => quote! { 0i64 },
        Type::Uint32 | Type::Fixed32 => quote! { 0u32 },
        Type::Uint64 | Type::Fixed64 => quote! { 0u64 },
        Type::Message | Type::Group => quote! { None },
    }
}

/// Resolve a fully-qualified proto type reference into a Rust type
/// expression, importing it when it lives in another generated file.
///
/// With `keep_wrapper = false`, well-known wrapper types collapse to their
/// native optional scalar instead of the wrapper struct.
pub fn type_ref(
    type_map: &TypeMap,
    imports: &mut ImportSet,
    type_name: &str,
    keep_wrapper: bool,
) -> Result<TokenStream, Error> {
    if !keep_wrapper {
        if let Some(scalar) = classify::wrapper_scalar(type_name) {
            let inner = scalar_type_tokens(scalar);
            return Ok(quote! { Option<#inner> });
        }
    }
    let entry = type_map.lookup(type_name)?;
    Ok(imports.reference(&entry.module, &entry.ident))
}

/// The emitted type of one struct field, §4.C rules: base type, then
/// optionality, then the repeated wrapper, outermost last.
pub fn type_expr(
    type_map: &TypeMap,
    imports: &mut ImportSet,
    field: &FieldDescriptorProto,
) -> Result<TokenStream, Error> {
    let base = match field.r#type() {
        Type::Message => {
            // Repeated wrapper fields keep the wrapper struct; singular ones
            // collapse to the native optional.
            type_ref(type_map, imports, field.type_name(), classify::is_repeated(field))?
        }
        Type::Enum => {
            // Enum fields stay open as i32, but the reference must resolve.
            type_map.lookup(field.type_name())?;
            quote! { i32 }
        }
        other => scalar_type_tokens(other),
    };

    if classify::is_repeated(field) {
        return Ok(quote! { Vec<#base> });
    }
    if classify::is_message(field) && !classify::is_wrapper(field) {
        return Ok(quote! { Option<#base> });
    }
    if classify::is_wrapper(field) {
        // Already Option<native> from the resolve step.
        return Ok(base);
    }
    if classify::is_optional(field) {
        return Ok(quote! { Option<#base> });
    }
    Ok(base)
}
