//! Descriptor-to-source translation.
//!
//! One generated Rust file per input `FileDescriptorProto`. Each file is
//! produced in two passes over the descriptor tree: declarations first
//! (structs, oneof enums, proto enums), then codecs (`Default` prototypes
//! and `encode`/`decode` impls). Running the passes back to back means a
//! codec can reference any type declared anywhere in the file without
//! topological sorting.

use std::collections::BTreeMap;

use anyhow::Context;
use proc_macro2::TokenStream;
use prost::Message;
use prost_types::FileDescriptorProto;
use quote::{format_ident, quote};

use crate::Error;

pub mod classify;
pub mod names;
pub mod typemap;
pub mod visitor;

mod decls;
mod decode;
mod encode;

pub use typemap::TypeMap;

/// One emitted source file.
#[derive(Debug)]
pub struct GeneratedFile {
    /// Output file name, `<module>.rs`.
    pub name: String,
    pub content: String,
}

/// Output module name for a descriptor file: strip `.proto`, then map every
/// path separator (and anything else Rust rejects in a module name) to `_`.
pub fn module_name(file_name: &str) -> String {
    let base = file_name.strip_suffix(".proto").unwrap_or(file_name);
    let mut out: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    names::sanitize_module_name(&out)
}

/// Generate code for a whole descriptor set (the bytes `protoc
/// --descriptor_set_out` writes).
pub fn generate(descriptor_bytes: &[u8]) -> anyhow::Result<Vec<GeneratedFile>> {
    let file_set = prost_types::FileDescriptorSet::decode(descriptor_bytes)
        .context("failed to decode file descriptor set")?;
    let type_map = TypeMap::build(&file_set.file);
    let mut out = Vec::with_capacity(file_set.file.len());
    for file in &file_set.file {
        let generated = generate_file(&type_map, file)
            .with_context(|| format!("generating {}", file.name()))?;
        out.push(generated);
    }
    Ok(out)
}

/// Generate one output file. Pure: identical inputs yield identical bytes,
/// so a batch may run this per file on independent threads with the shared
/// read-only [`TypeMap`].
pub fn generate_file(
    type_map: &TypeMap,
    file: &FileDescriptorProto,
) -> Result<GeneratedFile, Error> {
    let module = module_name(file.name());
    let mut code = CodeFile::new(&module);
    let nodes = visitor::collect(file);

    // Local declarations claim their idents first, so a same-named type from
    // another file resolves through a qualified path instead of a clashing
    // `use`.
    for (name, _) in &nodes {
        code.imports.claim_local(name);
    }

    // Declarations pass.
    for (name, node) in &nodes {
        match node {
            visitor::Node::Message(message) => {
                let decl = decls::message_decl(type_map, &mut code.imports, name, message)?;
                code.decls.push(decl);
            }
            visitor::Node::Enum(enumeration) => {
                code.decls.push(decls::enum_decl(name, enumeration));
            }
        }
    }

    // Codec pass.
    for (name, node) in &nodes {
        if let visitor::Node::Message(message) = node {
            code.decls.push(decls::base_impl(name, message));
            code.decls
                .push(encode::encode_impl(type_map, &mut code.imports, name, message)?);
            code.decls
                .push(decode::decode_impl(type_map, &mut code.imports, name, message)?);
            code.uses_runtime = true;
        }
    }

    code.finish(&module)
}

/// Tracks which idents a file pulls in from sibling generated modules.
///
/// The first reference to an ident claims it for a `use` line; a later
/// reference to the same ident from a different module falls back to a
/// qualified path instead of colliding.
#[derive(Debug)]
pub struct ImportSet {
    current_module: String,
    imported: BTreeMap<String, String>,
}

impl ImportSet {
    fn new(current_module: &str) -> ImportSet {
        ImportSet {
            current_module: current_module.to_string(),
            imported: BTreeMap::new(),
        }
    }

    fn claim_local(&mut self, ident: &str) {
        self.imported
            .insert(ident.to_string(), self.current_module.clone());
    }

    /// Render a reference to `ident` defined in `module`.
    pub fn reference(&mut self, module: &str, ident: &str) -> TokenStream {
        let id = format_ident!("{}", ident);
        if module == self.current_module {
            return quote! { #id };
        }
        match self.imported.get(ident) {
            Some(owner) if owner == module => quote! { #id },
            Some(_) => {
                let m = format_ident!("{}", module);
                quote! { super::#m::#id }
            }
            None => {
                self.imported
                    .insert(ident.to_string(), module.to_string());
                quote! { #id }
            }
        }
    }

    fn use_items(&self, with_runtime: bool) -> TokenStream {
        let mut items = TokenStream::new();
        if with_runtime {
            items.extend(quote! {
                use protoscribe::{DecodeError, Reader, Writer};
            });
        }
        for (ident, module) in &self.imported {
            if *module == self.current_module {
                continue;
            }
            let id = format_ident!("{}", ident);
            let m = format_ident!("{}", module);
            items.extend(quote! {
                use super::#m::#id;
            });
        }
        items
    }
}

/// Ordered declarations plus the import set; serialized once at the end by
/// the external printer (syn re-parse, prettyplease unparse).
struct CodeFile {
    imports: ImportSet,
    decls: Vec<TokenStream>,
    uses_runtime: bool,
}

impl CodeFile {
    fn new(module: &str) -> CodeFile {
        CodeFile {
            imports: ImportSet::new(module),
            decls: Vec::new(),
            uses_runtime: false,
        }
    }

    fn finish(self, module: &str) -> Result<GeneratedFile, Error> {
        let uses = self.imports.use_items(self.uses_runtime);
        let decls = &self.decls;
        let tokens = quote! {
            #uses
            #(#decls)*
        };
        let ast: syn::File = syn::parse2(tokens)?;
        let mut content = String::from("// This file is @generated by protoscribe. Do not edit.\n");
        content.push_str(&prettyplease::unparse(&ast));
        Ok(GeneratedFile {
            name: format!("{}.rs", module),
            content,
        })
    }
}
