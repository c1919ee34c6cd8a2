//! Cross-file type resolution.

use std::collections::BTreeMap;

use prost_types::{DescriptorProto, EnumDescriptorProto, FileDescriptorProto};

use super::module_name;
use super::names::flat_name;
use crate::Error;

/// Where a proto type landed in the generated output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeEntry {
    /// Output module derived from the defining file.
    pub module: String,
    /// Flattened Rust identifier (`Outer_Inner`).
    pub ident: String,
    /// Synthesized map-entry message; fields referencing one are rejected.
    pub map_entry: bool,
}

/// Fully-qualified proto name (no leading dot) to output location. Built
/// once over the whole input set, read-only during emission.
#[derive(Debug, Default)]
pub struct TypeMap {
    types: BTreeMap<String, TypeEntry>,
}

impl TypeMap {
    pub fn build(files: &[FileDescriptorProto]) -> TypeMap {
        let mut map = TypeMap::default();
        for file in files {
            let module = module_name(file.name());
            let package = file.package();
            for message in &file.message_type {
                map.add_message(&module, package, "", message);
            }
            for enumeration in &file.enum_type {
                map.add_enum(&module, package, "", enumeration);
            }
        }
        map
    }

    fn add_message(&mut self, module: &str, scope: &str, prefix: &str, message: &DescriptorProto) {
        let proto_name = qualify(scope, message.name());
        let ident = flat_name(prefix, message.name());
        let map_entry = message
            .options
            .as_ref()
            .is_some_and(|o| o.map_entry());
        self.types.insert(
            proto_name.clone(),
            TypeEntry {
                module: module.to_string(),
                ident: ident.clone(),
                map_entry,
            },
        );
        let nested_prefix = format!("{}_", ident);
        for nested in &message.nested_type {
            self.add_message(module, &proto_name, &nested_prefix, nested);
        }
        for enumeration in &message.enum_type {
            self.add_enum(module, &proto_name, &nested_prefix, enumeration);
        }
    }

    fn add_enum(&mut self, module: &str, scope: &str, prefix: &str, enumeration: &EnumDescriptorProto) {
        self.types.insert(
            qualify(scope, enumeration.name()),
            TypeEntry {
                module: module.to_string(),
                ident: flat_name(prefix, enumeration.name()),
                map_entry: false,
            },
        );
    }

    /// Look up a type reference as it appears in a field's `type_name`
    /// (leading dot optional). A miss is fatal for the referencing file.
    pub fn lookup(&self, proto_name: &str) -> Result<&TypeEntry, Error> {
        let key = proto_name.trim_start_matches('.');
        self.types
            .get(key)
            .ok_or_else(|| Error::UnknownType(key.to_string()))
    }
}

fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", scope, name)
    }
}
