//! Pre-order traversal over one file's message and enum tree.

use prost_types::{DescriptorProto, EnumDescriptorProto, FileDescriptorProto};

use super::names::flat_name;

/// One declaration site discovered by the walk.
pub enum Node<'a> {
    Message(&'a DescriptorProto),
    Enum(&'a EnumDescriptorProto),
}

/// Walk `file` pre-order, producing `(flattened_name, descriptor)` pairs
/// for every enum and message. Enums of a scope come first, then its
/// messages, each message followed by its own nested scope; nested names
/// accumulate `Outer_` prefixes. Both emission passes iterate this list, so
/// declaration order and codec order always agree.
pub fn collect(file: &FileDescriptorProto) -> Vec<(String, Node<'_>)> {
    let mut nodes = Vec::new();
    collect_scope("", &file.message_type, &file.enum_type, &mut nodes);
    nodes
}

fn collect_scope<'a>(
    prefix: &str,
    messages: &'a [DescriptorProto],
    enums: &'a [EnumDescriptorProto],
    nodes: &mut Vec<(String, Node<'a>)>,
) {
    for enumeration in enums {
        nodes.push((flat_name(prefix, enumeration.name()), Node::Enum(enumeration)));
    }
    for message in messages {
        let name = flat_name(prefix, message.name());
        let nested_prefix = format!("{}_", name);
        nodes.push((name, Node::Message(message)));
        collect_scope(
            &nested_prefix,
            &message.nested_type,
            &message.enum_type,
            nodes,
        );
    }
}
