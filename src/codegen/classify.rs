//! Field-shape predicates over descriptor fields.

use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::FieldDescriptorProto;

use super::typemap::TypeMap;
use crate::wire::WireType;
use crate::Error;

pub fn is_message(field: &FieldDescriptorProto) -> bool {
    field.r#type() == Type::Message
}

/// Everything that is not a message reads and writes through a scalar
/// Reader/Writer method. Enums count: they travel as varints.
pub fn is_primitive(field: &FieldDescriptorProto) -> bool {
    !is_message(field)
}

pub fn is_repeated(field: &FieldDescriptorProto) -> bool {
    field.label() == Label::Repeated
}

/// Member of a real oneof. Synthetic oneofs created for proto3 `optional`
/// fields do not count; those are plain optional fields.
pub fn is_within_oneof(field: &FieldDescriptorProto) -> bool {
    field.oneof_index.is_some() && !field.proto3_optional()
}

/// proto3 `optional` scalar with explicit presence.
pub fn is_optional(field: &FieldDescriptorProto) -> bool {
    field.proto3_optional()
}

/// The well-known `google.protobuf.*Value` wrapper family. Returns the
/// scalar the wrapper carries.
pub fn wrapper_scalar(type_name: &str) -> Option<Type> {
    match type_name {
        ".google.protobuf.DoubleValue" => Some(Type::Double),
        ".google.protobuf.FloatValue" => Some(Type::Float),
        ".google.protobuf.Int64Value" => Some(Type::Int64),
        ".google.protobuf.UInt64Value" => Some(Type::Uint64),
        ".google.protobuf.Int32Value" => Some(Type::Int32),
        ".google.protobuf.UInt32Value" => Some(Type::Uint32),
        ".google.protobuf.BoolValue" => Some(Type::Bool),
        ".google.protobuf.StringValue" => Some(Type::String),
        ".google.protobuf.BytesValue" => Some(Type::Bytes),
        _ => None,
    }
}

pub fn is_wrapper(field: &FieldDescriptorProto) -> bool {
    is_message(field) && wrapper_scalar(field.type_name()).is_some()
}

/// Packable per proto3: every scalar numeric, bool, and enum. Strings,
/// bytes, and messages always go element-per-tag.
pub fn is_packable(field: &FieldDescriptorProto) -> bool {
    !matches!(
        field.r#type(),
        Type::String | Type::Bytes | Type::Message | Type::Group
    )
}

/// The Reader/Writer method a scalar primitive reads and writes through.
/// Defined exactly for scalar primitives; enums dispatch as int32.
pub fn scalar_method(ty: Type) -> Option<&'static str> {
    match ty {
        Type::Double => Some("double"),
        Type::Float => Some("float"),
        Type::Int64 => Some("int64"),
        Type::Uint64 => Some("uint64"),
        Type::Int32 => Some("int32"),
        Type::Fixed64 => Some("fixed64"),
        Type::Fixed32 => Some("fixed32"),
        Type::Bool => Some("bool"),
        Type::String => Some("string"),
        Type::Bytes => Some("bytes"),
        Type::Uint32 => Some("uint32"),
        Type::Sfixed32 => Some("sfixed32"),
        Type::Sfixed64 => Some("sfixed64"),
        Type::Sint32 => Some("sint32"),
        Type::Sint64 => Some("sint64"),
        Type::Enum => Some("int32"),
        Type::Message | Type::Group => None,
    }
}

/// The wire type a value of this field type encodes with.
pub fn wire_type_of(ty: Type) -> WireType {
    match ty {
        Type::Int32
        | Type::Int64
        | Type::Uint32
        | Type::Uint64
        | Type::Sint32
        | Type::Sint64
        | Type::Bool
        | Type::Enum => WireType::Varint,
        Type::Fixed64 | Type::Sfixed64 | Type::Double => WireType::Fixed64,
        Type::Fixed32 | Type::Sfixed32 | Type::Float => WireType::Fixed32,
        Type::String | Type::Bytes | Type::Message | Type::Group => WireType::LengthDelimited,
    }
}

/// Reject field shapes the generator does not emit. Runs once per field
/// during the declarations pass; the codec pass sees only validated fields.
pub fn check_field_shape(
    type_map: &TypeMap,
    message_name: &str,
    field: &FieldDescriptorProto,
) -> Result<(), Error> {
    let describe = || format!("{}.{}", message_name, field.name());
    if field.r#type() == Type::Group {
        return Err(Error::UnhandledFieldShape {
            field: describe(),
            reason: "proto2 groups are not supported".to_string(),
        });
    }
    if is_message(field) && type_map.lookup(field.type_name())?.map_entry {
        return Err(Error::UnhandledFieldShape {
            field: describe(),
            reason: "map fields are not supported".to_string(),
        });
    }
    Ok(())
}
