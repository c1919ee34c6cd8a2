//! # Protoscribe
//!
//! A protobuf code generator that turns `FileDescriptorSet` input into plain
//! Rust message types with hand-readable wire-format codecs.
//!
//! ## Overview
//!
//! Protoscribe emits one Rust source file per input `.proto` descriptor.
//! Each file carries a struct per message, an enum per proto enum, an
//! explicit `Default` prototype per message, and an `encode`/`decode` pair
//! implementing protobuf wire format version 3 on top of the [`Reader`] and
//! [`Writer`] runtime in this crate. Generated code has no tables, no
//! macros, and no reflection: what you read is what runs.
//!
//! ## Code generation
//!
//! Build a descriptor set with `protoc` and feed it to the CLI:
//!
//! ```bash
//! protoc --include_imports --descriptor_set_out=types.bin my_types.proto
//! protoscribe types.bin src/pb/
//! ```
//!
//! Or drive the generator as a library:
//!
//! ```ignore
//! let files = protoscribe::codegen::generate(&descriptor_bytes)?;
//! for file in files {
//!     std::fs::write(out_dir.join(&file.name), &file.content)?;
//! }
//! ```
//!
//! ## Generated code
//!
//! For a message `SearchRequest` the output looks like:
//!
//! ```ignore
//! pub struct SearchRequest {
//!     pub query: String,
//!     pub page: i32,
//! }
//!
//! impl SearchRequest {
//!     pub fn encode(&self, w: &mut Writer) { ... }
//!     pub fn encode_to_vec(&self) -> Vec<u8> { ... }
//!     pub fn decode(r: &mut Reader<'_>, len: Option<usize>) -> Result<Self, DecodeError> { ... }
//! }
//! ```
//!
//! Oneofs become real Rust enums, nested types flatten to `Outer_Inner`,
//! well-known wrapper values surface as native `Option`s, and unknown fields
//! are skipped on decode.
//!
//! ## Feature flags
//!
//! - `codegen` (default): the generator and its syn/prettyplease pipeline.
//!   Disable it in crates that only run generated code; the runtime half of
//!   this crate has no dependencies.

pub mod reader;
pub mod wire;
pub mod writer;

pub use reader::{DecodeError, Reader};
pub use writer::Writer;

#[cfg(feature = "codegen")]
pub mod codegen;

/// Errors raised while generating code for one descriptor file.
#[cfg(feature = "codegen")]
#[derive(Debug)]
pub enum Error {
    /// A field references a proto type absent from the type map.
    UnknownType(String),
    /// A `(type, label)` combination the generator does not handle,
    /// e.g. a map field or a proto2 group.
    UnhandledFieldShape { field: String, reason: String },
    /// The assembled token stream did not re-parse as a Rust file.
    Print(syn::Error),
}

#[cfg(feature = "codegen")]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::UnknownType(name) => write!(f, "unknown proto type `{}`", name),
            Error::UnhandledFieldShape { field, reason } => {
                write!(f, "unhandled shape for field `{}`: {}", field, reason)
            }
            Error::Print(e) => write!(f, "generated tokens failed to parse: {}", e),
        }
    }
}

#[cfg(feature = "codegen")]
impl std::error::Error for Error {}

#[cfg(feature = "codegen")]
impl From<syn::Error> for Error {
    fn from(e: syn::Error) -> Self {
        Error::Print(e)
    }
}
