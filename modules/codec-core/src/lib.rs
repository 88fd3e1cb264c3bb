//! Compact binary serialization of object graphs over the FieldStream V1
//! wire protocol.
//!
//! Types are registered with handler functions on a [`CodecBuilder`]; the
//! resulting [`Codec`] writes each object as a flat record of tagged fields,
//! interning type and field names per stream so repeated names cost two
//! bytes after their first occurrence.

/// Handler registration and codec construction.
mod builder;
/// Serialize/deserialize entry points.
mod codec;
/// Error types for configuration and stream failures.
mod error;
/// Cursor-based access to a decoded field record.
mod field_reader;
/// Decoded field representation shared by the decode engine and reader.
mod field_value;
/// Buffering field writer handed to write handlers.
mod field_writer;
/// Hex dump formatting for stream inspection.
pub mod hex_view;
/// Name-to-index interning for the encode side.
mod index_allocator;
/// Index-to-name recovery for the decode side.
mod index_resolver;
mod object_graph_reader;
mod object_graph_writer;
/// Wire protocol framing constants.
mod protocol;
/// Frozen handler registry.
mod registry;
/// Telemetry hooks for codec observability.
mod telemetry;
/// Type name fingerprinting.
mod type_hash;
mod wire;

pub use builder::CodecBuilder;
pub use codec::Codec;
pub use error::CodecError;
pub use field_reader::FieldReader;
pub use field_writer::{FieldAllocator, FieldWriter};
pub use index_allocator::{AllocatedIndex, IndexAllocator};
pub use index_resolver::IndexResolver;
pub use telemetry::{CodecTelemetry, CountingCodecTelemetry, NoopCodecTelemetry};
pub use type_hash::{Sha256TypeHashProvider, TYPE_HASH_MASK, TypeHashProvider, simple_type_name};
