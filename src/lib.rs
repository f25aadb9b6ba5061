//! Type-driven serialization across three representations: a packed binary form, a PON/JSON
//! text form, and an in-memory [`Blueprint`] tree that either of the other two can be
//! materialized from or flattened into.
//!
//! A composite type opts in once with [`via_serialize!`] (or, for fieldless enums,
//! [`via_enum_names!`]; for `bytemuck::Pod` records, [`via_pod!`]) and gets all three
//! representations from a single field list written against [`Serializer`].

pub mod blueprint;
pub mod blueprint_reader;
pub mod blueprint_writer;
pub mod buffer;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod json;
pub mod pon;
pub mod serializer;
pub mod text;

pub use blueprint::Blueprint;
pub use blueprint_reader::BlueprintReader;
pub use blueprint_writer::BlueprintWriter;
pub use buffer::{BufferReader, BufferWriter, Endian};
pub use dispatch::{EnumNames, FromBlueprint, FromBuffer, FromText, Serialize, ToBlueprint, ToBuffer, ToText};
pub use error::{BlueprintError, BufferError, TextError};
pub use pon::PonStyle;
pub use serializer::Serializer;
pub use text::{StringReader, StringWriter};

/// Serializes `value` to its packed binary form.
pub fn to_bytes<T: ToBuffer>(value: &T) -> Vec<u8> {
    let mut w = BufferWriter::new();
    value.to_buffer(&mut w);
    w.into_buffer()
}

/// Deserializes `value` from its packed binary form.
pub fn from_bytes<T: FromBuffer>(bytes: &[u8]) -> T {
    let mut r = BufferReader::new(bytes);
    T::from_buffer(&mut r)
}

/// Renders `value` as compact PON text.
pub fn to_pon_string<T: ToBlueprint>(value: &T) -> String {
    pon::to_pon(&value.to_blueprint(), PonStyle::Compact)
}

/// Renders `value` as pretty-printed PON text.
pub fn to_pretty_pon_string<T: ToBlueprint>(value: &T) -> String {
    pon::to_pon(&value.to_blueprint(), PonStyle::Pretty)
}

/// Parses PON text into `T` via its [`Blueprint`] representation.
pub fn from_pon_string<T: FromBlueprint>(input: &str) -> Result<T, TextError> {
    pon::from_pon(input).map(|b| T::from_blueprint(&b))
}

/// Renders `value` as compact JSON text.
pub fn to_json_string<T: ToBlueprint>(value: &T) -> String {
    json::to_json_string(&value.to_blueprint(), false)
}

/// Renders `value` as pretty-printed JSON text.
pub fn to_pretty_json_string<T: ToBlueprint>(value: &T) -> String {
    json::to_json_string(&value.to_blueprint(), true)
}

/// Parses JSON text into `T` via its [`Blueprint`] representation.
pub fn from_json_string<T: FromBlueprint>(input: &str) -> Result<T, serde_json::Error> {
    json::from_json_string(input).map(|b| T::from_blueprint(&b))
}
