//! The six direct engine traits, the `Serialize`/`EnumNames` capability traits, and the
//! `via_*!` codegen macros that stand in for the original's compile-time capability probe.
//!
//! The original dispatcher picks, at compile time, the highest-priority capability a type
//! exposes (a member function, a free function, `std::is_trivially_copyable`, ...) and routes
//! every engine call through it. Rust has no stable specialization, so a single blanket impl
//! like `impl<T: Serialize> ToBuffer for T` would make `ToBuffer` unimplementable for any
//! concrete type directly (E0119: a downstream crate could always add `impl Serialize for
//! SomeForeignType`, so the two impls are considered possibly-overlapping regardless of what
//! this crate actually does). Instead each capability gets its own trait, primitives implement
//! the six engine traits directly, and user types opt in once via a macro that expands to
//! concrete, non-generic impls for that one type.

use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};

use crate::blueprint::Blueprint;
use crate::buffer::{BufferReader, BufferWriter};
use crate::text::{StringReader, StringWriter};

pub trait ToBuffer {
    fn to_buffer(&self, w: &mut BufferWriter);
}

pub trait FromBuffer: Sized {
    fn from_buffer(r: &mut BufferReader) -> Self;
}

pub trait ToText {
    fn to_text(&self, w: &mut StringWriter);
}

pub trait FromText: Sized {
    fn from_text(r: &mut StringReader) -> Self;
}

pub trait ToBlueprint {
    fn to_blueprint(&self) -> Blueprint;
}

pub trait FromBlueprint: Sized {
    fn from_blueprint(b: &Blueprint) -> Self;
}

/// The capability a composite type opts into once, via [`via_serialize!`], to get all six
/// engine traits generated against a single field-by-field body. `Default` gives the read
/// path a starting value to mutate into; `Clone` lets the write path hand a throwaway owned
/// copy to the same `&mut self` signature the read path needs, since nothing written is
/// actually mutated.
pub trait Serialize: Default + Clone {
    fn serialize(&mut self, s: &mut crate::serializer::Serializer);
}

/// The capability a fieldless enum opts into, via [`via_enum_names!`], to serialize as its
/// name in text/blueprint form and its discriminant in binary form.
pub trait EnumNames: Copy + Into<i64> {
    const NAMES: &'static [&'static str];

    fn from_code(code: i64) -> Option<Self>;

    fn name(&self) -> &'static str {
        Self::NAMES[Into::<i64>::into(*self) as usize]
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .position(|n| *n == name)
            .and_then(|i| Self::from_code(i as i64))
    }
}

/// Generates the six direct-engine impls for a type that implements [`Serialize`].
#[macro_export]
macro_rules! via_serialize {
    ($t:ty) => {
        impl $crate::dispatch::ToBuffer for $t {
            fn to_buffer(&self, w: &mut $crate::buffer::BufferWriter) {
                let mut value = self.clone();
                let mut s = $crate::serializer::Serializer::for_buffer_write(w);
                $crate::dispatch::Serialize::serialize(&mut value, &mut s);
            }
        }

        impl $crate::dispatch::FromBuffer for $t {
            fn from_buffer(r: &mut $crate::buffer::BufferReader) -> Self {
                let mut value = <$t as Default>::default();
                let mut s = $crate::serializer::Serializer::for_buffer_read(r);
                $crate::dispatch::Serialize::serialize(&mut value, &mut s);
                value
            }
        }

        impl $crate::dispatch::ToText for $t {
            fn to_text(&self, w: &mut $crate::text::StringWriter) {
                let mut value = self.clone();
                let mut s = $crate::serializer::Serializer::for_text_write(w);
                $crate::dispatch::Serialize::serialize(&mut value, &mut s);
            }
        }

        impl $crate::dispatch::FromText for $t {
            fn from_text(r: &mut $crate::text::StringReader) -> Self {
                let mut value = <$t as Default>::default();
                let mut s = $crate::serializer::Serializer::for_text_read(r);
                $crate::dispatch::Serialize::serialize(&mut value, &mut s);
                value
            }
        }

        impl $crate::dispatch::ToBlueprint for $t {
            fn to_blueprint(&self) -> $crate::blueprint::Blueprint {
                let mut value = self.clone();
                let mut blueprint = $crate::blueprint::Blueprint::Object(Default::default());
                let mut writer = $crate::blueprint_writer::BlueprintWriter::new(&mut blueprint);
                let mut s = $crate::serializer::Serializer::for_blueprint_write(&mut writer);
                $crate::dispatch::Serialize::serialize(&mut value, &mut s);
                blueprint
            }
        }

        impl $crate::dispatch::FromBlueprint for $t {
            fn from_blueprint(b: &$crate::blueprint::Blueprint) -> Self {
                let mut value = <$t as Default>::default();
                let mut reader = $crate::blueprint_reader::BlueprintReader::new(b);
                let mut s = $crate::serializer::Serializer::for_blueprint_read(&mut reader);
                $crate::dispatch::Serialize::serialize(&mut value, &mut s);
                value
            }
        }
    };
}

/// Generates the six direct-engine impls for a fieldless enum implementing [`EnumNames`]: the
/// discriminant in binary, the name in text and blueprint form.
#[macro_export]
macro_rules! via_enum_names {
    ($t:ty) => {
        impl $crate::dispatch::ToBuffer for $t {
            fn to_buffer(&self, w: &mut $crate::buffer::BufferWriter) {
                w.write_i64(Into::<i64>::into(*self));
            }
        }

        impl $crate::dispatch::FromBuffer for $t {
            fn from_buffer(r: &mut $crate::buffer::BufferReader) -> Self {
                let code = r.read_i64();
                <$t as $crate::dispatch::EnumNames>::from_code(code).unwrap_or_default()
            }
        }

        impl $crate::dispatch::ToText for $t {
            fn to_text(&self, w: &mut $crate::text::StringWriter) {
                w.write_str($crate::dispatch::EnumNames::name(self));
            }
        }

        impl $crate::dispatch::FromText for $t {
            fn from_text(r: &mut $crate::text::StringReader) -> Self {
                let word = r.read_word();
                <$t as $crate::dispatch::EnumNames>::from_name(&word).unwrap_or_default()
            }
        }

        impl $crate::dispatch::ToBlueprint for $t {
            fn to_blueprint(&self) -> $crate::blueprint::Blueprint {
                $crate::blueprint::Blueprint::String($crate::dispatch::EnumNames::name(self).to_string())
            }
        }

        impl $crate::dispatch::FromBlueprint for $t {
            fn from_blueprint(b: &$crate::blueprint::Blueprint) -> Self {
                b.as_str()
                    .and_then(<$t as $crate::dispatch::EnumNames>::from_name)
                    .unwrap_or_default()
            }
        }
    };
}

/// Generates binary engine impls for a `bytemuck::Pod` standard-layout record by copying its
/// raw bytes, bypassing field-by-field traversal entirely — the direct analogue of the
/// original's "trivially copyable" capability.
#[macro_export]
macro_rules! via_pod {
    ($t:ty) => {
        impl $crate::dispatch::ToBuffer for $t {
            fn to_buffer(&self, w: &mut $crate::buffer::BufferWriter) {
                w.write_bytes(bytemuck::bytes_of(self), false);
            }
        }

        impl $crate::dispatch::FromBuffer for $t {
            fn from_buffer(r: &mut $crate::buffer::BufferReader) -> Self {
                let bytes = r.read_bytes(core::mem::size_of::<$t>());
                *bytemuck::try_from_bytes(bytes).unwrap_or(&<$t as Default>::default())
            }
        }
    };
}

macro_rules! primitive_buffer {
    ($t:ty, $write:ident, $read:ident) => {
        impl ToBuffer for $t {
            fn to_buffer(&self, w: &mut BufferWriter) {
                w.$write(*self);
            }
        }

        impl FromBuffer for $t {
            fn from_buffer(r: &mut BufferReader) -> Self {
                r.$read()
            }
        }
    };
}

primitive_buffer!(bool, write_bool, read_bool);
primitive_buffer!(i8, write_i8, read_i8);
primitive_buffer!(u8, write_u8, read_u8);
primitive_buffer!(i16, write_i16, read_i16);
primitive_buffer!(u16, write_u16, read_u16);
primitive_buffer!(i32, write_i32, read_i32);
primitive_buffer!(u32, write_u32, read_u32);
primitive_buffer!(i64, write_i64, read_i64);
primitive_buffer!(u64, write_u64, read_u64);
primitive_buffer!(i128, write_i128, read_i128);
primitive_buffer!(u128, write_u128, read_u128);
primitive_buffer!(f32, write_f32, read_f32);
primitive_buffer!(f64, write_f64, read_f64);
primitive_buffer!(char, write_char, read_char);

impl ToBuffer for String {
    fn to_buffer(&self, w: &mut BufferWriter) {
        w.write_str(self);
    }
}

impl FromBuffer for String {
    fn from_buffer(r: &mut BufferReader) -> Self {
        r.read_string()
    }
}

macro_rules! primitive_text {
    ($t:ty) => {
        impl ToText for $t {
            fn to_text(&self, w: &mut StringWriter) {
                w.write_str(&self.to_string());
            }
        }

        impl FromText for $t {
            fn from_text(r: &mut StringReader) -> Self {
                r.read_word().parse().unwrap_or_default()
            }
        }
    };
}

primitive_text!(bool);
primitive_text!(i8);
primitive_text!(u8);
primitive_text!(i16);
primitive_text!(u16);
primitive_text!(i32);
primitive_text!(u32);
primitive_text!(i64);
primitive_text!(u64);
primitive_text!(i128);
primitive_text!(u128);
primitive_text!(f32);
primitive_text!(f64);

impl ToText for char {
    fn to_text(&self, w: &mut StringWriter) {
        w.write_str(&self.to_string());
    }
}

impl FromText for char {
    fn from_text(r: &mut StringReader) -> Self {
        r.read_word().chars().next().unwrap_or_default()
    }
}

impl ToText for String {
    fn to_text(&self, w: &mut StringWriter) {
        w.write_quoted_string(self);
    }
}

impl FromText for String {
    fn from_text(r: &mut StringReader) -> Self {
        r.read_quoted_string()
    }
}

macro_rules! primitive_blueprint_int {
    ($t:ty) => {
        impl ToBlueprint for $t {
            fn to_blueprint(&self) -> Blueprint {
                Blueprint::Integer(*self as i64)
            }
        }

        impl FromBlueprint for $t {
            fn from_blueprint(b: &Blueprint) -> Self {
                b.as_integer().unwrap_or_default() as $t
            }
        }
    };
}

primitive_blueprint_int!(i8);
primitive_blueprint_int!(u8);
primitive_blueprint_int!(i16);
primitive_blueprint_int!(u16);
primitive_blueprint_int!(i32);
primitive_blueprint_int!(u32);
primitive_blueprint_int!(i64);
primitive_blueprint_int!(u64);
primitive_blueprint_int!(i128);
primitive_blueprint_int!(u128);

impl ToBlueprint for bool {
    fn to_blueprint(&self) -> Blueprint {
        Blueprint::Boolean(*self)
    }
}

impl FromBlueprint for bool {
    fn from_blueprint(b: &Blueprint) -> Self {
        b.as_boolean().unwrap_or_default()
    }
}

impl ToBlueprint for f32 {
    fn to_blueprint(&self) -> Blueprint {
        Blueprint::FloatingPoint(*self as f64)
    }
}

impl FromBlueprint for f32 {
    fn from_blueprint(b: &Blueprint) -> Self {
        b.as_floating_point().unwrap_or_default() as f32
    }
}

impl ToBlueprint for f64 {
    fn to_blueprint(&self) -> Blueprint {
        Blueprint::FloatingPoint(*self)
    }
}

impl FromBlueprint for f64 {
    fn from_blueprint(b: &Blueprint) -> Self {
        b.as_floating_point().unwrap_or_default()
    }
}

impl ToBlueprint for char {
    fn to_blueprint(&self) -> Blueprint {
        Blueprint::String(self.to_string())
    }
}

impl FromBlueprint for char {
    fn from_blueprint(b: &Blueprint) -> Self {
        b.as_str().and_then(|s| s.chars().next()).unwrap_or_default()
    }
}

impl ToBlueprint for String {
    fn to_blueprint(&self) -> Blueprint {
        Blueprint::String(self.clone())
    }
}

impl FromBlueprint for String {
    fn from_blueprint(b: &Blueprint) -> Self {
        b.as_str().unwrap_or_default().to_string()
    }
}

impl<T: ToBuffer> ToBuffer for Option<T> {
    fn to_buffer(&self, w: &mut BufferWriter) {
        w.write_bool(self.is_some());
        if let Some(v) = self {
            v.to_buffer(w);
        }
    }
}

impl<T: FromBuffer> FromBuffer for Option<T> {
    fn from_buffer(r: &mut BufferReader) -> Self {
        if r.read_bool() { Some(T::from_buffer(r)) } else { None }
    }
}

impl<T: ToBlueprint> ToBlueprint for Option<T> {
    fn to_blueprint(&self) -> Blueprint {
        match self {
            Some(v) => v.to_blueprint(),
            None => Blueprint::Null,
        }
    }
}

impl<T: FromBlueprint> FromBlueprint for Option<T> {
    fn from_blueprint(b: &Blueprint) -> Self {
        if b.is_null() { None } else { Some(T::from_blueprint(b)) }
    }
}

impl<T: ToBuffer> ToBuffer for Vec<T> {
    fn to_buffer(&self, w: &mut BufferWriter) {
        w.write_sequence(self.iter(), |w, item| item.to_buffer(w));
    }
}

impl<T: FromBuffer> FromBuffer for Vec<T> {
    fn from_buffer(r: &mut BufferReader) -> Self {
        r.read_sequence(|r| T::from_buffer(r))
    }
}

impl<T: ToBlueprint> ToBlueprint for Vec<T> {
    fn to_blueprint(&self) -> Blueprint {
        Blueprint::Array(self.iter().map(ToBlueprint::to_blueprint).collect())
    }
}

impl<T: FromBlueprint> FromBlueprint for Vec<T> {
    fn from_blueprint(b: &Blueprint) -> Self {
        b.as_array().map(|items| items.iter().map(T::from_blueprint).collect()).unwrap_or_default()
    }
}

impl<T: ToBuffer, const N: usize> ToBuffer for [T; N] {
    fn to_buffer(&self, w: &mut BufferWriter) {
        for item in self {
            item.to_buffer(w);
        }
    }
}

impl<T: FromBuffer + Default + Copy, const N: usize> FromBuffer for [T; N] {
    fn from_buffer(r: &mut BufferReader) -> Self {
        let mut out = [T::default(); N];
        for slot in out.iter_mut() {
            *slot = T::from_buffer(r);
        }
        out
    }
}

impl<K: ToBlueprint + ToString, V: ToBlueprint> ToBlueprint for IndexMap<K, V> {
    fn to_blueprint(&self) -> Blueprint {
        let mut map = IndexMap::new();
        for (k, v) in self {
            map.insert(k.to_string(), v.to_blueprint());
        }
        Blueprint::Object(map)
    }
}

impl<V: FromBlueprint> FromBlueprint for IndexMap<String, V> {
    fn from_blueprint(b: &Blueprint) -> Self {
        b.as_object()
            .map(|obj| obj.iter().map(|(k, v)| (k.clone(), V::from_blueprint(v))).collect())
            .unwrap_or_default()
    }
}

impl<V: ToBlueprint> ToBlueprint for HashMap<String, V> {
    fn to_blueprint(&self) -> Blueprint {
        let mut map = IndexMap::new();
        for (k, v) in self {
            map.insert(k.clone(), v.to_blueprint());
        }
        Blueprint::Object(map)
    }
}

impl<V: FromBlueprint> FromBlueprint for HashMap<String, V> {
    fn from_blueprint(b: &Blueprint) -> Self {
        b.as_object()
            .map(|obj| obj.iter().map(|(k, v)| (k.clone(), V::from_blueprint(v))).collect())
            .unwrap_or_default()
    }
}

impl<V: ToBlueprint> ToBlueprint for BTreeMap<String, V> {
    fn to_blueprint(&self) -> Blueprint {
        let mut map = IndexMap::new();
        for (k, v) in self {
            map.insert(k.clone(), v.to_blueprint());
        }
        Blueprint::Object(map)
    }
}

impl<V: FromBlueprint> FromBlueprint for BTreeMap<String, V> {
    fn from_blueprint(b: &Blueprint) -> Self {
        b.as_object()
            .map(|obj| obj.iter().map(|(k, v)| (k.clone(), V::from_blueprint(v))).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_buffer_roundtrip() {
        let mut w = BufferWriter::new();
        42i32.to_buffer(&mut w);
        let bytes = w.into_buffer();
        let mut r = BufferReader::new(&bytes);
        assert_eq!(i32::from_buffer(&mut r), 42);
    }

    #[test]
    fn vec_blueprint_roundtrip() {
        let v = vec![1i32, 2, 3];
        let b = v.to_blueprint();
        assert_eq!(Vec::<i32>::from_blueprint(&b), v);
    }

    #[test]
    fn option_buffer_roundtrip() {
        let v: Option<i32> = Some(7);
        let mut w = BufferWriter::new();
        v.to_buffer(&mut w);
        let bytes = w.into_buffer();
        let mut r = BufferReader::new(&bytes);
        assert_eq!(Option::<i32>::from_buffer(&mut r), Some(7));
    }
}
